pub mod events;
pub mod parser;

pub use events::{
    decode_event_jsonl_line, encode_event_jsonl_line, Actor, BarrierState, Event, Fade,
    InstanceId, MarkerOperation, PlayerMarker, Timestamp,
};
pub use parser::{
    ability_from_fields, action_effect_from_fields, actor_from_fields,
    director_event_from_fields, event_from_logline, marker_event_from_fields,
    status_effect_from_fields, status_list_from_fields, AbilityUse, ActionEffect,
    DirectorUpdateCommand, ParseError, Position, StatusEffect, StatusList,
    CATEGORY_DIRECTOR_UPDATE, CATEGORY_TARGET_MARKER,
};
