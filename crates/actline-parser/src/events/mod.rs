mod jsonl;
mod types;

pub use jsonl::{decode_event_jsonl_line, encode_event_jsonl_line};
pub use types::{
    Actor, BarrierState, Event, Fade, InstanceId, MarkerOperation, PlayerMarker, Timestamp,
};
