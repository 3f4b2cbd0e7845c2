mod action;
mod actor;
mod director;
mod marker;
mod status;

pub use action::{
    ability_from_fields, action_effect_from_fields, AbilityUse, ActionEffect, Position,
};
pub use actor::actor_from_fields;
pub use director::{director_event_from_fields, DirectorUpdateCommand};
pub use marker::marker_event_from_fields;
pub use status::{status_effect_from_fields, status_list_from_fields, StatusEffect, StatusList};

use crate::events::{Event, Timestamp};
use actline_core::FieldDecodeError;
use tracing::debug;

pub const CATEGORY_DIRECTOR_UPDATE: u16 = 33;
pub const CATEGORY_TARGET_MARKER: u16 = 29;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Field(#[from] FieldDecodeError),
    #[error("line ended before field {index}")]
    MissingField { index: usize },
    #[error("marker id {id} is outside the known overhead marker range")]
    InvalidMarkerId { id: u8 },
    #[error("unknown marker operation token {token:?}")]
    UnknownMarkerOperation { token: String },
}

/// Routes a pre-split line to the parser owning its category code. Categories
/// owned by other decoders are skipped, never failed.
pub fn event_from_logline(
    category: u16,
    timestamp: Timestamp,
    fields: &[&str],
) -> Result<Option<Event>, ParseError> {
    match category {
        CATEGORY_DIRECTOR_UPDATE => director_event_from_fields(timestamp, fields),
        CATEGORY_TARGET_MARKER => marker_event_from_fields(timestamp, fields).map(Some),
        _ => {
            debug!(category, "no parser registered for line category");
            Ok(None)
        }
    }
}

pub(crate) fn field_at<'a>(fields: &[&'a str], index: usize) -> Result<&'a str, ParseError> {
    fields
        .get(index)
        .copied()
        .ok_or(ParseError::MissingField { index })
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
