use super::{actor_from_fields, field_at, ParseError};
use crate::events::{Event, MarkerOperation, PlayerMarker, Timestamp};
use actline_core::u8_from_decimal_field;

/// Decodes a target-marker line: `[operation, marker_id, target_id,
/// target_name, caster_id, caster_name]`.
///
/// A marker line always names one specific marker, so an ID outside the
/// known range is a hard failure rather than a skip.
pub fn marker_event_from_fields(
    timestamp: Timestamp,
    fields: &[&str],
) -> Result<Event, ParseError> {
    let token = field_at(fields, 0)?;
    let operator =
        MarkerOperation::from_token(token).ok_or_else(|| ParseError::UnknownMarkerOperation {
            token: token.to_string(),
        })?;

    let id = u8_from_decimal_field(field_at(fields, 1)?)?;
    let marker = PlayerMarker::from_id(id).ok_or(ParseError::InvalidMarkerId { id })?;

    let target = actor_from_fields(&[field_at(fields, 2)?, field_at(fields, 3)?])?;
    let caster = actor_from_fields(&[field_at(fields, 4)?, field_at(fields, 5)?])?;

    Ok(Event::OverheadMarker {
        timestamp,
        operator,
        marker,
        target,
        caster,
    })
}

#[cfg(test)]
#[path = "marker_test.rs"]
mod tests;
