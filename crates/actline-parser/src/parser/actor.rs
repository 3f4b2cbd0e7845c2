use super::{field_at, ParseError};
use crate::events::Actor;
use actline_core::u32_from_field;

/// An actor reference on the wire is an ID/name field pair.
pub fn actor_from_fields(fields: &[&str]) -> Result<Actor, ParseError> {
    Ok(Actor {
        id: u32_from_field(field_at(fields, 0)?)?,
        name: field_at(fields, 1)?.to_string(),
    })
}

#[cfg(test)]
#[path = "actor_test.rs"]
mod tests;
