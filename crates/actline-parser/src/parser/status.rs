use super::action::{position_at, resources_at, Position};
use super::{actor_from_fields, field_at, ParseError};
use crate::events::Actor;
use actline_core::{f32_from_field, u16x2_from_field, u32_from_field};
use serde::{Deserialize, Serialize};

// Fields before the variable-length effect list: actor pair, class, six
// resource words, four position words.
const EFFECTS_START: usize = 13;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusEffect {
    pub status_id: u16,
    pub param: u16,
    pub duration: f32,
    pub source_id: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusList {
    pub actor: Actor,
    pub class: String,
    pub resources: [u32; 6],
    pub position: Position,
    pub effects: Vec<StatusEffect>,
}

pub fn status_effect_from_fields(fields: &[&str]) -> Result<StatusEffect, ParseError> {
    let (status_id, param) = u16x2_from_field(field_at(fields, 0)?)?;
    Ok(StatusEffect {
        status_id,
        param,
        duration: f32_from_field(field_at(fields, 1)?)?,
        source_id: u32_from_field(field_at(fields, 2)?)?,
    })
}

/// Decodes a status-list layout: actor, class, resources, position, then
/// three-field effect chunks up to the trailing sentinel field.
pub fn status_list_from_fields(fields: &[&str]) -> Result<StatusList, ParseError> {
    let actor = actor_from_fields(&[field_at(fields, 0)?, field_at(fields, 1)?])?;
    let class = field_at(fields, 2)?.to_string();
    let resources = resources_at(fields, 3)?;
    let position = position_at(fields, 9)?;

    let tail = fields
        .get(EFFECTS_START..fields.len().saturating_sub(1))
        .unwrap_or(&[]);
    let mut effects = Vec::with_capacity(tail.len() / 3);
    for chunk in tail.chunks(3) {
        effects.push(status_effect_from_fields(chunk)?);
    }

    Ok(StatusList {
        actor,
        class,
        resources,
        position,
        effects,
    })
}

#[cfg(test)]
#[path = "status_test.rs"]
mod tests;
