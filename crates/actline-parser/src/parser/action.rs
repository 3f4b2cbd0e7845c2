use super::{actor_from_fields, field_at, ParseError};
use crate::events::Actor;
use actline_core::{f32_from_field, u32_from_field, u8x4_from_field};
use serde::{Deserialize, Serialize};

const EFFECT_PAIRS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub heading: f32,
}

/// One effect entry from an ability line, decoded from a pair of hex words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionEffect {
    pub kind: u8,
    pub severity: u8,
    pub param0: u8,
    pub param1: u8,
    pub value: u16,
    pub param2: u8,
    pub param3: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityUse {
    pub source: Actor,
    pub ability_id: u32,
    pub ability_name: String,
    pub target: Actor,
    pub effects: Vec<ActionEffect>,
    pub source_resources: [u32; 6],
    pub source_position: Position,
    pub target_resources: [u32; 6],
    pub target_position: Position,
    pub sequence: u32,
}

pub fn action_effect_from_fields(fields: &[&str]) -> Result<ActionEffect, ParseError> {
    let (kind, severity, param0, param1) = u8x4_from_field(field_at(fields, 0)?)?;
    let word = u32_from_field(field_at(fields, 1)?)?;
    Ok(ActionEffect {
        kind,
        severity,
        param0,
        param1,
        value: (word >> 16) as u16,
        param2: (word >> 8) as u8,
        param3: word as u8,
    })
}

/// Decodes the fixed 43-field ability layout: source actor, ability, target
/// actor, eight effect pairs, then each side's resources and position, and a
/// trailing sequence number.
pub fn ability_from_fields(fields: &[&str]) -> Result<AbilityUse, ParseError> {
    let source = actor_from_fields(&[field_at(fields, 0)?, field_at(fields, 1)?])?;
    let ability_id = u32_from_field(field_at(fields, 2)?)?;
    let ability_name = field_at(fields, 3)?.to_string();
    let target = actor_from_fields(&[field_at(fields, 4)?, field_at(fields, 5)?])?;

    let mut effects = Vec::with_capacity(EFFECT_PAIRS);
    for pair in 0..EFFECT_PAIRS {
        let base = 6 + pair * 2;
        effects.push(action_effect_from_fields(&[
            field_at(fields, base)?,
            field_at(fields, base + 1)?,
        ])?);
    }

    let source_resources = resources_at(fields, 22)?;
    let source_position = position_at(fields, 28)?;
    let target_resources = resources_at(fields, 32)?;
    let target_position = position_at(fields, 38)?;
    let sequence = u32_from_field(field_at(fields, 42)?)?;

    Ok(AbilityUse {
        source,
        ability_id,
        ability_name,
        target,
        effects,
        source_resources,
        source_position,
        target_resources,
        target_position,
        sequence,
    })
}

pub(crate) fn resources_at(fields: &[&str], start: usize) -> Result<[u32; 6], ParseError> {
    let mut out = [0u32; 6];
    for (slot, value) in out.iter_mut().enumerate() {
        *value = u32_from_field(field_at(fields, start + slot)?)?;
    }
    Ok(out)
}

pub(crate) fn position_at(fields: &[&str], start: usize) -> Result<Position, ParseError> {
    Ok(Position {
        x: f32_from_field(field_at(fields, start)?)?,
        y: f32_from_field(field_at(fields, start + 1)?)?,
        z: f32_from_field(field_at(fields, start + 2)?)?,
        heading: f32_from_field(field_at(fields, start + 3)?)?,
    })
}

#[cfg(test)]
#[path = "action_test.rs"]
mod tests;
