use super::{field_at, ParseError};
use crate::events::{BarrierState, Event, Fade, Timestamp};
use actline_core::{u16x2_from_field, u32_from_field};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectorUpdateCommand {
    Init,
    Complete,
    FadeOut,
    FadeIn,
    BarrierUp,
    BarrierDown,
}

impl DirectorUpdateCommand {
    /// Wire codes observed from the tool. The command space is open-ended;
    /// codes outside this set are not an error.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0x4000_0001 => Some(Self::Init),
            0x4000_0002 => Some(Self::Complete),
            0x4000_0005 => Some(Self::FadeOut),
            0x4000_0006 => Some(Self::FadeIn),
            0x4000_0010 => Some(Self::BarrierUp),
            0x4000_0012 => Some(Self::BarrierDown),
            _ => None,
        }
    }
}

/// Decodes a director/instance-state command into its lifecycle event.
///
/// `fields[0]` packs the category in its high 16 bits and the instance ID in
/// its low 16 bits; `fields[1]` is the command code. Unknown commands produce
/// no event.
pub fn director_event_from_fields(
    timestamp: Timestamp,
    fields: &[&str],
) -> Result<Option<Event>, ParseError> {
    let (_category, instance_id) = u16x2_from_field(field_at(fields, 0)?)?;
    let code = u32_from_field(field_at(fields, 1)?)?;

    let Some(command) = DirectorUpdateCommand::from_code(code) else {
        debug!(code, instance_id, "unhandled director command");
        return Ok(None);
    };

    let event = match command {
        DirectorUpdateCommand::Init => Event::InstanceInit {
            timestamp,
            instance_id,
        },
        DirectorUpdateCommand::Complete => Event::InstanceComplete {
            timestamp,
            instance_id,
        },
        DirectorUpdateCommand::FadeOut => Event::InstanceFade {
            timestamp,
            instance_id,
            state: Fade::Out,
        },
        DirectorUpdateCommand::FadeIn => Event::InstanceFade {
            timestamp,
            instance_id,
            state: Fade::In,
        },
        DirectorUpdateCommand::BarrierUp => Event::BarrierToggle {
            timestamp,
            instance_id,
            state: BarrierState::Up,
        },
        DirectorUpdateCommand::BarrierDown => Event::BarrierToggle {
            timestamp,
            instance_id,
            state: BarrierState::Down,
        },
    };
    Ok(Some(event))
}

#[cfg(test)]
#[path = "director_test.rs"]
mod tests;
