use serde::{Deserialize, Serialize};

/// Milliseconds since the Unix epoch, as produced by the timestamp decoder.
pub type Timestamp = i64;

/// Combat encounter instance, the low half of the packed category field.
pub type InstanceId = u16;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarrierState {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fade {
    In,
    Out,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerOperation {
    Add,
    Update,
    Delete,
}

impl MarkerOperation {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "Add" => Some(Self::Add),
            "Update" => Some(Self::Update),
            "Delete" => Some(Self::Delete),
            _ => None,
        }
    }
}

/// Overhead marker kinds, in wire-ID order. The tool only ever names these
/// fourteen; anything outside 0..=13 is invalid on a marker line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerMarker {
    Attack1,
    Attack2,
    Attack3,
    Attack4,
    Attack5,
    Bind1,
    Bind2,
    Bind3,
    Ignore1,
    Ignore2,
    Square,
    Circle,
    Cross,
    Triangle,
}

impl PlayerMarker {
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Self::Attack1),
            1 => Some(Self::Attack2),
            2 => Some(Self::Attack3),
            3 => Some(Self::Attack4),
            4 => Some(Self::Attack5),
            5 => Some(Self::Bind1),
            6 => Some(Self::Bind2),
            7 => Some(Self::Bind3),
            8 => Some(Self::Ignore1),
            9 => Some(Self::Ignore2),
            10 => Some(Self::Square),
            11 => Some(Self::Circle),
            12 => Some(Self::Cross),
            13 => Some(Self::Triangle),
            _ => None,
        }
    }

    pub fn id(self) -> u8 {
        match self {
            Self::Attack1 => 0,
            Self::Attack2 => 1,
            Self::Attack3 => 2,
            Self::Attack4 => 3,
            Self::Attack5 => 4,
            Self::Bind1 => 5,
            Self::Bind2 => 6,
            Self::Bind3 => 7,
            Self::Ignore1 => 8,
            Self::Ignore2 => 9,
            Self::Square => 10,
            Self::Circle => 11,
            Self::Cross => 12,
            Self::Triangle => 13,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    BarrierToggle {
        timestamp: Timestamp,
        instance_id: InstanceId,
        state: BarrierState,
    },
    InstanceComplete {
        timestamp: Timestamp,
        instance_id: InstanceId,
    },
    InstanceFade {
        timestamp: Timestamp,
        instance_id: InstanceId,
        state: Fade,
    },
    InstanceInit {
        timestamp: Timestamp,
        instance_id: InstanceId,
    },
    OverheadMarker {
        timestamp: Timestamp,
        operator: MarkerOperation,
        marker: PlayerMarker,
        target: Actor,
        caster: Actor,
    },
}

impl Event {
    pub fn timestamp(&self) -> Timestamp {
        match self {
            Event::BarrierToggle { timestamp, .. }
            | Event::InstanceComplete { timestamp, .. }
            | Event::InstanceFade { timestamp, .. }
            | Event::InstanceInit { timestamp, .. }
            | Event::OverheadMarker { timestamp, .. } => *timestamp,
        }
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
