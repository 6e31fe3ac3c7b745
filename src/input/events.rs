//! Generic input event types delivered by the pointer and widget layers.

use crate::draw::Point;
use serde::{Deserialize, Serialize};

/// One event of a drag gesture.
///
/// A gesture is always delivered as `Start`, zero or more `Move`s, then `End`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    /// Pointer went down at the given canvas position
    Start(Point),
    /// Pointer moved while held down
    Move(Point),
    /// Pointer was released
    End,
}

/// One of the three additive color channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Red,
    Green,
    Blue,
}
