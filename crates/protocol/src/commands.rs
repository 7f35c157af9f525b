use serde::Serialize;

use crate::style::{StyleKey, StyleValue};

/// A single write against the style-variable registry.
///
/// Each pass of the engine emits a short sequence of these. Hosts apply them
/// in order; every command is independent of the others.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum StyleCommand {
    /// Publish `value` under `key`, replacing any previous value.
    Set { key: StyleKey, value: StyleValue },

    /// Drop the override for `key` so the stylesheet default applies.
    Remove { key: StyleKey },
}

impl StyleCommand {
    pub fn key(&self) -> StyleKey {
        match self {
            StyleCommand::Set { key, .. } | StyleCommand::Remove { key } => *key,
        }
    }
}
