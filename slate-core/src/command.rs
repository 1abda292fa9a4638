//! Command identifiers

use crate::{PluginError, PluginResult};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Value a command handler completes with. Hosts pass it back to whoever
/// invoked the command and never interpret it; `Null` means "nothing".
pub type CommandOutput = serde_json::Value;

/// Globally unique command identifier in a dotted namespace,
/// e.g. `notifications.info`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CommandId(String);

impl CommandId {
    pub fn new(id: impl Into<String>) -> PluginResult<Self> {
        let id = id.into();
        if Self::is_valid(&id) {
            Ok(Self(id))
        } else {
            Err(PluginError::InvalidCommandId(id))
        }
    }

    /// At least two non-empty segments of `[A-Za-z0-9_-]`, separated by dots.
    pub fn is_valid(id: &str) -> bool {
        let mut segments = 0;
        for segment in id.split('.') {
            if segment.is_empty()
                || !segment.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
            {
                return false;
            }
            segments += 1;
        }
        segments >= 2
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CommandId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CommandId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for CommandId {
    type Err = PluginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CommandId {
    type Error = PluginError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for CommandId {
    type Error = PluginError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CommandId> for String {
    fn from(id: CommandId) -> Self {
        id.0
    }
}
