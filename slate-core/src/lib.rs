//! Slate Core - Shared types
//!
//! This crate provides the value types exchanged between a Slate host and
//! its plugins:
//! - `CommandId`: Validated dotted command identifiers
//! - `Notification`: Severity-tagged messages for the notification surface
//! - `InputOptions`: Options for free-text input prompts
//! - `PluginError`: Errors raised by hosts and plugins

mod command;
mod notification;
mod input;
mod error;

pub use command::{CommandId, CommandOutput};
pub use notification::{Notification, NotificationId, Severity};
pub use input::InputOptions;
pub use error::{PluginError, PluginResult, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        CommandId, CommandOutput, InputOptions, Notification, NotificationId,
        PluginError, PluginResult, Severity,
    };
    pub use crate::error::codes;
}
