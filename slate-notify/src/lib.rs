//! Slate Notification Plugin
//!
//! Registers `notifications.info`, which asks the user for a message and
//! shows it as an informational notification.

mod info;

pub use info::{InfoNotifier, InfoCommand, COMMAND_ID, PROMPT_TITLE};

use slate_plugin::Plugin;

/// Plugins bundled with this crate, in activation order
pub fn bundled_plugins() -> Vec<Box<dyn Plugin>> {
    vec![Box::new(InfoNotifier::new())]
}
