//! notifications.info

use slate_plugin::prelude::*;
use std::sync::Arc;
use tracing::{debug, info};

pub const COMMAND_ID: &str = "notifications.info";
pub const PROMPT_TITLE: &str = "Show Notification";

/// Plugin that registers [`COMMAND_ID`] on activation
pub struct InfoNotifier {
    clock: Arc<dyn Clock>,
}

impl InfoNotifier {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl Default for InfoNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Plugin for InfoNotifier {
    fn meta(&self) -> PluginMeta {
        PluginMeta {
            name: "notify",
            description: "Prompt for a message and show it as a notification",
            version: env!("CARGO_PKG_VERSION"),
        }
    }

    async fn activate(&self, host: &Host) -> PluginResult<()> {
        let activated_at = format_time(self.clock.local_time());
        let command = InfoCommand::new(host, activated_at);

        host.commands().register(CommandId::new(COMMAND_ID)?, Arc::new(command))?;
        info!(command = COMMAND_ID, "notify plugin activated");
        Ok(())
    }
}

/// Handler for [`COMMAND_ID`]. The argument is the prefix put in front of
/// whatever the user types.
pub struct InfoCommand {
    omnibar: Arc<dyn Omnibar>,
    notifications: Arc<dyn Notifications>,
    placeholder: String,
}

impl InfoCommand {
    pub fn new(host: &Host, activated_at: String) -> Self {
        Self {
            omnibar: host.omnibar().clone(),
            notifications: host.notifications().clone(),
            placeholder: format!("what would you like it to say? (activation time {})", activated_at),
        }
    }
}

#[async_trait]
impl CommandHandler for InfoCommand {
    fn description(&self) -> &str {
        "Ask for a message and show it as an info notification"
    }

    async fn call(&self, prefix: &str) -> PluginResult<CommandOutput> {
        let options = InputOptions::new().with_placeholder(self.placeholder.as_str());
        let message = match self.omnibar.show_input(PROMPT_TITLE, options).await? {
            Some(message) if !message.is_empty() => message,
            _ => {
                debug!(command = COMMAND_ID, "input dismissed");
                return Ok(CommandOutput::Null);
            }
        };

        let id = self.notifications.add_info(&format!("{}: {}", prefix, message)).await?;
        Ok(id.into())
    }
}
