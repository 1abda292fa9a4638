//! Plugin traits

use crate::Host;
use async_trait::async_trait;
use serde::Serialize;
use slate_core::{
    CommandId, CommandOutput, InputOptions, Notification, NotificationId, PluginResult,
};
use std::sync::Arc;

/// Metadata for a plugin
#[derive(Debug, Clone, Serialize)]
pub struct PluginMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub version: &'static str,
}

/// A plugin, activated once by the host at load time
#[async_trait]
pub trait Plugin: Send + Sync {
    fn meta(&self) -> PluginMeta;

    /// Set the plugin up against the host's capabilities. Registration
    /// failures propagate to the host's loader.
    async fn activate(&self, host: &Host) -> PluginResult<()>;
}

/// Handler behind a registered command
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// One-line summary for host listings.
    fn description(&self) -> &str {
        ""
    }

    async fn call(&self, arg: &str) -> PluginResult<CommandOutput>;
}

/// Command registry capability
pub trait Commands: Send + Sync {
    fn register(&self, id: CommandId, handler: Arc<dyn CommandHandler>) -> PluginResult<()>;
}

/// Free-text input capability
#[async_trait]
pub trait Omnibar: Send + Sync {
    /// Ask the user for text. `None` means the prompt was dismissed.
    async fn show_input(&self, title: &str, options: InputOptions) -> PluginResult<Option<String>>;
}

/// Notification capability
#[async_trait]
pub trait Notifications: Send + Sync {
    async fn notify(&self, notification: Notification) -> PluginResult<NotificationId>;

    async fn add_info(&self, message: &str) -> PluginResult<NotificationId> {
        self.notify(Notification::info(message)).await
    }

    async fn add_warning(&self, message: &str) -> PluginResult<NotificationId> {
        self.notify(Notification::warning(message)).await
    }

    async fn add_error(&self, message: &str) -> PluginResult<NotificationId> {
        self.notify(Notification::error(message)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slate_core::Severity;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        shown: Mutex<Vec<Notification>>,
    }

    #[async_trait]
    impl Notifications for Recorder {
        async fn notify(&self, notification: Notification) -> PluginResult<NotificationId> {
            let mut shown = self.shown.lock().unwrap();
            shown.push(notification);
            Ok(NotificationId(shown.len() as u64))
        }
    }

    #[tokio::test]
    async fn test_severity_helpers() {
        let recorder = Recorder::default();
        recorder.add_info("one").await.unwrap();
        recorder.add_warning("two").await.unwrap();
        let id = recorder.add_error("three").await.unwrap();

        assert_eq!(id, NotificationId(3));
        let shown = recorder.shown.lock().unwrap();
        let severities: Vec<Severity> = shown.iter().map(|n| n.severity).collect();
        assert_eq!(severities, vec![Severity::Info, Severity::Warning, Severity::Error]);
        assert_eq!(shown[2].message, "three");
    }

    #[test]
    fn test_plugin_meta_serializes() {
        let meta = PluginMeta { name: "demo", description: "Demo plugin", version: "1.0.0" };
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["name"], "demo");
        assert_eq!(json["version"], "1.0.0");
    }
}
