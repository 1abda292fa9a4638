//! Plugin activation

use slate_core::{PluginError, PluginResult};
use slate_plugin::{Host, Plugin};
use tracing::{error, info};

/// Activate each plugin once, in order. The first failure stops start-up.
pub async fn activate_all(plugins: &[Box<dyn Plugin>], host: &Host) -> PluginResult<()> {
    for plugin in plugins {
        let meta = plugin.meta();
        info!(plugin = meta.name, version = meta.version, "activating plugin");
        if let Err(e) = plugin.activate(host).await {
            error!(plugin = meta.name, error = %e, "plugin activation failed");
            return Err(PluginError::activation(meta.name, e.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use slate_core::{CommandId, CommandOutput, InputOptions, Notification, NotificationId};
    use slate_plugin::{CommandHandler, CommandRegistry, Notifications, Omnibar, PluginMeta};
    use std::sync::Arc;

    struct Nothing;

    #[async_trait]
    impl Omnibar for Nothing {
        async fn show_input(&self, _title: &str, _options: InputOptions) -> PluginResult<Option<String>> {
            Ok(None)
        }
    }

    #[async_trait]
    impl Notifications for Nothing {
        async fn notify(&self, _notification: Notification) -> PluginResult<NotificationId> {
            Ok(NotificationId(0))
        }
    }

    #[async_trait]
    impl CommandHandler for Nothing {
        async fn call(&self, _arg: &str) -> PluginResult<CommandOutput> {
            Ok(CommandOutput::Null)
        }
    }

    /// Registers a fixed command id
    struct Registers(&'static str, &'static str);

    #[async_trait]
    impl Plugin for Registers {
        fn meta(&self) -> PluginMeta {
            PluginMeta { name: self.0, description: "", version: "0.0.0" }
        }

        async fn activate(&self, host: &Host) -> PluginResult<()> {
            host.commands().register(CommandId::new(self.1)?, Arc::new(Nothing))
        }
    }

    fn host(registry: Arc<CommandRegistry>) -> Host {
        Host::new(registry, Arc::new(Nothing), Arc::new(Nothing))
    }

    #[tokio::test]
    async fn test_activates_in_order() {
        let registry = Arc::new(CommandRegistry::new());
        let plugins: Vec<Box<dyn Plugin>> = vec![
            Box::new(Registers("a", "a.run")),
            Box::new(Registers("b", "b.run")),
        ];

        activate_all(&plugins, &host(registry.clone())).await.unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[tokio::test]
    async fn test_failure_names_the_plugin() {
        let registry = Arc::new(CommandRegistry::new());
        let plugins: Vec<Box<dyn Plugin>> = vec![
            Box::new(Registers("first", "shared.run")),
            Box::new(Registers("second", "shared.run")),
            Box::new(Registers("third", "third.run")),
        ];

        let err = activate_all(&plugins, &host(registry.clone())).await.unwrap_err();
        match err {
            PluginError::Activation { plugin, message } => {
                assert_eq!(plugin, "second");
                assert!(message.contains("already registered"), "{}", message);
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(!registry.contains("third.run"));
    }
}
