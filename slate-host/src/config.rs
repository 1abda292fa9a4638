//! Host configuration from the environment

use slate_core::{PluginError, PluginResult};
use slate_plugin::Plugin;
use std::env;

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// `tracing` filter directive for the stderr log
    pub log_filter: String,
    /// Plugin names to activate; `None` activates every bundled plugin
    pub enabled_plugins: Option<Vec<String>>,
}

impl HostConfig {
    /// `SLATE_LOG` (falling back to `RUST_LOG`) and `SLATE_PLUGINS`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let set = |key: &str| lookup(key).filter(|s| !s.trim().is_empty());
        let log_filter = set("SLATE_LOG")
            .or_else(|| set("RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let enabled_plugins = lookup("SLATE_PLUGINS")
            .map(|list| {
                list.split(',')
                    .map(|name| name.trim().to_string())
                    .filter(|name| !name.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|names| !names.is_empty());

        Self { log_filter, enabled_plugins }
    }

    /// Keep the enabled plugins, in the order they were given.
    pub fn select_plugins(&self, available: Vec<Box<dyn Plugin>>) -> PluginResult<Vec<Box<dyn Plugin>>> {
        let names = match &self.enabled_plugins {
            Some(names) => names,
            None => return Ok(available),
        };

        if let Some(unknown) = names.iter().find(|n| !available.iter().any(|p| p.meta().name == n.as_str())) {
            let known: Vec<&str> = available.iter().map(|p| p.meta().name).collect();
            return Err(PluginError::Config(format!(
                "unknown plugin '{}' in SLATE_PLUGINS (available: {})",
                unknown,
                known.join(", ")
            )));
        }

        let mut available = available;
        let mut selected = Vec::with_capacity(names.len());
        for name in names {
            if let Some(pos) = available.iter().position(|p| p.meta().name == name.as_str()) {
                selected.push(available.remove(pos));
            }
        }
        Ok(selected)
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self { log_filter: DEFAULT_LOG_FILTER.to_string(), enabled_plugins: None }
    }
}
