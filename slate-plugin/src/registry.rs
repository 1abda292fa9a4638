//! Command Registry

use crate::{CommandHandler, Commands};
use slate_core::{CommandId, CommandOutput, PluginError, PluginResult};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// In-memory command registry a host can hand to its plugins
#[derive(Default)]
pub struct CommandRegistry {
    handlers: RwLock<HashMap<CommandId, Arc<dyn CommandHandler>>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.read().contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Registered ids, sorted
    pub fn command_ids(&self) -> Vec<CommandId> {
        let mut ids: Vec<CommandId> = self.read().keys().cloned().collect();
        ids.sort();
        ids
    }

    /// (id, description) pairs, sorted by id
    pub fn describe(&self) -> Vec<(CommandId, String)> {
        let mut rows: Vec<(CommandId, String)> = self.read()
            .iter()
            .map(|(id, handler)| (id.clone(), handler.description().to_string()))
            .collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0));
        rows
    }

    /// Run the handler registered under `id`.
    pub async fn invoke(&self, id: &str, arg: &str) -> PluginResult<CommandOutput> {
        // Clone the handler out so the lock is not held across the await.
        let handler = self.read().get(id).cloned();
        match handler {
            Some(handler) => {
                debug!(command = id, "invoking command");
                handler.call(arg).await
            }
            None => {
                let similar = self.find_similar(id);
                let mut err = PluginError::unknown_command(id);
                if !similar.is_empty() {
                    let suggestions: Vec<&str> = similar.iter().take(5).map(|s| s.as_str()).collect();
                    err = err.with_suggestion(format!("Similar: {}", suggestions.join(", ")));
                }
                Err(err)
            }
        }
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<CommandId, Arc<dyn CommandHandler>>> {
        self.handlers.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Find registered ids similar to the given one (for error suggestions)
    fn find_similar(&self, id: &str) -> Vec<String> {
        let query = id.to_lowercase();
        let mut matches: Vec<(String, usize)> = self.read()
            .keys()
            .filter_map(|candidate| {
                let score = Self::similarity_score(&query, &candidate.as_str().to_lowercase());
                (score > 0).then(|| (candidate.to_string(), score))
            })
            .collect();

        // Higher score first, then alphabetical for stable output
        matches.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        matches.into_iter().map(|(id, _)| id).collect()
    }

    fn similarity_score(query: &str, candidate: &str) -> usize {
        let mut score = 0;

        if candidate.starts_with(query) {
            score += 100;
        } else if candidate.contains(query) {
            score += 50;
        } else if query.contains(candidate) {
            score += 30;
        }

        // Same namespace counts as a hint on its own
        let query_ns = query.split('.').next().unwrap_or_default();
        let candidate_ns = candidate.split('.').next().unwrap_or_default();
        if !query_ns.is_empty() && query_ns == candidate_ns {
            score += 40;
        }

        if score == 0 {
            return 0;
        }

        let query_chars: HashSet<char> = query.chars().collect();
        let candidate_chars: HashSet<char> = candidate.chars().collect();
        score += query_chars.intersection(&candidate_chars).count() * 2;

        let len_diff = query.len().abs_diff(candidate.len());
        if len_diff < 5 {
            score += 5 - len_diff;
        }

        score
    }
}

impl Commands for CommandRegistry {
    fn register(&self, id: CommandId, handler: Arc<dyn CommandHandler>) -> PluginResult<()> {
        let mut handlers = self.handlers.write().unwrap_or_else(PoisonError::into_inner);
        if handlers.contains_key(&id) {
            return Err(PluginError::DuplicateCommand(id.to_string()));
        }
        debug!(command = %id, "registered command");
        handlers.insert(id, handler);
        Ok(())
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.command_ids())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;

    struct Echo;

    #[async_trait]
    impl CommandHandler for Echo {
        fn description(&self) -> &str {
            "Echo the argument back"
        }

        async fn call(&self, arg: &str) -> PluginResult<CommandOutput> {
            Ok(json!(arg))
        }
    }

    struct Silent;

    #[async_trait]
    impl CommandHandler for Silent {
        async fn call(&self, _arg: &str) -> PluginResult<CommandOutput> {
            Ok(CommandOutput::Null)
        }
    }

    fn id(s: &str) -> CommandId {
        CommandId::new(s).unwrap()
    }

    #[test]
    fn test_registry_creation() {
        let registry = CommandRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_register() {
        let registry = CommandRegistry::new();
        registry.register(id("demo.echo"), Arc::new(Echo)).unwrap();

        assert_eq!(registry.len(), 1);
        assert!(registry.contains("demo.echo"));
        assert!(!registry.contains("demo.other"));
    }

    #[test]
    fn test_duplicate_registration() {
        let registry = CommandRegistry::new();
        registry.register(id("demo.echo"), Arc::new(Echo)).unwrap();

        let err = registry.register(id("demo.echo"), Arc::new(Silent)).unwrap_err();
        assert!(matches!(err, PluginError::DuplicateCommand(ref c) if c == "demo.echo"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_listing_is_sorted() {
        let registry = CommandRegistry::new();
        registry.register(id("zeta.last"), Arc::new(Silent)).unwrap();
        registry.register(id("alpha.first"), Arc::new(Echo)).unwrap();

        let ids: Vec<String> = registry.command_ids().iter().map(|c| c.to_string()).collect();
        assert_eq!(ids, vec!["alpha.first", "zeta.last"]);

        let rows = registry.describe();
        assert_eq!(rows[0].1, "Echo the argument back");
        assert_eq!(rows[1].1, "");
    }

    #[tokio::test]
    async fn test_invoke() {
        let registry = CommandRegistry::new();
        registry.register(id("demo.echo"), Arc::new(Echo)).unwrap();

        let out = registry.invoke("demo.echo", "hello").await.unwrap();
        assert_eq!(out, json!("hello"));
    }

    #[tokio::test]
    async fn test_invoke_unknown_suggests_similar() {
        let registry = CommandRegistry::new();
        registry.register(id("notifications.info"), Arc::new(Echo)).unwrap();
        registry.register(id("other.thing"), Arc::new(Silent)).unwrap();

        let err = registry.invoke("notifications.inf", "").await.unwrap_err();
        match err {
            PluginError::UnknownCommand { id, suggestion } => {
                assert_eq!(id, "notifications.inf");
                let suggestion = suggestion.unwrap();
                assert!(suggestion.starts_with("Similar: notifications.info"), "{}", suggestion);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invoke_unknown_without_match() {
        let registry = CommandRegistry::new();
        let err = registry.invoke("nothing.here", "").await.unwrap_err();
        assert!(matches!(err, PluginError::UnknownCommand { suggestion: None, .. }));
    }
}
