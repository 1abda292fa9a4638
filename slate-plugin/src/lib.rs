//! Slate Plugin System
//!
//! Provides the contract between a host and its plugins:
//! - Capabilities (commands, omnibar, notifications) the host injects
//! - Plugins (activated once with the capability bundle)
//! - Command handlers (invoked by the host with a single argument)
//!
//! Plugins never reach for globals: everything they may touch arrives
//! through the [`Host`] passed to [`Plugin::activate`].

mod traits;
mod host;
mod registry;
mod clock;

pub use traits::{
    Plugin, PluginMeta,
    CommandHandler,
    Commands, Omnibar, Notifications,
};
pub use host::Host;
pub use registry::CommandRegistry;
pub use clock::{Clock, SystemClock, ManualClock, format_time};

/// Re-export core types for plugin authors
pub mod prelude {
    pub use crate::{
        Plugin, PluginMeta, CommandHandler,
        Commands, Omnibar, Notifications,
        Host, CommandRegistry,
        Clock, SystemClock, format_time,
    };
    pub use async_trait::async_trait;
    pub use slate_core::prelude::*;
}
