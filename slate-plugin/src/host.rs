//! Host capability bundle

use crate::{Commands, Notifications, Omnibar};
use std::sync::Arc;

/// Capabilities a host hands to a plugin on activation
#[derive(Clone)]
pub struct Host {
    commands: Arc<dyn Commands>,
    omnibar: Arc<dyn Omnibar>,
    notifications: Arc<dyn Notifications>,
}

impl Host {
    pub fn new(
        commands: Arc<dyn Commands>,
        omnibar: Arc<dyn Omnibar>,
        notifications: Arc<dyn Notifications>,
    ) -> Self {
        Self { commands, omnibar, notifications }
    }

    pub fn commands(&self) -> &Arc<dyn Commands> {
        &self.commands
    }

    pub fn omnibar(&self) -> &Arc<dyn Omnibar> {
        &self.omnibar
    }

    pub fn notifications(&self) -> &Arc<dyn Notifications> {
        &self.notifications
    }
}

impl std::fmt::Debug for Host {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Host").finish_non_exhaustive()
    }
}
