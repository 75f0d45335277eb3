//! Explicit state handles passed down to consumers
//!
//! Consumers ask for the store they need; asking for one that was not
//! supplied is a wiring mistake and yields [`Error::ProviderMissing`].

use shellkit_core::prelude::*;

use crate::layout_state::AppLayoutStore;
use crate::panel::PanelStore;

/// Borrowed handles to the shell's state stores.
#[derive(Debug, Default, Clone, Copy)]
pub struct Providers<'a> {
    sidebar: Option<&'a PanelStore>,
    settings_panel: Option<&'a PanelStore>,
    layout: Option<&'a AppLayoutStore>,
}

impl<'a> Providers<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sidebar(mut self, store: &'a PanelStore) -> Self {
        self.sidebar = Some(store);
        self
    }

    pub fn with_settings_panel(mut self, store: &'a PanelStore) -> Self {
        self.settings_panel = Some(store);
        self
    }

    pub fn with_layout_store(mut self, store: &'a AppLayoutStore) -> Self {
        self.layout = Some(store);
        self
    }

    pub fn sidebar(&self) -> Result<&'a PanelStore> {
        self.sidebar
            .ok_or_else(|| Error::provider_missing("sidebar()", "SidebarProvider"))
    }

    pub fn settings_panel(&self) -> Result<&'a PanelStore> {
        self.settings_panel.ok_or_else(|| {
            Error::provider_missing("settings_panel()", "SettingsPanelProvider")
        })
    }

    pub fn layout_store(&self) -> Result<&'a AppLayoutStore> {
        self.layout.ok_or_else(|| {
            Error::provider_missing("layout_store()", "AppLayoutStateProvider")
        })
    }
}
