//! Shell composition: inline vs sheet vs disabled for each panel

use shellkit_core::prelude::*;

use crate::panel::PanelStore;
use crate::providers::Providers;

/// How a panel is presented in the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPresentation {
    /// Part of the desktop layout, expanded or collapsed
    Inline { expanded: bool },
    /// Overlay sheet on mobile
    Sheet { visible: bool },
    /// Unavailable in the mid-width band
    Disabled,
}

impl PanelPresentation {
    pub fn is_sheet(&self) -> bool {
        matches!(self, PanelPresentation::Sheet { .. })
    }

    /// Takes up a column in the layout
    pub fn occupies_column(&self) -> bool {
        matches!(self, PanelPresentation::Inline { expanded: true })
    }

    pub fn is_visible_sheet(&self) -> bool {
        matches!(self, PanelPresentation::Sheet { visible: true })
    }
}

/// Settings panel trigger in the content header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerState {
    Hidden,
    Enabled,
    Disabled,
}

/// Content region corner radius, cosmetic only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    None,
    Small,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentCorners {
    pub leading: Corner,
    pub trailing: Corner,
}

/// What the caller wants shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellOptions {
    pub show_settings_panel: bool,
    pub show_settings_trigger: bool,
    pub has_settings_content: bool,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            show_settings_panel: true,
            show_settings_trigger: true,
            has_settings_content: true,
        }
    }
}

/// The composed layout decision for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellLayout {
    pub sidebar: PanelPresentation,
    /// `None` when the settings panel is not part of the shell
    pub settings_panel: Option<PanelPresentation>,
    pub settings_trigger: TriggerState,
    pub corners: ContentCorners,
}

fn sidebar_presentation(sidebar: &PanelStore) -> PanelPresentation {
    if sidebar.is_mobile() {
        PanelPresentation::Sheet {
            visible: sidebar.open_mobile(),
        }
    } else {
        PanelPresentation::Inline {
            expanded: sidebar.is_open(),
        }
    }
}

fn settings_presentation(panel: &PanelStore) -> PanelPresentation {
    if panel.is_mobile() {
        PanelPresentation::Sheet {
            visible: panel.open_mobile(),
        }
    } else if !panel.is_open_allowed() {
        PanelPresentation::Disabled
    } else {
        PanelPresentation::Inline {
            expanded: panel.effective_open(),
        }
    }
}

/// Compose the shell. The sidebar provider is required; the settings panel
/// provider only when the panel is shown.
pub fn compose(providers: &Providers<'_>, options: &ShellOptions) -> Result<ShellLayout> {
    let sidebar = providers.sidebar()?;
    let sidebar_view = sidebar_presentation(sidebar);

    let settings_shown = options.show_settings_panel && options.has_settings_content;
    let (settings_view, settings_trigger) = if settings_shown {
        let panel = providers.settings_panel()?;
        let view = settings_presentation(panel);
        let trigger = if !options.show_settings_trigger {
            TriggerState::Hidden
        } else if panel.trigger_disabled() {
            TriggerState::Disabled
        } else {
            TriggerState::Enabled
        };
        (Some(view), trigger)
    } else {
        (None, TriggerState::Hidden)
    };

    let leading = match sidebar_view {
        PanelPresentation::Inline { expanded: true } => Corner::Large,
        PanelPresentation::Inline { expanded: false } => Corner::Small,
        _ => Corner::None,
    };
    let trailing = if settings_view.is_some() {
        Corner::Small
    } else {
        Corner::Large
    };

    Ok(ShellLayout {
        sidebar: sidebar_view,
        settings_panel: settings_view,
        settings_trigger,
        corners: ContentCorners { leading, trailing },
    })
}
