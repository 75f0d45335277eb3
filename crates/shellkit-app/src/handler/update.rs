//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use shellkit_core::prelude::*;

use crate::layout_state::AppLayoutAction;
use crate::message::Message;
use crate::nav::NavActivation;
use crate::panel::PanelKind;
use crate::shortcuts::ShortcutAction;
use crate::state::{FocusArea, ShellState};
use crate::team_switcher::TeamMenuOutcome;
use crate::user_menu::UserMenuOutcome;

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut ShellState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Mounted { columns } => handle_mounted(state, columns),

        Message::Resize { columns } => {
            if !state.is_mounted() {
                return handle_mounted(state, columns);
            }
            state.resize(columns, Instant::now());
            UpdateResult::none()
        }

        Message::Tick => {
            if state.is_mounted() {
                state.tick(Instant::now());
            }
            UpdateResult::none()
        }

        Message::Shortcut(action) => match action {
            ShortcutAction::ToggleSidebar => UpdateResult::message(Message::ToggleSidebar),
            ShortcutAction::ToggleSettingsPanel => {
                UpdateResult::message(Message::ToggleSettingsPanel)
            }
        },

        // ─────────────────────────────────────────────────────────
        // Panels
        // ─────────────────────────────────────────────────────────
        Message::ToggleSidebar => {
            state.toggle_panel(PanelKind::Sidebar);
            UpdateResult::none()
        }

        Message::ToggleSettingsPanel => {
            state.toggle_panel(PanelKind::SettingsPanel);
            UpdateResult::none()
        }

        Message::Dismiss => {
            state.dismiss();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Focus and navigation
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.focus_next();
            UpdateResult::none()
        }

        Message::FocusPrev => {
            state.focus_prev();
            UpdateResult::none()
        }

        Message::CursorUp => {
            match state.focus {
                FocusArea::Sidebar => state.nav.move_up(),
                FocusArea::Content => state.content_scroll = state.content_scroll.saturating_sub(1),
                FocusArea::SettingsPanel => {
                    state.settings_scroll = state.settings_scroll.saturating_sub(1)
                }
            }
            UpdateResult::none()
        }

        Message::CursorDown => {
            match state.focus {
                FocusArea::Sidebar => state.nav.move_down(),
                FocusArea::Content => state.content_scroll = state.content_scroll.saturating_add(1),
                FocusArea::SettingsPanel => {
                    state.settings_scroll = state.settings_scroll.saturating_add(1)
                }
            }
            UpdateResult::none()
        }

        Message::Activate => {
            if state.focus != FocusArea::Sidebar {
                return UpdateResult::none();
            }
            match state.nav.activate() {
                Some(NavActivation::Item(item)) => {
                    info!("Navigating to {} ({})", item.title, item.url);
                    UpdateResult::message(Message::Layout(AppLayoutAction::SetActiveSection(
                        Some(item.title),
                    )))
                }
                Some(NavActivation::ToggledSection) | None => UpdateResult::none(),
            }
        }

        Message::ActivateLogo => {
            let site = &state.config.site;
            if !site.is_activatable() {
                return UpdateResult::none();
            }
            let target = site.url.clone().unwrap_or_default();
            info!("Logo activated, going to {}", target);
            state.notice = Some(format!("Go to {}", target));
            UpdateResult::message(Message::Layout(AppLayoutAction::SetActiveSection(None)))
        }

        // ─────────────────────────────────────────────────────────
        // Team switcher
        // ─────────────────────────────────────────────────────────
        Message::ToggleTeamMenu => {
            state.user_menu.close();
            state.team_switcher.toggle_menu();
            UpdateResult::none()
        }

        Message::TeamMenuUp => {
            state.team_switcher.highlight_prev();
            UpdateResult::none()
        }

        Message::TeamMenuDown => {
            state.team_switcher.highlight_next();
            UpdateResult::none()
        }

        Message::TeamMenuActivate => match state.team_switcher.activate_highlighted() {
            Some(TeamMenuOutcome::Selected(team)) => {
                UpdateResult::message(Message::Layout(AppLayoutAction::SetActiveTeam(Some(team))))
            }
            Some(TeamMenuOutcome::AddTeam) => {
                info!("Add team requested");
                state.notice = Some("Add team".to_string());
                UpdateResult::none()
            }
            None => UpdateResult::none(),
        },

        Message::SelectTeam(index) => match state.team_switcher.select(index) {
            Some(team) => {
                UpdateResult::message(Message::Layout(AppLayoutAction::SetActiveTeam(Some(team))))
            }
            None => UpdateResult::none(),
        },

        // ─────────────────────────────────────────────────────────
        // User menu
        // ─────────────────────────────────────────────────────────
        Message::ToggleUserMenu => {
            state.team_switcher.close_menu();
            state.user_menu.toggle();
            UpdateResult::none()
        }

        Message::UserMenuUp => {
            state.user_menu.highlight_prev();
            UpdateResult::none()
        }

        Message::UserMenuDown => {
            state.user_menu.highlight_next();
            UpdateResult::none()
        }

        Message::UserMenuActivate => match state.user_menu.activate_highlighted() {
            Some(UserMenuOutcome::SignOut) => {
                info!("Signing out");
                UpdateResult::message(Message::Quit)
            }
            Some(UserMenuOutcome::Item(label)) => {
                state.notice = Some(label);
                UpdateResult::none()
            }
            None => UpdateResult::none(),
        },

        // ─────────────────────────────────────────────────────────
        // Layout state
        // ─────────────────────────────────────────────────────────
        Message::Layout(action) => {
            state.dispatch_layout(action);
            UpdateResult::none()
        }

        Message::CycleTheme => {
            let next = state.layout_store.state().theme.next();
            state.notice = Some(format!("Theme: {}", next));
            UpdateResult::message(Message::Layout(AppLayoutAction::SetTheme(next)))
        }

        Message::ToggleHighContrast => {
            UpdateResult::message(Message::Layout(AppLayoutAction::ToggleHighContrast))
        }

        Message::MarkNotificationsRead => {
            UpdateResult::message(Message::Layout(AppLayoutAction::MarkNotificationsRead))
        }

        Message::ResetLayout => {
            state.notice = Some("Layout reset".to_string());
            UpdateResult::message(Message::Layout(AppLayoutAction::ResetState))
        }

        // ─────────────────────────────────────────────────────────
        // Regions
        // ─────────────────────────────────────────────────────────
        Message::RegionLoaded { region, result } => {
            let loaded = state.regions.guard(region, || {
                result.map_err(|message| Error::render(region.to_string(), message))
            });
            if let Some(body) = loaded {
                state.set_region_content(region, body);
            }
            UpdateResult::none()
        }

        Message::RetryRegions => {
            let regions = state.regions.retry_all();
            if regions.is_empty() {
                UpdateResult::none()
            } else {
                UpdateResult::action(UpdateAction::LoadRegions(regions))
            }
        }
    }
}

fn handle_mounted(state: &mut ShellState, columns: u16) -> UpdateResult {
    if state.is_mounted() {
        return UpdateResult::none();
    }
    match state.mount(columns, Instant::now()) {
        Ok(()) => UpdateResult::action(UpdateAction::LoadRegions(state.loadable_regions())),
        Err(e) if e.is_fatal() => {
            state.fail_fatal(e);
            UpdateResult::none()
        }
        Err(e) => {
            warn!("Mount failed: {}", e);
            UpdateResult::none()
        }
    }
}
