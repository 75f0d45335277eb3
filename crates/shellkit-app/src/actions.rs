//! Execution of [`UpdateAction`]s
//!
//! Actions are synchronous here: each one produces the follow-up messages
//! that carry its results back into `update`.

use std::path::Path;

use crate::config::resolve_config_relative;
use crate::handler::UpdateAction;
use crate::message::Message;
use crate::region::Region;
use crate::state::ShellState;

pub fn handle_action(state: &ShellState, action: UpdateAction) -> Vec<Message> {
    match action {
        UpdateAction::LoadRegions(regions) => regions
            .into_iter()
            .map(|region| Message::RegionLoaded {
                region,
                result: load_region(state, region),
            })
            .collect(),
    }
}

fn load_region(state: &ShellState, region: Region) -> Result<Option<String>, String> {
    match region {
        Region::Content => {
            let content = &state.config.content;
            load_body(
                &state.config_dir,
                content.path.as_deref(),
                content.text.as_deref(),
            )
        }
        Region::SettingsSection(i) => match state.config.settings_panel.sections.get(i) {
            Some(section) => load_body(
                &state.config_dir,
                section.path.as_deref(),
                section.text.as_deref(),
            ),
            None => Err(format!("No settings section {}", i + 1)),
        },
        Region::Sidebar | Region::Header => Ok(None),
    }
}

/// A file path wins over inline text
fn load_body(
    config_dir: &Path,
    path: Option<&Path>,
    text: Option<&str>,
) -> Result<Option<String>, String> {
    if let Some(path) = path {
        let full = resolve_config_relative(config_dir, path);
        return std::fs::read_to_string(&full)
            .map(Some)
            .map_err(|e| format!("Failed to read {}: {}", full.display(), e));
    }
    Ok(text.map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SectionSettings, ShellConfig};
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn test_load_inline_and_file_content() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("intro.txt"), "from file").unwrap();

        let mut config = ShellConfig::default();
        config.content.path = Some(PathBuf::from("intro.txt"));
        config.content.text = Some("ignored".into());
        config.settings_panel.sections = vec![SectionSettings {
            title: "General".into(),
            text: Some("inline".into()),
            path: None,
        }];
        let state = ShellState::new(config, dir.path(), None);

        let messages = handle_action(
            &state,
            UpdateAction::LoadRegions(vec![Region::Content, Region::SettingsSection(0)]),
        );
        assert_eq!(
            messages,
            vec![
                Message::RegionLoaded {
                    region: Region::Content,
                    result: Ok(Some("from file".into())),
                },
                Message::RegionLoaded {
                    region: Region::SettingsSection(0),
                    result: Ok(Some("inline".into())),
                },
            ]
        );
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let mut config = ShellConfig::default();
        config.content.path = Some(PathBuf::from("missing.txt"));
        let state = ShellState::new(config, dir.path(), None);

        let messages = handle_action(&state, UpdateAction::LoadRegions(vec![Region::Content]));
        match &messages[0] {
            Message::RegionLoaded { result: Err(e), .. } => assert!(e.contains("missing.txt")),
            other => panic!("unexpected {other:?}"),
        }
    }
}
