//! Process-level keyboard shortcut dispatcher
//!
//! Panels register their `(modifier, key)` combo when mounted and release it
//! when unmounted. Registering the same combo for the same action again only
//! bumps a reference count; a different action on a taken combo is refused.

use std::collections::HashMap;

use shellkit_core::prelude::*;

use crate::input_key::InputKey;

/// Shortcut modifier. Ctrl and Meta are treated as the same modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    CtrlOrMeta,
}

/// A modifier + character combination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub modifier: Modifier,
    pub key: char,
}

impl KeyCombo {
    pub fn ctrl(key: char) -> Self {
        Self {
            modifier: Modifier::CtrlOrMeta,
            key: key.to_ascii_lowercase(),
        }
    }

    /// Does this key event trigger the combo?
    pub fn matches(&self, key: &InputKey) -> bool {
        key.modified_char() == Some(self.key)
    }
}

impl std::fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ctrl+{}", self.key)
    }
}

/// What a shortcut does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutAction {
    ToggleSidebar,
    ToggleSettingsPanel,
}

impl std::fmt::Display for ShortcutAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShortcutAction::ToggleSidebar => f.write_str("toggle sidebar"),
            ShortcutAction::ToggleSettingsPanel => f.write_str("toggle settings panel"),
        }
    }
}

#[derive(Debug, Clone)]
struct Binding {
    action: ShortcutAction,
    refs: usize,
}

/// Single owner of every shortcut binding in the shell.
#[derive(Debug, Default)]
pub struct KeyboardDispatcher {
    bindings: HashMap<KeyCombo, Binding>,
}

impl KeyboardDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `combo` to `action`.
    pub fn register(&mut self, combo: KeyCombo, action: ShortcutAction) -> Result<()> {
        match self.bindings.get_mut(&combo) {
            Some(binding) if binding.action == action => {
                binding.refs += 1;
                trace!("{} re-registered ({} refs)", combo, binding.refs);
                Ok(())
            }
            Some(binding) => Err(Error::ShortcutConflict {
                combo: combo.to_string(),
                existing: binding.action.to_string(),
            }),
            None => {
                debug!("Bound {} to {}", combo, action);
                self.bindings.insert(combo, Binding { action, refs: 1 });
                Ok(())
            }
        }
    }

    /// Release one registration of `combo`. The binding goes away with the last one.
    pub fn unregister(&mut self, combo: KeyCombo) {
        let Some(binding) = self.bindings.get_mut(&combo) else {
            return;
        };
        binding.refs = binding.refs.saturating_sub(1);
        if binding.refs == 0 {
            debug!("Unbound {}", combo);
            self.bindings.remove(&combo);
        }
    }

    /// The action bound to this key event, if any
    pub fn dispatch(&self, key: &InputKey) -> Option<ShortcutAction> {
        let c = key.modified_char()?;
        self.bindings.get(&KeyCombo::ctrl(c)).map(|b| b.action)
    }

    pub fn is_bound(&self, combo: KeyCombo) -> bool {
        self.bindings.contains_key(&combo)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_ctrl_and_meta() {
        let mut d = KeyboardDispatcher::new();
        d.register(KeyCombo::ctrl('b'), ShortcutAction::ToggleSidebar)
            .unwrap();
        assert_eq!(
            d.dispatch(&InputKey::CharCtrl('b')),
            Some(ShortcutAction::ToggleSidebar)
        );
        assert_eq!(
            d.dispatch(&InputKey::CharMeta('b')),
            Some(ShortcutAction::ToggleSidebar)
        );
        assert_eq!(d.dispatch(&InputKey::Char('b')), None);
        assert_eq!(d.dispatch(&InputKey::CharCtrl('s')), None);
    }

    #[test]
    fn test_conflicting_action_is_refused() {
        let mut d = KeyboardDispatcher::new();
        d.register(KeyCombo::ctrl('s'), ShortcutAction::ToggleSettingsPanel)
            .unwrap();
        let err = d
            .register(KeyCombo::ctrl('s'), ShortcutAction::ToggleSidebar)
            .unwrap_err();
        assert!(matches!(err, Error::ShortcutConflict { .. }));
        assert_eq!(
            d.dispatch(&InputKey::CharCtrl('s')),
            Some(ShortcutAction::ToggleSettingsPanel)
        );
    }

    #[test]
    fn test_reference_counted_registration() {
        let mut d = KeyboardDispatcher::new();
        let combo = KeyCombo::ctrl('b');
        d.register(combo, ShortcutAction::ToggleSidebar).unwrap();
        d.register(combo, ShortcutAction::ToggleSidebar).unwrap();

        d.unregister(combo);
        assert!(d.is_bound(combo));
        d.unregister(combo);
        assert!(!d.is_bound(combo));
        assert!(d.is_empty());
    }

    #[test]
    fn test_unregister_unknown_is_noop() {
        let mut d = KeyboardDispatcher::new();
        d.unregister(KeyCombo::ctrl('x'));
        assert!(d.is_empty());
    }

    #[test]
    fn test_combo_display_and_case() {
        assert_eq!(KeyCombo::ctrl('B').to_string(), "Ctrl+b");
        assert!(KeyCombo::ctrl('b').matches(&InputKey::CharCtrl('B')));
    }
}
