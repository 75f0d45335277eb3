//! User dropdown state

use serde::{Deserialize, Serialize};

pub const DEFAULT_USERNAME: &str = "User";
pub const DEFAULT_EMAIL: &str = "user@example.com";
pub const SIGN_OUT_LABEL: &str = "Log out";
pub const DEFAULT_MENU_ITEMS: [&str; 4] = ["Dashboard", "Profile", "Changelog", "History"];

/// `[user]` section of the config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    /// Overrides the initials shown in the avatar
    pub avatar_fallback: Option<String>,
    /// Replaces the default entries when non-empty
    pub menu_items: Vec<String>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            avatar_fallback: None,
            menu_items: Vec::new(),
        }
    }
}

impl UserProfile {
    /// Configured fallback, else the first two characters of the username uppercased
    pub fn initials(&self) -> String {
        match self.avatar_fallback.as_deref().filter(|s| !s.is_empty()) {
            Some(fallback) => fallback.to_string(),
            None => self.username.chars().take(2).collect::<String>().to_uppercase(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserMenuOutcome {
    Item(String),
    SignOut,
}

#[derive(Debug, Clone, Default)]
pub struct UserMenuState {
    profile: UserProfile,
    open: bool,
    highlighted: usize,
}

impl UserMenuState {
    pub fn new(profile: UserProfile) -> Self {
        Self {
            profile,
            open: false,
            highlighted: 0,
        }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Menu entries, always ending with "Log out"
    pub fn items(&self) -> Vec<&str> {
        let mut items: Vec<&str> = if self.profile.menu_items.is_empty() {
            DEFAULT_MENU_ITEMS.to_vec()
        } else {
            self.profile.menu_items.iter().map(String::as_str).collect()
        };
        items.push(SIGN_OUT_LABEL);
        items
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
        self.highlighted = 0;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn highlight_next(&mut self) {
        let n = self.items().len();
        self.highlighted = (self.highlighted + 1) % n;
    }

    pub fn highlight_prev(&mut self) {
        let n = self.items().len();
        self.highlighted = (self.highlighted + n - 1) % n;
    }

    pub fn activate_highlighted(&mut self) -> Option<UserMenuOutcome> {
        if !self.open {
            return None;
        }
        let items = self.items();
        let last = items.len() - 1;
        let outcome = if self.highlighted == last {
            UserMenuOutcome::SignOut
        } else {
            UserMenuOutcome::Item(items[self.highlighted].to_string())
        };
        self.open = false;
        Some(outcome)
    }
}
