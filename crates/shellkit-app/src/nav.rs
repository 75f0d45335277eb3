//! Collapsible sidebar navigation sections

use shellkit_core::{NavGroup, NavItem, SidebarData};

pub const PRIMARY_FALLBACK_TITLE: &str = "Navigation";
pub const SECONDARY_FALLBACK_TITLE: &str = "More";
pub const PRIMARY_EMPTY_TEXT: &str = "No navigation items available";
pub const SECONDARY_EMPTY_TEXT: &str = "No secondary items available";
pub const NO_DATA_TEXT: &str = "No navigation items";

/// `section-content-<title>` with whitespace runs as `-`, lowercased
pub fn section_id(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_space = false;
    for c in title.chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else {
            slug.extend(c.to_lowercase());
            in_space = false;
        }
    }
    format!("section-content-{slug}")
}

/// One collapsible group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSection {
    pub title: String,
    pub items: Vec<NavItem>,
    pub open: bool,
    pub secondary: bool,
}

impl NavSection {
    fn from_group(group: &NavGroup, fallback: &str, secondary: bool) -> Self {
        let title = if group.title.trim().is_empty() {
            fallback.to_string()
        } else {
            group.title.clone()
        };
        Self {
            title,
            items: group.items.clone(),
            open: !secondary,
            secondary,
        }
    }

    pub fn id(&self) -> String {
        section_id(&self.title)
    }

    pub fn empty_text(&self) -> &'static str {
        if self.secondary {
            SECONDARY_EMPTY_TEXT
        } else {
            PRIMARY_EMPTY_TEXT
        }
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}

/// A focusable row in the sidebar navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRow {
    Header(usize),
    Item(usize, usize),
}

/// Result of activating the row under the cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavActivation {
    ToggledSection,
    Item(NavItem),
}

/// Navigation model for the whole sidebar
#[derive(Debug, Clone, Default)]
pub struct SidebarNav {
    sections: Vec<NavSection>,
    has_data: bool,
    cursor: usize,
}

impl SidebarNav {
    /// Primary group open, secondary closed. `None` means the caller supplied
    /// no sidebar data at all.
    pub fn from_data(data: Option<&SidebarData>) -> Self {
        let Some(data) = data else {
            return Self::default();
        };
        let mut sections = Vec::new();
        if let Some(primary) = data.nav_main.first() {
            sections.push(NavSection::from_group(primary, PRIMARY_FALLBACK_TITLE, false));
        }
        if let Some(secondary) = data.nav_main.get(1) {
            sections.push(NavSection::from_group(secondary, SECONDARY_FALLBACK_TITLE, true));
        }
        Self {
            sections,
            has_data: true,
            cursor: 0,
        }
    }

    pub fn has_data(&self) -> bool {
        self.has_data
    }

    pub fn sections(&self) -> &[NavSection] {
        &self.sections
    }

    /// Visible rows in display order
    pub fn rows(&self) -> Vec<NavRow> {
        let mut rows = Vec::new();
        for (s, section) in self.sections.iter().enumerate() {
            rows.push(NavRow::Header(s));
            if section.open {
                rows.extend((0..section.items.len()).map(|i| NavRow::Item(s, i)));
            }
        }
        rows
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected_row(&self) -> Option<NavRow> {
        self.rows().get(self.cursor).copied()
    }

    pub fn move_down(&mut self) {
        let n = self.rows().len();
        if n > 0 {
            self.cursor = (self.cursor + 1).min(n - 1);
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Enter/Space on the cursor row
    pub fn activate(&mut self) -> Option<NavActivation> {
        match self.selected_row()? {
            NavRow::Header(s) => {
                self.sections[s].toggle();
                let n = self.rows().len();
                self.cursor = self.cursor.min(n.saturating_sub(1));
                Some(NavActivation::ToggledSection)
            }
            NavRow::Item(s, i) => {
                let title = self.sections[s].items[i].title.clone();
                self.set_active(Some(&title));
                Some(NavActivation::Item(self.sections[s].items[i].clone()))
            }
        }
    }

    /// Mark the item titled `active` (and only it) as active
    pub fn set_active(&mut self, active: Option<&str>) {
        for section in &mut self.sections {
            for item in &mut section.items {
                item.is_active = active == Some(item.title.as_str());
            }
        }
    }

    pub fn active_item(&self) -> Option<&NavItem> {
        self.sections
            .iter()
            .flat_map(|s| s.items.iter())
            .find(|i| i.is_active)
    }
}
