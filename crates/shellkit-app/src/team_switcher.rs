//! Team switcher dropdown state

use shellkit_core::Team;

/// Label shown when no team is active
pub const NO_TEAM_LABEL: &str = "Select a Team";

/// Entry appended below the team list
pub const ADD_TEAM_LABEL: &str = "Add team";

/// Result of activating the highlighted menu entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamMenuOutcome {
    Selected(Team),
    AddTeam,
}

#[derive(Debug, Clone, Default)]
pub struct TeamSwitcherState {
    teams: Vec<Team>,
    active: Option<usize>,
    menu_open: bool,
    highlighted: usize,
}

impl TeamSwitcherState {
    /// The first team is active by default
    pub fn new(teams: Vec<Team>) -> Self {
        let active = if teams.is_empty() { None } else { Some(0) };
        Self {
            teams,
            active,
            menu_open: false,
            highlighted: 0,
        }
    }

    /// An empty team list renders nothing
    pub fn is_visible(&self) -> bool {
        !self.teams.is_empty()
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_team(&self) -> Option<&Team> {
        self.active.and_then(|i| self.teams.get(i))
    }

    pub fn label(&self) -> &str {
        self.active_team()
            .map(|t| t.name.as_str())
            .unwrap_or(NO_TEAM_LABEL)
    }

    /// `⌘1`..`⌘9` for the first nine teams
    pub fn shortcut_label(index: usize) -> Option<String> {
        (index < 9).then(|| format!("⌘{}", index + 1))
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn open_menu(&mut self) {
        if !self.is_visible() {
            return;
        }
        self.menu_open = true;
        self.highlighted = self.active.unwrap_or(0);
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn toggle_menu(&mut self) {
        if self.menu_open {
            self.close_menu();
        } else {
            self.open_menu();
        }
    }

    /// Number of menu rows (teams plus "Add team")
    fn entry_count(&self) -> usize {
        self.teams.len() + 1
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn highlight_next(&mut self) {
        self.highlighted = (self.highlighted + 1) % self.entry_count();
    }

    pub fn highlight_prev(&mut self) {
        let n = self.entry_count();
        self.highlighted = (self.highlighted + n - 1) % n;
    }

    /// Make `index` active and close the menu. Returns the team for the change hook.
    pub fn select(&mut self, index: usize) -> Option<Team> {
        let team = self.teams.get(index)?.clone();
        self.active = Some(index);
        self.menu_open = false;
        Some(team)
    }

    pub fn activate_highlighted(&mut self) -> Option<TeamMenuOutcome> {
        if !self.menu_open {
            return None;
        }
        if self.highlighted == self.teams.len() {
            self.menu_open = false;
            return Some(TeamMenuOutcome::AddTeam);
        }
        self.select(self.highlighted).map(TeamMenuOutcome::Selected)
    }

    /// Reflect an externally chosen active team (matched by name)
    pub fn sync_active(&mut self, team: Option<&Team>) {
        if let Some(team) = team {
            if let Some(i) = self.teams.iter().position(|t| t.name == team.name) {
                self.active = Some(i);
            }
        }
    }
}
