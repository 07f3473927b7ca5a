// User selector widget state - the dropdown side of the dashboard
use crate::domain::user::UserSummary;
use ratatui::widgets::ListState;

/// Selection control over the fetched user list. Hidden behind the loading
/// indicator until the list arrives; if that fetch fails it simply never
/// becomes visible.
pub struct UserSelector {
    users: Vec<UserSummary>,
    list_state: ListState,
    visible: bool,
}

impl UserSelector {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            list_state: ListState::default(),
            visible: false,
        }
    }

    /// Install the fetched user list, one option per entry, and reveal the
    /// control.
    pub fn populate(&mut self, users: Vec<UserSummary>) {
        self.users = users;
        self.visible = true;
        if !self.users.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn options(&self) -> &[UserSummary] {
        &self.users
    }

    pub fn highlight_next(&mut self) {
        if self.users.is_empty() {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) if i + 1 < self.users.len() => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    pub fn highlight_previous(&mut self) {
        if self.users.is_empty() {
            return;
        }
        let previous = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.list_state.select(Some(previous));
    }

    /// The entry a commit would select right now. `None` on an empty list,
    /// in which case committing is a no-op.
    pub fn highlighted(&self) -> Option<&UserSummary> {
        self.list_state.selected().and_then(|i| self.users.get(i))
    }

    pub fn list_state(&mut self) -> &mut ListState {
        &mut self.list_state
    }
}

impl Default for UserSelector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users(ids: &[&str]) -> Vec<UserSummary> {
        ids.iter()
            .map(|id| UserSummary::new(id.to_string(), format!("User {}", id), None))
            .collect()
    }

    #[test]
    fn test_one_option_per_entry() {
        let mut selector = UserSelector::new();
        assert!(!selector.is_visible());

        selector.populate(users(&["10", "11", "141"]));

        assert!(selector.is_visible());
        let ids: Vec<&str> = selector.options().iter().map(|u| u.user_id.as_str()).collect();
        assert_eq!(ids, vec!["10", "11", "141"]);
    }

    #[test]
    fn test_highlight_moves_and_clamps() {
        let mut selector = UserSelector::new();
        selector.populate(users(&["10", "11"]));

        assert_eq!(selector.highlighted().unwrap().user_id, "10");
        selector.highlight_next();
        assert_eq!(selector.highlighted().unwrap().user_id, "11");
        selector.highlight_next();
        assert_eq!(selector.highlighted().unwrap().user_id, "11");
        selector.highlight_previous();
        assert_eq!(selector.highlighted().unwrap().user_id, "10");
        selector.highlight_previous();
        assert_eq!(selector.highlighted().unwrap().user_id, "10");
    }

    #[test]
    fn test_empty_list_commits_nothing() {
        let mut selector = UserSelector::new();
        selector.populate(Vec::new());

        assert!(selector.is_visible());
        assert!(selector.highlighted().is_none());
        selector.highlight_next();
        assert!(selector.highlighted().is_none());
    }
}
