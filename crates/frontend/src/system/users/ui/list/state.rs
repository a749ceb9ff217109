use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct UsersListState {
    pub items: Vec<String>,
    pub search_query: String,
    pub is_loaded: bool,
    /// User awaiting delete confirmation
    pub pending_delete: Option<String>,
    /// A DELETE /users request is running
    pub deleting: bool,
}

impl UsersListState {
    pub fn visible(&self) -> Vec<String> {
        let query = self.search_query.to_lowercase();
        self.items
            .iter()
            .filter(|name| query.is_empty() || name.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }

    pub fn ask_delete(&mut self, username: String) {
        if !self.deleting {
            self.pending_delete = Some(username);
        }
    }

    /// Closes the prompt unless the delete is already running
    pub fn cancel_delete(&mut self) {
        if !self.deleting {
            self.pending_delete = None;
        }
    }

    /// Username to delete; `None` when nothing is pending or a delete is running
    pub fn begin_delete(&mut self) -> Option<String> {
        if self.deleting {
            return None;
        }
        let username = self.pending_delete.clone()?;
        self.deleting = true;
        Some(username)
    }

    pub fn finish_delete(&mut self) {
        self.deleting = false;
        self.pending_delete = None;
    }
}

pub fn create_state() -> RwSignal<UsersListState> {
    RwSignal::new(UsersListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_filters_case_insensitive() {
        let state = UsersListState {
            items: vec!["admin".into(), "Ana".into(), "bob".into()],
            search_query: "A".into(),
            is_loaded: true,
            ..Default::default()
        };
        assert_eq!(state.visible(), vec!["admin".to_string(), "Ana".to_string()]);
    }

    #[test]
    fn test_delete_is_sent_once() {
        let mut state = UsersListState::default();
        state.ask_delete("bob".into());

        assert_eq!(state.begin_delete(), Some("bob".to_string()));
        assert_eq!(state.begin_delete(), None);
        state.cancel_delete();
        assert_eq!(state.pending_delete.as_deref(), Some("bob"));

        state.finish_delete();
        assert!(!state.deleting);
        assert!(state.pending_delete.is_none());
        assert_eq!(state.begin_delete(), None);
    }

    #[test]
    fn test_prompt_cannot_change_while_deleting() {
        let mut state = UsersListState::default();
        state.ask_delete("bob".into());
        state.begin_delete();
        state.ask_delete("ana".into());
        assert_eq!(state.pending_delete.as_deref(), Some("bob"));
    }
}
