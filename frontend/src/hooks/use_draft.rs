use yew::prelude::*;

/// Modal/form state for one entity type: a transient, uncommitted copy of
/// the editable fields, merged into the view collection only after the
/// server confirms the mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftState<T> {
    draft: Option<T>,
    /// Key of the entity being edited; `None` while creating
    selected: Option<i64>,
    error: Option<String>,
    submitting: bool,
}

impl<T: Clone> DraftState<T> {
    pub fn closed() -> Self {
        Self {
            draft: None,
            selected: None,
            error: None,
            submitting: false,
        }
    }

    /// Seed a create modal from an empty template.
    pub fn open_create(seed: T) -> Self {
        Self {
            draft: Some(seed),
            ..Self::closed()
        }
    }

    /// Seed an edit modal from the selected collection entry.
    pub fn open_edit(key: i64, seed: T) -> Self {
        Self {
            draft: Some(seed),
            selected: Some(key),
            ..Self::closed()
        }
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    pub fn draft(&self) -> Option<&T> {
        self.draft.as_ref()
    }

    pub fn selected(&self) -> Option<i64> {
        self.selected
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Field edits touch only the draft, never the canonical collection.
    pub fn edited(&self, draft: T) -> Self {
        Self {
            draft: Some(draft),
            error: None,
            ..self.clone()
        }
    }

    pub fn submitting(&self) -> Self {
        Self {
            submitting: true,
            error: None,
            ..self.clone()
        }
    }

    /// A failed submit keeps the modal open and the draft intact so the
    /// user can retry or cancel.
    pub fn failed(&self, message: String) -> Self {
        Self {
            error: Some(message),
            submitting: false,
            ..self.clone()
        }
    }
}

/// Hook wrapper around [`DraftState`] transitions.
pub struct UseDraftHandle<T: Clone + PartialEq + 'static> {
    state: UseStateHandle<DraftState<T>>,
}

impl<T: Clone + PartialEq + 'static> UseDraftHandle<T> {
    pub fn state(&self) -> DraftState<T> {
        (*self.state).clone()
    }

    pub fn open_create(&self, seed: T) {
        self.state.set(DraftState::open_create(seed));
    }

    pub fn open_edit(&self, key: i64, seed: T) {
        self.state.set(DraftState::open_edit(key, seed));
    }

    pub fn edit(&self, draft: T) {
        self.state.set(self.state.edited(draft));
    }

    /// Discard the draft without side effects.
    pub fn cancel(&self) {
        self.state.set(DraftState::closed());
    }

    pub fn begin_submit(&self) {
        self.state.set(self.state.submitting());
    }

    pub fn fail(&self, message: String) {
        self.state.set(self.state.failed(message));
    }

    /// Confirmed success: close the modal and clear the draft.
    pub fn succeed(&self) {
        self.state.set(DraftState::closed());
    }
}

impl<T: Clone + PartialEq + 'static> Clone for UseDraftHandle<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

#[hook]
pub fn use_draft<T: Clone + PartialEq + 'static>() -> UseDraftHandle<T> {
    let state = use_state(DraftState::<T>::closed);
    UseDraftHandle { state }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Form {
        name: String,
    }

    #[test]
    fn closed_state_has_no_draft_or_error() {
        let state = DraftState::<Form>::closed();
        assert!(!state.is_open());
        assert_eq!(state.draft(), None);
        assert_eq!(state.error(), None);
        assert!(!state.is_submitting());
    }

    #[test]
    fn edit_modal_seeds_from_the_selected_entity() {
        let seed = Form {
            name: "Hotel California".into(),
        };
        let state = DraftState::open_edit(7, seed.clone());
        assert!(state.is_open());
        assert_eq!(state.selected(), Some(7));
        assert_eq!(state.draft(), Some(&seed));
    }

    #[test]
    fn create_modal_has_no_selected_key() {
        let state = DraftState::open_create(Form::default());
        assert!(state.is_open());
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn edits_touch_only_the_draft_and_clear_the_error() {
        let state = DraftState::open_create(Form::default()).failed("nope".into());
        let edited = state.edited(Form { name: "x".into() });
        assert_eq!(edited.draft().unwrap().name, "x");
        assert_eq!(edited.error(), None);
        assert_eq!(edited.selected(), state.selected());
    }

    #[test]
    fn failed_submit_keeps_the_draft_and_surfaces_the_error() {
        let seed = Form { name: "y".into() };
        let state = DraftState::open_edit(1, seed.clone())
            .submitting()
            .failed("Failed to update hotel".into());
        assert!(state.is_open());
        assert_eq!(state.draft(), Some(&seed));
        assert_eq!(state.error(), Some("Failed to update hotel"));
        assert!(!state.is_submitting());
    }

    #[test]
    fn submitting_clears_a_previous_error() {
        let state = DraftState::open_create(Form::default())
            .failed("boom".into())
            .submitting();
        assert!(state.is_submitting());
        assert_eq!(state.error(), None);
    }
}
