use outcraft_core::{PurchaseRedirector, Section, ServerStatus, ViewAction, ViewState};
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::ops::Deref;
use std::rc::Rc;
use yew::prelude::*;

/// Reducer wrapper so every view-state change goes through [`ViewAction`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewStore(ViewState);

impl ViewStore {
    #[must_use]
    pub const fn new(state: ViewState) -> Self {
        Self(state)
    }
}

impl Deref for ViewStore {
    type Target = ViewState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Reducible for ViewStore {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        if next.apply(action) {
            Rc::new(Self(next))
        } else {
            // Same Rc means no re-render.
            self
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub view: UseReducerHandle<ViewStore>,
    pub status: UseStateHandle<Option<ServerStatus>>,
    pub notice: UseStateHandle<Option<AttrValue>>,
    pub storefront: Rc<PurchaseRedirector>,
    pub nav_ref: NodeRef,
    /// Pending reset of the "IP Copied" feedback.
    pub copied_reset: Rc<RefCell<Option<Timeout>>>,
}

#[hook]
pub fn use_app_state(initial_section: Section) -> AppState {
    AppState {
        view: use_reducer(move || {
            ViewStore::new(ViewState {
                selected: initial_section,
                ..ViewState::default()
            })
        }),
        status: use_state(|| None::<ServerStatus>),
        notice: use_state(|| None::<AttrValue>),
        storefront: use_memo((), |()| crate::app::bootstrap::load_storefront()),
        nav_ref: use_node_ref(),
        copied_reset: use_mut_ref(|| None::<Timeout>),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reducer_keeps_the_same_rc_for_no_ops() {
        let store = Rc::new(ViewStore::default());
        let same = store.clone().reduce(ViewAction::CloseMobileMenu);
        assert!(Rc::ptr_eq(&store, &same));

        let same = store.clone().reduce(ViewAction::SelectSection("shop".into()));
        assert!(Rc::ptr_eq(&store, &same));
    }

    #[test]
    fn reducer_applies_changes() {
        let store = Rc::new(ViewStore::default());
        let next = store
            .clone()
            .reduce(ViewAction::SelectSection("coins".into()));
        assert!(!Rc::ptr_eq(&store, &next));
        assert_eq!(next.selected, Section::Coins);
        assert_eq!(store.selected, Section::Home);

        let opened = next.reduce(ViewAction::ToggleMobileMenu);
        assert!(opened.mobile_menu_open);
    }
}
