//! Session view state and the named operations that mutate it.
use crate::indicator::{IndicatorGeometry, LayoutSnapshot, compute_indicator};
use crate::section::Section;

/// Everything that can change the view state.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewAction {
    /// Navigate to a section by id; unknown ids are ignored.
    SelectSection(String),
    ToggleMobileMenu,
    CloseMobileMenu,
    SetCopied(bool),
    /// Navigation layout was (re)measured.
    LayoutChanged(LayoutSnapshot),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub selected: Section,
    pub mobile_menu_open: bool,
    pub copied_feedback: bool,
    pub indicator: IndicatorGeometry,
}

impl ViewState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the section with navigation id `id`.
    ///
    /// Returns the newly selected section, or `None` when `id` is not in the
    /// navigation list (state unchanged). Callers re-measure the indicator
    /// after a successful selection.
    pub fn select_section(&mut self, id: &str) -> Option<Section> {
        let section = Section::from_id(id)?;
        self.selected = section;
        Some(section)
    }

    pub const fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub const fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    pub const fn set_copied(&mut self, copied: bool) {
        self.copied_feedback = copied;
    }

    /// Recompute the indicator from a fresh layout measurement.
    pub fn apply_layout(&mut self, snapshot: &LayoutSnapshot) {
        self.indicator = compute_indicator(snapshot, self.selected)
            .unwrap_or_else(|| self.indicator.hidden());
    }

    /// Apply one action, returning whether anything changed.
    pub fn apply(&mut self, action: ViewAction) -> bool {
        let before = self.clone();
        match action {
            ViewAction::SelectSection(id) => {
                if self.select_section(&id).is_none() {
                    log::debug!("ignoring unknown section id {id:?}");
                }
            }
            ViewAction::ToggleMobileMenu => self.toggle_mobile_menu(),
            ViewAction::CloseMobileMenu => self.close_mobile_menu(),
            ViewAction::SetCopied(copied) => self.set_copied(copied),
            ViewAction::LayoutChanged(snapshot) => self.apply_layout(&snapshot),
        }
        *self != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicator::ControlRect;

    #[test]
    fn starts_on_home_with_menu_closed() {
        let state = ViewState::new();
        assert_eq!(state.selected, Section::Home);
        assert!(!state.mobile_menu_open);
        assert!(!state.copied_feedback);
        assert!(!state.indicator.visible);
    }

    #[test]
    fn select_section_accepts_navigation_ids() {
        let mut state = ViewState::new();
        assert_eq!(state.select_section("coins"), Some(Section::Coins));
        assert_eq!(state.selected, Section::Coins);
    }

    #[test]
    fn unknown_section_leaves_selection_unchanged() {
        let mut state = ViewState::new();
        state.select_section("ranks");
        assert_eq!(state.select_section("checkout"), None);
        assert_eq!(state.selected, Section::Ranks);
        assert!(!state.apply(ViewAction::SelectSection("nope".into())));
        assert_eq!(state.selected, Section::Ranks);
    }

    #[test]
    fn mobile_menu_toggles_and_closes() {
        let mut state = ViewState::new();
        state.toggle_mobile_menu();
        assert!(state.mobile_menu_open);
        state.toggle_mobile_menu();
        assert!(!state.mobile_menu_open);
        state.toggle_mobile_menu();
        state.close_mobile_menu();
        assert!(!state.mobile_menu_open);
        state.close_mobile_menu();
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn layout_change_follows_selection() {
        let snapshot = LayoutSnapshot {
            container_width: 500.0,
            controls: vec![
                ControlRect {
                    section: Section::Home,
                    offset: 0.0,
                    width: 80.0,
                },
                ControlRect {
                    section: Section::Coins,
                    offset: 300.0,
                    width: 120.0,
                },
            ],
        };
        let mut state = ViewState::new();
        assert!(state.apply(ViewAction::LayoutChanged(snapshot.clone())));
        assert!(state.indicator.visible);
        assert!((state.indicator.width - 80.0).abs() < f64::EPSILON);

        state.apply(ViewAction::SelectSection("coins".into()));
        state.apply(ViewAction::LayoutChanged(snapshot));
        assert!((state.indicator.offset - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unmeasurable_layout_hides_indicator() {
        let mut state = ViewState::new();
        state.indicator = IndicatorGeometry {
            offset: 10.0,
            width: 50.0,
            visible: true,
        };
        state.apply(ViewAction::LayoutChanged(LayoutSnapshot::unmeasured()));
        assert!(!state.indicator.visible);
        assert!((state.indicator.offset - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn apply_reports_no_change_for_repeated_actions() {
        let mut state = ViewState::new();
        assert!(state.apply(ViewAction::SetCopied(true)));
        assert!(!state.apply(ViewAction::SetCopied(true)));
        assert!(!state.apply(ViewAction::CloseMobileMenu));
    }
}
