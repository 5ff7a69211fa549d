#[cfg(any(target_arch = "wasm32", test))]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use crate::app::state::ViewStore;
#[cfg(any(target_arch = "wasm32", test))]
use outcraft_core::Section;
#[cfg(target_arch = "wasm32")]
use outcraft_core::ViewAction;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::{Navigator, Routable};

/// Route to push after the selected section changed, if the URL lags behind.
/// Unknown paths are left to [`redirect_for_route`].
#[cfg(any(target_arch = "wasm32", test))]
fn next_route_for_section(section: Section, current_route: Option<&Route>) -> Option<Route> {
    let new_route = Route::from_section(section);
    if Some(&new_route) == current_route || current_route == Some(&Route::NotFound) {
        None
    } else {
        Some(new_route)
    }
}

/// Unknown paths are replaced by Home so the URL and the shown section agree.
#[cfg(any(target_arch = "wasm32", test))]
fn redirect_for_route(route: Option<&Route>) -> Option<Route> {
    matches!(route, Some(Route::NotFound)).then_some(Route::Home)
}

/// Section to select after the URL changed (back button, pasted link).
#[cfg(any(target_arch = "wasm32", test))]
fn next_section_for_route(current: Section, route: Option<&Route>) -> Option<Section> {
    let new_section = route.and_then(Route::to_section)?;
    (new_section != current).then_some(new_section)
}

/// Section to start on for the route present at load time.
#[cfg(any(target_arch = "wasm32", test))]
pub fn initial_section(route: Option<&Route>) -> Section {
    route.and_then(Route::to_section).unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_sync_route_with_section(
    selected: Section,
    navigator: Option<Navigator>,
    active_route: Option<Route>,
) {
    // Keyed on the section only: a route change that already matches the
    // new section must not be pushed back.
    use_effect_with(selected, move |selected| {
        if let (Some(nav), Some(new_route)) = (
            navigator.as_ref(),
            next_route_for_section(*selected, active_route.as_ref()),
        ) {
            nav.push(&new_route);
        }
    });
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_redirect_unknown_route(navigator: Option<Navigator>, route: Option<Route>) {
    use_effect_with(route, move |route| {
        if let (Some(nav), Some(target)) = (navigator.as_ref(), redirect_for_route(route.as_ref())) {
            log::debug!("unknown path, redirecting to {}", target.to_path());
            nav.replace(&target);
        }
    });
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_sync_section_with_route(
    selected: Section,
    dispatcher: UseReducerDispatcher<ViewStore>,
    route: Option<Route>,
) {
    use_effect_with(route, move |route| {
        if let Some(section) = next_section_for_route(selected, route.as_ref()) {
            log::debug!("route changed to section {}", section.id());
            dispatcher.dispatch(ViewAction::SelectSection(section.id().to_string()));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_route_for_section_skips_when_unchanged() {
        let route = Route::from_section(Section::Vip);
        assert!(next_route_for_section(Section::Vip, Some(&route)).is_none());
        assert_eq!(
            next_route_for_section(Section::Vip, Some(&Route::Home)),
            Some(Route::Vip)
        );
        assert_eq!(next_route_for_section(Section::Home, None), Some(Route::Home));
    }

    #[test]
    fn unknown_routes_redirect_home() {
        assert_eq!(redirect_for_route(Some(&Route::NotFound)), Some(Route::Home));
        assert!(redirect_for_route(Some(&Route::Vip)).is_none());
        assert!(redirect_for_route(None).is_none());
        // The redirect owns unknown paths; section sync does not push over it.
        assert!(next_route_for_section(Section::Vip, Some(&Route::NotFound)).is_none());
        assert!(next_section_for_route(Section::Vip, Some(&Route::NotFound)).is_none());
        assert_eq!(
            next_section_for_route(Section::Vip, redirect_for_route(Some(&Route::NotFound)).as_ref()),
            Some(Section::Home)
        );
    }

    #[test]
    fn next_section_for_route_only_reports_differences() {
        assert!(next_section_for_route(Section::Home, Some(&Route::Home)).is_none());
        assert!(next_section_for_route(Section::Home, None).is_none());
        assert_eq!(
            next_section_for_route(Section::Home, Some(&Route::Ranks)),
            Some(Section::Ranks)
        );
    }

    #[test]
    fn deep_links_pick_the_starting_section() {
        assert_eq!(initial_section(Some(&Route::About)), Section::About);
        assert_eq!(initial_section(Some(&Route::NotFound)), Section::Home);
        assert_eq!(initial_section(None), Section::Home);
    }
}
