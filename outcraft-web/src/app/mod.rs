#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod bootstrap;
pub mod routing;
pub mod state;
pub mod view;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <HashRouter>
            <AppInner />
        </HashRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let navigator = use_navigator();
    let route = use_route::<Route>();

    let app_state = state::use_app_state(routing::initial_section(route.as_ref()));
    let selected = app_state.view.selected;

    crate::status::use_server_status(app_state.status.clone());
    crate::layout::use_nav_indicator(
        app_state.nav_ref.clone(),
        selected,
        app_state.view.dispatcher(),
    );
    routing::use_redirect_unknown_route(navigator.clone(), route.clone());
    routing::use_sync_route_with_section(selected, navigator, route.clone());
    routing::use_sync_section_with_route(selected, app_state.view.dispatcher(), route);

    view::render_app(&app_state)
}
