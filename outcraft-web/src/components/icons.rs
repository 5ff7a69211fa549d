//! Inline SVG icons.
use outcraft_core::Category;
use yew::prelude::*;

#[function_component(DiscordIcon)]
pub fn discord_icon() -> Html {
    html! {
        <svg class="icon icon-discord" viewBox="0 0 24 24" width="28" height="28" aria-hidden="true" focusable="false">
            <path fill="currentColor" d="M20.3 4.4A19.8 19.8 0 0 0 15.4 3l-.6 1.3a18.3 18.3 0 0 0-5.5 0L8.6 3a19.7 19.7 0 0 0-4.9 1.5C.6 9.1-.3 13.6.1 18.1a19.9 19.9 0 0 0 6 3l1.3-2.1a12.9 12.9 0 0 1-2-1l.5-.4a14.2 14.2 0 0 0 12.2 0l.5.4c-.6.4-1.3.7-2 1l1.3 2.1a19.8 19.8 0 0 0 6-3c.5-5.2-.8-9.7-3.6-13.7ZM8 15.4c-1.2 0-2.2-1.1-2.2-2.4S6.8 10.6 8 10.6s2.2 1.1 2.2 2.4-1 2.4-2.2 2.4Zm8 0c-1.2 0-2.2-1.1-2.2-2.4s1-2.4 2.2-2.4 2.2 1.1 2.2 2.4-1 2.4-2.2 2.4Z" />
        </svg>
    }
}

#[function_component(ServerIcon)]
pub fn server_icon() -> Html {
    html! {
        <svg class="icon icon-server" viewBox="0 0 24 24" width="28" height="28" aria-hidden="true" focusable="false">
            <rect x="3" y="4" width="18" height="7" rx="1.5" fill="none" stroke="currentColor" stroke-width="2" />
            <rect x="3" y="13" width="18" height="7" rx="1.5" fill="none" stroke="currentColor" stroke-width="2" />
            <circle cx="7" cy="7.5" r="1" fill="currentColor" />
            <circle cx="7" cy="16.5" r="1" fill="currentColor" />
        </svg>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct MenuIconProps {
    pub open: bool,
}

/// Hamburger that turns into a cross while the mobile menu is open.
#[function_component(MenuIcon)]
pub fn menu_icon(props: &MenuIconProps) -> Html {
    let path = if props.open {
        "M6 6l12 12M18 6L6 18"
    } else {
        "M4 6h16M4 12h16M4 18h16"
    };
    html! {
        <svg class="icon icon-menu" viewBox="0 0 24 24" width="24" height="24" aria-hidden="true" focusable="false">
            <path d={path} fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" />
        </svg>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct CategoryIconProps {
    pub category: Category,
}

/// Crown for VIP, sword for ranks, coin stack for coins.
#[function_component(CategoryIcon)]
pub fn category_icon(props: &CategoryIconProps) -> Html {
    let path = match props.category {
        Category::Vip => "M3 7l4.5 4L12 4l4.5 7L21 7l-2 12H5L3 7Z",
        Category::Ranks => "M14.5 3H21v6.5L9.5 21 3 14.5 14.5 3ZM5 19l3-3M13 19l6-6",
        Category::Coins => "M12 4c4.4 0 8 1.3 8 3s-3.6 3-8 3-8-1.3-8-3 3.6-3 8-3ZM4 7v5c0 1.7 3.6 3 8 3s8-1.3 8-3V7M4 12v5c0 1.7 3.6 3 8 3s8-1.3 8-3v-5",
    };
    html! {
        <svg
            class={classes!("icon", "icon-category", format!("icon-category--{}", props.category.key()))}
            viewBox="0 0 24 24"
            width="20"
            height="20"
            aria-hidden="true"
            focusable="false"
        >
            <path d={path} fill="none" stroke="currentColor" stroke-width="2" stroke-linejoin="round" />
        </svg>
    }
}
