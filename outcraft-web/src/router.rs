use outcraft_core::Section;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/vip")]
    Vip,
    #[at("/ranks")]
    Ranks,
    #[at("/coins")]
    Coins,
    #[at("/about")]
    About,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub const fn from_section(section: Section) -> Self {
        match section {
            Section::Home => Self::Home,
            Section::Vip => Self::Vip,
            Section::Ranks => Self::Ranks,
            Section::Coins => Self::Coins,
            Section::About => Self::About,
        }
    }

    #[must_use]
    pub const fn to_section(&self) -> Option<Section> {
        match self {
            Self::Home => Some(Section::Home),
            Self::Vip => Some(Section::Vip),
            Self::Ranks => Some(Section::Ranks),
            Self::Coins => Some(Section::Coins),
            Self::About => Some(Section::About),
            Self::NotFound => None, // Redirected to Home by the app shell.
        }
    }
}
