//! Navigable sections of the site
use crate::catalog::Category;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    Vip,
    Ranks,
    Coins,
    About,
}

/// Navigation order; the only section ids the site accepts.
pub const NAVIGATION: [Section; 5] = [
    Section::Home,
    Section::Vip,
    Section::Ranks,
    Section::Coins,
    Section::About,
];

impl Section {
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Vip => "vip",
            Self::Ranks => "ranks",
            Self::Coins => "coins",
            Self::About => "about",
        }
    }

    /// Look up a section by navigation id. Unknown ids yield `None`.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        NAVIGATION.into_iter().find(|section| section.id() == id)
    }

    /// Text-bundle key of the navigation label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Home => "nav.home",
            Self::Vip => "nav.vip",
            Self::Ranks => "nav.ranks",
            Self::Coins => "nav.coins",
            Self::About => "nav.about",
        }
    }

    /// Catalog category listed on this section, if it is a shop section.
    #[must_use]
    pub const fn category(self) -> Option<Category> {
        match self {
            Self::Vip => Some(Category::Vip),
            Self::Ranks => Some(Category::Ranks),
            Self::Coins => Some(Category::Coins),
            Self::Home | Self::About => None,
        }
    }
}
