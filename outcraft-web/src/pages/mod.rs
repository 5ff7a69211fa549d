pub mod about;
pub mod coins;
pub mod home;
pub mod ranks;
pub mod vip;

pub use about::AboutPage;
pub use coins::CoinsPage;
pub use home::HomePage;
pub use ranks::RanksPage;
pub use vip::VipPage;

use outcraft_core::Item;
use yew::prelude::*;

/// Props shared by every page that lists products.
#[derive(Properties, PartialEq, Clone)]
pub struct ProductPageProps {
    pub items: Vec<Item>,
    pub on_buy: Callback<String>,
}
