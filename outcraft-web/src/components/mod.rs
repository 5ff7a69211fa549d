pub mod footer;
pub mod header;
pub mod icons;
pub mod mobile_nav;
pub mod modal;
pub mod nav;
pub mod product_card;
pub mod product_grid;
