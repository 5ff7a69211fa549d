//! Static storefront catalog
use crate::constants::FEATURED_LIMIT;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

/// Product line an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Vip,
    Ranks,
    Coins,
}

impl Category {
    pub const ALL: [Self; 3] = [Self::Vip, Self::Ranks, Self::Coins];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Vip => "vip",
            Self::Ranks => "ranks",
            Self::Coins => "coins",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single purchasable offering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    /// Display price including currency, e.g. `9.99 EUR`
    pub price: String,
    pub category: Category,
    #[serde(default)]
    pub popular: bool,
    #[serde(default)]
    pub coming_soon: bool,
    /// Direct commerce package reference; wins over any configured mapping
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_id: Option<u64>,
}

impl Item {
    #[must_use]
    pub const fn is_purchasable(&self) -> bool {
        !self.coming_soon
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate catalog item id: {0}")]
    DuplicateId(String),
}

#[derive(Deserialize)]
struct CatalogFile {
    items: Vec<Item>,
}

/// Immutable, ordered list of items defined at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] when two items share an id.
    pub fn new(items: Vec<Item>) -> Result<Self, CatalogError> {
        let mut seen = BTreeSet::new();
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self { items })
    }

    /// Parse the `{ "items": [...] }` catalog document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, names an unknown category,
    /// or repeats an item id.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.items)
    }

    #[must_use]
    pub fn list(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn filter_by_category(&self, category: Category) -> impl Iterator<Item = &Item> + '_ {
        self.items.iter().filter(move |item| item.category == category)
    }

    /// Items a category page offers for sale.
    pub fn purchasable_in(&self, category: Category) -> impl Iterator<Item = &Item> + '_ {
        self.filter_by_category(category)
            .filter(|item| item.is_purchasable())
    }

    /// Landing-page promotions: available popular items first, then upcoming
    /// non-popular items, both in catalog order, capped at [`FEATURED_LIMIT`].
    #[must_use]
    pub fn featured(&self) -> Vec<&Item> {
        let popular = self
            .items
            .iter()
            .filter(|item| item.popular && !item.coming_soon);
        let upcoming = self
            .items
            .iter()
            .filter(|item| !item.popular && item.coming_soon);
        popular.chain(upcoming).take(FEATURED_LIMIT).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn item(id: &str, category: Category) -> Item {
    Item {
        id: id.to_string(),
        name: id.to_uppercase(),
        price: "1.00 EUR".to_string(),
        category,
        popular: false,
        coming_soon: false,
        package_id: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flagged(id: &str, popular: bool, coming_soon: bool) -> Item {
        Item {
            popular,
            coming_soon,
            ..item(id, Category::Vip)
        }
    }

    #[test]
    fn from_json_reads_items_in_order() {
        let json = r#"{ "items": [
            { "id": "vip-sub", "name": "VIP Subscription", "price": "9.99 EUR", "category": "vip", "popular": true },
            { "id": "warrior", "name": "Warrior", "price": "9.99 EUR", "category": "ranks", "package_id": 42 }
        ] }"#;
        let catalog = Catalog::from_json(json).expect("catalog parses");
        let ids: Vec<&str> = catalog.list().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["vip-sub", "warrior"]);
        assert!(catalog.list()[0].popular);
        assert!(!catalog.list()[0].coming_soon);
        assert_eq!(catalog.find("warrior").and_then(|i| i.package_id), Some(42));
    }

    #[test]
    fn from_json_rejects_unknown_category() {
        let json = r#"{ "items": [
            { "id": "hat", "name": "Hat", "price": "1 EUR", "category": "cosmetics" }
        ] }"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Catalog::new(vec![item("a", Category::Vip), item("a", Category::Coins)])
            .expect_err("duplicate id");
        assert_eq!(err.to_string(), "duplicate catalog item id: a");
    }

    #[test]
    fn filter_by_category_keeps_only_matching_items() {
        let catalog = Catalog::new(vec![
            item("v1", Category::Vip),
            item("c1", Category::Coins),
            item("v2", Category::Vip),
        ])
        .unwrap();
        let ids: Vec<&str> = catalog
            .filter_by_category(Category::Vip)
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(ids, ["v1", "v2"]);
    }

    #[test]
    fn purchasable_in_hides_coming_soon() {
        let mut upcoming = item("r2", Category::Ranks);
        upcoming.coming_soon = true;
        let catalog = Catalog::new(vec![item("r1", Category::Ranks), upcoming]).unwrap();
        let ids: Vec<&str> = catalog
            .purchasable_in(Category::Ranks)
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(ids, ["r1"]);
    }

    #[test]
    fn featured_orders_popular_before_upcoming() {
        let catalog = Catalog::new(vec![
            flagged("soon-a", false, true),
            flagged("hot-a", true, false),
            flagged("plain", false, false),
            flagged("hot-soon", true, true),
            flagged("hot-b", true, false),
            flagged("soon-b", false, true),
        ])
        .unwrap();
        let ids: Vec<&str> = catalog.featured().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["hot-a", "hot-b", "soon-a", "soon-b"]);
    }

    #[test]
    fn featured_is_capped() {
        let items = (0..10).map(|n| flagged(&format!("p{n}"), true, false)).collect();
        let catalog = Catalog::new(items).unwrap();
        let featured = catalog.featured();
        assert_eq!(featured.len(), FEATURED_LIMIT);
        assert_eq!(featured[0].id, "p0");
        assert_eq!(featured[5].id, "p5");
    }

    #[test]
    fn category_keys_match_serde_names() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.key()));
        }
    }
}
