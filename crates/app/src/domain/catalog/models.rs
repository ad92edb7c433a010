//! Catalog Models

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use thiserror::Error;
use uuid::Uuid;

/// The fixed menu categories, each backed by its own collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    DrinksJuices,
    FastFood,
    VegetablesRices,
}

impl Category {
    /// Every category, in menu display order.
    pub const ALL: [Category; 3] = [
        Category::DrinksJuices,
        Category::FastFood,
        Category::VegetablesRices,
    ];

    /// The resource slug used in collection and route names.
    #[must_use]
    pub fn as_slug(self) -> &'static str {
        match self {
            Category::DrinksJuices => "drinks-juices",
            Category::FastFood => "fast-food",
            Category::VegetablesRices => "vegetables-rices",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_slug())
    }
}

/// Raised when a resource slug names no known category.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown menu category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(slug: &str) -> Result<Self, Self::Err> {
        match slug {
            "drinks-juices" => Ok(Category::DrinksJuices),
            "fast-food" => Ok(Category::FastFood),
            "vegetables-rices" => Ok(Category::VegetablesRices),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// Catalog Item Model
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    pub id: Uuid,
    pub category: Category,
    pub name: String,
    pub unit_price: u64,
    pub created_at: Timestamp,
}

/// New Catalog Item Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCatalogItem {
    pub name: String,
    pub unit_price: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.as_slug().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn unknown_slug_is_rejected() {
        assert_eq!(
            "desserts".parse::<Category>(),
            Err(UnknownCategory("desserts".to_string()))
        );
    }
}
