//! Catalog service.
//!
//! Items are stored under their normalized slug (see [`tablebill::names`]);
//! the slug is the dedup key within a category.

use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use tablebill::names;

use crate::{
    domain::catalog::{
        errors::CatalogServiceError,
        models::{CatalogItem, Category, NewCatalogItem},
    },
    store::{Collection, Document},
};

#[derive(Debug, Clone)]
struct CatalogItemData {
    name: String,
    unit_price: u64,
}

/// In-memory catalog service over the three category collections.
#[derive(Debug, Clone, Default)]
pub struct MemCatalogService {
    drinks_juices: Collection<CatalogItemData>,
    fast_food: Collection<CatalogItemData>,
    vegetables_rices: Collection<CatalogItemData>,
}

impl MemCatalogService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn collection(&self, category: Category) -> &Collection<CatalogItemData> {
        match category {
            Category::DrinksJuices => &self.drinks_juices,
            Category::FastFood => &self.fast_food,
            Category::VegetablesRices => &self.vegetables_rices,
        }
    }
}

fn into_item(category: Category, document: Document<CatalogItemData>) -> CatalogItem {
    CatalogItem {
        id: document.id,
        category,
        name: document.data.name,
        unit_price: document.data.unit_price,
        created_at: document.created_at,
    }
}

#[async_trait]
impl CatalogService for MemCatalogService {
    async fn list_items(&self, category: Category) -> Result<Vec<CatalogItem>, CatalogServiceError> {
        let mut items: Vec<CatalogItem> = self
            .collection(category)
            .list()
            .await
            .into_iter()
            .map(|document| into_item(category, document))
            .collect();

        items.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(items)
    }

    async fn create_item(
        &self,
        category: Category,
        item: NewCatalogItem,
    ) -> Result<CatalogItem, CatalogServiceError> {
        let slug = names::normalize(&item.name);

        if slug.is_empty() {
            return Err(CatalogServiceError::MissingName);
        }

        let collection = self.collection(category);

        if collection.find(|existing| existing.name == slug).await.is_some() {
            return Err(CatalogServiceError::AlreadyExists);
        }

        let document = collection
            .insert(CatalogItemData {
                name: slug,
                unit_price: item.unit_price,
            })
            .await;

        Ok(into_item(category, document))
    }

    async fn delete_item(&self, category: Category, id: Uuid) -> Result<(), CatalogServiceError> {
        if !self.collection(category).delete(id).await {
            return Err(CatalogServiceError::NotFound);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Lists a category's items, alphabetically by slug.
    async fn list_items(&self, category: Category) -> Result<Vec<CatalogItem>, CatalogServiceError>;

    /// Creates an item in a category, normalizing and deduplicating its name.
    async fn create_item(
        &self,
        category: Category,
        item: NewCatalogItem,
    ) -> Result<CatalogItem, CatalogServiceError>;

    /// Deletes an item from a category by id.
    async fn delete_item(&self, category: Category, id: Uuid) -> Result<(), CatalogServiceError>;
}
