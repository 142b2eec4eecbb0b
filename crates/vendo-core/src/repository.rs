//! # Product Repository Contract
//!
//! The read/write contract the pricing core expects from persistence.
//!
//! ## Responsibility Split
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  vendo-core (this crate)          Storage adapters (other crates)   │
//! │  ─────────────────────────        ─────────────────────────────     │
//! │  • Defines the trait              • SQL / embedded / document       │
//! │  • Defines query types            • Own their error types           │
//! │  • NEVER calls the trait          • Assign ids on save              │
//! │                                                                     │
//! │  The core only ever operates on Product values a caller has         │
//! │  already resolved; this trait exists so every adapter resolves      │
//! │  them the same way.                                                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::product::Product;

// =============================================================================
// Query Types
// =============================================================================

/// An inclusive price band for range queries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

/// Filters applied to product listings and counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductFilters {
    pub category: Option<String>,
    pub search_term: Option<String>,
    pub is_active: Option<bool>,
    pub price_range: Option<PriceRange>,
}

/// Sort key for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    Name,
    Price,
    CreatedAt,
    UpdatedAt,
}

/// Sort direction for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Full search criteria: filters plus ordering and paging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductSearchCriteria {
    pub filters: ProductFilters,
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortOrder>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// Catalog-wide statistics for dashboards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductStatistics {
    pub total_products: u64,
    pub active_products: u64,
    pub inactive_products: u64,
    pub categories: Vec<String>,
    pub average_price: Decimal,
}

// =============================================================================
// Repository Contract
// =============================================================================

/// Asynchronous product persistence contract.
///
/// Implemented by storage adapters, never by this crate. `save` takes a
/// product with an unassigned id and hands back the persisted copy carrying
/// the id the store assigned (see [`Product::with_id`]). Lookups take the
/// raw row id; an unsaved product has nothing to look up.
#[async_trait]
pub trait ProductRepository {
    /// Adapter-specific failure type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Finds a product by its persisted id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, Self::Error>;

    /// Lists products matching the criteria.
    async fn find_all(&self, criteria: &ProductSearchCriteria)
        -> Result<Vec<Product>, Self::Error>;

    /// Lists products in a category.
    async fn find_by_category(&self, category: &str) -> Result<Vec<Product>, Self::Error>;

    /// Lists products whose name or description matches a search term.
    async fn find_by_search_term(&self, term: &str) -> Result<Vec<Product>, Self::Error>;

    /// Lists active products only.
    async fn find_active_products(&self) -> Result<Vec<Product>, Self::Error>;

    /// Persists a new product and returns the copy with its assigned id.
    async fn save(&self, product: &Product) -> Result<Product, Self::Error>;

    /// Persists changes to an existing product.
    async fn update(&self, product: &Product) -> Result<Product, Self::Error>;

    /// Deletes a product by id.
    async fn delete(&self, id: i64) -> Result<(), Self::Error>;

    /// Lists all distinct categories.
    async fn get_categories(&self) -> Result<Vec<String>, Self::Error>;

    /// Counts products matching the filters.
    async fn count(&self, filters: &ProductFilters) -> Result<u64, Self::Error>;

    /// Checks whether a product id exists.
    async fn exists(&self, id: i64) -> Result<bool, Self::Error>;

    /// Lists products priced within an inclusive range.
    async fn find_by_price_range(
        &self,
        min: Decimal,
        max: Decimal,
    ) -> Result<Vec<Product>, Self::Error>;

    /// Computes catalog-wide statistics.
    async fn get_statistics(&self) -> Result<ProductStatistics, Self::Error>;
}

// =============================================================================
// Contract Tests (in-memory reference implementation)
// =============================================================================
