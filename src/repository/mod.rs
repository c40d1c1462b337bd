use crate::db::{DbConnection, DbPool};
use crate::domain::product::{NewProduct, Product, ProductListQuery, UpdateProduct};
use crate::domain::product_tag::ProductTag;
use crate::domain::tag::Tag;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod product;
pub mod product_tag;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over product records.
pub trait ProductReader {
    fn get_product_by_barcode(&self, barcode: &str) -> RepositoryResult<Option<Product>>;
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
}

/// Write operations over product records.
pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    fn update_product(
        &self,
        product_id: i32,
        updates: &UpdateProduct,
    ) -> RepositoryResult<Product>;
    /// Deletes the product together with its tag associations. Tag dictionary
    /// rows stay behind.
    fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over product-tag associations.
pub trait ProductTagReader {
    /// Tags attached to a product, in association insertion order.
    fn list_tags_for_product(&self, product_id: i32) -> RepositoryResult<Vec<Tag>>;
    /// Raw association rows for a product, in insertion order.
    fn list_product_tags(&self, product_id: i32) -> RepositoryResult<Vec<ProductTag>>;
}

/// Write operations over product-tag associations.
pub trait ProductTagWriter {
    /// Makes the association set of `product_id` match `tag_names` exactly:
    /// clears the current rows (when `clear_existing`), then reinserts one
    /// row per name in the order given, creating missing dictionary tags on
    /// the way. Duplicate names produce duplicate rows.
    fn replace_product_tags(
        &self,
        product_id: i32,
        tag_names: &[String],
        clear_existing: bool,
    ) -> RepositoryResult<()>;
}
