use serde::{Deserialize, Serialize};

use crate::domain::product::{Product, ProductListQuery};
use crate::domain::tag::Tag;
use crate::forms::products::{ProductForm, validate_barcode};
use crate::repository::{ProductReader, ProductTagReader, ProductTagWriter, ProductWriter};
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the product list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ProductsQuery {
    /// Product column to sort by, ascending. Missing or empty means `id`.
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
}

/// Externally visible product representation.
///
/// Keyed by barcode; the storage-assigned numeric id never leaves the
/// service. Absent optionals serialize as JSON null.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub barcode: String,
    pub name: String,
    pub image: Option<String>,
    pub rating: Option<f32>,
    pub price: Option<f32>,
    pub tags: Vec<String>,
}

impl ProductResponse {
    fn from_parts(product: Product, tags: Vec<Tag>) -> Self {
        let Product {
            barcode,
            name,
            image,
            rating,
            price,
            ..
        } = product;

        Self {
            barcode,
            name,
            image,
            rating,
            price,
            tags: tags.into_iter().map(|tag| tag.name).collect(),
        }
    }
}

/// Creates a new product together with its tag associations.
pub fn create_product<R>(repo: &R, form: ProductForm) -> ServiceResult<ProductResponse>
where
    R: ProductReader + ProductWriter + ProductTagReader + ProductTagWriter + ?Sized,
{
    let payload = form
        .into_new_product()
        .map_err(|err| ServiceError::InvalidRequest(err.to_string()))?;

    if repo
        .get_product_by_barcode(&payload.product.barcode)?
        .is_some()
    {
        return Err(ServiceError::BarcodeConflict(payload.product.barcode));
    }

    let created = repo.create_product(&payload.product)?;

    if !payload.tags.is_empty() {
        if let Err(err) = repo.replace_product_tags(created.id, &payload.tags, false) {
            log::error!("Failed to attach tags to product {}: {err}", created.id);
            if let Err(delete_err) = repo.delete_product(created.id) {
                log::error!(
                    "Failed to roll back product {} after tag error: {delete_err}",
                    created.id
                );
            }
            return Err(err.into());
        }
    }

    build_response(repo, created)
}

/// Fetches a product by its barcode.
pub fn get_product<R>(repo: &R, barcode: &str) -> ServiceResult<ProductResponse>
where
    R: ProductReader + ProductTagReader + ?Sized,
{
    validate_barcode(barcode).map_err(|err| ServiceError::InvalidBarcode(err.to_string()))?;

    let product = repo
        .get_product_by_barcode(barcode)?
        .ok_or_else(|| ServiceError::NotFound(barcode.to_string()))?;

    build_response(repo, product)
}

/// Lists the whole catalog, sorted ascending by the requested column.
pub fn list_products<R>(repo: &R, query: ProductsQuery) -> ServiceResult<Vec<ProductResponse>>
where
    R: ProductReader + ProductTagReader + ?Sized,
{
    let ProductsQuery { sort_by } = query;

    let mut list_query = ProductListQuery::new();
    if let Some(field) = sort_by.filter(|field| !field.is_empty()) {
        list_query = list_query.sort_by(field);
    }

    let items = repo.list_products(list_query)?;

    items
        .into_iter()
        .map(|product| build_response(repo, product))
        .collect()
}

/// Applies a partial update to the product with the given barcode.
///
/// Fields the request left null stay unchanged; a non-null tag list is
/// reconciled in full (an empty list clears every tag). A barcode change is
/// not uniqueness-checked here; the store's constraint decides.
pub fn update_product<R>(repo: &R, barcode: &str, form: ProductForm) -> ServiceResult<ProductResponse>
where
    R: ProductReader + ProductWriter + ProductTagReader + ProductTagWriter + ?Sized,
{
    validate_barcode(barcode).map_err(|err| ServiceError::InvalidBarcode(err.to_string()))?;

    let payload = form
        .into_update_product()
        .map_err(|err| ServiceError::InvalidRequest(err.to_string()))?;

    let product = repo
        .get_product_by_barcode(barcode)?
        .ok_or_else(|| ServiceError::NotFound(barcode.to_string()))?;

    if let Some(tags) = payload.tags.as_deref() {
        repo.replace_product_tags(product.id, tags, true)?;
    }

    let updated = repo.update_product(product.id, &payload.update)?;

    build_response(repo, updated)
}

/// Deletes the product with the given barcode along with its associations.
/// Tag dictionary rows are left in place.
pub fn delete_product<R>(repo: &R, barcode: &str) -> ServiceResult<()>
where
    R: ProductReader + ProductWriter + ?Sized,
{
    validate_barcode(barcode).map_err(|err| ServiceError::InvalidBarcode(err.to_string()))?;

    let product = repo
        .get_product_by_barcode(barcode)?
        .ok_or_else(|| ServiceError::NotFound(barcode.to_string()))?;

    repo.delete_product(product.id)?;

    Ok(())
}

fn build_response<R>(repo: &R, product: Product) -> ServiceResult<ProductResponse>
where
    R: ProductTagReader + ?Sized,
{
    let tags = repo.list_tags_for_product(product.id)?;
    Ok(ProductResponse::from_parts(product, tags))
}
