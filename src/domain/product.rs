use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a catalog product.
///
/// The numeric `id` is storage-assigned and internal; products are addressed
/// externally by their barcode.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Digits-only barcode, unique across the catalog.
    pub barcode: String,
    /// Human-readable name of the product.
    pub name: String,
    /// Optional image URL.
    pub image: Option<String>,
    /// Optional rating.
    pub rating: Option<f32>,
    /// Optional price.
    pub price: Option<f32>,
    /// Timestamp for when the product record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the product record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    /// Digits-only barcode, unique across the catalog.
    pub barcode: String,
    /// Human-readable name of the product.
    pub name: String,
    /// Optional image URL.
    pub image: Option<String>,
    /// Optional rating.
    pub rating: Option<f32>,
    /// Optional price.
    pub price: Option<f32>,
}

impl NewProduct {
    /// Build a new product payload with the mandatory fields.
    pub fn new(barcode: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            barcode: barcode.into(),
            name: name.into(),
            image: None,
            rating: None,
            price: None,
        }
    }

    /// Attach an image URL to the product payload.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Attach a rating to the product payload.
    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Attach a price to the product payload.
    pub fn with_price(mut self, price: f32) -> Self {
        self.price = Some(price);
        self
    }
}

/// Patch data applied when updating an existing product.
///
/// `None` fields are left untouched on the stored row; an optional column can
/// therefore be set but never cleared through a patch.
#[derive(Debug, Clone)]
pub struct UpdateProduct {
    /// Optional barcode update.
    pub barcode: Option<String>,
    /// Optional name update.
    pub name: Option<String>,
    /// Optional image URL update.
    pub image: Option<String>,
    /// Optional rating update.
    pub rating: Option<f32>,
    /// Optional price update.
    pub price: Option<f32>,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl Default for UpdateProduct {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateProduct {
    /// Create a new patch object with no changes applied yet.
    pub fn new() -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            barcode: None,
            name: None,
            image: None,
            rating: None,
            price: None,
            updated_at: now,
        }
    }

    /// Update the barcode.
    pub fn barcode(mut self, barcode: impl Into<String>) -> Self {
        self.barcode = Some(barcode.into());
        self
    }

    /// Update the product name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Update the image URL.
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Update the rating.
    pub fn rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Update the price.
    pub fn price(mut self, price: f32) -> Self {
        self.price = Some(price);
        self
    }
}

/// Query definition used to list products.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Product column to sort by, ascending. Defaults to `id` when unset.
    pub sort_by: Option<String>,
}

impl ProductListQuery {
    /// Construct a query that targets the whole catalog in id order.
    pub fn new() -> Self {
        Self { sort_by: None }
    }

    /// Sort the results ascending by the named product column.
    pub fn sort_by(mut self, field: impl Into<String>) -> Self {
        self.sort_by = Some(field.into());
        self
    }
}
