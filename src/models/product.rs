use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, UpdateProduct as DomainUpdateProduct,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub barcode: String,
    pub name: String,
    pub image: Option<String>,
    pub rating: Option<f32>,
    pub price: Option<f32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub barcode: &'a str,
    pub name: &'a str,
    pub image: Option<&'a str>,
    pub rating: Option<f32>,
    pub price: Option<f32>,
}

/// Changeset for a partial product update. `None` fields are skipped, so a
/// patch never clears a stored value.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::products)]
pub struct UpdateProduct<'a> {
    pub barcode: Option<&'a str>,
    pub name: Option<&'a str>,
    pub image: Option<&'a str>,
    pub rating: Option<f32>,
    pub price: Option<f32>,
    pub updated_at: NaiveDateTime,
}

impl From<Product> for DomainProduct {
    fn from(value: Product) -> Self {
        Self {
            id: value.id,
            barcode: value.barcode,
            name: value.name,
            image: value.image,
            rating: value.rating,
            price: value.price,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(value: &'a DomainNewProduct) -> Self {
        Self {
            barcode: value.barcode.as_str(),
            name: value.name.as_str(),
            image: value.image.as_deref(),
            rating: value.rating,
            price: value.price,
        }
    }
}

impl<'a> From<&'a DomainUpdateProduct> for UpdateProduct<'a> {
    fn from(value: &'a DomainUpdateProduct) -> Self {
        Self {
            barcode: value.barcode.as_deref(),
            name: value.name.as_deref(),
            image: value.image.as_deref(),
            rating: value.rating,
            price: value.price,
            updated_at: value.updated_at,
        }
    }
}
