use serde::Deserialize;
use thiserror::Error;
use validator::ValidateUrl;

use crate::domain::product::{NewProduct, UpdateProduct};

/// Result type returned by the product form helpers.
pub type ProductFormResult<T> = Result<T, ProductFormError>;

/// Errors that can occur while validating a product write request.
///
/// Checks run in field order (barcode, name, image, tags) and the first
/// failure wins; nothing is aggregated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProductFormError {
    /// The barcode is missing, empty, or blank.
    #[error("Barcode is mandatory")]
    MissingBarcode,
    /// The barcode contains a character outside `0-9`.
    #[error("Barcode can only contain digits")]
    NonDigitBarcode,
    /// The name is missing, empty, or blank.
    #[error("Name is mandatory")]
    MissingName,
    /// The image is present but does not parse as a URL.
    #[error("Image must be a valid URL or empty")]
    InvalidImageUrl,
    /// A tag in the tag list is empty or blank.
    #[error("Tag cannot be blank")]
    BlankTag,
}

/// Errors that can occur while validating a barcode path parameter.
///
/// Same rules as the body barcode, reported as a distinct kind because it
/// guards path parameters rather than request bodies.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BarcodeError {
    /// The barcode is missing, empty, or blank.
    #[error("Barcode is mandatory")]
    Missing,
    /// The barcode contains a character outside `0-9`.
    #[error("Barcode can only contain digits")]
    NonDigit,
}

/// JSON body accepted by the create and update endpoints.
///
/// Every field is optional at the wire level; `validate` enforces which ones
/// are mandatory. On update, `None` means "leave unchanged".
#[derive(Debug, Clone, Deserialize)]
pub struct ProductForm {
    pub barcode: Option<String>,
    pub name: Option<String>,
    pub image: Option<String>,
    pub rating: Option<f32>,
    pub price: Option<f32>,
    pub tags: Option<Vec<String>>,
}

impl ProductForm {
    /// Checks the payload field by field; the first offending field decides
    /// the error. No I/O: the image URL check is purely syntactic.
    pub fn validate(&self) -> ProductFormResult<()> {
        let barcode = self.barcode.as_deref().unwrap_or("");
        if barcode.trim().is_empty() {
            return Err(ProductFormError::MissingBarcode);
        }
        // Checked on the raw string: surrounding whitespace is not a digit.
        if !barcode.chars().all(|c| c.is_ascii_digit()) {
            return Err(ProductFormError::NonDigitBarcode);
        }

        if self.name.as_deref().unwrap_or("").trim().is_empty() {
            return Err(ProductFormError::MissingName);
        }

        if let Some(image) = self.image.as_deref() {
            if !image.trim().is_empty() && !image.validate_url() {
                return Err(ProductFormError::InvalidImageUrl);
            }
        }

        if let Some(tags) = &self.tags {
            for tag in tags {
                if tag.trim().is_empty() {
                    return Err(ProductFormError::BlankTag);
                }
            }
        }

        Ok(())
    }

    /// Validates the payload and converts it into an insertable product plus
    /// its requested tag list.
    pub fn into_new_product(self) -> ProductFormResult<NewProductPayload> {
        self.validate()?;

        let ProductForm {
            barcode,
            name,
            image,
            rating,
            price,
            tags,
        } = self;

        // validate() guarantees barcode and name are present and non-blank.
        let mut product =
            NewProduct::new(barcode.unwrap_or_default(), name.unwrap_or_default());

        if let Some(image) = image {
            product = product.with_image(image);
        }
        if let Some(rating) = rating {
            product = product.with_rating(rating);
        }
        if let Some(price) = price {
            product = product.with_price(price);
        }

        Ok(NewProductPayload {
            product,
            tags: tags.unwrap_or_default(),
        })
    }

    /// Validates the payload and converts it into a patch; fields the request
    /// left null stay untouched, a null tag list leaves the tag set alone.
    pub fn into_update_product(self) -> ProductFormResult<UpdateProductPayload> {
        self.validate()?;

        let ProductForm {
            barcode,
            name,
            image,
            rating,
            price,
            tags,
        } = self;

        let mut update = UpdateProduct::new();

        if let Some(barcode) = barcode {
            update = update.barcode(barcode);
        }
        if let Some(name) = name {
            update = update.name(name);
        }
        if let Some(image) = image {
            update = update.image(image);
        }
        if let Some(rating) = rating {
            update = update.rating(rating);
        }
        if let Some(price) = price {
            update = update.price(price);
        }

        Ok(UpdateProductPayload { update, tags })
    }
}

/// A validated create request: the product row to insert and the tag names
/// to attach to it afterwards.
#[derive(Debug, Clone)]
pub struct NewProductPayload {
    pub product: NewProduct,
    pub tags: Vec<String>,
}

/// A validated update request: the field patch and, when present, the tag
/// list to reconcile the product to.
#[derive(Debug, Clone)]
pub struct UpdateProductPayload {
    pub update: UpdateProduct,
    /// `None` leaves the existing tag set untouched; an empty list clears it.
    pub tags: Option<Vec<String>>,
}

/// Validates a barcode path parameter: mandatory and digits only.
pub fn validate_barcode(barcode: &str) -> Result<(), BarcodeError> {
    if barcode.trim().is_empty() {
        return Err(BarcodeError::Missing);
    }
    if !barcode.chars().all(|c| c.is_ascii_digit()) {
        return Err(BarcodeError::NonDigit);
    }
    Ok(())
}
