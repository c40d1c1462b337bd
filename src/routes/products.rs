use actix_web::{HttpResponse, Responder, delete, get, patch, post, web};

use crate::forms::products::ProductForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::products::{self, ProductsQuery};

#[post("/products")]
pub async fn add_product(
    repo: web::Data<DieselRepository>,
    form: web::Json<ProductForm>,
) -> impl Responder {
    match products::create_product(repo.get_ref(), form.into_inner()) {
        Ok(response) => {
            log::info!("Product created successfully: {}", response.barcode);
            HttpResponse::Ok().json(response)
        }
        Err(err) => error_response(err),
    }
}

#[get("/products/{barcode}")]
pub async fn show_product(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let barcode = path.into_inner();

    match products::get_product(repo.get_ref(), &barcode) {
        Ok(response) => {
            log::info!("Product retrieved successfully: {}", response.barcode);
            HttpResponse::Ok().json(response)
        }
        Err(err) => error_response(err),
    }
}

#[get("/products")]
pub async fn show_products(
    params: web::Query<ProductsQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products::list_products(repo.get_ref(), params.into_inner()) {
        Ok(responses) => {
            log::info!("All products retrieved successfully");
            HttpResponse::Ok().json(responses)
        }
        Err(err) => error_response(err),
    }
}

#[patch("/products/{barcode}")]
pub async fn edit_product(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
    form: web::Json<ProductForm>,
) -> impl Responder {
    let barcode = path.into_inner();

    match products::update_product(repo.get_ref(), &barcode, form.into_inner()) {
        Ok(response) => {
            log::info!("Product updated successfully: {}", response.barcode);
            HttpResponse::Ok().json(response)
        }
        Err(err) => error_response(err),
    }
}

#[delete("/products/{barcode}")]
pub async fn remove_product(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let barcode = path.into_inner();

    match products::delete_product(repo.get_ref(), &barcode) {
        Ok(()) => {
            log::info!("Product with barcode {barcode} was deleted");
            HttpResponse::Ok().body(format!("Product with barcode {barcode} was deleted"))
        }
        Err(err) => error_response(err),
    }
}
