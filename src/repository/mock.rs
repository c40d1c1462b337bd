use mockall::mock;

use super::{ProductReader, ProductTagReader, ProductTagWriter, ProductWriter};
use crate::domain::{
    product::{NewProduct, Product, ProductListQuery, UpdateProduct},
    product_tag::ProductTag,
    tag::Tag,
};
use crate::repository::errors::RepositoryResult;

mock! {
    pub ProductReader {}

    impl ProductReader for ProductReader {
        fn get_product_by_barcode(&self, barcode: &str) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
    }
}

mock! {
    pub ProductWriter {}

    impl ProductWriter for ProductWriter {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn update_product(&self, product_id: i32, updates: &UpdateProduct) -> RepositoryResult<Product>;
        fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub ProductTagReader {}

    impl ProductTagReader for ProductTagReader {
        fn list_tags_for_product(&self, product_id: i32) -> RepositoryResult<Vec<Tag>>;
        fn list_product_tags(&self, product_id: i32) -> RepositoryResult<Vec<ProductTag>>;
    }
}

mock! {
    pub ProductTagWriter {}

    impl ProductTagWriter for ProductTagWriter {
        fn replace_product_tags(&self, product_id: i32, tag_names: &[String], clear_existing: bool) -> RepositoryResult<()>;
    }
}
