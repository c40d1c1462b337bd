use products_manager::forms::products::ProductForm;
use products_manager::repository::DieselRepository;
use products_manager::services::ServiceError;
use products_manager::services::products::{self, ProductsQuery};

mod common;

fn write_request(barcode: &str, name: &str, tags: Option<Vec<&str>>) -> ProductForm {
    ProductForm {
        barcode: Some(barcode.to_string()),
        name: Some(name.to_string()),
        image: None,
        rating: None,
        price: None,
        tags: tags.map(|tags| tags.into_iter().map(str::to_string).collect()),
    }
}

#[test]
fn create_then_read_round_trips_tags_in_order() {
    let test_db = common::TestDb::new("service_create_round_trip.db");
    let repo = DieselRepository::new(test_db.pool());

    let created = products::create_product(
        &repo,
        write_request("123456", "Widget", Some(vec!["tag2", "tag1"])),
    )
    .expect("create should succeed");
    assert_eq!(created.tags, vec!["tag2", "tag1"]);

    let read = products::get_product(&repo, "123456").expect("read should succeed");
    assert_eq!(read.barcode, "123456");
    assert_eq!(read.name, "Widget");
    assert_eq!(read.image, None);
    assert_eq!(read.rating, None);
    assert_eq!(read.price, None);
    assert_eq!(read.tags, vec!["tag2", "tag1"]);

    // Reading again without intervening writes returns the same response.
    let again = products::get_product(&repo, "123456").expect("read should succeed");
    assert_eq!(again.barcode, read.barcode);
    assert_eq!(again.name, read.name);
    assert_eq!(again.tags, read.tags);
}

#[test]
fn create_rejects_duplicate_barcode() {
    let test_db = common::TestDb::new("service_create_duplicate.db");
    let repo = DieselRepository::new(test_db.pool());

    products::create_product(&repo, write_request("123456", "Widget", None))
        .expect("first create should succeed");

    let err = products::create_product(&repo, write_request("123456", "Other", None))
        .expect_err("second create should fail");

    assert!(matches!(err, ServiceError::BarcodeConflict(_)));
    assert_eq!(
        err.to_string(),
        "Product with barcode 123456 already exists"
    );
}

#[test]
fn update_with_name_only_leaves_other_fields_alone() {
    let test_db = common::TestDb::new("service_update_name_only.db");
    let repo = DieselRepository::new(test_db.pool());

    let form = ProductForm {
        barcode: Some("123456".to_string()),
        name: Some("Widget".to_string()),
        image: Some("https://example.com/widget.png".to_string()),
        rating: Some(4.0),
        price: Some(9.99),
        tags: Some(vec!["a".to_string(), "b".to_string()]),
    };
    products::create_product(&repo, form).expect("create should succeed");

    let updated = products::update_product(&repo, "123456", write_request("123456", "X", None))
        .expect("update should succeed");

    assert_eq!(updated.name, "X");
    assert_eq!(updated.barcode, "123456");
    assert_eq!(updated.image.as_deref(), Some("https://example.com/widget.png"));
    assert_eq!(updated.rating, Some(4.0));
    assert_eq!(updated.price, Some(9.99));
    assert_eq!(updated.tags, vec!["a", "b"]);
}

#[test]
fn update_with_empty_tag_list_clears_tags() {
    let test_db = common::TestDb::new("service_update_clear_tags.db");
    let repo = DieselRepository::new(test_db.pool());

    products::create_product(&repo, write_request("123456", "Widget", Some(vec!["a", "b"])))
        .expect("create should succeed");

    let updated = products::update_product(
        &repo,
        "123456",
        write_request("123456", "Widget", Some(vec![])),
    )
    .expect("update should succeed");

    assert!(updated.tags.is_empty());
}

#[test]
fn update_of_unknown_barcode_reports_not_found() {
    let test_db = common::TestDb::new("service_update_not_found.db");
    let repo = DieselRepository::new(test_db.pool());

    let err = products::update_product(&repo, "999999", write_request("999999", "Ghost", None))
        .expect_err("update should fail");

    assert!(matches!(err, ServiceError::NotFound(_)));
    assert_eq!(err.to_string(), "Product not found with barcode: 999999");
}

#[test]
fn delete_then_recreate_reuses_dictionary_tag() {
    let test_db = common::TestDb::new("service_delete_recreate_tag.db");
    let repo = DieselRepository::new(test_db.pool());

    products::create_product(&repo, write_request("111111", "First", Some(vec!["rare-tag"])))
        .expect("create should succeed");
    products::delete_product(&repo, "111111").expect("delete should succeed");

    // The tag name survived its only product; recreating attaches the same
    // dictionary entry instead of minting a duplicate.
    let recreated = products::create_product(
        &repo,
        write_request("222222", "Second", Some(vec!["rare-tag"])),
    )
    .expect("create should succeed");

    assert_eq!(recreated.tags, vec!["rare-tag"]);

    use products_manager::repository::ProductReader;
    use products_manager::repository::ProductTagReader;
    let product = repo
        .get_product_by_barcode("222222")
        .unwrap()
        .expect("product should exist");
    let tags = repo.list_tags_for_product(product.id).unwrap();
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].id, 1); // first-ever tag row, reused
}

#[test]
fn list_products_keeps_store_order() {
    let test_db = common::TestDb::new("service_list_products.db");
    let repo = DieselRepository::new(test_db.pool());

    products::create_product(&repo, write_request("300", "Cherry", None))
        .expect("create should succeed");
    products::create_product(&repo, write_request("100", "Apple", None))
        .expect("create should succeed");

    let by_default = products::list_products(&repo, ProductsQuery::default())
        .expect("list should succeed");
    let names: Vec<&str> = by_default.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Cherry", "Apple"]);

    let by_barcode = products::list_products(
        &repo,
        ProductsQuery {
            sort_by: Some("barcode".to_string()),
        },
    )
    .expect("list should succeed");
    let names: Vec<&str> = by_barcode.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Apple", "Cherry"]);
}

#[test]
fn list_products_with_unknown_sort_field_is_a_storage_failure() {
    let test_db = common::TestDb::new("service_list_unknown_sort.db");
    let repo = DieselRepository::new(test_db.pool());

    let err = products::list_products(
        &repo,
        ProductsQuery {
            sort_by: Some("nonsense".to_string()),
        },
    )
    .expect_err("list should fail");

    assert!(matches!(err, ServiceError::Database(_)));
    assert_eq!(err.to_string(), "Error accessing the database");
}
