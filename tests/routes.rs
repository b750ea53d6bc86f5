use actix_web::{App, test, web};
use serde_json::{Value, json};
use storebot::dedup::UpdateDedup;
use storebot::repository::{CategoryReader, DieselRepository};
use storebot::routes;

mod common;

macro_rules! test_app {
    ($repo:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($repo.clone()))
                .app_data(web::Data::new(UpdateDedup::new(16)))
                .configure(routes::configure),
        )
        .await
    };
}

fn add_form(name: &str, parent_id: &str) -> Vec<(String, String)> {
    vec![
        ("name".to_string(), name.to_string()),
        ("parent_id".to_string(), parent_id.to_string()),
    ]
}

fn products_update(update_id: i64) -> Value {
    json!({
        "update_id": update_id,
        "message": {
            "message_id": 1,
            "chat": {"id": 77, "type": "private"},
            "from": {"id": 5, "is_bot": false},
            "text": "/products"
        }
    })
}

#[actix_web::test]
async fn admin_add_confirms_and_persists_a_root_category() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let app = test_app!(repo);

    let req = test::TestRequest::post()
        .uri("/admin/product_categories/add")
        .set_form(add_form("Antennas", ""))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert!(
        body["message"]
            .as_str()
            .expect("message should be a string")
            .contains("Antennas")
    );

    let roots = repo
        .list_categories_by_parent(None)
        .expect("should query roots");
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].name, "Antennas");
    assert_eq!(roots[0].level.get(), 1);
}

#[actix_web::test]
async fn admin_add_reports_duplicate_sibling_names() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let app = test_app!(repo);

    let req = test::TestRequest::post()
        .uri("/admin/product_categories/add")
        .set_form(add_form("Antennas", ""))
        .to_request();
    assert!(test::call_service(&app, req).await.status().is_success());

    let req = test::TestRequest::post()
        .uri("/admin/product_categories/add")
        .set_form(add_form("Antennas", ""))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert!(
        body["error"]
            .as_str()
            .expect("error should be a string")
            .contains("already exists")
    );
    assert_eq!(repo.list_categories().expect("should list").len(), 1);
}

#[actix_web::test]
async fn admin_add_reports_missing_parent() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let app = test_app!(repo);

    let req = test::TestRequest::post()
        .uri("/admin/product_categories/add")
        .set_form(add_form("Yagi", "999"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    assert!(repo.list_categories().expect("should list").is_empty());
}

#[actix_web::test]
async fn admin_listing_returns_tree_ordered_levels() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let app = test_app!(repo);

    let req = test::TestRequest::post()
        .uri("/admin/product_categories/add")
        .set_form(add_form("Antennas", ""))
        .to_request();
    assert!(test::call_service(&app, req).await.status().is_success());

    let parent_id = repo.list_categories_by_parent(None).unwrap()[0].id.get();
    let req = test::TestRequest::post()
        .uri("/admin/product_categories/add")
        .set_form(add_form("Yagi", &parent_id.to_string()))
        .to_request();
    assert!(test::call_service(&app, req).await.status().is_success());

    let req = test::TestRequest::get()
        .uri("/admin/product_categories")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let items = body.as_array().expect("listing should be an array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "Antennas");
    assert_eq!(items[0]["level"], 1);
    assert_eq!(items[1]["name"], "Yagi");
    assert_eq!(items[1]["level"], 2);
    assert_eq!(items[1]["parent_id"], items[0]["id"]);
}

#[actix_web::test]
async fn admin_listing_scopes_to_a_subtree_root() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let app = test_app!(repo);

    for name in ["Antennas", "Cables"] {
        let req = test::TestRequest::post()
            .uri("/admin/product_categories/add")
            .set_form(add_form(name, ""))
            .to_request();
        assert!(test::call_service(&app, req).await.status().is_success());
    }

    let roots = repo.list_categories_by_parent(None).unwrap();
    let antennas_id = roots.iter().find(|c| c.name == "Antennas").unwrap().id;
    let req = test::TestRequest::post()
        .uri("/admin/product_categories/add")
        .set_form(add_form("Yagi", &antennas_id.get().to_string()))
        .to_request();
    assert!(test::call_service(&app, req).await.status().is_success());

    let req = test::TestRequest::get()
        .uri(&format!(
            "/admin/product_categories?root_id={}",
            antennas_id.get()
        ))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let items = body.as_array().expect("listing should be an array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "Antennas");
    assert_eq!(items[1]["name"], "Yagi");

    let req = test::TestRequest::get()
        .uri("/admin/product_categories?root_id=999")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn admin_products_tolerates_a_huge_page_number() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let app = test_app!(repo);

    let req = test::TestRequest::get()
        .uri(&format!("/admin/products?page={}", usize::MAX))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert!(body.as_array().expect("listing should be an array").is_empty());
}

#[actix_web::test]
async fn admin_product_detail_reports_missing_products() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let app = test_app!(repo);

    let req = test::TestRequest::get()
        .uri("/admin/products/1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn webhook_replies_no_categories_on_empty_tree() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let app = test_app!(repo);

    let req = test::TestRequest::post()
        .uri("/webhook")
        .set_json(products_update(1))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["method"], "sendMessage");
    assert_eq!(body["chat_id"], 77);
    assert!(
        body["text"]
            .as_str()
            .expect("text should be a string")
            .contains("no product categories")
    );
}

#[actix_web::test]
async fn webhook_rejects_malformed_payloads() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let app = test_app!(repo);

    // Wellformed JSON but no usable message inside.
    let req = test::TestRequest::post()
        .uri("/webhook")
        .set_json(json!({"update_id": 5}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    // Missing update_id fails deserialization outright.
    let req = test::TestRequest::post()
        .uri("/webhook")
        .set_json(json!({"message": {}}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_client_error());
}

#[actix_web::test]
async fn webhook_processes_a_replayed_update_at_most_once() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let app = test_app!(repo);

    let req = test::TestRequest::post()
        .uri("/webhook")
        .set_json(products_update(42))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let first = test::read_body(resp).await;
    assert!(!first.is_empty());

    // Same update_id again: acknowledged but not dispatched.
    let req = test::TestRequest::post()
        .uri("/webhook")
        .set_json(products_update(42))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let replay = test::read_body(resp).await;
    assert!(replay.is_empty());

    // A fresh update_id is dispatched normally.
    let req = test::TestRequest::post()
        .uri("/webhook")
        .set_json(products_update(43))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let fresh = test::read_body(resp).await;
    assert!(!fresh.is_empty());
}
