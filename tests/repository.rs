use chrono::Utc;
use storebot::domain::category::NewCategory;
use storebot::domain::types::{CategoryId, CategoryLevel, CategoryName};
use storebot::repository::{
    CategoryReader, CategoryWriter, DieselRepository, RepositoryError,
};

mod common;

fn new_category(name: &str, parent_id: Option<CategoryId>, level: i32) -> NewCategory {
    let now = Utc::now().naive_utc();
    NewCategory {
        name: CategoryName::new(name).expect("valid category name"),
        parent_id,
        level: CategoryLevel::new(level).expect("valid level"),
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn creates_and_reads_back_a_root_category() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_category(&new_category("Antennas", None, 1))
        .expect("should create category");
    assert_eq!(created.name, "Antennas");
    assert_eq!(created.parent_id, None);
    assert_eq!(created.level.get(), 1);

    let fetched = repo
        .get_category_by_id(created.id)
        .expect("should query category")
        .expect("category should exist");
    assert_eq!(fetched.name, "Antennas");
}

#[test]
fn persists_child_with_parent_reference() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let root = repo
        .create_category(&new_category("Antennas", None, 1))
        .expect("should create root");
    let child = repo
        .create_category(&new_category("Yagi", Some(root.id), 2))
        .expect("should create child");

    let children = repo
        .list_categories_by_parent(Some(root.id))
        .expect("should list children");
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].id, child.id);
    assert_eq!(children[0].level.get(), 2);

    let roots = repo
        .list_categories_by_parent(None)
        .expect("should list roots");
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].id, root.id);
}

#[test]
fn duplicate_sibling_name_hits_the_unique_constraint() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let root = repo
        .create_category(&new_category("Antennas", None, 1))
        .expect("should create root");
    repo.create_category(&new_category("Yagi", Some(root.id), 2))
        .expect("should create first child");

    let err = repo
        .create_category(&new_category("Yagi", Some(root.id), 2))
        .expect_err("duplicate sibling must be rejected");
    assert!(matches!(err, RepositoryError::UniqueViolation(_)));
}

#[test]
fn duplicate_root_name_hits_the_partial_index() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    repo.create_category(&new_category("Antennas", None, 1))
        .expect("should create root");
    let err = repo
        .create_category(&new_category("Antennas", None, 1))
        .expect_err("duplicate root must be rejected");
    assert!(matches!(err, RepositoryError::UniqueViolation(_)));
}

#[test]
fn same_name_is_allowed_under_different_parents() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let a = repo
        .create_category(&new_category("A", None, 1))
        .expect("should create A");
    let b = repo
        .create_category(&new_category("B", None, 1))
        .expect("should create B");
    repo.create_category(&new_category("Cables", Some(a.id), 2))
        .expect("should create under A");
    repo.create_category(&new_category("Cables", Some(b.id), 2))
        .expect("should create under B");
}

#[test]
fn nonexistent_parent_persists_no_row() {
    use storebot::domain::types::CategoryName;
    use storebot::forms::categories::AddCategoryFormPayload;
    use storebot::services::ServiceError;
    use storebot::services::categories::create_category;

    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let payload = AddCategoryFormPayload {
        name: CategoryName::new("Orphan").unwrap(),
        parent_id: Some(CategoryId::new(999).unwrap()),
    };
    let err = create_category(payload, &repo).expect_err("missing parent must fail");
    assert_eq!(err, ServiceError::InvalidParent);
    assert!(repo.list_categories().expect("should list").is_empty());
}

#[test]
fn concurrent_identical_inserts_admit_exactly_one() {
    use storebot::domain::types::CategoryName;
    use storebot::forms::categories::AddCategoryFormPayload;
    use storebot::services::categories::create_category;

    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let mut handles = Vec::new();
    for _ in 0..2 {
        let repo = repo.clone();
        handles.push(std::thread::spawn(move || {
            let payload = AddCategoryFormPayload {
                name: CategoryName::new("Antennas").unwrap(),
                parent_id: None,
            };
            create_category(payload, &repo).is_ok()
        }));
    }

    let successes = handles
        .into_iter()
        .map(|h| h.join().expect("insert thread should not panic"))
        .filter(|ok| *ok)
        .count();
    assert_eq!(successes, 1);
    assert_eq!(repo.list_categories().expect("should list").len(), 1);
}
