//! Integration tests for todo CRUD query functions.
//!
//! Each test creates a unique temporary database via `minder-test-utils`,
//! runs migrations, and drops it on completion so tests are fully isolated.

use minder_db::queries::todos;
use minder_test_utils::{create_test_db, drop_test_db};
use uuid::Uuid;

#[tokio::test]
async fn insert_and_get_todo() {
    let (pool, db_name) = create_test_db().await;

    let todo = todos::insert_todo(&pool, "Buy milk")
        .await
        .expect("insert_todo should succeed");

    assert_eq!(todo.name, "Buy milk");
    assert!(!todo.is_complete, "new todos start incomplete");

    let fetched = todos::get_todo(&pool, todo.id)
        .await
        .expect("get_todo should succeed")
        .expect("todo should exist");

    assert_eq!(fetched.id, todo.id);
    assert_eq!(fetched.name, "Buy milk");
    assert_eq!(fetched.created_at, todo.created_at);

    pool.close().await;
    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn get_missing_todo_returns_none() {
    let (pool, db_name) = create_test_db().await;

    let fetched = todos::get_todo(&pool, Uuid::new_v4())
        .await
        .expect("get_todo should succeed");
    assert!(fetched.is_none());

    pool.close().await;
    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn list_returns_creation_order() {
    let (pool, db_name) = create_test_db().await;

    let first = todos::insert_todo(&pool, "first").await.unwrap();
    let second = todos::insert_todo(&pool, "second").await.unwrap();
    let third = todos::insert_todo(&pool, "third").await.unwrap();

    let listed = todos::list_todos(&pool).await.expect("list should succeed");
    let ids: Vec<Uuid> = listed.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    pool.close().await;
    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn update_name_preserves_other_columns() {
    let (pool, db_name) = create_test_db().await;

    let todo = todos::insert_todo(&pool, "Buy milk").await.unwrap();

    let updated = todos::update_todo_name(&pool, todo.id, "Buy oat milk")
        .await
        .expect("update should succeed")
        .expect("row should match");

    assert_eq!(updated.id, todo.id);
    assert_eq!(updated.name, "Buy oat milk");
    assert_eq!(updated.is_complete, todo.is_complete);
    assert_eq!(updated.created_at, todo.created_at);

    pool.close().await;
    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn update_missing_id_returns_none() {
    let (pool, db_name) = create_test_db().await;

    let result = todos::update_todo_name(&pool, Uuid::new_v4(), "anything")
        .await
        .expect("update should not error");
    assert!(result.is_none(), "missing id should be reported, not silent");

    pool.close().await;
    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn set_complete_flips_only_the_flag() {
    let (pool, db_name) = create_test_db().await;

    let todo = todos::insert_todo(&pool, "Water plants").await.unwrap();

    let done = todos::set_todo_complete(&pool, todo.id, true)
        .await
        .expect("set_todo_complete should succeed")
        .expect("row should match");
    assert!(done.is_complete);
    assert_eq!(done.name, todo.name);
    assert_eq!(done.created_at, todo.created_at);

    let undone = todos::set_todo_complete(&pool, todo.id, false)
        .await
        .unwrap()
        .unwrap();
    assert!(!undone.is_complete);

    pool.close().await;
    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn delete_is_idempotent() {
    let (pool, db_name) = create_test_db().await;

    let todo = todos::insert_todo(&pool, "ephemeral").await.unwrap();

    let first = todos::delete_todo(&pool, todo.id)
        .await
        .expect("first delete should succeed");
    assert!(first, "first delete should remove the row");

    let second = todos::delete_todo(&pool, todo.id)
        .await
        .expect("second delete should not error");
    assert!(!second, "second delete should be a no-op");

    let remaining = todos::list_todos(&pool).await.unwrap();
    assert!(remaining.is_empty());

    pool.close().await;
    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn oversized_name_violates_check_constraint() {
    let (pool, db_name) = create_test_db().await;

    // The application validates first, but the CHECK is the backstop.
    let result = todos::insert_todo(&pool, &"x".repeat(256)).await;
    assert!(result.is_err(), "256-char name should violate the CHECK");

    let listed = todos::list_todos(&pool).await.unwrap();
    assert!(listed.is_empty(), "no row should have been inserted");

    pool.close().await;
    drop_test_db(&db_name).await;
}
