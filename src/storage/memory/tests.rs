use std::collections::HashMap;

use serde_json::json;

use super::*;
use crate::domain::{NewOrder, NewProduct, OrderUpdate, ProductUpdate, STATUS_CANCELED};
use crate::storage::{OrderStore, ProductStore, StorageError};

fn pending_order(email: &str) -> NewOrder {
    NewOrder {
        user_email: email.to_string(),
        status: "Pending".to_string(),
        extra: HashMap::new(),
    }
}

#[tokio::test]
async fn test_create_assigns_id_and_timestamp() {
    let store = MemoryOrderStore::new();

    let created = store.create(pending_order("a@b.com")).await.unwrap();
    assert!(!created.id.is_empty());

    // createdAt must serialize as valid RFC 3339 on the wire.
    let wire = serde_json::to_value(&created).unwrap();
    let raw = wire["createdAt"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(raw).is_ok());

    let fetched = store.get_by_id(&created.id).await.unwrap();
    assert_eq!(fetched, Some(created));
}

#[tokio::test]
async fn test_get_by_id_missing_returns_none() {
    let store = MemoryOrderStore::new();
    let result = store.get_by_id("never-created").await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_update_changes_only_status() {
    let store = MemoryOrderStore::new();

    let created = store
        .create(NewOrder {
            user_email: "a@b.com".to_string(),
            status: "Pending".to_string(),
            extra: HashMap::from([
                ("total".to_string(), json!(49.5)),
                ("address".to_string(), json!({"city": "Lagos"})),
            ]),
        })
        .await
        .unwrap();

    let updated = store
        .update(
            &created.id,
            OrderUpdate {
                status: "Shipped".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.status, "Shipped");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.user_email, created.user_email);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.extra, created.extra);
}

#[tokio::test]
async fn test_update_missing_id_is_not_found() {
    let store = MemoryOrderStore::new();

    let err = store
        .update(
            "does-not-exist",
            OrderUpdate {
                status: "Shipped".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }));
}

#[tokio::test]
async fn test_cancel_overrides_any_status_and_is_idempotent() {
    let store = MemoryOrderStore::new();

    let created = store
        .create(NewOrder {
            user_email: "a@b.com".to_string(),
            status: "Delivered".to_string(),
            extra: HashMap::new(),
        })
        .await
        .unwrap();

    // No state-machine validation: a delivered order can be canceled.
    let canceled = store.cancel(&created.id).await.unwrap();
    assert_eq!(canceled.status, STATUS_CANCELED);

    let again = store.cancel(&created.id).await.unwrap();
    assert_eq!(again, canceled);
}

#[tokio::test]
async fn test_get_by_user_email_returns_exact_subset() {
    let store = MemoryOrderStore::new();

    let mine1 = store.create(pending_order("a@b.com")).await.unwrap();
    let mine2 = store.create(pending_order("a@b.com")).await.unwrap();
    store.create(pending_order("c@d.com")).await.unwrap();

    let mine = store.get_by_user_email("a@b.com").await.unwrap();
    let mut ids: Vec<&str> = mine.iter().map(|order| order.id.as_str()).collect();
    ids.sort_unstable();

    let mut expected = vec![mine1.id.as_str(), mine2.id.as_str()];
    expected.sort_unstable();
    assert_eq!(ids, expected);

    let all = store.get_all().await.unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let store = MemoryOrderStore::new();

    let created = store.create(pending_order("a@b.com")).await.unwrap();
    store.delete(&created.id).await.unwrap();
    assert!(store.get_by_id(&created.id).await.unwrap().is_none());

    // Deleting an id that no longer exists is not an error.
    store.delete(&created.id).await.unwrap();
    store.delete("never-created").await.unwrap();
}

#[tokio::test]
async fn test_create_product_returns_persisted_record() {
    let store = MemoryProductStore::new();

    let created = store
        .create(NewProduct {
            name: "Mug".to_string(),
            price: 9.99,
            image: None,
            description: None,
        })
        .await
        .unwrap();

    // The returned record carries the generated fields, not just the
    // caller-supplied ones.
    assert!(!created.id.is_empty());
    assert_eq!(created.name.as_deref(), Some("Mug"));
    assert_eq!(created.price, Some(9.99));

    let fetched = store.get_by_id(&created.id).await.unwrap();
    assert_eq!(fetched, Some(created));
}

#[tokio::test]
async fn test_product_update_clears_omitted_fields() {
    let store = MemoryProductStore::new();

    let created = store
        .create(NewProduct {
            name: "Mug".to_string(),
            price: 9.99,
            image: Some("https://cdn.example/mug.png".to_string()),
            description: Some("A mug".to_string()),
        })
        .await
        .unwrap();

    let updated = store
        .update(
            &created.id,
            ProductUpdate {
                name: Some("Mug XL".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name.as_deref(), Some("Mug XL"));
    assert!(updated.price.is_none());
    assert!(updated.image.is_none());
    assert!(updated.description.is_none());
    assert_eq!(updated.created_at, created.created_at);
}

#[tokio::test]
async fn test_product_update_missing_id_is_not_found() {
    let store = MemoryProductStore::new();

    let err = store
        .update("does-not-exist", ProductUpdate::default())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        StorageError::NotFound { ref table, .. } if table == "products"
    ));
}
