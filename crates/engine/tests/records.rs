use engine::{Engine, EngineError, Expense, InventoryItem, Sale};
use migration::MigratorTrait;
use sea_orm::Database;
use serde_json::json;

async fn engine_with_db() -> Engine {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    Engine::new(db)
}

#[tokio::test]
async fn create_then_list_returns_persisted_record() {
    let engine = engine_with_db().await;

    let created = engine
        .create::<Sale>(&json!({
            "item_name": "  Widget ",
            "amount": 19.99,
            "date": "2024-03-01",
            "customer": "Acme"
        }))
        .await
        .unwrap();

    assert_eq!(created.item_name, "Widget");
    assert_eq!(created.amount, 19.99);
    assert_eq!(created.customer, Some("Acme".to_string()));
    assert!(created.id >= 1);

    let sales = engine.list::<Sale>().await.unwrap();
    assert_eq!(sales, vec![created]);
}

#[tokio::test]
async fn invalid_payload_persists_nothing() {
    let engine = engine_with_db().await;

    let err = engine
        .create::<Sale>(&json!({"item_name": "", "amount": -1, "date": "nope"}))
        .await
        .unwrap_err();

    match err {
        EngineError::Validation(errors) => assert_eq!(errors.len(), 3),
        other => panic!("expected validation error, got {other:?}"),
    }

    assert!(engine.list::<Sale>().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_on_empty_table_is_empty() {
    let engine = engine_with_db().await;
    assert!(engine.list::<Expense>().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_returns_most_recent_first() {
    let engine = engine_with_db().await;

    for name in ["A", "B", "C"] {
        engine
            .create::<InventoryItem>(&json!({
                "item_name": name,
                "quantity": 1,
                "price": 1.0
            }))
            .await
            .unwrap();
    }

    let items = engine.list::<InventoryItem>().await.unwrap();
    let names: Vec<&str> = items.iter().map(|i| i.item_name.as_str()).collect();
    assert_eq!(names, vec!["C", "B", "A"]);
}

#[tokio::test]
async fn list_is_a_pure_read() {
    let engine = engine_with_db().await;

    engine
        .create::<Expense>(&json!({
            "description": "Rent",
            "amount": 1200,
            "date": "2024-02-01"
        }))
        .await
        .unwrap();

    let first = engine.list::<Expense>().await.unwrap();
    let second = engine.list::<Expense>().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn zero_amounts_are_inclusive_boundaries() {
    let engine = engine_with_db().await;

    engine
        .create::<Sale>(&json!({
            "item_name": "Freebie",
            "amount": 0,
            "date": "2024-03-01"
        }))
        .await
        .unwrap();

    engine
        .create::<InventoryItem>(&json!({
            "item_name": "Sample",
            "quantity": 0,
            "price": 0
        }))
        .await
        .unwrap();

    assert_eq!(engine.list::<Sale>().await.unwrap().len(), 1);
    assert_eq!(engine.list::<InventoryItem>().await.unwrap().len(), 1);
}
