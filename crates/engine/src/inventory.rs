//! The inventory resource: stocked items with quantity and unit price.

use sea_orm::{ActiveValue, DatabaseConnection, DbErr, QueryOrder, entity::prelude::*};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Resource, validate};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inventory")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub item_name: String,
    pub quantity: i64,
    pub price: f64,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq)]
pub struct NewInventoryItem {
    pub item_name: String,
    pub quantity: i64,
    pub price: f64,
}

pub fn validate(payload: &Value) -> Result<NewInventoryItem, Vec<String>> {
    let map = validate::object(payload, "Inventory item")?;
    let mut errors = Vec::new();

    let item_name = validate::required_string(map, "item_name", &mut errors);
    let quantity = validate::required_quantity(map, "quantity", &mut errors);
    let price = validate::required_amount(map, "price", &mut errors);

    match (item_name, quantity, price) {
        (Some(item_name), Some(quantity), Some(price)) => Ok(NewInventoryItem {
            item_name,
            quantity,
            price,
        }),
        _ => Err(errors),
    }
}

/// Resource descriptor for inventory items.
pub struct InventoryItem;

impl Resource for InventoryItem {
    type Draft = NewInventoryItem;
    type Record = Model;

    const SINGULAR: &'static str = "inventory item";
    const PLURAL: &'static str = "inventory items";
    const DISPLAY: &'static str = "Inventory item";

    fn validate(payload: &Value) -> Result<NewInventoryItem, Vec<String>> {
        validate(payload)
    }

    async fn insert(
        database: &DatabaseConnection,
        draft: NewInventoryItem,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            item_name: ActiveValue::Set(draft.item_name),
            quantity: ActiveValue::Set(draft.quantity),
            price: ActiveValue::Set(draft.price),
            ..Default::default()
        }
        .insert(database)
        .await
    }

    async fn list_all(database: &DatabaseConnection) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(database)
            .await
    }
}
