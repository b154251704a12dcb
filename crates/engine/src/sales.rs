//! The sales resource: one row per item sold.

use sea_orm::{ActiveValue, DatabaseConnection, DbErr, QueryOrder, entity::prelude::*};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Resource, validate};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sales")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub item_name: String,
    pub amount: f64,
    pub date: String,
    pub customer: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Validated sale fields, trimmed and ready to insert.
#[derive(Clone, Debug, PartialEq)]
pub struct NewSale {
    pub item_name: String,
    pub amount: f64,
    pub date: String,
    pub customer: Option<String>,
}

pub fn validate(payload: &Value) -> Result<NewSale, Vec<String>> {
    let map = validate::object(payload, "Sale")?;
    let mut errors = Vec::new();

    let item_name = validate::required_string(map, "item_name", &mut errors);
    let amount = validate::required_amount(map, "amount", &mut errors);
    let date = validate::required_date(map, "date", &mut errors);
    let customer = validate::optional_string(map, "customer", &mut errors);

    match (item_name, amount, date, customer) {
        (Some(item_name), Some(amount), Some(date), Some(customer)) => Ok(NewSale {
            item_name,
            amount,
            date,
            customer,
        }),
        _ => Err(errors),
    }
}

/// Resource descriptor for sales.
pub struct Sale;

impl Resource for Sale {
    type Draft = NewSale;
    type Record = Model;

    const SINGULAR: &'static str = "sale";
    const PLURAL: &'static str = "sales";
    const DISPLAY: &'static str = "Sale";

    fn validate(payload: &Value) -> Result<NewSale, Vec<String>> {
        validate(payload)
    }

    async fn insert(database: &DatabaseConnection, draft: NewSale) -> Result<Model, DbErr> {
        ActiveModel {
            item_name: ActiveValue::Set(draft.item_name),
            amount: ActiveValue::Set(draft.amount),
            date: ActiveValue::Set(draft.date),
            customer: ActiveValue::Set(draft.customer),
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
