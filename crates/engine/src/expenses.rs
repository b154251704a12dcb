//! The expenses resource.

use sea_orm::{ActiveValue, DatabaseConnection, DbErr, QueryOrder, entity::prelude::*};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Resource, validate};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub description: String,
    pub amount: f64,
    pub date: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq)]
pub struct NewExpense {
    pub description: String,
    pub amount: f64,
    pub date: String,
}

pub fn validate(payload: &Value) -> Result<NewExpense, Vec<String>> {
    let map = validate::object(payload, "Expense")?;
    let mut errors = Vec::new();

    let description = validate::required_string(map, "description", &mut errors);
    let amount = validate::required_amount(map, "amount", &mut errors);
    let date = validate::required_date(map, "date", &mut errors);

    match (description, amount, date) {
        (Some(description), Some(amount), Some(date)) => Ok(NewExpense {
            description,
            amount,
            date,
        }),
        _ => Err(errors),
    }
}

/// Resource descriptor for expenses.
pub struct Expense;

impl Resource for Expense {
    type Draft = NewExpense;
    type Record = Model;

    const SINGULAR: &'static str = "expense";
    const PLURAL: &'static str = "expenses";
    const DISPLAY: &'static str = "Expense";

    fn validate(payload: &Value) -> Result<NewExpense, Vec<String>> {
        validate(payload)
    }

    async fn insert(database: &DatabaseConnection, draft: NewExpense) -> Result<Model, DbErr> {
        ActiveModel {
            description: ActiveValue::Set(draft.description),
            amount: ActiveValue::Set(draft.amount),
            date: ActiveValue::Set(draft.date),
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
