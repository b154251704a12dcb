use axum::Json;
use chrono::Utc;

use api_types::health::Health;

pub async fn get() -> Json<Health> {
    Json(Health {
        status: "OK".to_string(),
        message: "bottega API is running".to_string(),
        timestamp: Utc::now(),
    })
}
