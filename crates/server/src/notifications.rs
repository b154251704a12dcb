//! Demo notification endpoint.
//!
//! Validates and "sends" a WhatsApp/SMS reminder without any transport:
//! the attempt is logged, a type-dependent delay is simulated, and the
//! response says so explicitly. Independent of the record store.

use std::time::Duration;

use axum::Json;
use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use api_types::{envelope::Success, notification::Notification};
use engine::validate;

use crate::ApiError;

const WHATSAPP_DELAY: Duration = Duration::from_millis(1500);
const SMS_DELAY: Duration = Duration::from_millis(800);

const KINDS: [&str; 2] = ["whatsapp", "sms"];
const PRIORITIES: [&str; 3] = ["low", "medium", "high"];

/// Validated notification fields. `kind` and `priority` are normalized to
/// lowercase; `priority` defaults to "medium".
#[derive(Clone, Debug, PartialEq)]
struct NewNotification {
    kind: String,
    message: String,
    recipient: String,
    priority: String,
}

fn validate_notification(payload: &Value) -> Result<NewNotification, Vec<String>> {
    let map = validate::object(payload, "Notification")?;
    let mut errors = Vec::new();

    let kind = match map.get("type") {
        Some(Value::String(s)) => {
            let lowered = s.to_lowercase();
            if KINDS.contains(&lowered.as_str()) {
                Some(lowered)
            } else {
                errors.push("type must be either \"whatsapp\" or \"sms\".".to_string());
                None
            }
        }
        _ => {
            errors.push("type is required and must be a string.".to_string());
            None
        }
    };

    let message = validate::required_string(map, "message", &mut errors);
    let recipient = validate::required_string(map, "recipient", &mut errors);

    let priority = match map.get("priority") {
        None | Some(Value::Null) => Some("medium".to_string()),
        Some(Value::String(s)) if PRIORITIES.contains(&s.to_lowercase().as_str()) => {
            Some(s.to_lowercase())
        }
        Some(_) => {
            errors.push("priority must be \"low\", \"medium\", or \"high\" if provided.".to_string());
            None
        }
    };

    match (kind, message, recipient, priority) {
        (Some(kind), Some(message), Some(recipient), Some(priority)) => Ok(NewNotification {
            kind,
            message,
            recipient,
            priority,
        }),
        _ => Err(errors),
    }
}

fn delay_for(kind: &str) -> Duration {
    if kind == "whatsapp" {
        WHATSAPP_DELAY
    } else {
        SMS_DELAY
    }
}

/// POST /api/notifications. Returns 200, not 201: nothing is persisted.
pub async fn send(Json(payload): Json<Value>) -> Result<Json<Success<Notification>>, ApiError> {
    let draft = validate_notification(&payload).map_err(ApiError::Validation)?;

    let id = format!("notif_{}", Uuid::new_v4().simple());
    let timestamp = Utc::now();

    tracing::info!(
        %id,
        kind = %draft.kind,
        recipient = %draft.recipient,
        priority = %draft.priority,
        "notification sent (demo mode)"
    );

    // Cooperative suspension only; concurrent requests are not blocked.
    tokio::time::sleep(delay_for(&draft.kind)).await;

    let notification = Notification {
        id,
        kind: draft.kind,
        recipient: draft.recipient,
        message: draft.message,
        priority: draft.priority,
        status: "sent".to_string(),
        timestamp,
        demo_mode: true,
        note: "This is a demo notification. No actual message was sent.".to_string(),
    };

    Ok(Json(Success::new(
        notification,
        "Notification sent successfully (demo mode)",
    )))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn type_enum_is_case_insensitive() {
        let draft = validate_notification(&json!({
            "type": "WhatsApp",
            "message": "hi",
            "recipient": "123"
        }))
        .unwrap();

        assert_eq!(draft.kind, "whatsapp");
        assert_eq!(draft.priority, "medium");
    }

    #[test]
    fn unknown_type_is_rejected() {
        let errors = validate_notification(&json!({
            "type": "pager",
            "message": "hi",
            "recipient": "123"
        }))
        .unwrap_err();

        assert_eq!(errors, vec!["type must be either \"whatsapp\" or \"sms\"."]);
    }

    #[test]
    fn priority_enum_is_checked_when_present() {
        let errors = validate_notification(&json!({
            "type": "sms",
            "message": "hi",
            "recipient": "123",
            "priority": "urgent"
        }))
        .unwrap_err();

        assert_eq!(
            errors,
            vec!["priority must be \"low\", \"medium\", or \"high\" if provided."]
        );

        let draft = validate_notification(&json!({
            "type": "sms",
            "message": "hi",
            "recipient": "123",
            "priority": "HIGH"
        }))
        .unwrap();
        assert_eq!(draft.priority, "high");
    }

    #[test]
    fn collects_every_violation() {
        let errors = validate_notification(&json!({})).unwrap_err();
        assert_eq!(
            errors,
            vec![
                "type is required and must be a string.",
                "message is required and must be a non-empty string.",
                "recipient is required and must be a non-empty string.",
            ]
        );
    }

    #[test]
    fn whatsapp_is_slower_than_sms() {
        assert!(delay_for("whatsapp") >= delay_for("sms"));
    }
}
