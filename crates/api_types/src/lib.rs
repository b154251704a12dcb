use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod envelope {
    use super::*;

    /// Uniform wrapper for operations that produced a record.
    ///
    /// Used with status 201 for persisted resources and 200 for the
    /// notification stub (which persists nothing).
    #[derive(Debug, Serialize, Deserialize)]
    pub struct Success<T> {
        pub success: bool,
        pub data: T,
        pub message: String,
    }

    impl<T> Success<T> {
        pub fn new(data: T, message: impl Into<String>) -> Self {
            Self {
                success: true,
                data,
                message: message.into(),
            }
        }
    }

    /// Wrapper for list responses. `count` always equals `data.len()`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct Listing<T> {
        pub success: bool,
        pub data: Vec<T>,
        pub count: usize,
    }

    impl<T> Listing<T> {
        pub fn new(data: Vec<T>) -> Self {
            let count = data.len();
            Self {
                success: true,
                data,
                count,
            }
        }
    }

    /// Wrapper for every failure response.
    ///
    /// Validation failures carry the violated rules in `details`; server
    /// failures carry a generic `message` and never the underlying storage
    /// error.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct Failure {
        pub success: bool,
        pub error: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub details: Option<Vec<String>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub message: Option<String>,
    }

    impl Failure {
        pub fn validation(details: Vec<String>) -> Self {
            Self {
                success: false,
                error: "Validation failed".to_string(),
                details: Some(details),
                message: None,
            }
        }

        pub fn server(error: impl Into<String>) -> Self {
            Self {
                success: false,
                error: error.into(),
                details: None,
                message: Some("Internal server error".to_string()),
            }
        }
    }
}

pub mod notification {
    use super::*;

    /// A demo notification as returned to clients. No transport is ever
    /// involved; `demo_mode` is always true.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct Notification {
        pub id: String,
        #[serde(rename = "type")]
        pub kind: String,
        pub recipient: String,
        pub message: String,
        pub priority: String,
        pub status: String,
        pub timestamp: DateTime<Utc>,
        pub demo_mode: bool,
        pub note: String,
    }
}

pub mod health {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct Health {
        pub status: String,
        pub message: String,
        pub timestamp: DateTime<Utc>,
    }
}
