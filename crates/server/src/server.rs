use axum::{
    Router,
    extract::Request,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
};

use engine::{Engine, Expense, InventoryItem, Sale};

use crate::{ApiError, health, notifications, resources};

#[derive(Clone)]
pub struct ServerState {
    pub engine: Engine,
}

/// Last-resort guard: runs the rest of the chain on its own task so a
/// panicking handler still answers with the generic 500 envelope instead
/// of dropping the connection.
async fn catch_unexpected(request: Request, next: Next) -> Response {
    match tokio::spawn(next.run(request)).await {
        Ok(response) => response,
        Err(err) => {
            tracing::error!("handler failed unexpectedly: {err}");
            ApiError::Unexpected.into_response()
        }
    }
}

/// Builds the application router. Exposed so tests can drive it directly
/// without binding a socket.
pub fn app(engine: Engine) -> Router {
    let state = ServerState { engine };

    Router::new()
        .route(
            "/api/sales",
            get(resources::list::<Sale>).post(resources::create::<Sale>),
        )
        .route(
            "/api/expenses",
            get(resources::list::<Expense>).post(resources::create::<Expense>),
        )
        .route(
            "/api/inventory",
            get(resources::list::<InventoryItem>).post(resources::create::<InventoryItem>),
        )
        .route("/api/notifications", post(notifications::send))
        .route("/api/health", get(health::get))
        .layer(middleware::from_fn(catch_unexpected))
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app(engine)).await
}

pub fn spawn_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(engine, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
