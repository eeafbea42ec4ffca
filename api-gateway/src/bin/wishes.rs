//! Wishlist Lambda - Proxies wishlist CRUD to a Notion database.
//!
//! Endpoints:
//! - OPTIONS - CORS preflight
//! - GET - List all wishes, oldest first
//! - POST - Create a wish `{text}`
//! - PUT - Replace a wish's months `{id, months}`
//! - DELETE - Archive a wish `{id}`

use lambda_http::http::Method;
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use shared::http::{empty_response, error_response, json_response};
use shared::{
    parse_body, resolve_api_key, Config, CreateWishRequest, DeleteResponse, DeleteWishRequest,
    NotionWishStore, UpdateWishRequest, WishStore,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

async fn handler<S: WishStore>(store: &S, event: Request) -> Result<Response<Body>, Error> {
    let method = event.method().clone();

    info!("Received request: method={}", method);

    if method == Method::OPTIONS {
        return empty_response(200);
    }

    let result = match method {
        Method::GET => store.list().await.map(|wishes| json_response(200, &wishes)),

        Method::POST => {
            let request: CreateWishRequest = parse_body!(event.body());
            store
                .create(&request.text)
                .await
                .map(|wish| json_response(200, &wish))
        }

        Method::PUT => {
            let request: UpdateWishRequest = parse_body!(event.body());
            store
                .update_months(&request.id, &request.months)
                .await
                .map(|wish| json_response(200, &wish))
        }

        Method::DELETE => {
            let request: DeleteWishRequest = parse_body!(event.body());
            store
                .archive(&request.id)
                .await
                .map(|()| json_response(200, &DeleteResponse { ok: true }))
        }

        _ => return error_response(405, "Method not allowed"),
    };

    match result {
        Ok(response) => response,
        Err(e) => {
            error!(method = %method, error = %e, "Wish store request failed");
            error_response(e.status_code(), e.to_string())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = Config::from_env()?;
    info!(database_id = %config.notion_database_id, "Starting wishlist handler");

    let api_key = resolve_api_key(&config).await?;
    let store = Arc::new(NotionWishStore::from_config(&config, api_key)?);

    run(service_fn(move |event| {
        let store = Arc::clone(&store);
        async move { handler(store.as_ref(), event).await }
    }))
    .await
}
