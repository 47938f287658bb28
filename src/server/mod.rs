use crate::core::aggregator::select_winner;
use crate::core::dispatcher::Dispatcher;
use crate::domain::model::ProductRequest;
use crate::domain::ports::{MerchantResolver, OfferCaller};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;

pub struct AppState<C: OfferCaller, R: MerchantResolver> {
    pub dispatcher: Dispatcher<C>,
    pub resolver: R,
}

pub fn build_router<C, R>(state: Arc<AppState<C, R>>) -> Router
where
    C: OfferCaller + 'static,
    R: MerchantResolver + 'static,
{
    Router::new()
        .route("/products", post(serve_product_request::<C, R>))
        .route("/health", get(health_check))
        .with_state(state)
}

/// Serves one product search: resolve merchants, fan the request out,
/// answer with the cheapest offer (200) or no content at all (204).
/// Only a malformed request is an error to the client (400); individual
/// merchant failures never are.
async fn serve_product_request<C, R>(
    State(state): State<Arc<AppState<C, R>>>,
    Json(request): Json<ProductRequest>,
) -> Response
where
    C: OfferCaller + 'static,
    R: MerchantResolver + 'static,
{
    tracing::debug!("Product request {} received from a client", request.id);

    if let Err(e) = request.validate() {
        tracing::debug!("Rejecting product request {}: {}", request.id, e);
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": e.to_string()})),
        )
            .into_response();
    }

    let merchants = match state.resolver.resolve(&request).await {
        Ok(merchants) => merchants,
        Err(e) => {
            tracing::error!(
                "Merchant resolution failed for product request {}: {}",
                request.id,
                e
            );
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let outcomes = state.dispatcher.dispatch(&request, &merchants).await;

    match select_winner(outcomes) {
        Some(offer) => {
            tracing::debug!(
                "Product request {} successfully processed with offer {}",
                request.id,
                offer.id
            );
            (StatusCode::OK, Json(offer)).into_response()
        }
        None => {
            tracing::debug!(
                "Product request {} successfully processed with no content",
                request.id
            );
            StatusCode::NO_CONTENT.into_response()
        }
    }
}

async fn health_check() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

pub async fn serve<C, R>(state: Arc<AppState<C, R>>, addr: SocketAddr) -> Result<()>
where
    C: OfferCaller + 'static,
    R: MerchantResolver + 'static,
{
    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("offer-hub listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
