use axum::{routing::post, Json, Router};
use tracing::{debug, instrument};

use crate::{
    cart::{
        dto::{CartTotalRequest, CartTotalResponse},
        services::calculate_total,
    },
    state::AppState,
};

pub fn cart_routes() -> Router<AppState> {
    Router::new().route("/cart/total", post(total))
}

#[instrument(skip(payload))]
pub async fn total(Json(payload): Json<CartTotalRequest>) -> Json<CartTotalResponse> {
    let total = calculate_total(&payload.items);
    debug!(items = payload.items.len(), total, "cart total computed");
    Json(CartTotalResponse { total })
}
