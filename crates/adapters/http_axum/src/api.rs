//! JSON REST API handler modules.

use axum::Router;
use axum::routing::{delete, get, patch, post, put};

use cafeshop_app::ports::CafeShopRepository;

use crate::state::AppState;

#[allow(clippy::missing_errors_doc)]
pub mod cafe_shops;

/// Routes of the cafe shop API, mounted at the root.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: CafeShopRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(cafe_shops::list::<R>))
        .route("/add/cafe-shop/{cafe_username}", post(cafe_shops::create::<R>))
        .route("/search/cafe-shop/{cafe_id}", get(cafe_shops::get::<R>))
        .route(
            "/search/cafe-shop/{cafe_id}/details",
            get(cafe_shops::details::<R>),
        )
        .route(
            "/update/cafe-entries/{cafe_id}",
            put(cafe_shops::replace::<R>),
        )
        .route(
            "/update/cafe-shop/{cafe_id}/{field}",
            patch(cafe_shops::update_field::<R>),
        )
        .route("/delete/cafe-shop/{cafe_id}", delete(cafe_shops::delete::<R>))
}
