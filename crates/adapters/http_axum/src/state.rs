//! Shared application state for axum handlers.

use std::sync::Arc;

use cafeshop_app::ports::CafeShopRepository;
use cafeshop_app::services::cafe_shop_service::CafeShopService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need
/// to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Cafe shop CRUD service.
    pub cafe_shop_service: Arc<CafeShopService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            cafe_shop_service: Arc::clone(&self.cafe_shop_service),
        }
    }
}

impl<R> AppState<R>
where
    R: CafeShopRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(cafe_shop_service: CafeShopService<R>) -> Self {
        Self {
            cafe_shop_service: Arc::new(cafe_shop_service),
        }
    }
}
