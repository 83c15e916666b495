//! Storage port — repository trait for persistence.

use std::future::Future;

use cafeshop_domain::cafe_shop::{CafeShop, CafeShopDetails, FieldUpdate};
use cafeshop_domain::error::CafeShopError;
use cafeshop_domain::id::CafeShopId;

/// Persistence of cafe shop rows.
///
/// Write methods report whether a row matched the id instead of failing, so
/// the service decides how a miss is surfaced.
pub trait CafeShopRepository {
    /// Insert a new row and return it with its assigned id.
    fn create(
        &self,
        details: CafeShopDetails,
    ) -> impl Future<Output = Result<CafeShop, CafeShopError>> + Send;

    fn get_by_id(
        &self,
        id: CafeShopId,
    ) -> impl Future<Output = Result<Option<CafeShop>, CafeShopError>> + Send;

    /// Every row, ordered by id.
    fn get_all(&self) -> impl Future<Output = Result<Vec<CafeShop>, CafeShopError>> + Send;

    /// Overwrite every mutable column. `None` when no row has `shop.id`.
    fn update(
        &self,
        shop: CafeShop,
    ) -> impl Future<Output = Result<Option<CafeShop>, CafeShopError>> + Send;

    /// Overwrite a single column. `false` when no row has `id`.
    fn update_field(
        &self,
        id: CafeShopId,
        update: &FieldUpdate,
    ) -> impl Future<Output = Result<bool, CafeShopError>> + Send;

    /// Remove a row. `false` when no row has `id`.
    fn delete(&self, id: CafeShopId) -> impl Future<Output = Result<bool, CafeShopError>> + Send;
}
