//! Cafe shop service — use-cases for managing cafe shop rows.

use cafeshop_domain::cafe_shop::{CafeShop, CafeShopDetails, FieldUpdate};
use cafeshop_domain::error::{CafeShopError, NotFoundError};
use cafeshop_domain::id::CafeShopId;

use crate::ports::CafeShopRepository;

const ENTITY: &str = "Cafe shop";
const COLLECTION: &str = "cafe_shops";

fn not_found(id: CafeShopId) -> CafeShopError {
    NotFoundError::Record {
        entity: ENTITY,
        id: id.to_string(),
    }
    .into()
}

/// Application service for cafe shop CRUD operations.
pub struct CafeShopService<R> {
    repo: R,
}

impl<R: CafeShopRepository> CafeShopService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new cafe shop after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CafeShopError::Validation`] if invariants fail (nothing is
    /// written), or a storage error propagated from the repository.
    #[tracing::instrument(skip(self, details), fields(cafe_username = %details.cafe_username))]
    pub async fn create_cafe_shop(
        &self,
        details: CafeShopDetails,
    ) -> Result<CafeShop, CafeShopError> {
        details.validate()?;
        let created = self.repo.create(details).await?;
        tracing::info!(id = %created.id, "cafe shop created");
        Ok(created)
    }

    /// List every cafe shop.
    ///
    /// # Errors
    ///
    /// Returns [`CafeShopError::NotFound`] when the table is empty, or a
    /// storage error from the repository.
    pub async fn list_cafe_shops(&self) -> Result<Vec<CafeShop>, CafeShopError> {
        let shops = self.repo.get_all().await?;
        if shops.is_empty() {
            return Err(NotFoundError::Empty {
                collection: COLLECTION,
            }
            .into());
        }
        Ok(shops)
    }

    /// Look up a cafe shop by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`CafeShopError::NotFound`] when no row with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_cafe_shop(&self, id: CafeShopId) -> Result<CafeShop, CafeShopError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Replace every mutable field of an existing row.
    ///
    /// # Errors
    ///
    /// Returns [`CafeShopError::Validation`] if invariants fail,
    /// [`CafeShopError::NotFound`] when no row with `id` exists, or a storage
    /// error from the repository.
    #[tracing::instrument(skip(self, details))]
    pub async fn replace_cafe_shop(
        &self,
        id: CafeShopId,
        details: CafeShopDetails,
    ) -> Result<CafeShop, CafeShopError> {
        details.validate()?;
        self.repo
            .update(CafeShop { id, details })
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Write a single validated column of an existing row.
    ///
    /// # Errors
    ///
    /// Returns [`CafeShopError::NotFound`] when no row with `id` exists, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, update), fields(field = %update.field()))]
    pub async fn update_cafe_shop_field(
        &self,
        id: CafeShopId,
        update: &FieldUpdate,
    ) -> Result<(), CafeShopError> {
        if self.repo.update_field(id, update).await? {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }

    /// Delete a cafe shop by id.
    ///
    /// # Errors
    ///
    /// Returns [`CafeShopError::NotFound`] when no row with `id` exists, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_cafe_shop(&self, id: CafeShopId) -> Result<(), CafeShopError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }
}
