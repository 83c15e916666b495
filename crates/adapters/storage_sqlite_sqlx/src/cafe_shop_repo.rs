//! `SQLite` implementation of [`CafeShopRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use cafeshop_app::ports::CafeShopRepository;
use cafeshop_domain::cafe_shop::{CafeShop, CafeShopDetails, CafeShopField, FieldUpdate, Rating};
use cafeshop_domain::error::CafeShopError;
use cafeshop_domain::id::CafeShopId;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`CafeShop`].
struct Wrapper(CafeShop);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<CafeShop> {
        value.map(|w| w.0)
    }
}

fn text(row: &SqliteRow, column: &str) -> Result<String, sqlx::Error> {
    let value: Option<String> = row.try_get(column)?;
    Ok(value.unwrap_or_default())
}

fn rating(row: &SqliteRow, column: &str) -> Result<Rating, sqlx::Error> {
    text(row, column)?
        .parse()
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;

        Ok(Self(CafeShop {
            id: CafeShopId::from_i64(id),
            details: CafeShopDetails {
                cafe_username: text(row, "cafe_username")?,
                cafe: text(row, "cafe")?,
                location: text(row, "location")?,
                open: text(row, "open")?,
                close: text(row, "close")?,
                coffee_rating: rating(row, "coffee_rating")?,
                wifi_rating: rating(row, "wifi_rating")?,
                power_rating: rating(row, "power_rating")?,
            },
        }))
    }
}

const INSERT: &str = "INSERT INTO cafe_shops (cafe_username, cafe, location, open, close, \
     coffee_rating, wifi_rating, power_rating) VALUES (?, ?, ?, ?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM cafe_shops WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM cafe_shops ORDER BY id";
const UPDATE: &str = "UPDATE cafe_shops SET cafe_username = ?, cafe = ?, location = ?, open = ?, \
     close = ?, coffee_rating = ?, wifi_rating = ?, power_rating = ? WHERE id = ?";
const UPDATE_CAFE_USERNAME: &str = "UPDATE cafe_shops SET cafe_username = ? WHERE id = ?";
const UPDATE_CAFE: &str = "UPDATE cafe_shops SET cafe = ? WHERE id = ?";
const UPDATE_LOCATION: &str = "UPDATE cafe_shops SET location = ? WHERE id = ?";
const UPDATE_OPEN: &str = "UPDATE cafe_shops SET open = ? WHERE id = ?";
const UPDATE_CLOSE: &str = "UPDATE cafe_shops SET close = ? WHERE id = ?";
const UPDATE_COFFEE_RATING: &str = "UPDATE cafe_shops SET coffee_rating = ? WHERE id = ?";
const UPDATE_WIFI_RATING: &str = "UPDATE cafe_shops SET wifi_rating = ? WHERE id = ?";
const UPDATE_POWER_RATING: &str = "UPDATE cafe_shops SET power_rating = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM cafe_shops WHERE id = ?";

/// Statement writing the column behind `field`.
fn update_field_statement(field: CafeShopField) -> &'static str {
    match field {
        CafeShopField::CafeUsername => UPDATE_CAFE_USERNAME,
        CafeShopField::Cafe => UPDATE_CAFE,
        CafeShopField::Location => UPDATE_LOCATION,
        CafeShopField::Open => UPDATE_OPEN,
        CafeShopField::Close => UPDATE_CLOSE,
        CafeShopField::CoffeeRating => UPDATE_COFFEE_RATING,
        CafeShopField::WifiRating => UPDATE_WIFI_RATING,
        CafeShopField::PowerRating => UPDATE_POWER_RATING,
    }
}

/// `SQLite`-backed cafe shop repository.
pub struct SqliteCafeShopRepository {
    pool: SqlitePool,
}

impl SqliteCafeShopRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl CafeShopRepository for SqliteCafeShopRepository {
    fn create(
        &self,
        details: CafeShopDetails,
    ) -> impl Future<Output = Result<CafeShop, CafeShopError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&details.cafe_username)
                .bind(&details.cafe)
                .bind(&details.location)
                .bind(&details.open)
                .bind(&details.close)
                .bind(details.coffee_rating.as_str())
                .bind(details.wifi_rating.as_str())
                .bind(details.power_rating.as_str())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(CafeShop {
                id: CafeShopId::from_i64(result.last_insert_rowid()),
                details,
            })
        }
    }

    fn get_by_id(
        &self,
        id: CafeShopId,
    ) -> impl Future<Output = Result<Option<CafeShop>, CafeShopError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<CafeShop>, CafeShopError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        shop: CafeShop,
    ) -> impl Future<Output = Result<Option<CafeShop>, CafeShopError>> + Send {
        let pool = self.pool.clone();
        async move {
            let details = &shop.details;
            let result = sqlx::query(UPDATE)
                .bind(&details.cafe_username)
                .bind(&details.cafe)
                .bind(&details.location)
                .bind(&details.open)
                .bind(&details.close)
                .bind(details.coffee_rating.as_str())
                .bind(details.wifi_rating.as_str())
                .bind(details.power_rating.as_str())
                .bind(shop.id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok((result.rows_affected() > 0).then_some(shop))
        }
    }

    fn update_field(
        &self,
        id: CafeShopId,
        update: &FieldUpdate,
    ) -> impl Future<Output = Result<bool, CafeShopError>> + Send {
        let pool = self.pool.clone();
        let statement = update_field_statement(update.field());
        let value = update.value().to_string();
        async move {
            let result = sqlx::query(statement)
                .bind(value)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }

    fn delete(&self, id: CafeShopId) -> impl Future<Output = Result<bool, CafeShopError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }
}
