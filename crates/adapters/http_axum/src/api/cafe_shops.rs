//! JSON REST handlers for cafe shops.

use std::collections::HashMap;
use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use cafeshop_app::ports::CafeShopRepository;
use cafeshop_domain::cafe_shop::{
    CafeShop, CafeShopDetails, CafeShopDetailsBuilder, CafeShopField, FieldUpdate,
};
use cafeshop_domain::error::{CafeShopError, FieldError, ValidationError};
use cafeshop_domain::id::CafeShopId;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body carrying the user-editable fields of a cafe shop.
///
/// Values may be JSON strings or numbers; anything else counts as missing.
#[derive(Debug, Default, Deserialize)]
pub struct CafeShopRequest {
    pub cafe_username: Option<Value>,
    pub cafe: Option<Value>,
    pub location: Option<Value>,
    pub open: Option<Value>,
    pub close: Option<Value>,
    pub coffee_rating: Option<Value>,
    pub wifi_rating: Option<Value>,
    pub power_rating: Option<Value>,
}

impl CafeShopRequest {
    fn into_builder(self) -> CafeShopDetailsBuilder {
        CafeShopDetails::builder()
            .field(CafeShopField::CafeUsername, as_text(self.cafe_username))
            .field(CafeShopField::Cafe, as_text(self.cafe))
            .field(CafeShopField::Location, as_text(self.location))
            .field(CafeShopField::Open, as_text(self.open))
            .field(CafeShopField::Close, as_text(self.close))
            .field(CafeShopField::CoffeeRating, as_text(self.coffee_rating))
            .field(CafeShopField::WifiRating, as_text(self.wifi_rating))
            .field(CafeShopField::PowerRating, as_text(self.power_rating))
    }
}

fn as_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn parse_id(raw: &str) -> Result<CafeShopId, ApiError> {
    CafeShopId::from_str(raw)
        .map_err(|_| CafeShopError::from(ValidationError::InvalidId(raw.to_string())).into())
}

/// Entry of the list endpoint.
#[derive(Debug, Serialize)]
pub struct CafeShopSummary {
    pub id: CafeShopId,
    pub cafe_username: String,
}

/// Body of the lookup endpoint.
#[derive(Debug, Serialize)]
pub struct CafeShopHeadline {
    pub id: CafeShopId,
    pub cafe: String,
}

/// Body returned after a full replacement.
#[derive(Debug, Serialize)]
pub struct ReplacedCafeShop {
    #[serde(flatten)]
    pub shop: CafeShop,
    pub message: String,
}

/// Body returned after a delete.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<CafeShopSummary>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the lookup endpoint.
pub enum GetResponse {
    Ok(Json<CafeShopHeadline>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the details endpoint.
pub enum DetailsResponse {
    Ok(Json<CafeShop>),
}

impl IntoResponse for DetailsResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<CafeShop>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the replace endpoint.
pub enum ReplaceResponse {
    Ok(Json<ReplacedCafeShop>),
}

impl IntoResponse for ReplaceResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the single-field update endpoint.
///
/// The body is keyed by the written column, so it is assembled as a map.
pub enum UpdateFieldResponse {
    Ok(Json<serde_json::Map<String, Value>>),
}

impl IntoResponse for UpdateFieldResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Ok(Json<Message>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /`
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: CafeShopRepository + Send + Sync + 'static,
{
    let shops = state.cafe_shop_service.list_cafe_shops().await?;
    let summaries = shops
        .into_iter()
        .map(|shop| CafeShopSummary {
            id: shop.id,
            cafe_username: shop.details.cafe_username,
        })
        .collect();
    Ok(ListResponse::Ok(Json(summaries)))
}

/// `GET /search/cafe-shop/{cafe_id}`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(cafe_id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    R: CafeShopRepository + Send + Sync + 'static,
{
    let id = parse_id(&cafe_id)?;
    let shop = state.cafe_shop_service.get_cafe_shop(id).await?;
    Ok(GetResponse::Ok(Json(CafeShopHeadline {
        id: shop.id,
        cafe: shop.details.cafe,
    })))
}

/// `GET /search/cafe-shop/{cafe_id}/details`
pub async fn details<R>(
    State(state): State<AppState<R>>,
    Path(cafe_id): Path<String>,
) -> Result<DetailsResponse, ApiError>
where
    R: CafeShopRepository + Send + Sync + 'static,
{
    let id = parse_id(&cafe_id)?;
    let shop = state.cafe_shop_service.get_cafe_shop(id).await?;
    Ok(DetailsResponse::Ok(Json(shop)))
}

/// `POST /add/cafe-shop/{cafe_username}`
///
/// The body may omit `cafe_username`; when present it must equal the path value.
pub async fn create<R>(
    State(state): State<AppState<R>>,
    Path(cafe_username): Path<String>,
    payload: Result<Json<CafeShopRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    R: CafeShopRepository + Send + Sync + 'static,
{
    let Json(mut req) = payload?;
    let mismatch = as_text(req.cafe_username.take()).is_some_and(|body| body != cafe_username);

    let mut builder = req.into_builder().cafe_username(cafe_username);
    if mismatch {
        builder = builder.reject(FieldError::mismatch(CafeShopField::CafeUsername.column()));
    }
    let details = builder.build()?;
    let created = state.cafe_shop_service.create_cafe_shop(details).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /update/cafe-entries/{cafe_id}`
pub async fn replace<R>(
    State(state): State<AppState<R>>,
    Path(cafe_id): Path<String>,
    payload: Result<Json<CafeShopRequest>, JsonRejection>,
) -> Result<ReplaceResponse, ApiError>
where
    R: CafeShopRepository + Send + Sync + 'static,
{
    let id = parse_id(&cafe_id)?;
    let Json(req) = payload?;
    let details = req.into_builder().build()?;

    let shop = state.cafe_shop_service.replace_cafe_shop(id, details).await?;
    let message = format!(
        "Cafe shop with cafe username {} entries updated successfully.",
        shop.details.cafe_username
    );
    Ok(ReplaceResponse::Ok(Json(ReplacedCafeShop { shop, message })))
}

/// `PATCH /update/cafe-shop/{cafe_id}/{field}`
///
/// `field` is a slug (`wifi-rating`) or column name (`wifi_rating`); the body
/// carries the new value under the column name.
pub async fn update_field<R>(
    State(state): State<AppState<R>>,
    Path((cafe_id, field)): Path<(String, String)>,
    payload: Result<Json<HashMap<String, Value>>, JsonRejection>,
) -> Result<UpdateFieldResponse, ApiError>
where
    R: CafeShopRepository + Send + Sync + 'static,
{
    let id = parse_id(&cafe_id)?;
    let field = CafeShopField::from_str(&field).map_err(CafeShopError::from)?;
    let Json(mut body) = payload?;
    let update = FieldUpdate::new(field, as_text(body.remove(field.column())))?;

    state
        .cafe_shop_service
        .update_cafe_shop_field(id, &update)
        .await?;

    let mut response = serde_json::Map::new();
    response.insert("id".to_string(), Value::from(id.as_i64()));
    response.insert(field.column().to_string(), Value::from(update.value()));
    response.insert(
        "message".to_string(),
        Value::from(format!(
            "Cafe shop with ID {id} and {field} : {} updated successfully.",
            update.value()
        )),
    );
    Ok(UpdateFieldResponse::Ok(Json(response)))
}

/// `DELETE /delete/cafe-shop/{cafe_id}`
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path(cafe_id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    R: CafeShopRepository + Send + Sync + 'static,
{
    let id = parse_id(&cafe_id)?;
    state.cafe_shop_service.delete_cafe_shop(id).await?;
    Ok(DeleteResponse::Ok(Json(Message {
        message: format!("Cafe shop with ID {id} deleted."),
    })))
}
