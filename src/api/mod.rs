//! HTTP/JSON transport: one `POST` route per service operation.
//!
//! Business outcomes are ordinary `200` answers. [`LomsError::InvalidArgument`] becomes
//! `400`, [`LomsError::Unavailable`] becomes `503`, and a request that outlives the
//! configured deadline is answered with `408`.

use crate::model::{Order, OrderId, OrderItem, OrderStatus, Sku, UserId};
use crate::service::{LomsError, ReservationService};
use axum::{extract::State, http::StatusCode, response::Json, routing::get, routing::post, Router};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

#[derive(Debug, Deserialize)]
pub struct OrderCreateRequest {
    pub user: i64,
    pub items: Vec<ItemDto>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDto {
    pub sku: u32,
    pub count: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OrderCreateResponse {
    #[serde(rename = "orderID")]
    pub order_id: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OrderIdRequest {
    #[serde(rename = "orderID")]
    pub order_id: u64,
}

/// Empty object when the order is unknown.
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderInfoResponse {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub status: Option<OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub user: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub items: Option<Vec<ItemDto>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StocksInfoRequest {
    pub sku: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StocksInfoResponse {
    pub count: u64,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Empty {}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

impl From<ItemDto> for OrderItem {
    fn from(item: ItemDto) -> Self {
        OrderItem::new(item.sku, item.count)
    }
}

impl From<OrderItem> for ItemDto {
    fn from(item: OrderItem) -> Self {
        Self {
            sku: item.sku.0,
            count: item.count,
        }
    }
}

impl From<Order> for OrderInfoResponse {
    fn from(order: Order) -> Self {
        Self {
            status: Some(order.status),
            user: Some(order.user_id.0),
            items: Some(order.items.into_iter().map(ItemDto::from).collect()),
        }
    }
}

fn error_response(e: LomsError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &e {
        LomsError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        LomsError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
    };
    tracing::warn!(%status, error = %e, "Request failed");
    (
        status,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

pub fn create_router(service: ReservationService, request_timeout: Duration) -> Router {
    Router::new()
        .route("/loms/order/create", post(order_create))
        .route("/loms/order/info", post(order_info))
        .route("/loms/order/pay", post(order_pay))
        .route("/loms/order/cancel", post(order_cancel))
        .route("/loms/stock/info", post(stocks_info))
        .route("/health", get(health_check))
        .with_state(service)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
}

pub async fn order_create(
    State(service): State<ReservationService>,
    Json(request): Json<OrderCreateRequest>,
) -> ApiResult<OrderCreateResponse> {
    let items = request.items.into_iter().map(OrderItem::from).collect();
    let id = service
        .create_order(UserId(request.user), items)
        .await
        .map_err(error_response)?;
    Ok(Json(OrderCreateResponse { order_id: id.0 }))
}

pub async fn order_info(
    State(service): State<ReservationService>,
    Json(request): Json<OrderIdRequest>,
) -> ApiResult<OrderInfoResponse> {
    let order = service
        .order_info(OrderId(request.order_id))
        .await
        .map_err(error_response)?;
    Ok(Json(order.map(OrderInfoResponse::from).unwrap_or_default()))
}

pub async fn order_pay(
    State(service): State<ReservationService>,
    Json(request): Json<OrderIdRequest>,
) -> ApiResult<Empty> {
    service
        .pay_order(OrderId(request.order_id))
        .await
        .map_err(error_response)?;
    Ok(Json(Empty {}))
}

pub async fn order_cancel(
    State(service): State<ReservationService>,
    Json(request): Json<OrderIdRequest>,
) -> ApiResult<Empty> {
    service
        .cancel_order(OrderId(request.order_id))
        .await
        .map_err(error_response)?;
    Ok(Json(Empty {}))
}

pub async fn stocks_info(
    State(service): State<ReservationService>,
    Json(request): Json<StocksInfoRequest>,
) -> ApiResult<StocksInfoResponse> {
    let count = service
        .stocks_info(Sku(request.sku))
        .await
        .map_err(error_response)?;
    Ok(Json(StocksInfoResponse { count }))
}

pub async fn health_check() -> &'static str {
    "OK"
}
