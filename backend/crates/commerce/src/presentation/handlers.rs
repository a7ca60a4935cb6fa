//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use kernel::id::Id;
use kernel::response::ApiResponse;
use std::sync::Arc;

use crate::application::{
    CommerceConfig, CreateOrderUseCase, GetPriceUseCase, LineInput, PurchaseInput,
    PurchaseUseCase,
};
use crate::domain::repository::{
    OrderRepository, PriceCatalog, PurchaseRepository, TransactionVerifier,
};
use crate::error::{CommerceError, CommerceResult};
use crate::presentation::dto::{
    CreateOrderRequest, OrderItemRequest, OrderResponse, PriceResponse, PurchaseRequest,
    VerifiedPurchaseResponse,
};

/// Shared state for commerce handlers
#[derive(Clone)]
pub struct CommerceAppState<R, V>
where
    R: PriceCatalog + OrderRepository + PurchaseRepository + Clone + Send + Sync + 'static,
    V: TransactionVerifier + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub verifier: Arc<V>,
    pub config: Arc<CommerceConfig>,
}

fn parse_id<T>(label: &'static str, raw: &str) -> CommerceResult<Id<T>> {
    Id::parse(raw).map_err(|_| CommerceError::InvalidId {
        label,
        raw: raw.to_string(),
    })
}

fn line_input(item: &OrderItemRequest) -> CommerceResult<LineInput> {
    Ok(LineInput {
        game_id: parse_id("game", &item.game_id)?,
        quantity: item.quantity,
    })
}

/// POST /orderitem/items/price
pub async fn get_price<R, V>(
    State(state): State<CommerceAppState<R, V>>,
    Json(req): Json<OrderItemRequest>,
) -> CommerceResult<ApiResponse<PriceResponse>>
where
    R: PriceCatalog + OrderRepository + PurchaseRepository + Clone + Send + Sync + 'static,
    V: TransactionVerifier + Clone + Send + Sync + 'static,
{
    let line = GetPriceUseCase::new(state.repo.clone())
        .execute(line_input(&req)?)
        .await?;

    Ok(ApiResponse::success(
        "Game price retrieved successfully",
        PriceResponse::from(line),
    ))
}

/// POST /orderitem/create
pub async fn create_order<R, V>(
    State(state): State<CommerceAppState<R, V>>,
    Json(req): Json<CreateOrderRequest>,
) -> CommerceResult<ApiResponse<OrderResponse>>
where
    R: PriceCatalog + OrderRepository + PurchaseRepository + Clone + Send + Sync + 'static,
    V: TransactionVerifier + Clone + Send + Sync + 'static,
{
    let user_id = parse_id("user", &req.user_id)?;
    let lines = req
        .items
        .iter()
        .map(line_input)
        .collect::<CommerceResult<Vec<_>>>()?;

    let order = CreateOrderUseCase::new(state.repo.clone())
        .execute(user_id, lines)
        .await?;

    Ok(ApiResponse::success(
        "Game price retrieved successfully",
        OrderResponse::from(order),
    ))
}

/// POST /purchases
pub async fn purchase<R, V>(
    State(state): State<CommerceAppState<R, V>>,
    Json(req): Json<PurchaseRequest>,
) -> CommerceResult<ApiResponse<VerifiedPurchaseResponse>>
where
    R: PriceCatalog + OrderRepository + PurchaseRepository + Clone + Send + Sync + 'static,
    V: TransactionVerifier + Clone + Send + Sync + 'static,
{
    let input = PurchaseInput {
        user_id: parse_id("user", &req.user_id)?,
        order_id: parse_id("order", &req.order_id)?,
        transaction_id: req.transaction_id,
    };

    let purchase = PurchaseUseCase::new(
        state.repo.clone(),
        state.verifier.clone(),
        state.config.clone(),
    )
    .execute(input)
    .await?;

    Ok(ApiResponse::success(
        "Purchase successfully",
        VerifiedPurchaseResponse::from(purchase),
    ))
}
