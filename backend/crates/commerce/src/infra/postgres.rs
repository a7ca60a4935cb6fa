//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::error::conversions::{is_unique_violation, violated_constraint};
use kernel::id::{GameId, OrderId, UserId};
use sqlx::types::Json;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::domain::entities::{
    Customer, ListedGame, Order, OrderStatus, PricedLine, Verification, VerifiedPurchase,
};
use crate::domain::repository::{OrderRepository, PriceCatalog, PurchaseRepository};
use crate::error::{CommerceError, CommerceResult};

/// Partial unique index on open lines per (user, game)
const OPEN_LINE_CONSTRAINT: &str = "order_items_open_game_key";

/// Unique index on `verified_purchases.transaction_id`
const TRANSACTION_CONSTRAINT: &str = "verified_purchases_transaction_id_key";

const ORDER_COLUMNS: &str =
    "order_id, user_id, total_quantity, total_price, status, transaction_id, created_time";

/// PostgreSQL-backed commerce repository
#[derive(Clone)]
pub struct PgCommerceRepository {
    pool: PgPool,
}

impl PgCommerceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn uuids(ids: &[GameId]) -> Vec<Uuid> {
    ids.iter().map(|g| g.into_uuid()).collect()
}

async fn open_order_exists(
    conn: &mut PgConnection,
    user_id: UserId,
    games: &[GameId],
) -> CommerceResult<bool> {
    let exists: bool = sqlx::query_scalar(
        r#"
        SELECT EXISTS(
            SELECT 1
            FROM order_items
            WHERE user_id = $1 AND is_open AND game_id = ANY($2)
        )
        "#,
    )
    .bind(user_id.as_uuid())
    .bind(uuids(games))
    .fetch_one(conn)
    .await?;
    Ok(exists)
}

async fn load_order(conn: &mut PgConnection, order_id: OrderId) -> CommerceResult<Option<Order>> {
    let row = sqlx::query_as::<_, OrderRow>(&format!(
        "SELECT {ORDER_COLUMNS} FROM orders WHERE order_id = $1"
    ))
    .bind(order_id.as_uuid())
    .fetch_optional(&mut *conn)
    .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let items = sqlx::query_as::<_, OrderItemRow>(
        r#"
        SELECT game_id, quantity, price
        FROM order_items
        WHERE order_id = $1
        ORDER BY position
        "#,
    )
    .bind(order_id.as_uuid())
    .fetch_all(&mut *conn)
    .await?;

    row.into_order(items).map(Some)
}

impl PriceCatalog for PgCommerceRepository {
    async fn find_listing(&self, game_id: GameId) -> CommerceResult<Option<ListedGame>> {
        let price: Option<Option<f64>> =
            sqlx::query_scalar("SELECT price FROM games WHERE game_id = $1")
                .bind(game_id.as_uuid())
                .fetch_optional(&self.pool)
                .await?;

        Ok(price.map(|price| ListedGame { game_id, price }))
    }
}

impl OrderRepository for PgCommerceRepository {
    async fn find_customer(&self, user_id: UserId) -> CommerceResult<Option<Customer>> {
        let games: Option<Vec<Uuid>> =
            sqlx::query_scalar("SELECT games FROM users WHERE user_id = $1")
                .bind(user_id.as_uuid())
                .fetch_optional(&self.pool)
                .await?;

        Ok(games.map(|games| Customer {
            id: user_id,
            games: games.into_iter().map(GameId::from_uuid).collect(),
        }))
    }

    async fn has_open_order_for(&self, user_id: UserId, games: &[GameId]) -> CommerceResult<bool> {
        let mut conn = self.pool.acquire().await?;
        open_order_exists(&mut conn, user_id, games).await
    }

    async fn insert_pending_order(&self, order: &Order) -> CommerceResult<()> {
        let mut tx = self.pool.begin().await?;

        // Serializes order creation per user
        let locked: Option<Uuid> =
            sqlx::query_scalar("SELECT user_id FROM users WHERE user_id = $1 FOR UPDATE")
                .bind(order.user_id.as_uuid())
                .fetch_optional(&mut *tx)
                .await?;
        if locked.is_none() {
            return Err(CommerceError::UserNotFound(order.user_id));
        }

        if open_order_exists(&mut tx, order.user_id, &order.game_ids()).await? {
            return Err(CommerceError::OngoingOrder);
        }

        sqlx::query(
            r#"
            INSERT INTO orders (
                order_id,
                user_id,
                total_quantity,
                total_price,
                status,
                transaction_id,
                created_time
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(order.id.as_uuid())
        .bind(order.user_id.as_uuid())
        .bind(order.total_quantity as i32)
        .bind(order.total_price)
        .bind(order.status.as_str())
        .bind(order.transaction.as_deref())
        .bind(order.created_time)
        .execute(&mut *tx)
        .await?;

        for (position, item) in order.items.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO order_items (
                    order_id,
                    position,
                    user_id,
                    game_id,
                    quantity,
                    price,
                    is_open
                ) VALUES ($1, $2, $3, $4, $5, $6, TRUE)
                "#,
            )
            .bind(order.id.as_uuid())
            .bind(position as i32)
            .bind(order.user_id.as_uuid())
            .bind(item.game_id.as_uuid())
            .bind(item.quantity as i32)
            .bind(item.price)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) && violated_constraint(&e) == Some(OPEN_LINE_CONSTRAINT)
                {
                    return CommerceError::OngoingOrder;
                }
                CommerceError::Database(e)
            })?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn find_order(&self, order_id: OrderId) -> CommerceResult<Option<Order>> {
        let mut conn = self.pool.acquire().await?;
        load_order(&mut conn, order_id).await
    }
}

impl PurchaseRepository for PgCommerceRepository {
    async fn transaction_verified(&self, transaction_id: &str) -> CommerceResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM verified_purchases WHERE transaction_id = $1)",
        )
        .bind(transaction_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    async fn complete_purchase(
        &self,
        user_id: UserId,
        order_id: OrderId,
        verification: &Verification,
    ) -> CommerceResult<VerifiedPurchase> {
        let mut tx = self.pool.begin().await?;

        // Compare-and-swap: only one purchase can complete the order
        let updated = sqlx::query(
            r#"
            UPDATE orders
            SET status = 'Completed', transaction_id = $2
            WHERE order_id = $1 AND status <> 'Completed'
            "#,
        )
        .bind(order_id.as_uuid())
        .bind(&verification.transaction_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if updated == 0 {
            let exists: bool =
                sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM orders WHERE order_id = $1)")
                    .bind(order_id.as_uuid())
                    .fetch_one(&mut *tx)
                    .await?;
            return Err(if exists {
                CommerceError::OrderAlreadyCompleted(order_id)
            } else {
                CommerceError::OrderNotFound(order_id)
            });
        }

        sqlx::query("UPDATE order_items SET is_open = FALSE WHERE order_id = $1")
            .bind(order_id.as_uuid())
            .execute(&mut *tx)
            .await?;

        let order = load_order(&mut tx, order_id)
            .await?
            .ok_or(CommerceError::OrderNotFound(order_id))?;

        sqlx::query(
            r#"
            INSERT INTO verified_purchases (
                verified_purchase_id,
                order_id,
                user_id,
                transaction_id,
                order_data,
                purchase_time,
                verification_status,
                verification_method,
                verified_by,
                verified_time
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(verification.id.as_uuid())
        .bind(order_id.as_uuid())
        .bind(user_id.as_uuid())
        .bind(&verification.transaction_id)
        .bind(Json(&order))
        .bind(verification.purchase_time)
        .bind(&verification.status)
        .bind(&verification.method)
        .bind(&verification.verified_by)
        .bind(verification.verified_time)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) && violated_constraint(&e) == Some(TRANSACTION_CONSTRAINT) {
                return CommerceError::TransactionAlreadyVerified(
                    verification.transaction_id.clone(),
                );
            }
            CommerceError::PurchaseStoreFailed(e)
        })?;

        let merged = sqlx::query(
            r#"
            UPDATE users
            SET games = ARRAY(
                SELECT DISTINCT g FROM unnest(games || $2::uuid[]) AS owned(g)
            )
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(uuids(&order.game_ids()))
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if merged == 0 {
            return Err(CommerceError::UserGamesUpdateFailed(user_id));
        }

        tx.commit().await?;

        Ok(VerifiedPurchase {
            verification: verification.clone(),
            order,
        })
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct OrderRow {
    order_id: Uuid,
    user_id: Uuid,
    total_quantity: i32,
    total_price: f64,
    status: String,
    transaction_id: Option<String>,
    created_time: DateTime<Utc>,
}

impl OrderRow {
    fn into_order(self, items: Vec<OrderItemRow>) -> CommerceResult<Order> {
        let status: OrderStatus = self.status.parse().map_err(CommerceError::Internal)?;

        Ok(Order {
            id: OrderId::from_uuid(self.order_id),
            user_id: UserId::from_uuid(self.user_id),
            items: items.into_iter().map(OrderItemRow::into_line).collect(),
            total_quantity: u32::try_from(self.total_quantity).unwrap_or_default(),
            total_price: self.total_price,
            status,
            transaction: self.transaction_id,
            created_time: self.created_time,
        })
    }
}

#[derive(sqlx::FromRow)]
struct OrderItemRow {
    game_id: Uuid,
    quantity: i32,
    price: f64,
}

impl OrderItemRow {
    fn into_line(self) -> PricedLine {
        PricedLine {
            game_id: GameId::from_uuid(self.game_id),
            quantity: u32::try_from(self.quantity).unwrap_or_default(),
            price: self.price,
        }
    }
}
