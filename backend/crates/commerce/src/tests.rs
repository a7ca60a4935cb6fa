//! Unit tests for the commerce crate

#[cfg(test)]
mod fakes {
    use std::collections::HashSet;
    use std::sync::{Arc, Mutex};

    use kernel::id::{GameId, OrderId, UserId};

    use crate::domain::entities::{
        Customer, ListedGame, Order, OrderStatus, Verification, VerifiedPurchase,
    };
    use crate::domain::repository::{
        OrderRepository, PriceCatalog, PurchaseRepository, TransactionVerifier,
    };
    use crate::error::{CommerceError, CommerceResult};

    /// Same result as the `unnest(games || $2) DISTINCT` update on `users.games`
    fn merge_owned(owned: &[GameId], purchased: &[GameId]) -> Vec<GameId> {
        let mut seen = HashSet::with_capacity(owned.len() + purchased.len());
        owned
            .iter()
            .chain(purchased)
            .filter(|g| seen.insert(**g))
            .copied()
            .collect()
    }

    #[test]
    fn test_merge_owned_is_idempotent_union() {
        let (a, b, c) = (GameId::new(), GameId::new(), GameId::new());
        let merged = merge_owned(&[a, b], &[b, c]);
        assert_eq!(merged, vec![a, b, c]);
        assert_eq!(merge_owned(&merged, &[b, c]), merged);
        assert_eq!(merge_owned(&[], &[c, c]), vec![c]);
    }

    /// In-memory catalog, customers, orders, and purchase ledger
    #[derive(Clone, Default)]
    pub struct InMemoryStore {
        pub games: Arc<Mutex<Vec<ListedGame>>>,
        pub customers: Arc<Mutex<Vec<Customer>>>,
        pub orders: Arc<Mutex<Vec<Order>>>,
        pub purchases: Arc<Mutex<Vec<VerifiedPurchase>>>,
    }

    impl InMemoryStore {
        pub fn list_game(&self, price: Option<f64>) -> GameId {
            let game_id = GameId::new();
            self.games
                .lock()
                .unwrap()
                .push(ListedGame { game_id, price });
            game_id
        }

        pub fn add_customer(&self, games: Vec<GameId>) -> UserId {
            let id = UserId::new();
            self.customers
                .lock()
                .unwrap()
                .push(Customer { id, games });
            id
        }

        pub fn owned(&self, user_id: UserId) -> Vec<GameId> {
            self.customers
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.id == user_id)
                .map(|c| c.games.clone())
                .unwrap_or_default()
        }

        pub fn order(&self, order_id: OrderId) -> Option<Order> {
            self.orders
                .lock()
                .unwrap()
                .iter()
                .find(|o| o.id == order_id)
                .cloned()
        }
    }

    impl PriceCatalog for InMemoryStore {
        async fn find_listing(&self, game_id: GameId) -> CommerceResult<Option<ListedGame>> {
            Ok(self
                .games
                .lock()
                .unwrap()
                .iter()
                .find(|g| g.game_id == game_id)
                .copied())
        }
    }

    impl OrderRepository for InMemoryStore {
        async fn find_customer(&self, user_id: UserId) -> CommerceResult<Option<Customer>> {
            Ok(self
                .customers
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.id == user_id)
                .cloned())
        }

        async fn has_open_order_for(
            &self,
            user_id: UserId,
            games: &[GameId],
        ) -> CommerceResult<bool> {
            Ok(self.orders.lock().unwrap().iter().any(|o| {
                o.user_id == user_id
                    && o.status.is_open()
                    && o.items.iter().any(|i| games.contains(&i.game_id))
            }))
        }

        async fn insert_pending_order(&self, order: &Order) -> CommerceResult<()> {
            self.orders.lock().unwrap().push(order.clone());
            Ok(())
        }

        async fn find_order(&self, order_id: OrderId) -> CommerceResult<Option<Order>> {
            Ok(self.order(order_id))
        }
    }

    impl PurchaseRepository for InMemoryStore {
        async fn transaction_verified(&self, transaction_id: &str) -> CommerceResult<bool> {
            Ok(self
                .purchases
                .lock()
                .unwrap()
                .iter()
                .any(|p| p.verification.transaction_id == transaction_id))
        }

        async fn complete_purchase(
            &self,
            user_id: UserId,
            order_id: OrderId,
            verification: &Verification,
        ) -> CommerceResult<VerifiedPurchase> {
            let mut orders = self.orders.lock().unwrap();
            let mut purchases = self.purchases.lock().unwrap();
            let mut customers = self.customers.lock().unwrap();

            // All checks before any write, mirroring a rolled back transaction
            let order = orders
                .iter_mut()
                .find(|o| o.id == order_id)
                .ok_or(CommerceError::OrderNotFound(order_id))?;
            if order.status == OrderStatus::Completed {
                return Err(CommerceError::OrderAlreadyCompleted(order_id));
            }
            if purchases
                .iter()
                .any(|p| p.verification.transaction_id == verification.transaction_id)
            {
                return Err(CommerceError::TransactionAlreadyVerified(
                    verification.transaction_id.clone(),
                ));
            }
            let customer = customers
                .iter_mut()
                .find(|c| c.id == user_id)
                .ok_or(CommerceError::UserGamesUpdateFailed(user_id))?;

            order.status = OrderStatus::Completed;
            order.transaction = Some(verification.transaction_id.clone());
            let snapshot = order.clone();

            let purchase = VerifiedPurchase {
                verification: verification.clone(),
                order: snapshot.clone(),
            };
            purchases.push(purchase.clone());
            customer.games = merge_owned(&customer.games, &snapshot.game_ids());

            Ok(purchase)
        }
    }

    /// Verifier with a fixed verdict
    #[derive(Clone, Copy)]
    pub struct FixedVerdict(pub bool);

    impl TransactionVerifier for FixedVerdict {
        async fn verify(&self, _transaction_id: &str) -> bool {
            self.0
        }
    }
}

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use kernel::id::{GameId, OrderId, UserId};

    use super::fakes::{FixedVerdict, InMemoryStore};
    use crate::application::{
        CommerceConfig, CreateOrderUseCase, GetPriceUseCase, LineInput, PurchaseInput,
        PurchaseUseCase,
    };
    use crate::domain::entities::OrderStatus;
    use crate::error::CommerceError;

    fn line(game_id: GameId) -> LineInput {
        LineInput {
            game_id,
            quantity: Some(1),
        }
    }

    fn purchase_input(user_id: UserId, order_id: OrderId, tx: &str) -> PurchaseInput {
        PurchaseInput {
            user_id,
            order_id,
            transaction_id: tx.to_string(),
        }
    }

    fn purchases(store: &InMemoryStore, verdict: bool) -> PurchaseUseCase<InMemoryStore, FixedVerdict> {
        PurchaseUseCase::new(
            Arc::new(store.clone()),
            Arc::new(FixedVerdict(verdict)),
            Arc::new(CommerceConfig::default()),
        )
    }

    // ------------------------------------------------------------------
    // Pricing
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn test_price_of_listed_game() {
        let store = InMemoryStore::default();
        let g = store.list_game(Some(9.99));

        let priced = GetPriceUseCase::new(Arc::new(store))
            .execute(line(g))
            .await
            .unwrap();
        assert_eq!(priced.game_id, g);
        assert_eq!(priced.quantity, 1);
        assert_eq!(priced.price, 9.99);
    }

    #[tokio::test]
    async fn test_price_checks_quantity_before_game() {
        let pricing = GetPriceUseCase::new(Arc::new(InMemoryStore::default()));
        let unknown = GameId::new();

        let missing = pricing
            .execute(LineInput {
                game_id: unknown,
                quantity: None,
            })
            .await;
        assert!(matches!(missing, Err(CommerceError::QuantityMissing)));

        let two = pricing
            .execute(LineInput {
                game_id: unknown,
                quantity: Some(2),
            })
            .await;
        assert!(matches!(two, Err(CommerceError::InvalidQuantity(2))));

        let not_found = pricing.execute(line(unknown)).await;
        assert!(matches!(not_found, Err(CommerceError::GameNotFound(id)) if id == unknown));
    }

    #[tokio::test]
    async fn test_unpriced_game_is_rejected() {
        let store = InMemoryStore::default();
        let g = store.list_game(None);

        let result = GetPriceUseCase::new(Arc::new(store)).execute(line(g)).await;
        assert!(matches!(result, Err(CommerceError::PriceMissing(id)) if id == g));
    }

    // ------------------------------------------------------------------
    // Orders
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn test_create_order_sums_prices() {
        let store = InMemoryStore::default();
        let (a, b) = (store.list_game(Some(9.99)), store.list_game(Some(20.0)));
        let user = store.add_customer(vec![]);

        let order = CreateOrderUseCase::new(Arc::new(store.clone()))
            .execute(user, vec![line(a), line(b)])
            .await
            .unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.total_quantity, 2);
        assert!((order.total_price - 29.99).abs() < 1e-9);
        assert!(order.transaction.is_none());
        assert_eq!(store.order(order.id), Some(order));
    }

    #[tokio::test]
    async fn test_empty_order_is_rejected() {
        let store = InMemoryStore::default();
        let user = store.add_customer(vec![]);

        let result = CreateOrderUseCase::new(Arc::new(store))
            .execute(user, vec![])
            .await;
        assert!(matches!(result, Err(CommerceError::EmptyOrder)));
    }

    #[tokio::test]
    async fn test_unknown_user_cannot_order() {
        let store = InMemoryStore::default();
        let g = store.list_game(Some(1.0));
        let stranger = UserId::new();

        let result = CreateOrderUseCase::new(Arc::new(store))
            .execute(stranger, vec![line(g)])
            .await;
        assert!(matches!(result, Err(CommerceError::UserNotFound(id)) if id == stranger));
    }

    #[tokio::test]
    async fn test_already_owned_lists_exactly_those_games() {
        let store = InMemoryStore::default();
        let (a, b, c) = (
            store.list_game(Some(1.0)),
            store.list_game(Some(2.0)),
            store.list_game(Some(3.0)),
        );
        let user = store.add_customer(vec![a, c]);

        let err = CreateOrderUseCase::new(Arc::new(store.clone()))
            .execute(user, vec![line(c), line(b), line(a)])
            .await
            .unwrap_err();

        match &err {
            CommerceError::AlreadyOwned(games) => assert_eq!(games, &vec![c, a]),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains(&c.to_string()));
        assert!(!err.to_string().contains(&b.to_string()));
        assert!(store.orders.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_games_in_one_order() {
        let store = InMemoryStore::default();
        let g = store.list_game(Some(1.0));
        let user = store.add_customer(vec![]);

        let result = CreateOrderUseCase::new(Arc::new(store))
            .execute(user, vec![line(g), line(g)])
            .await;
        assert!(matches!(result, Err(CommerceError::DuplicateGamesInOrder)));
    }

    #[tokio::test]
    async fn test_ongoing_order_blocks_same_game() {
        let store = InMemoryStore::default();
        let (a, b) = (store.list_game(Some(1.0)), store.list_game(Some(2.0)));
        let user = store.add_customer(vec![]);
        let orders = CreateOrderUseCase::new(Arc::new(store.clone()));

        orders.execute(user, vec![line(a)]).await.unwrap();

        let again = orders.execute(user, vec![line(b), line(a)]).await;
        assert!(matches!(again, Err(CommerceError::OngoingOrder)));

        // Unrelated games are still fine
        orders.execute(user, vec![line(b)]).await.unwrap();
        assert_eq!(store.orders.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_pricing_failure_aborts_order() {
        let store = InMemoryStore::default();
        let priced = store.list_game(Some(5.0));
        let unpriced = store.list_game(None);
        let user = store.add_customer(vec![]);

        let result = CreateOrderUseCase::new(Arc::new(store.clone()))
            .execute(user, vec![line(priced), line(unpriced)])
            .await;
        assert!(matches!(result, Err(CommerceError::PriceMissing(id)) if id == unpriced));
        assert!(store.orders.lock().unwrap().is_empty());
    }

    // ------------------------------------------------------------------
    // Purchases
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn test_purchase_completes_order_once() {
        let store = InMemoryStore::default();
        let g1 = store.list_game(Some(9.99));
        let user = store.add_customer(vec![]);
        let order = CreateOrderUseCase::new(Arc::new(store.clone()))
            .execute(user, vec![line(g1)])
            .await
            .unwrap();

        let purchase = purchases(&store, true)
            .execute(purchase_input(user, order.id, "abc"))
            .await
            .unwrap();

        assert_eq!(purchase.verification.transaction_id, "abc");
        assert_eq!(purchase.order.status, OrderStatus::Completed);
        assert_eq!(purchase.order.transaction.as_deref(), Some("abc"));
        assert_eq!(store.owned(user), vec![g1]);
        assert_eq!(store.order(order.id).unwrap().status, OrderStatus::Completed);

        let again = purchases(&store, true)
            .execute(purchase_input(user, order.id, "def"))
            .await;
        assert!(matches!(again, Err(CommerceError::OrderAlreadyCompleted(id)) if id == order.id));
        assert_eq!(store.purchases.lock().unwrap().len(), 1);
        assert_eq!(store.owned(user), vec![g1]);
    }

    #[tokio::test]
    async fn test_transaction_reference_is_single_use() {
        let store = InMemoryStore::default();
        let (g1, g2) = (store.list_game(Some(9.99)), store.list_game(Some(4.5)));
        let user = store.add_customer(vec![]);
        let orders = CreateOrderUseCase::new(Arc::new(store.clone()));
        let first = orders.execute(user, vec![line(g1)]).await.unwrap();
        let second = orders.execute(user, vec![line(g2)]).await.unwrap();

        purchases(&store, true)
            .execute(purchase_input(user, first.id, "abc"))
            .await
            .unwrap();

        let reused = purchases(&store, true)
            .execute(purchase_input(user, second.id, "abc"))
            .await;
        assert!(matches!(reused, Err(CommerceError::TransactionAlreadyVerified(tx)) if tx == "abc"));
        assert_eq!(store.order(second.id).unwrap().status, OrderStatus::Pending);
        assert_eq!(store.owned(user), vec![g1]);
    }

    #[tokio::test]
    async fn test_purchase_merges_into_existing_games() {
        let store = InMemoryStore::default();
        let (owned, g) = (store.list_game(Some(1.0)), store.list_game(Some(2.0)));
        let user = store.add_customer(vec![owned]);
        let order = CreateOrderUseCase::new(Arc::new(store.clone()))
            .execute(user, vec![line(g)])
            .await
            .unwrap();

        purchases(&store, true)
            .execute(purchase_input(user, order.id, "tx-1"))
            .await
            .unwrap();
        assert_eq!(store.owned(user), vec![owned, g]);
    }

    #[tokio::test]
    async fn test_verifier_identity_recorded_and_reported() {
        let store = InMemoryStore::default();
        let g = store.list_game(Some(1.0));
        let user = store.add_customer(vec![]);
        let order = CreateOrderUseCase::new(Arc::new(store.clone()))
            .execute(user, vec![line(g)])
            .await
            .unwrap();

        let purchase = purchases(&store, true)
            .execute(purchase_input(user, order.id, "  abc  "))
            .await
            .unwrap();

        assert_eq!(purchase.verification.verified_by, "System");
        assert_eq!(purchase.verification.status, "Verified");
        assert_eq!(purchase.verification.method, "Automated");

        let stored = store.purchases.lock().unwrap()[0].clone();
        assert_eq!(stored.verification.verified_by, "Automated-Verifier");
        assert_eq!(stored.verification.transaction_id, "abc");
        assert_eq!(stored.verification.id, purchase.verification.id);
    }

    #[tokio::test]
    async fn test_rejected_transaction_changes_nothing() {
        let store = InMemoryStore::default();
        let g = store.list_game(Some(1.0));
        let user = store.add_customer(vec![]);
        let order = CreateOrderUseCase::new(Arc::new(store.clone()))
            .execute(user, vec![line(g)])
            .await
            .unwrap();

        let result = purchases(&store, false)
            .execute(purchase_input(user, order.id, "forged"))
            .await;

        assert!(matches!(result, Err(CommerceError::TransactionNotVerified(tx)) if tx == "forged"));
        assert_eq!(store.order(order.id).unwrap().status, OrderStatus::Pending);
        assert!(store.purchases.lock().unwrap().is_empty());
        assert!(store.owned(user).is_empty());
    }

    #[tokio::test]
    async fn test_purchase_validation_errors() {
        let store = InMemoryStore::default();
        let g = store.list_game(Some(1.0));
        let user = store.add_customer(vec![]);
        let other = store.add_customer(vec![]);
        let order = CreateOrderUseCase::new(Arc::new(store.clone()))
            .execute(user, vec![line(g)])
            .await
            .unwrap();
        let use_case = purchases(&store, true);

        let blank = use_case.execute(purchase_input(user, order.id, "   ")).await;
        assert!(matches!(blank, Err(CommerceError::EmptyTransactionId)));

        let stranger = UserId::new();
        let unknown_user = use_case.execute(purchase_input(stranger, order.id, "abc")).await;
        assert!(matches!(unknown_user, Err(CommerceError::UserNotFound(id)) if id == stranger));

        let missing = OrderId::new();
        let unknown_order = use_case.execute(purchase_input(user, missing, "abc")).await;
        assert!(matches!(unknown_order, Err(CommerceError::OrderNotFound(id)) if id == missing));

        let foreign = use_case.execute(purchase_input(other, order.id, "abc")).await;
        assert!(matches!(foreign, Err(CommerceError::OrderNotFound(id)) if id == order.id));

        assert!(store.purchases.lock().unwrap().is_empty());
    }
}

#[cfg(test)]
mod router_tests {
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Method, Request, StatusCode, header};
    use kernel::id::{GameId, UserId};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::fakes::{FixedVerdict, InMemoryStore};
    use crate::application::CommerceConfig;
    use crate::presentation::router::commerce_router_generic;

    fn app(store: InMemoryStore) -> Router {
        commerce_router_generic(store, FixedVerdict(true), CommerceConfig::default())
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    fn post(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn order_body(user: UserId, games: &[GameId]) -> Value {
        let items: Vec<Value> = games
            .iter()
            .map(|g| json!({"game_id": g.to_string(), "quantity": 1}))
            .collect();
        json!({"user_id": user.to_string(), "OrderItemCollection": items})
    }

    #[tokio::test]
    async fn test_price_route() {
        let store = InMemoryStore::default();
        let g = store.list_game(Some(9.99));

        let (status, json) = send(
            app(store),
            post("/orderitem/items/price", json!({"game_id": g.to_string(), "quantity": 1})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "success");
        assert_eq!(json["message"], "Game price retrieved successfully");
        assert_eq!(json["data"]["price"], 9.99);
        assert_eq!(json["data"]["quantity"], 1);
    }

    #[tokio::test]
    async fn test_price_route_validation() {
        let store = InMemoryStore::default();
        let g = store.list_game(Some(9.99));

        let (status, json) = send(
            app(store.clone()),
            post("/orderitem/items/price", json!({"game_id": g.to_string(), "quantity": 3})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["status"], "error");
        assert_eq!(json["detail"], "quantity can only be 1");

        let (status, json) = send(
            app(store),
            post("/orderitem/items/price", json!({"game_id": "nope", "quantity": 1})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["detail"], "Invalid game ID: nope");
    }

    #[tokio::test]
    async fn test_create_order_route() {
        let store = InMemoryStore::default();
        let g = store.list_game(Some(9.99));
        let user = store.add_customer(vec![]);

        let (status, json) = send(app(store), post("/orderitem/create", order_body(user, &[g]))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["status"], "Pending");
        assert_eq!(json["data"]["total_price"], 9.99);
        assert_eq!(json["data"]["user_id"], user.to_string());
        assert_eq!(json["data"]["OrderItemCollection"][0]["game_id"], g.to_string());
        assert!(json["data"]["transaction"].is_null());
    }

    #[tokio::test]
    async fn test_owned_game_order_is_409_with_action() {
        let store = InMemoryStore::default();
        let g = store.list_game(Some(9.99));
        let user = store.add_customer(vec![g]);

        let (status, json) = send(app(store), post("/orderitem/create", order_body(user, &[g]))).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert!(json["detail"].as_str().unwrap().contains(&g.to_string()));
        assert!(json["action"].is_string());
    }

    #[tokio::test]
    async fn test_empty_order_route_is_400() {
        let store = InMemoryStore::default();
        let user = store.add_customer(vec![]);

        let (status, json) = send(
            app(store),
            post("/orderitem/create", json!({"user_id": user.to_string()})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["detail"], "The order contains no items.");
    }

    #[tokio::test]
    async fn test_purchase_route_round_trip() {
        let store = InMemoryStore::default();
        let g = store.list_game(Some(9.99));
        let user = store.add_customer(vec![]);

        let (_, created) =
            send(app(store.clone()), post("/orderitem/create", order_body(user, &[g]))).await;
        let order_id = created["data"]["order_id"].as_str().unwrap().to_string();

        let body = json!({"user_id": user.to_string(), "order_id": order_id, "transaction_id": "abc"});
        let (status, json) = send(app(store.clone()), post("/purchases", body.clone())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Purchase successfully");
        assert!(json["data"]["verifiedpurchase_id"].is_string());
        assert_eq!(json["data"]["order_data"]["status"], "Completed");
        assert_eq!(json["data"]["order_data"]["transaction"], "abc");
        assert_eq!(json["data"]["verification_status"], "Verified");
        assert_eq!(json["data"]["verified_by"], "System");
        assert_eq!(store.owned(user), vec![g]);

        let (status, json) = send(app(store), post("/purchases", body)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(
            json["detail"],
            format!("Order with ID {order_id} has already been completed.")
        );
    }

    #[tokio::test]
    async fn test_rejected_transaction_route_is_400() {
        let store = InMemoryStore::default();
        let g = store.list_game(Some(9.99));
        let user = store.add_customer(vec![]);
        let (_, created) =
            send(app(store.clone()), post("/orderitem/create", order_body(user, &[g]))).await;

        let rejecting = commerce_router_generic(
            store,
            FixedVerdict(false),
            CommerceConfig::default(),
        );
        let (status, json) = send(
            rejecting,
            post(
                "/purchases",
                json!({
                    "user_id": user.to_string(),
                    "order_id": created["data"]["order_id"],
                    "wallet_id": "forged"
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["detail"], "Transaction ID forged cannot be verified.");
    }
}

#[cfg(test)]
mod error_tests {
    use kernel::id::{GameId, OrderId, UserId};

    use crate::error::CommerceError;

    #[test]
    fn test_status_codes() {
        assert_eq!(CommerceError::QuantityMissing.to_app_error().status_code(), 400);
        assert_eq!(CommerceError::InvalidQuantity(2).to_app_error().status_code(), 400);
        assert_eq!(
            CommerceError::PriceMissing(GameId::new()).to_app_error().status_code(),
            400
        );
        assert_eq!(
            CommerceError::TransactionNotVerified("x".into())
                .to_app_error()
                .status_code(),
            400
        );
        assert_eq!(
            CommerceError::GameNotFound(GameId::new()).to_app_error().status_code(),
            404
        );
        assert_eq!(
            CommerceError::UserNotFound(UserId::new()).to_app_error().status_code(),
            404
        );
        assert_eq!(CommerceError::OngoingOrder.to_app_error().status_code(), 409);
        assert_eq!(
            CommerceError::OrderAlreadyCompleted(OrderId::new())
                .to_app_error()
                .status_code(),
            409
        );
        assert_eq!(
            CommerceError::TransactionAlreadyVerified("x".into())
                .to_app_error()
                .status_code(),
            409
        );
        assert_eq!(
            CommerceError::UserGamesUpdateFailed(UserId::new())
                .to_app_error()
                .status_code(),
            500
        );
        assert_eq!(
            CommerceError::PurchaseStoreFailed(sqlx::Error::RowNotFound)
                .to_app_error()
                .status_code(),
            500
        );
        assert_eq!(
            CommerceError::Database(sqlx::Error::PoolTimedOut)
                .to_app_error()
                .status_code(),
            503
        );
    }

    #[test]
    fn test_internal_detail_is_hidden() {
        let err = CommerceError::Internal("bad status column".into()).to_app_error();
        assert_eq!(err.status_code(), 500);
        assert!(!err.message().contains("bad status column"));
    }

    #[test]
    fn test_invalid_id_detail_names_the_resource() {
        let err = CommerceError::InvalidId {
            label: "order",
            raw: "not-a-uuid".into(),
        }
        .to_app_error();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.message(), "Invalid order ID: not-a-uuid");
    }
}
