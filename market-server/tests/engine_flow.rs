//! End-to-end engine flow against the in-memory database:
//! catalog setup → pricing → order creation → lifecycle → reviews →
//! analytics reports.

use market_server::db::models::{MenuItem, Order, PromoCode, Seller};
use market_server::db::repository::{
    MenuItemRepository, OrderRepository, PromoCodeRepository, RepoError, SellerRepository,
};
use market_server::utils::time;
use market_server::{Config, ServerState};
use shared::models::{
    CheckoutPriceRequest, DeliveryType, HelpfulVote, OrderCreate, OrderLineInput, OrderStatus,
    OrderStatusUpdate, PaymentStatus, RefundRequest, ReviewCreate,
};

fn test_config(strict: bool) -> Config {
    Config {
        work_dir: String::new(),
        http_port: 0,
        timezone: chrono_tz::UTC,
        strict_status_flow: strict,
        environment: "development".to_string(),
    }
}

async fn test_state(strict: bool) -> ServerState {
    ServerState::initialize_in_memory(&test_config(strict))
        .await
        .expect("in-memory state")
}

fn now() -> i64 {
    shared::util::now_millis()
}

async fn seed_seller(state: &ServerState, name: &str) -> String {
    let seller = SellerRepository::new(state.db.clone())
        .create(Seller {
            id: None,
            name: name.to_string(),
            rating: 0.0,
            reviews: 0,
            created_at: now(),
        })
        .await
        .expect("create seller");
    seller.id_string()
}

async fn seed_menu_item(
    state: &ServerState,
    seller: &str,
    name: &str,
    price: f64,
    discount: Option<f64>,
) -> String {
    let item = MenuItemRepository::new(state.db.clone())
        .create(MenuItem {
            id: None,
            seller: seller.to_string(),
            name: name.to_string(),
            description: None,
            price,
            discount_percent: discount,
            status: shared::models::MenuItemStatus::Available,
            rating: 0.0,
            reviews: 0,
            popularity: 0,
            created_at: now(),
            updated_at: now(),
        })
        .await
        .expect("create menu item");
    item.id_string()
}

async fn seed_promo(state: &ServerState, code: &str, discount: f64) {
    PromoCodeRepository::new(state.db.clone())
        .create(PromoCode {
            id: None,
            code: code.to_string(),
            discount,
            available: true,
            created_at: now(),
        })
        .await
        .expect("create promo code");
}

fn line(menu_item: &str, quantity: i32) -> OrderLineInput {
    OrderLineInput {
        menu_item_id: menu_item.to_string(),
        quantity,
        special_instructions: None,
    }
}

// ==================== Storage ====================

#[tokio::test]
async fn on_disk_database_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let db_path = dir.path().join("market.db");
    let service = market_server::db::DbService::new(&db_path.to_string_lossy())
        .await
        .expect("open on-disk database");

    let created = SellerRepository::new(service.db.clone())
        .create(Seller {
            id: None,
            name: "Persisted".to_string(),
            rating: 0.0,
            reviews: 0,
            created_at: now(),
        })
        .await
        .expect("create seller");

    let reloaded = SellerRepository::new(service.db.clone())
        .require(&created.id_string())
        .await
        .expect("reload seller");
    assert_eq!(reloaded.name, "Persisted");
}

// ==================== Pricing ====================

#[tokio::test]
async fn quote_matches_reference_breakdown() {
    let state = test_state(true).await;
    let seller = seed_seller(&state, "Trattoria Uno").await;
    let discounted = seed_menu_item(&state, &seller, "Margherita", 10.0, Some(50.0)).await;
    let regular = seed_menu_item(&state, &seller, "Calzone", 10.0, None).await;
    seed_promo(&state, "WELCOME10", 10.0).await;

    let quote = state
        .orders
        .quote(CheckoutPriceRequest {
            items: vec![line(&discounted, 1), line(&regular, 1)],
            delivery_type: DeliveryType::Delivery,
            promo_code: Some("WELCOME10".to_string()),
            tip: Some(2.0),
        })
        .await
        .expect("quote");

    assert_eq!(quote.subtotal, 20.0);
    assert_eq!(quote.items_discount, 5.0);
    assert_eq!(quote.promo_discount, 1.5);
    assert_eq!(quote.delivery_fee, 4.99);
    assert_eq!(quote.tip, 2.0);
    assert_eq!(quote.total, 20.49);
    assert_eq!(quote.promo_code_applied.as_deref(), Some("WELCOME10"));

    // Quoting must not consume the code
    let promo = PromoCodeRepository::new(state.db.clone())
        .find_by_code("WELCOME10")
        .await
        .unwrap()
        .unwrap();
    assert!(promo.available);
}

#[tokio::test]
async fn quote_with_invalid_promo_degrades_gracefully() {
    let state = test_state(true).await;
    let seller = seed_seller(&state, "Sushi Go").await;
    let item = seed_menu_item(&state, &seller, "Nigiri Set", 18.0, None).await;

    let quote = state
        .orders
        .quote(CheckoutPriceRequest {
            items: vec![line(&item, 1)],
            delivery_type: DeliveryType::Pickup,
            promo_code: Some("NO-SUCH-CODE".to_string()),
            tip: None,
        })
        .await
        .expect("quote");

    assert_eq!(quote.promo_discount, 0.0);
    assert!(quote.promo_code_applied.is_none());
    assert_eq!(quote.total, 18.0);
}

#[tokio::test]
async fn empty_cart_is_rejected() {
    let state = test_state(true).await;

    let result = state
        .orders
        .quote(CheckoutPriceRequest {
            items: vec![],
            delivery_type: DeliveryType::Pickup,
            promo_code: None,
            tip: None,
        })
        .await;
    assert!(result.is_err());
}

// ==================== Order Creation ====================

#[tokio::test]
async fn order_creation_snapshots_prices_and_consumes_promo() {
    let state = test_state(true).await;
    let seller = seed_seller(&state, "Burger Barn").await;
    let item = seed_menu_item(&state, &seller, "Double Stack", 12.5, None).await;
    seed_promo(&state, "TEN", 10.0).await;

    let order = state
        .orders
        .create_order(OrderCreate {
            client_id: "client:alice".to_string(),
            seller_id: seller.clone(),
            items: vec![line(&item, 2)],
            delivery_type: DeliveryType::Delivery,
            promo_code: Some("TEN".to_string()),
            tip: None,
            payment_method: Some("card".to_string()),
            delivery_address: Some("1 Main St".to_string()),
            scheduled_for: None,
        })
        .await
        .expect("create order");

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.payment_status, PaymentStatus::Pending);
    // 25.00 - 2.50 promo + 4.99 delivery = 27.49
    assert_eq!(order.total_amount, 27.49);
    assert_eq!(order.items[0].unit_price, 12.5);
    assert_eq!(order.promo_code_applied.as_deref(), Some("TEN"));
    assert!(order.estimated_delivery_time.is_some());

    // The code is consumed; a later price edit on the menu item must not
    // touch the stored line snapshot.
    let promo = PromoCodeRepository::new(state.db.clone())
        .find_by_code("TEN")
        .await
        .unwrap()
        .unwrap();
    assert!(!promo.available);

    MenuItemRepository::new(state.db.clone())
        .update(&item, serde_json::json!({ "price": 99.0 }))
        .await
        .unwrap();
    let stored = OrderRepository::new(state.db.clone())
        .find_by_id(&order.id_string())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.items[0].unit_price, 12.5);
    assert_eq!(stored.items[0].line_total(), 25.0);
    assert_eq!(stored.total_amount, 27.49);
}

#[tokio::test]
async fn consumed_promo_prices_without_discount_next_time() {
    let state = test_state(true).await;
    let seller = seed_seller(&state, "Noodle House").await;
    let item = seed_menu_item(&state, &seller, "Ramen", 10.0, None).await;
    seed_promo(&state, "ONCE", 20.0).await;

    let create = |client: &str| OrderCreate {
        client_id: client.to_string(),
        seller_id: seller.clone(),
        items: vec![line(&item, 1)],
        delivery_type: DeliveryType::Pickup,
        promo_code: Some("ONCE".to_string()),
        tip: None,
        payment_method: None,
        delivery_address: None,
        scheduled_for: None,
    };

    let first = state.orders.create_order(create("client:a")).await.unwrap();
    assert_eq!(first.total_amount, 8.0);

    let second = state.orders.create_order(create("client:b")).await.unwrap();
    assert_eq!(second.total_amount, 10.0);
    assert!(second.promo_code_applied.is_none());
}

#[tokio::test]
async fn unknown_seller_fails_fast() {
    let state = test_state(true).await;
    let result = state
        .orders
        .create_order(OrderCreate {
            client_id: "client:x".to_string(),
            seller_id: "seller:missing".to_string(),
            items: vec![line("menu_item:missing", 1)],
            delivery_type: DeliveryType::Pickup,
            promo_code: None,
            tip: None,
            payment_method: None,
            delivery_address: None,
            scheduled_for: None,
        })
        .await;
    assert!(result.is_err());
}

// ==================== Lifecycle ====================

async fn seeded_order(state: &ServerState) -> (String, String) {
    let seller = seed_seller(state, "Taco Stand").await;
    let item = seed_menu_item(state, &seller, "Taco Trio", 9.0, None).await;
    let order = state
        .orders
        .create_order(OrderCreate {
            client_id: "client:carol".to_string(),
            seller_id: seller.clone(),
            items: vec![line(&item, 1)],
            delivery_type: DeliveryType::Pickup,
            promo_code: None,
            tip: None,
            payment_method: Some("cash".to_string()),
            delivery_address: None,
            scheduled_for: None,
        })
        .await
        .expect("create order");
    (order.id_string(), seller)
}

fn status_update(status: OrderStatus) -> OrderStatusUpdate {
    OrderStatusUpdate {
        status: Some(status),
        payment_status: None,
        r#override: false,
    }
}

#[tokio::test]
async fn strict_flow_walks_the_forward_path() {
    let state = test_state(true).await;
    let (id, _) = seeded_order(&state).await;

    for next in [
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::InDelivery,
        OrderStatus::Delivered,
    ] {
        let updated = state.orders.update_status(&id, status_update(next)).await.unwrap();
        assert_eq!(updated.status, next);
    }

    let delivered = OrderRepository::new(state.db.clone())
        .find_by_id(&id)
        .await
        .unwrap()
        .unwrap();
    assert!(delivered.actual_delivery_time.is_some());

    // Terminal: nothing further
    let result = state
        .orders
        .update_status(&id, status_update(OrderStatus::Cancelled))
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn strict_flow_rejects_jump_without_override() {
    let state = test_state(true).await;
    let (id, _) = seeded_order(&state).await;

    let result = state
        .orders
        .update_status(&id, status_update(OrderStatus::Delivered))
        .await;
    assert!(result.is_err());

    // Record unchanged
    let order = OrderRepository::new(state.db.clone())
        .find_by_id(&id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(order.status, OrderStatus::Pending);

    // With the explicit override the jump is accepted
    let updated = state
        .orders
        .update_status(
            &id,
            OrderStatusUpdate {
                status: Some(OrderStatus::Delivered),
                payment_status: None,
                r#override: true,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, OrderStatus::Delivered);
}

#[tokio::test]
async fn permissive_flow_accepts_jump() {
    let state = test_state(false).await;
    let (id, _) = seeded_order(&state).await;

    let updated = state
        .orders
        .update_status(&id, status_update(OrderStatus::Delivered))
        .await
        .unwrap();
    assert_eq!(updated.status, OrderStatus::Delivered);
}

#[tokio::test]
async fn cancel_at_ready_is_terminal() {
    let state = test_state(true).await;
    let (id, _) = seeded_order(&state).await;

    for next in [OrderStatus::Confirmed, OrderStatus::Preparing, OrderStatus::Ready] {
        state.orders.update_status(&id, status_update(next)).await.unwrap();
    }

    let cancelled = state
        .orders
        .update_status(&id, status_update(OrderStatus::Cancelled))
        .await
        .unwrap();
    assert_eq!(cancelled.status, OrderStatus::Cancelled);
    // Cancellation performs no automatic refund
    assert!(cancelled.refund_info.is_none());

    let result = state
        .orders
        .update_status(&id, status_update(OrderStatus::InDelivery))
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn payment_axis_and_refund() {
    let state = test_state(true).await;
    let (id, _) = seeded_order(&state).await;

    // Fail then retry then settle
    for payment in [PaymentStatus::Failed, PaymentStatus::Pending, PaymentStatus::Paid] {
        let updated = state
            .orders
            .update_status(
                &id,
                OrderStatusUpdate {
                    status: None,
                    payment_status: Some(payment),
                    r#override: false,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.payment_status, payment);
    }

    // Refund records info and terminates the payment axis
    let refunded = state
        .orders
        .refund(
            &id,
            RefundRequest {
                amount: 5.0,
                reason: "cold food".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(refunded.payment_status, PaymentStatus::Refunded);
    let info = refunded.refund_info.expect("refund info");
    assert_eq!(info.amount, 5.0);
    assert_eq!(info.reason, "cold food");

    // Refunded is terminal
    let result = state
        .orders
        .update_status(
            &id,
            OrderStatusUpdate {
                status: None,
                payment_status: Some(PaymentStatus::Pending),
                r#override: false,
            },
        )
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn guarded_update_refuses_stale_expected_state() {
    let state = test_state(true).await;
    let (id, _) = seeded_order(&state).await;

    // The order is pending/pending; a writer that read an older state
    // (here: confirmed) must lose with a conflict, leaving the record
    // untouched.
    let repo = OrderRepository::new(state.db.clone());
    let result = repo
        .update_guarded(
            &id,
            OrderStatus::Confirmed,
            PaymentStatus::Pending,
            serde_json::json!({ "status": "preparing" }),
        )
        .await;
    assert!(matches!(result, Err(RepoError::Conflict(_))));

    let order = repo.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(order.status, OrderStatus::Pending);
}

#[tokio::test]
async fn refund_requires_settled_payment() {
    let state = test_state(true).await;
    let (id, _) = seeded_order(&state).await;

    let result = state
        .orders
        .refund(
            &id,
            RefundRequest {
                amount: 1.0,
                reason: "test".to_string(),
            },
        )
        .await;
    assert!(result.is_err());
}

// ==================== Reviews & Ratings ====================

#[tokio::test]
async fn review_creation_recomputes_aggregates() {
    let state = test_state(true).await;
    let seller = seed_seller(&state, "Pho Corner").await;
    let item = seed_menu_item(&state, &seller, "Pho Bo", 11.0, None).await;

    let review = |client: &str, rating: i32| ReviewCreate {
        seller_id: seller.clone(),
        client_id: client.to_string(),
        menu_item_id: Some(item.clone()),
        order_ref: None,
        rating,
        comment: "tasty".to_string(),
    };

    state.reviews.create_review(review("client:a", 5)).await.unwrap();
    state.reviews.create_review(review("client:b", 4)).await.unwrap();

    let seller_record = SellerRepository::new(state.db.clone())
        .require(&seller)
        .await
        .unwrap();
    assert_eq!(seller_record.rating, 4.5);
    assert_eq!(seller_record.reviews, 2);

    let item_record = MenuItemRepository::new(state.db.clone())
        .find_by_id(&item)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(item_record.rating, 4.5);
    assert_eq!(item_record.reviews, 2);
}

#[tokio::test]
async fn moderation_removes_review_from_aggregates() {
    let state = test_state(true).await;
    let seller = seed_seller(&state, "Curry Club").await;

    let created = state
        .reviews
        .create_review(ReviewCreate {
            seller_id: seller.clone(),
            client_id: "client:a".to_string(),
            menu_item_id: None,
            order_ref: None,
            rating: 1,
            comment: "spam".to_string(),
        })
        .await
        .unwrap();
    state
        .reviews
        .create_review(ReviewCreate {
            seller_id: seller.clone(),
            client_id: "client:b".to_string(),
            menu_item_id: None,
            order_ref: None,
            rating: 5,
            comment: "great".to_string(),
        })
        .await
        .unwrap();

    state
        .reviews
        .moderate(
            &created.id_string(),
            shared::models::ReviewStatusUpdate {
                status: shared::models::ReviewStatus::Rejected,
            },
        )
        .await
        .unwrap();

    let seller_record = SellerRepository::new(state.db.clone())
        .require(&seller)
        .await
        .unwrap();
    assert_eq!(seller_record.rating, 5.0);
    assert_eq!(seller_record.reviews, 1);
}

#[tokio::test]
async fn helpful_count_floors_at_zero() {
    let state = test_state(true).await;
    let seller = seed_seller(&state, "Bagel Spot").await;

    let review = state
        .reviews
        .create_review(ReviewCreate {
            seller_id: seller.clone(),
            client_id: "client:a".to_string(),
            menu_item_id: None,
            order_ref: None,
            rating: 4,
            comment: "good".to_string(),
        })
        .await
        .unwrap();
    let id = review.id_string();

    let down = state
        .reviews
        .vote_helpful(&id, HelpfulVote { delta: -1 })
        .await
        .unwrap();
    assert_eq!(down.helpful_count, 0);

    let up = state
        .reviews
        .vote_helpful(&id, HelpfulVote { delta: 1 })
        .await
        .unwrap();
    assert_eq!(up.helpful_count, 1);
}

#[tokio::test]
async fn rating_outside_range_rejected() {
    let state = test_state(true).await;
    let seller = seed_seller(&state, "Gyro Place").await;

    for rating in [0, 6, -1] {
        let result = state
            .reviews
            .create_review(ReviewCreate {
                seller_id: seller.clone(),
                client_id: "client:a".to_string(),
                menu_item_id: None,
                order_ref: None,
                rating,
                comment: String::new(),
            })
            .await;
        assert!(result.is_err(), "rating {} should be rejected", rating);
    }
}

// ==================== Analytics ====================

fn raw_order(seller: &str, client: &str, created_at: i64, total: f64) -> Order {
    Order {
        id: None,
        client: client.to_string(),
        seller: seller.to_string(),
        items: vec![market_server::db::models::OrderItem {
            menu_item: "menu_item:x".to_string(),
            name: "Item".to_string(),
            quantity: 1,
            unit_price: total,
            special_instructions: None,
        }],
        status: OrderStatus::Pending,
        payment_status: PaymentStatus::Pending,
        payment_method: None,
        total_amount: total,
        delivery_fee: None,
        tip: None,
        discount_amount: None,
        promo_code_applied: None,
        delivery_type: DeliveryType::Pickup,
        delivery_address: None,
        scheduled_for: None,
        estimated_delivery_time: None,
        actual_delivery_time: None,
        driver: None,
        refund_info: None,
        created_at,
        updated_at: created_at,
    }
}

#[tokio::test]
async fn range_queries_honor_window_boundaries() {
    let state = test_state(true).await;
    let seller = seed_seller(&state, "Boundary Bistro").await;
    let repo = OrderRepository::new(state.db.clone());

    let tz = chrono_tz::UTC;
    let june = chrono::NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    let month_start = time::day_start_millis(time::month_start(june), tz);
    let month_end = time::month_end_millis(june, tz);

    // Last local millisecond of June, and the first of July
    repo.create(raw_order(&seller, "client:a", month_end, 10.0)).await.unwrap();
    repo.create(raw_order(&seller, "client:b", month_end + 1, 20.0)).await.unwrap();

    let in_month = repo
        .find_for_seller_through(&seller, month_start, month_end)
        .await
        .unwrap();
    assert_eq!(in_month.len(), 1);
    assert_eq!(in_month[0].total_amount, 10.0);

    // Day windows are half-open: midnight of the next day is outside
    let day_start = time::day_start_millis(june, tz);
    let day_end = time::day_end_millis(june, tz);
    repo.create(raw_order(&seller, "client:c", day_start, 30.0)).await.unwrap();
    repo.create(raw_order(&seller, "client:d", day_end, 40.0)).await.unwrap();

    let in_day = repo
        .find_for_seller_between(&seller, day_start, day_end)
        .await
        .unwrap();
    assert_eq!(in_day.len(), 1);
    assert_eq!(in_day[0].total_amount, 30.0);
}

#[tokio::test]
async fn new_seller_reports_are_well_formed_zeroes() {
    let state = test_state(true).await;
    let seller = seed_seller(&state, "Fresh Start").await;

    let orders = state.analytics.orders_today(&seller).await.unwrap();
    assert_eq!(orders.today_orders, 0);
    assert_eq!(orders.percentage_change, 0.0);

    let rating = state.analytics.rating_today(&seller).await.unwrap();
    assert_eq!(rating.today_rating, 0.0);
    assert_eq!(rating.total_reviews, 0);

    let overview = state.analytics.monthly_overview(&seller).await.unwrap();
    assert_eq!(overview.total_orders, 0);
    assert_eq!(overview.total_sales, 0.0);
    assert_eq!(overview.unique_customers, 0);
    assert_eq!(overview.average_rating, 0.0);
    assert_eq!(overview.rating_change, 0.0);

    let weekly = state.analytics.weekly_revenue(&seller).await.unwrap();
    assert_eq!(weekly.revenue_data.len(), 7);
    assert!(weekly.revenue_data.iter().all(|d| d.revenue == 0.0));
    assert_eq!(weekly.revenue_data[0].name, "Mon");
    assert_eq!(weekly.revenue_data[6].name, "Sun");

    let hourly = state.analytics.hourly_orders(&seller).await.unwrap();
    assert_eq!(hourly.hourly_orders.len(), 24);

    let dist = state.analytics.status_distribution(&seller).await.unwrap();
    assert!(dist.status_distribution.is_empty());
}

#[tokio::test]
async fn unknown_seller_report_fails_before_bucketing() {
    let state = test_state(true).await;
    let result = state.analytics.orders_today("seller:missing").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn reports_reflect_created_orders() {
    let state = test_state(true).await;
    let seller = seed_seller(&state, "Pizza Planet").await;
    let item = seed_menu_item(&state, &seller, "Pepperoni", 10.0, None).await;

    for client in ["client:a", "client:b", "client:a"] {
        state
            .orders
            .create_order(OrderCreate {
                client_id: client.to_string(),
                seller_id: seller.clone(),
                items: vec![line(&item, 1)],
                delivery_type: DeliveryType::Pickup,
                promo_code: None,
                tip: None,
                payment_method: Some("card".to_string()),
                delivery_address: None,
                scheduled_for: None,
            })
            .await
            .unwrap();
    }

    // Three orders today, nothing yesterday → 100% change
    let today = state.analytics.orders_today(&seller).await.unwrap();
    assert_eq!(today.today_orders, 3);
    assert_eq!(today.percentage_change, 100.0);

    let revenue = state.analytics.revenue_today(&seller).await.unwrap();
    assert_eq!(revenue.today_revenue, 30.0);
    assert_eq!(revenue.percentage_change, 100.0);

    let overview = state.analytics.monthly_overview(&seller).await.unwrap();
    assert_eq!(overview.total_orders, 3);
    assert_eq!(overview.total_sales, 30.0);
    assert_eq!(overview.unique_customers, 2);
    assert_eq!(overview.order_percentage_change, 100.0);

    // Bucketed views agree with scalar totals
    let daily = state.analytics.daily_revenue(&seller).await.unwrap();
    let daily_sum: f64 = daily.daily_revenue.iter().map(|p| p.revenue).sum();
    assert_eq!(daily_sum, 30.0);

    let hourly = state.analytics.hourly_revenue(&seller).await.unwrap();
    let hourly_sum: f64 = hourly.hourly_revenue.iter().map(|p| p.revenue).sum();
    assert_eq!(hourly_sum, 30.0);

    let weekly = state.analytics.weekly_revenue(&seller).await.unwrap();
    let weekly_sum: f64 = weekly.revenue_data.iter().map(|d| d.revenue).sum();
    assert_eq!(weekly_sum, 30.0);

    let dist = state.analytics.status_distribution(&seller).await.unwrap();
    assert_eq!(dist.status_distribution.len(), 1);
    assert_eq!(dist.status_distribution[0].status, "pending");
    assert_eq!(dist.status_distribution[0].count, 3);

    let methods = state.analytics.payment_methods(&seller).await.unwrap();
    assert_eq!(methods.payment_methods.len(), 1);
    assert_eq!(methods.payment_methods[0].method, "card");
    assert_eq!(methods.payment_methods[0].count, 3);
    assert_eq!(methods.payment_methods[0].revenue, 30.0);
}
