//! Order Service
//!
//! Order creation (cart resolution → pricing → persistence, with promo
//! consumption and compensation), lifecycle transitions, and refunds.
//! `total_amount` is written once here and never silently recomputed;
//! item edits before confirmation must come back through this path.

use serde_json::{Map, Value};
use surrealdb::engine::local::Db;
use surrealdb::Surreal;

use crate::db::models::{Order, OrderItem};
use crate::db::repository::{
    MenuItemRepository, OrderRepository, PromoCodeRepository, SellerRepository,
};
use crate::orders::lifecycle::{
    validate_payment_transition, validate_status_transition, TransitionPolicy,
};
use crate::pricing::{self, CartLine};
use crate::utils::{AppError, AppResult};
use shared::models::{
    CheckoutPriceRequest, DeliveryType, MenuItemStatus, OrderCreate, OrderLineInput,
    OrderStatus, OrderStatusUpdate, PaymentStatus, PriceBreakdown, RefundInfo, RefundRequest,
};

/// Default courier estimate for delivery orders (minutes).
const DELIVERY_ESTIMATE_MINUTES: i64 = 45;

#[derive(Clone)]
pub struct OrderService {
    orders: OrderRepository,
    menu_items: MenuItemRepository,
    promo_codes: PromoCodeRepository,
    sellers: SellerRepository,
    policy: TransitionPolicy,
}

impl OrderService {
    pub fn new(db: Surreal<Db>, policy: TransitionPolicy) -> Self {
        Self {
            orders: OrderRepository::new(db.clone()),
            menu_items: MenuItemRepository::new(db.clone()),
            promo_codes: PromoCodeRepository::new(db.clone()),
            sellers: SellerRepository::new(db),
            policy,
        }
    }

    /// Resolve cart lines against the catalog, snapshotting unit prices
    /// and active item discounts. When `seller` is given, every line must
    /// belong to that seller.
    async fn resolve_cart(
        &self,
        items: &[OrderLineInput],
        seller: Option<&str>,
    ) -> AppResult<Vec<CartLine>> {
        if items.is_empty() {
            return Err(AppError::validation("cart must contain at least one item"));
        }

        let mut lines = Vec::with_capacity(items.len());
        for input in items {
            let item = self
                .menu_items
                .find_by_id(&input.menu_item_id)
                .await?
                .ok_or_else(|| {
                    AppError::not_found(format!("Menu item {} not found", input.menu_item_id))
                })?;

            if let Some(seller) = seller {
                if item.seller != seller {
                    return Err(AppError::validation(format!(
                        "Menu item {} does not belong to seller {}",
                        input.menu_item_id, seller
                    )));
                }
            }
            if item.status != MenuItemStatus::Available {
                return Err(AppError::business_rule(format!(
                    "Menu item '{}' is not available",
                    item.name
                )));
            }

            lines.push(CartLine {
                menu_item: item.id_string(),
                name: item.name.clone(),
                quantity: input.quantity,
                unit_price: item.price,
                discount_percent: item.active_discount_percent(),
                special_instructions: input.special_instructions.clone(),
            });
        }
        Ok(lines)
    }

    /// Look up a promo code without consuming it. Lookup failure is
    /// non-fatal: pricing proceeds without the discount.
    async fn resolve_promo(&self, code: Option<&str>) -> Option<crate::db::models::PromoCode> {
        let code = code?;
        match self.promo_codes.find_available(code).await {
            Ok(found) => {
                if found.is_none() {
                    tracing::debug!(code, "promo code not found or unavailable");
                }
                found
            }
            Err(e) => {
                tracing::warn!(code, error = %e, "promo code lookup failed, pricing without discount");
                None
            }
        }
    }

    /// Price a cart without writing anything (checkout preview).
    pub async fn quote(&self, req: CheckoutPriceRequest) -> AppResult<PriceBreakdown> {
        let lines = self.resolve_cart(&req.items, None).await?;
        let promo = self.resolve_promo(req.promo_code.as_deref()).await;
        let breakdown = pricing::price_cart(&lines, req.delivery_type, promo.as_ref(), req.tip)?;
        Ok(breakdown)
    }

    /// Create an order: resolve + price the cart, consume the promo code,
    /// persist. The promo consumption and the order insert are separate
    /// document writes; a failed insert releases the code again.
    pub async fn create_order(&self, req: OrderCreate) -> AppResult<Order> {
        self.sellers.require(&req.seller_id).await?;

        let lines = self.resolve_cart(&req.items, Some(&req.seller_id)).await?;

        // Consume the code up front; an unavailable or unknown code
        // degrades to "no discount applied".
        let promo = match &req.promo_code {
            Some(code) => match self.promo_codes.consume(code).await {
                Ok(consumed) => {
                    if consumed.is_none() {
                        tracing::debug!(code = %code, "promo code not available at checkout");
                    }
                    consumed
                }
                Err(e) => {
                    tracing::warn!(code = %code, error = %e, "promo consumption failed, pricing without discount");
                    None
                }
            },
            None => None,
        };

        let breakdown =
            match pricing::price_cart(&lines, req.delivery_type, promo.as_ref(), req.tip) {
                Ok(b) => b,
                Err(e) => {
                    self.release_promo(promo.as_ref()).await;
                    return Err(e.into());
                }
            };

        let now = shared::util::now_millis();
        let discount_total = pricing::to_f64(
            pricing::to_decimal(breakdown.items_discount)
                + pricing::to_decimal(breakdown.promo_discount),
        );
        let order = Order {
            id: None,
            client: req.client_id,
            seller: req.seller_id,
            items: lines
                .into_iter()
                .map(|line| OrderItem {
                    menu_item: line.menu_item,
                    name: line.name,
                    quantity: line.quantity,
                    unit_price: line.unit_price,
                    special_instructions: line.special_instructions,
                })
                .collect(),
            status: OrderStatus::Pending,
            payment_status: PaymentStatus::Pending,
            payment_method: req.payment_method,
            total_amount: breakdown.total,
            delivery_fee: (breakdown.delivery_fee > 0.0).then_some(breakdown.delivery_fee),
            tip: (breakdown.tip > 0.0).then_some(breakdown.tip),
            discount_amount: (discount_total > 0.0).then_some(discount_total),
            promo_code_applied: breakdown.promo_code_applied.clone(),
            delivery_type: req.delivery_type,
            delivery_address: req.delivery_address,
            scheduled_for: req.scheduled_for,
            estimated_delivery_time: (req.delivery_type == DeliveryType::Delivery)
                .then_some(now + DELIVERY_ESTIMATE_MINUTES * 60_000),
            actual_delivery_time: None,
            driver: None,
            refund_info: None,
            created_at: now,
            updated_at: now,
        };

        match self.orders.create(order).await {
            Ok(created) => {
                tracing::info!(
                    order = %created.id_string(),
                    seller = %created.seller,
                    total = created.total_amount,
                    "order created"
                );
                Ok(created)
            }
            Err(e) => {
                self.release_promo(promo.as_ref()).await;
                Err(e.into())
            }
        }
    }

    async fn release_promo(&self, promo: Option<&crate::db::models::PromoCode>) {
        if let Some(code) = promo {
            if let Err(e) = self.promo_codes.release(&code.code).await {
                tracing::error!(code = %code.code, error = %e, "failed to release promo code");
            }
        }
    }

    /// Apply a fulfillment and/or payment status transition. The write is
    /// guarded on the expected current state of both axes.
    pub async fn update_status(&self, id: &str, update: OrderStatusUpdate) -> AppResult<Order> {
        if update.status.is_none() && update.payment_status.is_none() {
            return Err(AppError::validation(
                "request must set status and/or paymentStatus",
            ));
        }

        let order = self
            .orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Order {} not found", id)))?;

        let now = shared::util::now_millis();
        let mut data = Map::new();
        data.insert("updated_at".to_string(), Value::from(now));

        if let Some(requested) = update.status {
            validate_status_transition(order.status, requested, self.policy, update.r#override)?;
            data.insert("status".to_string(), to_json(&requested)?);

            // Entering delivered stamps the actual delivery time once
            if requested == OrderStatus::Delivered && order.actual_delivery_time.is_none() {
                data.insert("actual_delivery_time".to_string(), Value::from(now));
            }

            let payment_after = update.payment_status.unwrap_or(order.payment_status);
            if requested == OrderStatus::Delivered && payment_after != PaymentStatus::Paid {
                tracing::warn!(
                    order = %id,
                    payment_status = %payment_after,
                    "order delivered with unsettled payment"
                );
            }
        }

        if let Some(requested) = update.payment_status {
            validate_payment_transition(order.payment_status, requested)?;
            data.insert("payment_status".to_string(), to_json(&requested)?);
        }

        let updated = self
            .orders
            .update_guarded(id, order.status, order.payment_status, Value::Object(data))
            .await?;

        tracing::info!(
            order = %id,
            status = %updated.status,
            payment_status = %updated.payment_status,
            "order transition applied"
        );
        Ok(updated)
    }

    /// Record a refund. Requires settled payment; writes `refund_info`
    /// and flips the payment axis to `refunded` in one document update.
    pub async fn refund(&self, id: &str, req: RefundRequest) -> AppResult<Order> {
        let order = self
            .orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Order {} not found", id)))?;

        if order.payment_status != PaymentStatus::Paid {
            return Err(AppError::business_rule(format!(
                "cannot refund an order with payment status {}",
                order.payment_status
            )));
        }
        if !req.amount.is_finite() || req.amount <= 0.0 || req.amount > order.total_amount {
            return Err(AppError::validation(format!(
                "refund amount must be positive and at most the order total ({})",
                order.total_amount
            )));
        }

        let now = shared::util::now_millis();
        let refund_info = RefundInfo {
            amount: req.amount,
            reason: req.reason,
            date: now,
        };

        let mut data = Map::new();
        data.insert("payment_status".to_string(), to_json(&PaymentStatus::Refunded)?);
        data.insert("refund_info".to_string(), to_json(&refund_info)?);
        data.insert("updated_at".to_string(), Value::from(now));

        let updated = self
            .orders
            .update_guarded(id, order.status, order.payment_status, Value::Object(data))
            .await?;

        tracing::info!(order = %id, amount = refund_info.amount, "refund recorded");
        Ok(updated)
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> AppResult<Value> {
    serde_json::to_value(value).map_err(|e| AppError::internal(e.to_string()))
}
