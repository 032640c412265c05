//! Customer flow
//!
//! 扫码 -> 看菜单 -> 购物车 -> 下单 -> 盯订单状态, 全程状态落盘,
//! 关掉再开能接着来。

use std::time::Duration;

use shared::models::{Category, MenuItem, Order, OrderCreate, OrderItem};

use crate::cart::{Cart, CartLine};
use crate::session::{TableSession, resolve_session};
use crate::store::{ClientState, StateStore};
use crate::tracker::OrderTracker;
use crate::{ClientError, ClientResult, HttpClient};

/// One displayable order line, whether it still lives in the cart or already
/// belongs to a placed order.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderLine {
    Cart(CartLine),
    Persisted(OrderItem),
}

impl OrderLine {
    pub fn menu_item_id(&self) -> &str {
        match self {
            OrderLine::Cart(line) => &line.menu_item_id,
            OrderLine::Persisted(item) => &item.menu_item_id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            OrderLine::Cart(line) => &line.name,
            OrderLine::Persisted(item) => &item.name,
        }
    }

    pub fn quantity(&self) -> i32 {
        match self {
            OrderLine::Cart(line) => line.quantity,
            OrderLine::Persisted(item) => item.quantity,
        }
    }

    pub fn unit_price(&self) -> f64 {
        match self {
            OrderLine::Cart(line) => line.price,
            OrderLine::Persisted(item) => item.price,
        }
    }

    pub fn note(&self) -> Option<&str> {
        match self {
            OrderLine::Cart(line) => line.note.as_deref(),
            OrderLine::Persisted(item) => item.note.as_deref(),
        }
    }

    pub fn line_total(&self) -> f64 {
        self.unit_price() * self.quantity() as f64
    }

    /// All lines of a placed order as the persisted variant
    pub fn from_order(order: &Order) -> Vec<OrderLine> {
        order
            .items
            .iter()
            .cloned()
            .map(OrderLine::Persisted)
            .collect()
    }
}

/// The customer-side state machine
pub struct CustomerFlow {
    api: HttpClient,
    store: StateStore,
    state: ClientState,
}

impl CustomerFlow {
    /// Open the flow, picking up whatever state the last run left behind
    pub fn new(api: HttpClient, store: StateStore) -> Self {
        let state = store.load();
        Self { api, store, state }
    }

    pub fn session(&self) -> Option<&TableSession> {
        self.state.session.as_ref()
    }

    pub fn cart(&self) -> &Cart {
        &self.state.cart
    }

    pub fn last_order_id(&self) -> Option<&str> {
        self.state.last_order_id.as_deref()
    }

    /// Resolve a scanned deep link into the active table session. An
    /// existing session keeps its restaurant; only the table fields follow
    /// the link. The cart is left alone either way.
    pub async fn start_session(&mut self, deep_link: &str) -> ClientResult<TableSession> {
        let session =
            resolve_session(&self.api, deep_link, self.state.session.as_ref()).await?;

        self.state.session = Some(session.clone());
        self.persist()?;
        Ok(session)
    }

    /// The menu of the session's restaurant: categories plus items
    pub async fn menu(&self) -> ClientResult<(Vec<Category>, Vec<MenuItem>)> {
        let session = self.require_session()?;
        let categories = self.api.categories(Some(&session.restaurant_id)).await?;
        let items = self
            .api
            .menu_items(Some(&session.restaurant_id), None)
            .await?;
        Ok((categories, items))
    }

    pub fn add_to_cart(&mut self, item: &MenuItem, quantity: i32) -> ClientResult<()> {
        self.state.cart.add(item, quantity);
        self.persist()
    }

    pub fn set_quantity(&mut self, menu_item_id: &str, quantity: i32) -> ClientResult<()> {
        self.state.cart.set_quantity(menu_item_id, quantity);
        self.persist()
    }

    pub fn cart_lines(&self) -> Vec<OrderLine> {
        self.state
            .cart
            .lines
            .iter()
            .cloned()
            .map(OrderLine::Cart)
            .collect()
    }

    pub fn cart_total(&self) -> f64 {
        self.state.cart.total()
    }

    /// Place the order from the current cart. On success the cart empties
    /// and the new order becomes the tracked one.
    pub async fn checkout(&mut self, notes: Option<String>) -> ClientResult<Order> {
        let session = self.require_session()?.clone();
        if self.state.cart.is_empty() {
            return Err(ClientError::State("cart is empty".to_string()));
        }

        let data = OrderCreate {
            restaurant_id: session.restaurant_id.clone(),
            table_number: session.table_number,
            items: self.state.cart.to_order_items(),
            total_amount: self.state.cart.total(),
            notes,
        };

        let order = self.api.create_order(&data).await?;

        self.state.cart.clear();
        self.state.last_order_id = Some(order.id.clone());
        self.persist()?;
        Ok(order)
    }

    /// Fetch the tracked order; a deleted order just clears the reference.
    pub async fn current_order(&self) -> ClientResult<Option<Order>> {
        let Some(id) = self.state.last_order_id.as_deref() else {
            return Ok(None);
        };
        match self.api.order(id).await {
            Ok(order) => Ok(Some(order)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Start polling the tracked order
    pub fn track_order(&self, interval: Duration) -> ClientResult<OrderTracker> {
        let order_id = self
            .state
            .last_order_id
            .clone()
            .ok_or_else(|| ClientError::State("no order to track".to_string()))?;
        Ok(OrderTracker::spawn(self.api.clone(), order_id, interval))
    }

    fn require_session(&self) -> ClientResult<&TableSession> {
        self.state
            .session
            .as_ref()
            .ok_or_else(|| ClientError::State("no table session, scan a QR code first".to_string()))
    }

    fn persist(&self) -> ClientResult<()> {
        self.store.save(&self.state)
    }
}
