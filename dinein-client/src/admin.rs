//! Admin flow
//!
//! 餐厅侧: 登录拿档案, 轮询订单队列, 推单/拒单。队列一轮刷新
//! 不管进出多少单都只给一条合并通知。

use std::collections::HashSet;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use shared::models::{Order, OrderStatus, OrderUpdate, Restaurant};

use crate::{ClientError, ClientResult, HttpClient};

/// Default admin polling cadence
pub const DEFAULT_QUEUE_INTERVAL: Duration = Duration::from_secs(5);

/// A logged-in restaurant
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub restaurant: Restaurant,
    /// The server issues no token; the login reply is just the profile.
    /// Kept explicit so nothing upstream assumes there is a credential.
    pub has_token: bool,
}

/// Login with restaurant credentials
pub async fn login(api: &HttpClient, email: &str, password: &str) -> ClientResult<AdminSession> {
    let restaurant = api.login(email, password).await?;
    Ok(AdminSession {
        restaurant,
        has_token: false,
    })
}

/// What changed between two queue refreshes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueueDelta {
    /// Orders that appeared since the last refresh
    pub added: usize,
    /// Orders that disappeared (served long ago, deleted...)
    pub removed: usize,
}

impl QueueDelta {
    pub fn is_empty(&self) -> bool {
        self.added == 0 && self.removed == 0
    }

    /// One combined human-readable line, `None` when nothing changed
    pub fn summary(&self) -> Option<String> {
        match (self.added, self.removed) {
            (0, 0) => None,
            (added, 0) => Some(format!("{added} new order(s)")),
            (0, removed) => Some(format!("{removed} order(s) left the queue")),
            (added, removed) => Some(format!(
                "{added} new order(s), {removed} order(s) left the queue"
            )),
        }
    }
}

/// The restaurant's live order list
pub struct OrderQueue {
    api: HttpClient,
    restaurant_id: String,
    orders: Vec<Order>,
    primed: bool,
}

impl OrderQueue {
    pub fn new(api: HttpClient, restaurant_id: impl Into<String>) -> Self {
        Self {
            api,
            restaurant_id: restaurant_id.into(),
            orders: Vec::new(),
            primed: false,
        }
    }

    /// Newest first, as the server returns them
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn get(&self, order_id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == order_id)
    }

    /// Orders still needing attention
    pub fn open_orders(&self) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|o| !o.status.is_terminal())
            .collect()
    }

    /// Re-fetch the queue and report what changed. The first refresh primes
    /// the queue silently.
    pub async fn refresh(&mut self) -> ClientResult<QueueDelta> {
        let fresh = self.api.orders(Some(&self.restaurant_id), None).await?;

        let delta = if self.primed {
            diff(&self.orders, &fresh)
        } else {
            QueueDelta::default()
        };

        self.orders = fresh;
        self.primed = true;
        Ok(delta)
    }

    /// Move an order one step forward along its normal flow
    pub async fn advance(&mut self, order_id: &str) -> ClientResult<Order> {
        let current = self
            .get(order_id)
            .ok_or_else(|| ClientError::State(format!("unknown order: {order_id}")))?;
        let next = current.status.next().ok_or_else(|| {
            ClientError::State(format!("order is already {}", current.status))
        })?;

        let update = OrderUpdate {
            status: Some(next),
            ..OrderUpdate::default()
        };
        let order = self.api.update_order(order_id, &update).await?;
        self.patch(order.clone());
        Ok(order)
    }

    /// Cancel an order with a reason shown to the customer
    pub async fn reject(&mut self, order_id: &str, reason: impl Into<String>) -> ClientResult<Order> {
        let update = OrderUpdate {
            status: Some(OrderStatus::Cancelled),
            rejection_reason: Some(reason.into()),
            notes: None,
        };
        let order = self.api.update_order(order_id, &update).await?;
        self.patch(order.clone());
        Ok(order)
    }

    fn patch(&mut self, order: Order) {
        if let Some(slot) = self.orders.iter_mut().find(|o| o.id == order.id) {
            *slot = order;
        }
    }
}

fn diff(old: &[Order], new: &[Order]) -> QueueDelta {
    let old_ids: HashSet<&str> = old.iter().map(|o| o.id.as_str()).collect();
    let new_ids: HashSet<&str> = new.iter().map(|o| o.id.as_str()).collect();

    QueueDelta {
        added: new
            .iter()
            .filter(|o| !old_ids.contains(o.id.as_str()))
            .count(),
        removed: old
            .iter()
            .filter(|o| !new_ids.contains(o.id.as_str()))
            .count(),
    }
}

/// Background poller wrapping [`OrderQueue::refresh`]; emits only non-empty
/// deltas and stops when cancelled or dropped.
pub struct QueueWatcher {
    deltas: mpsc::Receiver<QueueDelta>,
    cancel: CancellationToken,
}

impl QueueWatcher {
    pub fn spawn(api: HttpClient, restaurant_id: impl Into<String>, interval: Duration) -> Self {
        let cancel = CancellationToken::new();
        let (tx, rx) = mpsc::channel(16);

        tokio::spawn(watch_loop(
            OrderQueue::new(api, restaurant_id),
            interval,
            tx,
            cancel.clone(),
        ));

        Self { deltas: rx, cancel }
    }

    pub async fn next_delta(&mut self) -> Option<QueueDelta> {
        self.deltas.recv().await
    }

    pub fn stop(&self) {
        self.cancel.cancel();
    }
}

async fn watch_loop(
    mut queue: OrderQueue,
    interval: Duration,
    tx: mpsc::Sender<QueueDelta>,
    cancel: CancellationToken,
) {
    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = tx.closed() => break,
            _ = tokio::time::sleep(interval) => {}
        }

        match queue.refresh().await {
            Ok(delta) if !delta.is_empty() => {
                if tx.send(delta).await.is_err() {
                    break;
                }
            }
            Ok(_) => {}
            Err(err) => warn!(%err, "queue poll failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn order(id: &str) -> Order {
        Order {
            id: id.into(),
            restaurant_id: "r1".into(),
            table_number: 1,
            items: Vec::new(),
            status: OrderStatus::Placed,
            total_amount: 0.0,
            notes: None,
            rejection_reason: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn diff_counts_added_and_removed() {
        let old = vec![order("a"), order("b")];
        let new = vec![order("c"), order("b"), order("d")];

        let delta = diff(&old, &new);
        assert_eq!(delta, QueueDelta { added: 2, removed: 1 });
    }

    #[test]
    fn summary_is_one_combined_line() {
        assert_eq!(QueueDelta::default().summary(), None);
        assert_eq!(
            QueueDelta { added: 2, removed: 0 }.summary().unwrap(),
            "2 new order(s)"
        );
        assert_eq!(
            QueueDelta { added: 0, removed: 1 }.summary().unwrap(),
            "1 order(s) left the queue"
        );
        assert_eq!(
            QueueDelta { added: 2, removed: 1 }.summary().unwrap(),
            "2 new order(s), 1 order(s) left the queue"
        );
    }
}
