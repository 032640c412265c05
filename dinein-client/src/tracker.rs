//! Order tracker
//!
//! 顾客端的订单状态轮询。每次状态变化只报一次, 到达终态自己停,
//! 也可以随时取消; 轮询任务不会在后台悬着。

use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use shared::models::{Order, OrderStatus};

use crate::HttpClient;

/// Default customer polling cadence
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(3);

/// What the tracker reports
#[derive(Debug, Clone)]
pub enum TrackerEvent {
    /// The order moved to a different status
    StatusChanged {
        from: OrderStatus,
        to: OrderStatus,
        order: Order,
    },
    /// The order reached a terminal status; no more events follow
    Finished { order: Order },
}

/// Background poller for a single order
pub struct OrderTracker {
    events: mpsc::Receiver<TrackerEvent>,
    cancel: CancellationToken,
}

impl OrderTracker {
    /// Start polling. The task exits on its own when the order reaches a
    /// terminal status, when [`stop`](Self::stop) is called, or when the
    /// tracker itself is dropped.
    pub fn spawn(api: HttpClient, order_id: String, interval: Duration) -> Self {
        let cancel = CancellationToken::new();
        let (tx, rx) = mpsc::channel(16);

        tokio::spawn(poll_loop(api, order_id, interval, tx, cancel.clone()));

        Self { events: rx, cancel }
    }

    /// Next event, or `None` once the poller has exited
    pub async fn next_event(&mut self) -> Option<TrackerEvent> {
        self.events.recv().await
    }

    /// Cancel the poller
    pub fn stop(&self) {
        self.cancel.cancel();
    }
}

async fn poll_loop(
    api: HttpClient,
    order_id: String,
    interval: Duration,
    tx: mpsc::Sender<TrackerEvent>,
    cancel: CancellationToken,
) {
    let mut last: Option<OrderStatus> = None;

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = tx.closed() => break,
            _ = tokio::time::sleep(interval) => {}
        }

        let order = match api.order(&order_id).await {
            Ok(order) => order,
            Err(err) if err.is_not_found() => {
                warn!(%order_id, "order disappeared, stopping tracker");
                break;
            }
            Err(err) => {
                // 网络抖动, 下一轮再试
                debug!(%order_id, %err, "order poll failed");
                continue;
            }
        };

        let status = order.status;
        if last.is_some_and(|prev| prev != status)
            && let Some(from) = last
        {
            let event = TrackerEvent::StatusChanged {
                from,
                to: status,
                order: order.clone(),
            };
            if tx.send(event).await.is_err() {
                break;
            }
        }
        last = Some(status);

        if status.is_terminal() {
            let _ = tx.send(TrackerEvent::Finished { order }).await;
            break;
        }
    }
}
