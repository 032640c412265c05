//! Customer cart
//!
//! 行按菜品 id 合并, 数量调到 0 即删行。名字和价格是加入时的快照,
//! 菜单后来改价不影响已有行。

use serde::{Deserialize, Serialize};

use shared::models::{MenuItem, OrderItem};

/// One cart line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub menu_item_id: String,
    pub name: String,
    /// Unit price snapshot
    pub price: f64,
    pub quantity: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Customer cart, persisted between launches
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    #[serde(default)]
    pub lines: Vec<CartLine>,
}

impl Cart {
    /// Add a menu item; an existing line for the same item absorbs the
    /// quantity instead of creating a duplicate line.
    pub fn add(&mut self, item: &MenuItem, quantity: i32) {
        if quantity <= 0 {
            return;
        }
        if let Some(line) = self.line_mut(&item.id) {
            line.quantity += quantity;
            return;
        }
        self.lines.push(CartLine {
            menu_item_id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            quantity,
            note: None,
        });
    }

    /// Set a line's quantity; zero or less removes the line.
    pub fn set_quantity(&mut self, menu_item_id: &str, quantity: i32) {
        if quantity <= 0 {
            self.remove(menu_item_id);
            return;
        }
        if let Some(line) = self.line_mut(menu_item_id) {
            line.quantity = quantity;
        }
    }

    /// Attach (or clear) a per-line note
    pub fn set_note(&mut self, menu_item_id: &str, note: Option<String>) {
        if let Some(line) = self.line_mut(menu_item_id) {
            line.note = note;
        }
    }

    pub fn remove(&mut self, menu_item_id: &str) {
        self.lines.retain(|line| line.menu_item_id != menu_item_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, menu_item_id: &str) -> Option<&CartLine> {
        self.lines
            .iter()
            .find(|line| line.menu_item_id == menu_item_id)
    }

    fn line_mut(&mut self, menu_item_id: &str) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.menu_item_id == menu_item_id)
    }

    /// Total number of dishes (sum of quantities)
    pub fn item_count(&self) -> i32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn total(&self) -> f64 {
        self.lines
            .iter()
            .map(|line| line.price * line.quantity as f64)
            .sum()
    }

    /// Snapshot the cart as order line items for checkout
    pub fn to_order_items(&self) -> Vec<OrderItem> {
        self.lines
            .iter()
            .map(|line| OrderItem {
                menu_item_id: line.menu_item_id.clone(),
                name: line.name.clone(),
                quantity: line.quantity,
                price: line.price,
                note: line.note.clone(),
            })
            .collect()
    }
}
