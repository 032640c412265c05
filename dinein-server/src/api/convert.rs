//! 数据库模型 -> 共享模型转换
//!
//! Record ids leave the API as bare keys, never `table:key`.

use surrealdb::RecordId;

use crate::db::models;
use shared::models as wire;

/// Bare record key for the wire ("h7k2..." not "orders:h7k2...").
pub fn record_key(id: &Option<RecordId>) -> String {
    id.as_ref().map(|rid| rid.key().to_string()).unwrap_or_default()
}

pub fn restaurant_to_shared(restaurant: models::Restaurant) -> wire::Restaurant {
    // password_hash 永远不出 API
    wire::Restaurant {
        id: record_key(&restaurant.id),
        name: restaurant.name,
        contact_email: restaurant.contact_email,
        contact_phone: restaurant.contact_phone,
        address: restaurant.address,
        description: restaurant.description,
        image: restaurant.image,
        is_open: restaurant.is_open,
        created_at: restaurant.created_at,
        updated_at: restaurant.updated_at,
    }
}

pub fn table_to_shared(table: models::Table) -> wire::Table {
    wire::Table {
        id: record_key(&table.id),
        restaurant_id: table.restaurant_id,
        number: table.number,
        capacity: table.capacity,
        is_available: table.is_available,
        qr_code_url: table.qr_code_url,
        created_at: table.created_at,
        updated_at: table.updated_at,
    }
}

pub fn category_to_shared(category: models::Category) -> wire::Category {
    wire::Category {
        id: record_key(&category.id),
        restaurant_id: category.restaurant_id,
        name: category.name,
        description: category.description,
        display_order: category.display_order,
        created_at: category.created_at,
        updated_at: category.updated_at,
    }
}

pub fn menu_item_to_shared(item: models::MenuItem) -> wire::MenuItem {
    wire::MenuItem {
        id: record_key(&item.id),
        restaurant_id: item.restaurant_id,
        category_id: item.category_id,
        name: item.name,
        description: item.description,
        price: item.price,
        image: item.image,
        is_available: item.is_available,
        is_vegetarian: item.is_vegetarian,
        is_vegan: item.is_vegan,
        is_gluten_free: item.is_gluten_free,
        spice_level: item.spice_level,
        created_at: item.created_at,
        updated_at: item.updated_at,
    }
}

pub fn order_to_shared(order: models::Order) -> wire::Order {
    wire::Order {
        id: record_key(&order.id),
        restaurant_id: order.restaurant_id,
        table_number: order.table_number,
        items: order.items,
        status: order.status,
        total_amount: order.total_amount,
        notes: order.notes,
        rejection_reason: order.rejection_reason,
        created_at: order.created_at,
        updated_at: order.updated_at,
    }
}
