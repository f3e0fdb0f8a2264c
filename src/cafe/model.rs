use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type MenuItemId = u32;
pub type OrderId = u32;

/// Highest price the menu accepts. Keeps order totals and revenue far away
/// from the `Decimal` range limit.
pub fn max_price() -> Decimal {
    Decimal::new(10_000_000, 2)
}

/// A purchasable item. Never mutated once it is on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub price: Decimal,
    pub category: String,
}

impl MenuItem {
    pub fn new(
        id: MenuItemId,
        name: impl Into<String>,
        price: Decimal,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category: category.into(),
        }
    }

    pub fn has_valid_price(&self) -> bool {
        !self.price.is_sign_negative() && self.price <= max_price()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Completed,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "Pending"),
            OrderStatus::Completed => write!(f, "Completed"),
        }
    }
}

/// A customer order. `total` always equals the sum of `items` prices, which is
/// why the fields are only mutated through [`Order::add_item`].
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<MenuItem>,
    pub created_at: DateTime<Utc>,
    pub total: Decimal,
    pub status: OrderStatus,
}

impl Order {
    pub fn new(id: OrderId) -> Self {
        Self {
            id,
            items: Vec::new(),
            created_at: Utc::now(),
            total: Decimal::ZERO,
            status: OrderStatus::Pending,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == OrderStatus::Pending
    }

    /// Appends a line. Status is not checked here; the ledger decides whether
    /// an order may still take items.
    ///
    /// Returns false, leaving the order as it was, if the new total would
    /// not fit in a `Decimal`.
    pub fn add_item(&mut self, item: MenuItem) -> bool {
        let Some(total) = self.total.checked_add(item.price) else {
            return false;
        };
        self.total = total;
        self.items.push(item);
        true
    }

    /// Moves the order to `Completed`. Returns false if it already was.
    pub fn complete(&mut self) -> bool {
        if self.status == OrderStatus::Completed {
            return false;
        }
        self.status = OrderStatus::Completed;
        true
    }

    pub fn view(&self) -> OrderView {
        OrderView {
            id: self.id,
            status: self.status,
            created_at: self.created_at,
            lines: self
                .items
                .iter()
                .map(|item| OrderLine {
                    name: item.name.clone(),
                    price: item.price,
                })
                .collect(),
            total: self.total,
        }
    }
}

/// Read-only projection of an [`Order`] for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderView {
    pub id: OrderId,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub lines: Vec<OrderLine>,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderLine {
    pub name: String,
    pub price: Decimal,
}
