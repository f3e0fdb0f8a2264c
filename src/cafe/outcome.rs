//! Typed results for operations whose failure is an ordinary, expected case.
//!
//! A missing menu item or order is something the person at the till types
//! every day, so it is reported as a value rather than an error. Each outcome
//! also knows how to describe itself as a [`CmdMessage`] so every front end
//! uses the same wording.

use crate::model::{MenuItem, MenuItemId, OrderId};
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    fn new(level: MessageLevel, content: impl Into<String>) -> Self {
        Self {
            level,
            content: content.into(),
        }
    }

    pub fn info(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Info, content)
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Success, content)
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Warning, content)
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Error, content)
    }
}

/// Result of attaching a menu item to an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddItemOutcome {
    Added(MenuItem),
    ItemNotFound(MenuItemId),
    OrderNotFound(OrderId),
    /// The order is already completed and takes no more items.
    OrderClosed(OrderId),
    /// The new total would not fit in a `Decimal`.
    TotalOutOfRange(OrderId),
}

impl AddItemOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, AddItemOutcome::Added(_))
    }

    pub fn message(&self) -> CmdMessage {
        match self {
            AddItemOutcome::Added(item) => {
                CmdMessage::success(format!("{} added to order.", item.name))
            }
            AddItemOutcome::ItemNotFound(_) => CmdMessage::error("Invalid item ID!"),
            AddItemOutcome::OrderNotFound(id) => {
                CmdMessage::error(format!("Order #{} not found.", id))
            }
            AddItemOutcome::OrderClosed(id) => CmdMessage::warning(format!(
                "Order #{} is already completed and cannot take more items.",
                id
            )),
            AddItemOutcome::TotalOutOfRange(id) => CmdMessage::error(format!(
                "Order #{} cannot take this item: the total would be too large.",
                id
            )),
        }
    }
}

/// Result of completing an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Completed { order_id: OrderId, total: Decimal },
    AlreadyCompleted(OrderId),
    NotFound(OrderId),
}

impl Completion {
    pub fn is_completed(&self) -> bool {
        matches!(self, Completion::Completed { .. })
    }

    pub fn message(&self) -> CmdMessage {
        match self {
            Completion::Completed { order_id, .. } => {
                CmdMessage::success(format!("Order #{} completed!", order_id))
            }
            Completion::AlreadyCompleted(id) => {
                CmdMessage::warning(format!("Order #{} is already completed.", id))
            }
            Completion::NotFound(id) => CmdMessage::error(format!("Order #{} not found.", id)),
        }
    }
}
