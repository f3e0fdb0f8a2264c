use crate::model::{MenuItem, Order, OrderId};
use crate::outcome::{AddItemOutcome, Completion};
use std::collections::BTreeMap;

/// Owns every order created during the process lifetime.
///
/// Ids start at 1 and are handed out in creation order; they are never
/// reused because orders are never removed.
#[derive(Debug, Clone)]
pub struct OrderLedger {
    orders: BTreeMap<OrderId, Order>,
    next_id: OrderId,
}

impl Default for OrderLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderLedger {
    pub fn new() -> Self {
        Self {
            orders: BTreeMap::new(),
            next_id: 1,
        }
    }

    pub fn create_order(&mut self) -> &Order {
        let id = self.next_id;
        self.next_id += 1;
        tracing::info!(order_id = id, "order created");
        self.orders.entry(id).or_insert_with(|| Order::new(id))
    }

    /// Attaches `item` to a pending order.
    pub fn add_item(&mut self, order_id: OrderId, item: MenuItem) -> AddItemOutcome {
        let Some(order) = self.orders.get_mut(&order_id) else {
            tracing::warn!(order_id, item_id = item.id, "add item: no such order");
            return AddItemOutcome::OrderNotFound(order_id);
        };
        if !order.is_pending() {
            tracing::warn!(order_id, item_id = item.id, "add item: order already completed");
            return AddItemOutcome::OrderClosed(order_id);
        }

        if !order.add_item(item.clone()) {
            tracing::warn!(order_id, item_id = item.id, "add item: order total out of range");
            return AddItemOutcome::TotalOutOfRange(order_id);
        }
        tracing::debug!(order_id, item_id = item.id, total = %order.total, "item added");
        AddItemOutcome::Added(item)
    }

    pub fn get_by_id(&self, id: OrderId) -> Option<&Order> {
        self.orders.get(&id)
    }

    /// Marks an order completed. Only the first call for a given order
    /// reports `Completed`, so the caller books its total exactly once.
    pub fn complete(&mut self, id: OrderId) -> Completion {
        let Some(order) = self.orders.get_mut(&id) else {
            tracing::warn!(order_id = id, "complete: no such order");
            return Completion::NotFound(id);
        };
        if !order.complete() {
            tracing::warn!(order_id = id, "complete: order already completed");
            return Completion::AlreadyCompleted(id);
        }

        tracing::info!(order_id = id, total = %order.total, "order completed");
        Completion::Completed {
            order_id: id,
            total: order.total,
        }
    }

    /// All orders, ascending by id.
    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.orders.values()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
