//! # API Facade
//!
//! [`CafeApi`] is the single entry point for every cafe operation, whatever
//! the front end. It composes the [`MenuCatalog`] and the [`OrderLedger`] and
//! owns the running daily revenue.
//!
//! The facade:
//! - **Resolves** ids through the stores in the right order (menu item
//!   first, then order)
//! - **Books revenue** when, and only when, the ledger reports a fresh
//!   completion
//! - **Returns structured types** (`Option`, outcome enums), never strings
//!
//! It never prints. Wording for humans lives on the outcome types and
//! formatting lives in the CLI.

use crate::config::CafeConfig;
use crate::error::Result;
use crate::model::{MenuItem, MenuItemId, Order, OrderId, OrderView};
use crate::outcome::{AddItemOutcome, Completion};
use crate::store::{MenuCatalog, OrderLedger};
use rust_decimal::Decimal;

/// The house menu every cafe opens with.
pub fn default_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::new(1, "Espresso", Decimal::new(350, 2), "Beverages"),
        MenuItem::new(2, "Cappuccino", Decimal::new(450, 2), "Beverages"),
        MenuItem::new(3, "Latte", Decimal::new(400, 2), "Beverages"),
        MenuItem::new(4, "Croissant", Decimal::new(300, 2), "Pastries"),
        MenuItem::new(5, "Muffin", Decimal::new(250, 2), "Pastries"),
    ]
}

pub struct CafeApi {
    catalog: MenuCatalog,
    ledger: OrderLedger,
    revenue: Decimal,
}

impl Default for CafeApi {
    fn default() -> Self {
        Self::new()
    }
}

impl CafeApi {
    /// A cafe stocked with [`default_menu`] and no orders.
    pub fn new() -> Self {
        let mut catalog = MenuCatalog::new();
        for item in default_menu() {
            catalog
                .add(item)
                .expect("house menu has distinct ids and in-range prices");
        }
        Self::with_catalog(catalog)
    }

    pub fn with_catalog(catalog: MenuCatalog) -> Self {
        Self {
            catalog,
            ledger: OrderLedger::new(),
            revenue: Decimal::ZERO,
        }
    }

    /// Default menu plus the config's `extra_items`. A clash with an
    /// existing id, or a price out of range, is an error.
    pub fn from_config(config: &CafeConfig) -> Result<Self> {
        let mut api = Self::new();
        for item in &config.extra_items {
            api.add_menu_item(item.clone())?;
        }
        Ok(api)
    }

    pub fn add_menu_item(&mut self, item: MenuItem) -> Result<()> {
        self.catalog.add(item)
    }

    pub fn list_menu(&self) -> &[MenuItem] {
        self.catalog.list_all()
    }

    pub fn find_menu_item(&self, id: MenuItemId) -> Option<&MenuItem> {
        self.catalog.find_by_id(id)
    }

    pub fn start_order(&mut self) -> &Order {
        self.ledger.create_order()
    }

    pub fn add_item_to_order(&mut self, order_id: OrderId, item_id: MenuItemId) -> AddItemOutcome {
        let Some(item) = self.catalog.find_by_id(item_id) else {
            tracing::warn!(order_id, item_id, "add item: no such menu item");
            return AddItemOutcome::ItemNotFound(item_id);
        };
        self.ledger.add_item(order_id, item.clone())
    }

    pub fn view_order(&self, order_id: OrderId) -> Option<OrderView> {
        self.ledger.get_by_id(order_id).map(Order::view)
    }

    pub fn complete_order(&mut self, order_id: OrderId) -> Completion {
        let completion = self.ledger.complete(order_id);
        if let Completion::Completed { total, .. } = completion {
            match self.revenue.checked_add(total) {
                Some(revenue) => {
                    self.revenue = revenue;
                    tracing::info!(order_id, revenue = %self.revenue, "revenue booked");
                }
                None => tracing::error!(order_id, total = %total, "revenue out of range, not booked"),
            }
        }
        completion
    }

    pub fn daily_revenue(&self) -> Decimal {
        self.revenue
    }

    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.ledger.orders()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Builds a [`CafeApi`] with orders already in flight.
    pub struct CafeFixture {
        pub api: CafeApi,
    }

    impl Default for CafeFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CafeFixture {
        pub fn new() -> Self {
            Self {
                api: CafeApi::new(),
            }
        }

        /// Starts an order holding `item_ids`, in that sequence.
        pub fn with_order(mut self, item_ids: &[MenuItemId]) -> Self {
            let order_id = self.api.start_order().id;
            for &item_id in item_ids {
                self.api.add_item_to_order(order_id, item_id);
            }
            self
        }

        pub fn with_completed_order(mut self, item_ids: &[MenuItemId]) -> Self {
            self = self.with_order(item_ids);
            let last = self.api.orders().last().map(|o| o.id);
            if let Some(order_id) = last {
                self.api.complete_order(order_id);
            }
            self
        }
    }
}
