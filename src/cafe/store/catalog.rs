use crate::error::{CafeError, Result};
use crate::model::{max_price, MenuItem, MenuItemId};

/// Menu items in insertion order.
#[derive(Debug, Default, Clone)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item. An id that is already on the menu, or a price below
    /// zero or above [`max_price`], is refused.
    pub fn add(&mut self, item: MenuItem) -> Result<()> {
        if !item.has_valid_price() {
            tracing::warn!(item_id = item.id, price = %item.price, "refusing menu item price");
            return Err(CafeError::InvalidPrice(item.id));
        }
        if self.find_by_id(item.id).is_some() {
            tracing::warn!(item_id = item.id, "refusing duplicate menu item");
            return Err(CafeError::DuplicateMenuItem(item.id));
        }
        tracing::debug!(item_id = item.id, name = %item.name, price = %item.price, "menu item added");
        self.items.push(item);
        Ok(())
    }

    /// First item with the given id.
    pub fn find_by_id(&self, id: MenuItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn list_all(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn item(id: MenuItemId, name: &str) -> MenuItem {
        MenuItem::new(id, name, Decimal::new(300, 2), "Pastries")
    }

    #[test]
    fn lists_in_insertion_order() {
        let mut catalog = MenuCatalog::new();
        catalog.add(item(4, "Croissant")).unwrap();
        catalog.add(item(1, "Scone")).unwrap();
        catalog.add(item(9, "Bagel")).unwrap();

        let ids: Vec<MenuItemId> = catalog.list_all().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![4, 1, 9]);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn find_by_id_returns_the_matching_item() {
        let mut catalog = MenuCatalog::new();
        catalog.add(item(1, "Scone")).unwrap();
        catalog.add(item(2, "Bagel")).unwrap();

        assert_eq!(catalog.find_by_id(2).map(|i| i.name.as_str()), Some("Bagel"));
    }

    #[test]
    fn unknown_id_is_none() {
        let mut catalog = MenuCatalog::new();
        assert!(catalog.find_by_id(1).is_none());
        catalog.add(item(1, "Scone")).unwrap();
        assert!(catalog.find_by_id(999).is_none());
    }

    #[test]
    fn duplicate_id_is_rejected_and_first_entry_kept() {
        let mut catalog = MenuCatalog::new();
        catalog.add(item(1, "Scone")).unwrap();

        let err = catalog.add(item(1, "Impostor")).unwrap_err();
        assert!(matches!(err, CafeError::DuplicateMenuItem(1)));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.find_by_id(1).unwrap().name, "Scone");
    }

    #[test]
    fn negative_price_is_rejected() {
        let mut catalog = MenuCatalog::new();
        let refund = MenuItem::new(6, "Refund", Decimal::new(-1000, 2), "Pastries");

        let err = catalog.add(refund).unwrap_err();
        assert!(matches!(err, CafeError::InvalidPrice(6)));
        assert!(catalog.is_empty());
    }

    #[test]
    fn price_above_limit_is_rejected() {
        let mut catalog = MenuCatalog::new();
        let err = catalog
            .add(MenuItem::new(6, "Gold Bar", Decimal::MAX, "Vault"))
            .unwrap_err();
        assert!(matches!(err, CafeError::InvalidPrice(6)));

        catalog
            .add(MenuItem::new(7, "Platter", max_price(), "Food"))
            .unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn free_item_is_allowed() {
        let mut catalog = MenuCatalog::new();
        catalog
            .add(MenuItem::new(8, "Tap Water", Decimal::ZERO, "Beverages"))
            .unwrap();
        assert!(catalog.find_by_id(8).is_some());
    }
}
