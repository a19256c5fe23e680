//! Static menu catalog.
//!
//! Reference data only: the menu renderer reads it, `/cart/add` looks items
//! up in it, and the cart snapshots whatever it finds. Nothing writes to it.

use delish_core::{CatalogItem, ItemId, Price};

/// The menu, in display order.
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// The sample menu served by the demo.
    #[must_use]
    pub fn sample_menu() -> Self {
        Self {
            items: vec![
                CatalogItem::new("m1", "Schezwan Noodles", Price::rupees(179), "🍜"),
                CatalogItem::new("m2", "Paneer Butter Masala", Price::rupees(249), "🍛"),
                CatalogItem::new("m3", "Margherita Pizza", Price::rupees(299), "🍕"),
                CatalogItem::new("m4", "Chocolate Lava Cake", Price::rupees(129), "🧁"),
                CatalogItem::new("m5", "Iced Lemon Tea", Price::rupees(79), "🧋"),
                CatalogItem::new("m6", "Grilled Sandwich", Price::rupees(149), "🥪"),
            ],
        }
    }

    /// All items in display order.
    #[must_use]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Look up an item by id.
    #[must_use]
    pub fn find(&self, id: &ItemId) -> Option<&CatalogItem> {
        self.items.iter().find(|item| &item.id == id)
    }
}
