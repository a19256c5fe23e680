//! Cart lines and the cart mutation rules.
//!
//! The cart is pure data: every rule about merging, quantity clamping, and
//! removal lives here, with no knowledge of how or where the cart is
//! persisted. The storefront's `CartStore` layers load/persist on top.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogItem;
use crate::types::{ItemId, Price};

/// One distinct product's entry in the cart.
///
/// Everything except `qty` is a snapshot of the catalog item at add-time;
/// later catalog edits do not rewrite existing lines. The serialized field
/// names (`id`, `name`, `price`, `emoji`, `qty`) are the persisted wire
/// format and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Catalog id this line references.
    pub id: ItemId,
    /// Name snapshot.
    pub name: String,
    /// Unit price snapshot.
    pub price: Price,
    /// Glyph snapshot.
    #[serde(rename = "emoji")]
    pub glyph: String,
    /// Quantity, always >= 1.
    pub qty: u32,
}

impl CartLine {
    /// Snapshot a catalog item into a fresh line with quantity 1.
    fn snapshot(item: &CatalogItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            glyph: item.glyph.clone(),
            qty: 1,
        }
    }

    /// Total price of this line (`price * qty`).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price * self.qty
    }
}

/// An ordered sequence of cart lines.
///
/// Invariants:
/// - at most one line per distinct item id
/// - every line has `qty >= 1`; a quantity driven to zero or below removes
///   the line instead of leaving it at zero
/// - insertion order is preserved across mutations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// The lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Find the line for an item id, if present.
    #[must_use]
    pub fn line(&self, id: &ItemId) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.id == id)
    }

    /// Add one unit of a catalog item.
    ///
    /// Merges into the existing line for the same id if there is one,
    /// otherwise appends a new line snapshotting the item.
    pub fn add(&mut self, item: &CatalogItem) {
        match self.lines.iter_mut().find(|line| line.id == item.id) {
            Some(line) => line.qty = line.qty.saturating_add(1),
            None => self.lines.push(CartLine::snapshot(item)),
        }
    }

    /// Adjust the quantity of the line for `id` by `delta`.
    ///
    /// A missing line is a silent no-op. A resulting quantity of zero or
    /// below removes the line entirely.
    pub fn change_qty(&mut self, id: &ItemId, delta: i32) {
        let Some(index) = self.lines.iter().position(|line| &line.id == id) else {
            return;
        };
        if let Some(line) = self.lines.get_mut(index) {
            let qty = i64::from(line.qty) + i64::from(delta);
            if qty <= 0 {
                self.lines.remove(index);
            } else {
                line.qty = u32::try_from(qty).unwrap_or(u32::MAX);
            }
        }
    }

    /// Remove the line for `id` if present; no-op otherwise.
    pub fn remove(&mut self, id: &ItemId) {
        self.lines.retain(|line| &line.id != id);
    }

    /// Reset to an empty sequence.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of all line quantities (the header badge value).
    #[must_use]
    pub fn total_count(&self) -> u32 {
        self.lines.iter().map(|line| line.qty).sum()
    }

    /// Sum of `price * qty` over all lines.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn noodles() -> CatalogItem {
        CatalogItem::new("m1", "Schezwan Noodles", Price::rupees(179), "🍜")
    }

    fn paneer() -> CatalogItem {
        CatalogItem::new("m2", "Paneer Butter Masala", Price::rupees(249), "🍛")
    }

    #[test]
    fn test_repeated_adds_merge_into_one_line() {
        let mut cart = Cart::new();
        for _ in 0..5 {
            cart.add(&noodles());
        }

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.line(&ItemId::new("m1")).unwrap().qty, 5);
    }

    #[test]
    fn test_add_snapshots_the_item() {
        let mut cart = Cart::new();
        cart.add(&noodles());

        let line = cart.line(&ItemId::new("m1")).unwrap();
        assert_eq!(line.name, "Schezwan Noodles");
        assert_eq!(line.price, Price::rupees(179));
        assert_eq!(line.glyph, "🍜");
        assert_eq!(line.qty, 1);
    }

    #[test]
    fn test_two_items_scenario() {
        let mut cart = Cart::new();
        cart.add(&noodles());
        cart.add(&noodles());
        cart.add(&paneer());

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.line(&ItemId::new("m1")).unwrap().qty, 2);
        assert_eq!(cart.line(&ItemId::new("m2")).unwrap().qty, 1);
        assert_eq!(cart.total_count(), 3);
        assert_eq!(cart.total_price(), Price::rupees(179 * 2 + 249));
    }

    #[test]
    fn test_change_qty_to_zero_removes_the_line() {
        let mut cart = Cart::new();
        cart.add(&noodles());
        cart.add(&noodles());

        cart.change_qty(&ItemId::new("m1"), -2);
        assert!(cart.line(&ItemId::new("m1")).is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_change_qty_below_zero_removes_the_line() {
        let mut cart = Cart::new();
        cart.add(&noodles());

        cart.change_qty(&ItemId::new("m1"), -10);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_change_qty_unknown_id_is_a_noop() {
        let mut cart = Cart::new();
        cart.add(&noodles());
        let before = cart.clone();

        cart.change_qty(&ItemId::new("unknown-id"), 1);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_unknown_id_is_a_noop() {
        let mut cart = Cart::new();
        cart.add(&noodles());
        let before = cart.clone();

        cart.remove(&ItemId::new("m9"));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(&noodles());
        cart.add(&paneer());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_count(), 0);
        assert_eq!(cart.total_price(), Price::ZERO);
    }

    #[test]
    fn test_total_price_tracks_every_mutation() {
        let mut cart = Cart::new();
        let expected = |cart: &Cart| {
            cart.lines()
                .iter()
                .map(|line| line.price * line.qty)
                .sum::<Price>()
        };

        cart.add(&noodles());
        assert_eq!(cart.total_price(), expected(&cart));
        cart.add(&paneer());
        assert_eq!(cart.total_price(), expected(&cart));
        cart.change_qty(&ItemId::new("m2"), 3);
        assert_eq!(cart.total_price(), expected(&cart));
        cart.remove(&ItemId::new("m1"));
        assert_eq!(cart.total_price(), expected(&cart));
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut cart = Cart::new();
        cart.add(&paneer());
        cart.add(&noodles());
        cart.add(&paneer());

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["m2", "m1"]);
    }

    #[test]
    fn test_wire_field_names() {
        let mut cart = Cart::new();
        cart.add(&noodles());

        let json = serde_json::to_value(&cart).unwrap();
        let line = json.get(0).unwrap();
        assert_eq!(line.get("id").unwrap(), "m1");
        assert_eq!(line.get("name").unwrap(), "Schezwan Noodles");
        assert_eq!(line.get("price").unwrap(), 179);
        assert_eq!(line.get("emoji").unwrap(), "🍜");
        assert_eq!(line.get("qty").unwrap(), 1);
    }

    #[test]
    fn test_serde_roundtrip_preserves_lines_and_order() {
        let mut cart = Cart::new();
        cart.add(&noodles());
        cart.add(&paneer());
        cart.change_qty(&ItemId::new("m1"), 2);

        let json = serde_json::to_string(&cart).unwrap();
        let parsed: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cart);
    }
}
