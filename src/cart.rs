//! Cart
//!
//! The cart store: line items, the selected delivery and payment options,
//! write-through persistence, and the derived checkout values. Derived values
//! are recomputed on every read; the item list is small and always-fresh
//! totals matter more than the recompute cost.

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::{
    delivery::DeliveryOption,
    items::{LineItem, LineItemId, NewLineItem},
    payment::{InstallmentPlan, PaymentOption},
    storage::StorageBackend,
};

/// Storage slot holding the serialized line items.
pub const ITEMS_SLOT: &str = "cart_items";

/// Storage slot holding the selected delivery option.
pub const DELIVERY_SLOT: &str = "cart_delivery_option";

/// Storage slot holding the selected payment option.
pub const PAYMENT_SLOT: &str = "cart_payment_option";

/// The shopping cart: items, selections, and derived checkout values.
///
/// Owns an injected [`StorageBackend`] and writes each slot through on every
/// mutation. Invalid mutation arguments are silent no-ops; storage failures
/// degrade (defaults on read, warn-and-continue on write) and are never
/// surfaced to callers.
#[derive(Debug)]
pub struct CartStore<S> {
    items: Vec<LineItem>,
    delivery_option: DeliveryOption,
    payment_option: PaymentOption,
    storage: S,
}

impl<S: StorageBackend> CartStore<S> {
    /// Construct a store, rehydrating each slot from the backend.
    ///
    /// Each slot degrades to its default independently: absent or corrupt
    /// `cart_items` never poisons a valid delivery or payment selection.
    pub fn new(storage: S) -> Self {
        let items = read_slot(&storage, ITEMS_SLOT).unwrap_or_default();
        let delivery_option = read_slot(&storage, DELIVERY_SLOT).unwrap_or_default();
        let payment_option = read_slot(&storage, PAYMENT_SLOT).unwrap_or_default();

        Self {
            items,
            delivery_option,
            payment_option,
            storage,
        }
    }

    /// Hand the backend back, consuming the store.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Add a candidate to the cart.
    ///
    /// A candidate matching an existing `(product, size, color)` variant
    /// increments that item's quantity; the first-added snapshot and fields
    /// are preserved. Otherwise the candidate is appended under a fresh
    /// identifier. Zero-quantity candidates are ignored.
    pub fn add_item(&mut self, candidate: NewLineItem) {
        if candidate.quantity == 0 {
            debug!(product = %candidate.product, "ignoring zero-quantity candidate");
            return;
        }

        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|item| item.matches_variant(&candidate))
        {
            existing.quantity += candidate.quantity;
        } else {
            self.items.push(LineItem::from_candidate(candidate));
        }

        write_slot(&mut self.storage, ITEMS_SLOT, &self.items);
    }

    /// Remove the item with the given identifier; no-op if absent.
    pub fn remove_item(&mut self, id: LineItemId) {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);

        if self.items.len() != before {
            write_slot(&mut self.storage, ITEMS_SLOT, &self.items);
        }
    }

    /// Replace an item's quantity.
    ///
    /// A zero quantity or an unknown identifier is a silent no-op; the
    /// request is ignored rather than treated as a failure.
    pub fn update_quantity(&mut self, id: LineItemId, quantity: u32) {
        if quantity == 0 {
            return;
        }

        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return;
        };

        item.quantity = quantity;
        write_slot(&mut self.storage, ITEMS_SLOT, &self.items);
    }

    /// Empty the cart and reset the payment option to full.
    ///
    /// The delivery option is left untouched.
    pub fn clear(&mut self) {
        self.items.clear();
        self.payment_option = PaymentOption::default();

        write_slot(&mut self.storage, ITEMS_SLOT, &self.items);
        write_slot(&mut self.storage, PAYMENT_SLOT, &self.payment_option);
    }

    /// Replace the selected delivery option.
    pub fn set_delivery_option(&mut self, option: DeliveryOption) {
        self.delivery_option = option;
        write_slot(&mut self.storage, DELIVERY_SLOT, &self.delivery_option);
    }

    /// Replace the selected payment option.
    ///
    /// Eligibility is not enforced here; callers check
    /// [`PaymentOption::is_selectable`] before offering a choice, but the
    /// store accepts any option and keeps totals consistent regardless.
    pub fn set_payment_option(&mut self, option: PaymentOption) {
        self.payment_option = option;
        write_slot(&mut self.storage, PAYMENT_SLOT, &self.payment_option);
    }

    /// The line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Look up a line item by identifier.
    #[must_use]
    pub fn item(&self, id: LineItemId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// The currently selected delivery option.
    #[must_use]
    pub fn delivery_option(&self) -> DeliveryOption {
        self.delivery_option
    }

    /// The currently selected payment option.
    #[must_use]
    pub fn payment_option(&self) -> PaymentOption {
        self.payment_option
    }

    /// The number of distinct line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of unit price times quantity over all items, in minor units.
    #[must_use]
    pub fn subtotal(&self) -> u64 {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Delivery charge in minor units; zero for an empty cart.
    #[must_use]
    pub fn delivery_cost(&self) -> u64 {
        if self.items.is_empty() {
            0
        } else {
            self.delivery_option.price()
        }
    }

    /// Order total in minor units: subtotal plus delivery cost.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.subtotal() + self.delivery_cost()
    }

    /// Total number of units across all items, for badge counts.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// The installment facility as it applies to the current total.
    #[must_use]
    pub fn installment_plan(&self) -> InstallmentPlan {
        InstallmentPlan::for_total(self.total())
    }

    /// Whether the current total qualifies for monthly deductions.
    #[must_use]
    pub fn is_eligible_for_installment(&self) -> bool {
        self.installment_plan().eligible
    }

    /// Number of monthly deductions needed to cover the current total.
    #[must_use]
    pub fn installment_months(&self) -> u64 {
        self.installment_plan().months
    }

    /// Flat per-month deduction for the current total; zero when ineligible.
    #[must_use]
    pub fn monthly_payment(&self) -> u64 {
        self.installment_plan().monthly_payment
    }
}

/// Read and deserialize one slot, degrading to `None` on any failure.
fn read_slot<S: StorageBackend, T: DeserializeOwned>(storage: &S, key: &str) -> Option<T> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            warn!(key, %err, "cart slot read failed; falling back to default");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(key, %err, "discarding corrupt cart slot");
            None
        }
    }
}

/// Serialize and write one slot, keeping in-memory state on any failure.
fn write_slot<S: StorageBackend, T: Serialize>(storage: &mut S, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(payload) => {
            if let Err(err) = storage.set(key, &payload) {
                warn!(key, %err, "cart slot write failed; in-memory state kept");
            }
        }
        Err(err) => warn!(key, %err, "cart slot serialization failed"),
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        products::{ProductId, ProductSnapshot},
        storage::MemoryStorage,
    };

    use super::*;

    fn candidate(product: &str, price: u64, quantity: u32) -> NewLineItem {
        NewLineItem {
            product: ProductId::from(product),
            snapshot: ProductSnapshot {
                name: format!("Fabric {product}"),
                unit_price: price,
                image: None,
            },
            quantity,
            size: "M".to_owned(),
            color: "indigo".to_owned(),
            designer: None,
        }
    }

    fn store() -> CartStore<MemoryStorage> {
        CartStore::new(MemoryStorage::new())
    }

    #[test]
    fn starts_empty_with_default_selections() {
        let cart = store();

        assert!(cart.is_empty());
        assert_eq!(cart.delivery_option(), DeliveryOption::Standard);
        assert_eq!(cart.payment_option(), PaymentOption::Full);
        assert_eq!(cart.total(), 0);
    }

    #[test]
    fn duplicate_variant_merges_into_one_item() {
        let mut cart = store();

        cart.add_item(candidate("fabric-001", 2500, 2));
        cart.add_item(candidate("fabric-001", 2500, 3));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items().first().map(|item| item.quantity), Some(5));
    }

    #[test]
    fn merge_keeps_the_first_added_snapshot() {
        let mut cart = store();

        cart.add_item(candidate("fabric-001", 2500, 1));

        let mut repriced = candidate("fabric-001", 9999, 1);
        repriced.snapshot.name = "Renamed".to_owned();
        cart.add_item(repriced);

        let item = cart.items().first().cloned();
        assert_eq!(item.as_ref().map(|item| item.snapshot.unit_price), Some(2500));
        assert_eq!(
            item.map(|item| item.snapshot.name),
            Some("Fabric fabric-001".to_owned())
        );
    }

    #[test]
    fn differing_variants_stay_distinct() {
        let mut cart = store();

        cart.add_item(candidate("fabric-001", 2500, 1));

        let mut other_size = candidate("fabric-001", 2500, 1);
        other_size.size = "L".to_owned();
        cart.add_item(other_size);

        let mut other_color = candidate("fabric-001", 2500, 1);
        other_color.color = "ochre".to_owned();
        cart.add_item(other_color);

        cart.add_item(candidate("fabric-002", 2500, 1));

        assert_eq!(cart.len(), 4);
    }

    #[test]
    fn zero_quantity_candidate_is_ignored() {
        let mut cart = store();

        cart.add_item(candidate("fabric-001", 2500, 0));

        assert!(cart.is_empty());
    }

    #[test]
    fn remove_item_drops_the_row() {
        let mut cart = store();

        cart.add_item(candidate("fabric-001", 2500, 1));
        cart.add_item(candidate("fabric-002", 1000, 1));

        let id = cart.items().first().expect("cart was just populated").id;

        cart.remove_item(id);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.subtotal(), 1000);
    }

    #[test]
    fn remove_unknown_id_is_a_no_op() {
        let mut cart = store();

        cart.add_item(candidate("fabric-001", 2500, 1));
        cart.remove_item(LineItemId::generate());

        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn update_quantity_replaces_the_count() {
        let mut cart = store();

        cart.add_item(candidate("fabric-001", 2500, 1));
        let id = cart.items().first().expect("cart was just populated").id;

        cart.update_quantity(id, 4);

        assert_eq!(cart.subtotal(), 10000);
        assert_eq!(cart.item_count(), 4);
    }

    #[test]
    fn zero_quantity_update_is_a_no_op() {
        let mut cart = store();

        cart.add_item(candidate("fabric-001", 2500, 3));
        let id = cart.items().first().expect("cart was just populated").id;

        cart.update_quantity(id, 0);

        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn update_quantity_unknown_id_is_a_no_op() {
        let mut cart = store();

        cart.add_item(candidate("fabric-001", 2500, 3));
        cart.update_quantity(LineItemId::generate(), 7);

        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn subtotal_tracks_quantity_changes() {
        let mut cart = store();

        cart.add_item(candidate("fabric-001", 2500, 1));
        let before = cart.subtotal();

        let id = cart.items().first().expect("cart was just populated").id;
        cart.update_quantity(id, 2);
        assert!(cart.subtotal() > before, "subtotal should grow with quantity");

        cart.remove_item(id);
        assert_eq!(cart.subtotal(), 0);
    }

    #[test]
    fn empty_cart_has_no_delivery_cost_for_any_option() {
        let mut cart = store();

        for option in DeliveryOption::ALL {
            cart.set_delivery_option(option);

            assert_eq!(cart.delivery_cost(), 0);
            assert_eq!(cart.total(), 0);
        }
    }

    #[test]
    fn delivery_cost_follows_the_selected_option() {
        let mut cart = store();

        cart.add_item(candidate("fabric-001", 2500, 1));
        cart.set_delivery_option(DeliveryOption::Express);

        assert_eq!(cart.delivery_cost(), 1200);
        assert_eq!(cart.total(), 3700);
    }

    #[test]
    fn item_count_counts_units_not_rows() {
        let mut cart = store();

        cart.add_item(candidate("fabric-001", 2500, 2));
        cart.add_item(candidate("fabric-002", 1000, 3));

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn clear_resets_payment_but_not_delivery() {
        let mut cart = store();

        cart.set_delivery_option(DeliveryOption::Express);
        cart.set_payment_option(PaymentOption::Installment);
        cart.add_item(candidate("fabric-001", 2500, 1));
        cart.add_item(candidate("fabric-002", 1000, 1));

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.payment_option(), PaymentOption::Full);
        assert_eq!(cart.delivery_option(), DeliveryOption::Express);
    }

    #[test]
    fn set_payment_option_does_not_enforce_eligibility() {
        let mut cart = store();

        cart.add_item(candidate("fabric-001", 40000, 1));
        cart.set_payment_option(PaymentOption::Installment);

        assert_eq!(cart.payment_option(), PaymentOption::Installment);
        assert!(!cart.is_eligible_for_installment());
        assert_eq!(cart.monthly_payment(), 0);
    }

    #[test]
    fn installment_values_derive_from_the_full_total() {
        let mut cart = store();

        // 11500 subtotal + 500 standard delivery = 12000 total.
        cart.add_item(candidate("fabric-001", 11500, 1));

        assert_eq!(cart.total(), 12000);
        assert!(cart.is_eligible_for_installment());
        assert_eq!(cart.installment_months(), 3);
        assert_eq!(cart.monthly_payment(), 5000);
    }

    #[test]
    fn item_lookup_by_id() {
        let mut cart = store();

        cart.add_item(candidate("fabric-001", 2500, 1));
        let id = cart.items().first().expect("cart was just populated").id;

        assert!(cart.item(id).is_some());
        assert!(cart.item(LineItemId::generate()).is_none());
    }
}
