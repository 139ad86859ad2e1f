//! Application Data Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds cached
//! snapshots of backend data; every list here is replaced wholesale after a
//! mutation rather than edited in place.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Product, ProductCategory, QuestionPage};
use crate::reorder::ReorderOutcome;

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Products of the current category, in backend order
    pub products: Vec<Product>,
    pub categories: Vec<ProductCategory>,
    /// Product opened from a card click
    pub selected_product: Option<Product>,
    /// Currently loaded inquiry board page
    pub questions: QuestionPage,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the product snapshot with a refetched list
pub fn store_replace_products(store: &AppStore, products: Vec<Product>) {
    store.products().set(products);
}

/// Apply a reorder result; anything but a successful refetch leaves the list alone
pub fn store_apply_reorder(store: &AppStore, outcome: ReorderOutcome) -> bool {
    if !matches!(outcome, ReorderOutcome::Reordered(_)) {
        return false;
    }
    outcome.apply_to(&mut store.products().write())
}

/// Close the detail panel if it shows a product that no longer exists
pub fn store_forget_product(store: &AppStore, product_id: u32) {
    if store.selected_product().with_untracked(|p| p.as_ref().map(|p| p.id)) == Some(product_id) {
        store.selected_product().set(None);
    }
}
