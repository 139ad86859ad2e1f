//! Product Detail Component
//!
//! Panel for the product opened from a card.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ProductDetail() -> impl IntoView {
    let store = use_app_store();
    let api = expect_context::<ApiClient>();

    move || store.selected_product().get().map(|product| {
        let src = product.image.server_filename.as_ref().map(|f| api.file_url("product", f));
        view! {
            <aside class="product-detail">
                <button class="close-btn" on:click=move |_| store.selected_product().set(None)>"×"</button>
                <h2>{product.product_name.clone()}</h2>
                {src.map(|src| view! { <img class="product-detail-image" src=src alt=product.image.original_filename.clone() /> })}
            </aside>
        }
    })
}
