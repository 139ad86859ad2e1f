//! Category Bar Component
//!
//! Product category buttons. Selecting one switches the product grid.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::context::{use_app_context, NoticeKind};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CategoryBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let api = expect_context::<ApiClient>();

    // Load categories once on mount; pick the first if nothing is selected
    {
        let api = api.clone();
        spawn_local(async move {
            match api.list_product_categories().await {
                Ok(categories) => {
                    log::info!("[APP] loaded {} categories", categories.len());
                    if ctx.current_category.get_untracked().is_none() {
                        ctx.select_category(categories.first().map(|c| c.category_name.clone()));
                    }
                    store.categories().set(categories);
                }
                Err(e) => {
                    log::error!("[APP] load categories failed: {}", e);
                    ctx.notify(NoticeKind::Error, "Could not load product categories.");
                }
            }
        });
    }

    view! {
        <nav class="category-bar">
            <For
                each=move || store.categories().get()
                key=|c| c.id
                children=move |category| {
                    let name = category.category_name.clone();
                    let selected_name = name.clone();
                    let is_selected = move || {
                        ctx.current_category.with(|c| c.as_deref() == Some(selected_name.as_str()))
                    };
                    let image = category.image.server_filename.as_ref()
                        .map(|file| api.file_url("category", file));

                    view! {
                        <button
                            class=move || if is_selected() { "category-btn active" } else { "category-btn" }
                            on:click=move |_| ctx.select_category(Some(name.clone()))
                        >
                            {image.map(|src| view! { <img class="category-image" src=src alt="" /> })}
                            <span class="category-name">{category.category_name.clone()}</span>
                        </button>
                    }
                }
            />
        </nav>
    }
}
