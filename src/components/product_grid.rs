//! Product Grid Component
//!
//! Renders the current category's products in backend order and wires the
//! drag gesture to the reorder controller. Uses leptos-dragdrop: a release on
//! a card asks the backend to place the dragged card next to it, a release
//! anywhere else follows the configured drop-outside policy.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::*;

use crate::api::ApiClient;
use crate::components::ProductCard;
use crate::config::SiteConfig;
use crate::context::{use_app_context, NoticeKind};
use crate::reorder::ReorderController;
use crate::store::{store_apply_reorder, use_app_store, AppStateStoreFields};

#[component]
pub fn ProductGrid() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let api = expect_context::<ApiClient>();
    let config = expect_context::<SiteConfig>();

    let controller = Rc::new(ReorderController::new(api, config.drop_outside));

    // Create DnD signals
    let dnd = create_dnd_signals();

    // Keep the controller's phase in step with the gesture
    {
        let controller = controller.clone();
        Effect::new(move |_| {
            if let Some(source) = dnd.dragging_read.get() {
                controller.begin_drag(source.id, source.index);
            }
        });
    }

    bind_global_mouseup(dnd, move |release| {
        if !ctx.role.get_untracked().can_reorder() {
            return;
        }
        let controller = controller.clone();
        let category = ctx.current_category.get_untracked();
        spawn_local(async move {
            let outcome = controller.settle(release, category.as_deref()).await;

            if !ctx.is_current_category(category.as_deref()) {
                log::debug!("[DND] category changed during reorder, ignoring result");
                return;
            }
            if outcome.error().is_some() {
                ctx.notify(NoticeKind::Error, "Could not change the product order. Please try again.");
            }
            store_apply_reorder(&store, outcome);
        });
    });

    let products = move || store.products().get().into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <section class="product-grid-section">
            <Show when=move || ctx.role.get().can_reorder()>
                <p class="grid-hint">"Drag a card onto another card to change the order."</p>
            </Show>

            <div class=move || if dnd.dragging_read.get().is_some() { "product-grid dragging" } else { "product-grid" }>
                <For
                    each=products
                    // index is part of the key so cards re-render with fresh drag sources after a reorder
                    key=|(index, product)| (*index, product.id)
                    children=move |(index, product)| {
                        view! { <ProductCard product=product index=index dnd=dnd /> }
                    }
                />
            </div>

            <Show when=move || store.products().get().is_empty() && ctx.current_category.get().is_some()>
                <p class="empty">"No products in this category yet."</p>
            </Show>
        </section>
    }
}
