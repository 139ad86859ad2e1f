//! Product Card Component
//!
//! One catalog entry. Acts as drag source and drop target in manager mode.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::*;

use crate::api::ApiClient;
use crate::components::DeleteConfirmButton;
use crate::context::{use_app_context, NoticeKind};
use crate::models::Product;
use crate::sequence::drop_placement;
use crate::store::{store_forget_product, use_app_store, AppStateStoreFields};

#[component]
pub fn ProductCard(
    product: Product,
    /// Position in the rendered list
    index: usize,
    dnd: DndSignals,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let api = expect_context::<ApiClient>();

    let id = product.id;
    let source = DragSource { id, index };
    let can_reorder = move || ctx.role.get_untracked().can_reorder();

    // DnD handlers, only live in manager mode
    let press = make_on_mousedown(dnd, source);
    let enter = make_on_card_mouseenter(dnd, id);
    let leave = make_on_mouseleave(dnd);
    let on_mousedown = move |ev: web_sys::MouseEvent| if can_reorder() { press(ev) };
    let on_mouseenter = move |ev: web_sys::MouseEvent| if can_reorder() { enter(ev) };
    let on_mouseleave = move |ev: web_sys::MouseEvent| if can_reorder() { leave(ev) };

    // Visual state
    let is_dragging = move || dnd.dragging_read.get().map(|s| s.id) == Some(id);
    let placement = move || {
        let dragged = dnd.dragging_read.get()?;
        if dnd.drop_target_read.get() != Some(id) {
            return None;
        }
        drop_placement(dragged.index, index)
    };
    let card_class = move || {
        let mut c = String::from("product-card");
        if is_dragging() { c.push_str(" dragging"); }
        if let Some(p) = placement() {
            c.push_str(" drop-target ");
            c.push_str(p.css_class());
        }
        c
    };

    let image = match &product.image.server_filename {
        Some(name) => {
            let src = api.file_url("product", name);
            view! { <img class="product-image" src=src alt=product.image.original_filename.clone() draggable="false" /> }.into_any()
        }
        None => view! { <span class="no-image">"No image"</span> }.into_any(),
    };

    let open = {
        let api = api.clone();
        move |_: web_sys::MouseEvent| {
            // the click that ends a drag is not a click on the card
            if dnd.drag_just_ended_read.get_untracked() {
                return;
            }
            let api = api.clone();
            spawn_local(async move {
                match api.get_product(id).await {
                    Ok(detail) => store.selected_product().set(Some(detail)),
                    Err(e) => {
                        log::error!("[APP] load product {} failed: {}", id, e);
                        ctx.notify(NoticeKind::Error, "Could not load the product.");
                    }
                }
            });
        }
    };

    let delete = Callback::new(move |_: ()| {
        let api = api.clone();
        spawn_local(async move {
            match api.delete_product(id).await {
                Ok(()) => {
                    store_forget_product(&store, id);
                    ctx.reload();
                }
                Err(e) => {
                    log::error!("[APP] delete product {} failed: {}", id, e);
                    ctx.notify(NoticeKind::Error, "Could not delete the product.");
                }
            }
        });
    });

    view! {
        <div
            class=card_class
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            // not a <button>: presses on buttons never start a drag
            <div class="product-button" role="button" on:click=open>
                <div class="product-image-box">{image}</div>
                <span class="product-name">{product.product_name.clone()}</span>
            </div>

            <Show when=move || ctx.role.get().can_edit()>
                <div class="card-actions">
                    <DeleteConfirmButton prompt=format!("Delete #{}?", id) on_confirm=delete />
                </div>
            </Show>
        </div>
    }
}
