//! Delete Confirm Button Component
//!
//! Inline two-step delete used on product cards in manager mode.

use leptos::prelude::*;

/// Shows a remove button; clicking it swaps in a prompt with confirm/cancel.
///
/// Clicks never propagate, so the card underneath does not open.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] prompt: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    move || {
        if confirming.get() {
            view! {
                <span class="delete-confirm">
                    <span class="delete-confirm-text">{prompt.clone()}</span>
                    <button
                        class="confirm-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_confirming.set(false);
                            on_confirm.run(());
                        }
                    >
                        "Delete"
                    </button>
                    <button
                        class="cancel-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_confirming.set(false);
                        }
                    >
                        "Keep"
                    </button>
                </span>
            }.into_any()
        } else {
            view! {
                <button
                    class="remove-btn"
                    title="Remove"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(true);
                    }
                >
                    "−"
                </button>
            }.into_any()
        }
    }
}
