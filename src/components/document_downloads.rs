//! Document Downloads Component
//!
//! Catalogue and certificate downloads.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::context::{use_app_context, NoticeKind};
use crate::models::CatalogDocuments;

#[component]
pub fn DocumentDownloads() -> impl IntoView {
    let ctx = use_app_context();
    let api = expect_context::<ApiClient>();

    let documents = RwSignal::new(CatalogDocuments::default());

    {
        let api = api.clone();
        spawn_local(async move {
            match api.catalog_documents().await {
                Ok(loaded) => documents.set(loaded),
                Err(e) => {
                    log::error!("[APP] load documents failed: {}", e);
                    ctx.notify(NoticeKind::Error, "Could not load the documents.");
                }
            }
        });
    }

    view! {
        <section class="document-downloads">
            <h2>"Catalogue and approvals"</h2>
            <ul>
                {move || documents.with(|d| d.downloads()).into_iter().map(|doc| {
                    let href = api.file_url("admin", &doc.server_filename);
                    view! {
                        <li>
                            <a class="download-btn" href=href download=doc.original_filename>{doc.label}</a>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </section>
    }
}
