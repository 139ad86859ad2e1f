//! Corporate Site Frontend App
//!
//! Root component: provides the API client, config, store and app context,
//! and keeps the product snapshot in step with the selected category.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::components::{
    CategoryBar, CompanyPage, DocumentDownloads, Header, ProductDetail, ProductGrid, QuestionBoard, Toast,
};
use crate::config::SiteConfig;
use crate::context::{AppContext, Notice, NoticeKind};
use crate::role::ViewerRole;
use crate::store::{store_replace_products, AppState, AppStateStoreFields};

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    let api = ApiClient::new(config.api_base.clone());
    provide_context(config);
    provide_context(api.clone());

    let store = Store::new(AppState::default());
    provide_context(store);

    // State
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AppContext::new(
        signal(ViewerRole::default()),
        signal::<Option<String>>(None),
        (reload_trigger, set_reload_trigger),
        signal::<Option<Notice>>(None),
    );
    provide_context(ctx);

    // Load products when category or trigger changes
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let category = ctx.current_category.get();
        let Some(category) = category else {
            store_replace_products(&store, Vec::new());
            return;
        };
        log::debug!("[APP] loading products for {:?}, trigger={}", category, trigger);
        let api = api.clone();
        spawn_local(async move {
            let loaded = api.list_products(&category).await;
            if !ctx.is_current_category(Some(&category)) {
                return;
            }
            match loaded {
                Ok(products) => {
                    log::info!("[APP] loaded {} products", products.len());
                    store_replace_products(&store, products);
                }
                Err(e) => {
                    log::error!("[APP] load products failed: {}", e);
                    ctx.notify(NoticeKind::Error, "Could not load products.");
                }
            }
        });
    });

    view! {
        <div class="app-layout">
            <Header />
            <main class="main-content">
                <CompanyPage />
                <CategoryBar />
                <ProductGrid />
                <ProductDetail />
                <DocumentDownloads />
                <QuestionBoard />
            </main>
            <Toast />
        </div>
    }
}
