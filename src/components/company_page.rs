//! Company Page Component
//!
//! Company introduction: history, organisation chart, CI and location.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::context::{use_app_context, NoticeKind};
use crate::models::CompanyImages;

const HEAD_OFFICE: &str = "본사 : 경기도 용인시 처인구 모현읍 외개일로 20번길 9-14";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompanyTab {
    #[default]
    History,
    OrgChart,
    CompanyInfo,
    Location,
}

impl CompanyTab {
    pub const ALL: [CompanyTab; 4] = [CompanyTab::History, CompanyTab::OrgChart, CompanyTab::CompanyInfo, CompanyTab::Location];

    pub fn label(self) -> &'static str {
        match self {
            CompanyTab::History => "History",
            CompanyTab::OrgChart => "Organisation",
            CompanyTab::CompanyInfo => "CI",
            CompanyTab::Location => "Location",
        }
    }

    /// Server file name of the tab's image, if it has one and it was uploaded
    pub fn image(self, images: &CompanyImages) -> Option<&str> {
        let name = match self {
            CompanyTab::History => images.history_image.as_deref(),
            CompanyTab::OrgChart => images.org_chart_image.as_deref(),
            CompanyTab::CompanyInfo => images.comp_info_image.as_deref(),
            CompanyTab::Location => None,
        };
        name.filter(|n| !n.is_empty())
    }
}

#[component]
pub fn CompanyPage() -> impl IntoView {
    let ctx = use_app_context();
    let api = expect_context::<ApiClient>();

    let (tab, set_tab) = signal(CompanyTab::default());
    let images = RwSignal::new(CompanyImages::default());

    {
        let api = api.clone();
        spawn_local(async move {
            match api.company_images().await {
                Ok(loaded) => images.set(loaded),
                Err(e) => {
                    log::error!("[APP] load company images failed: {}", e);
                    ctx.notify(NoticeKind::Error, "Could not load the company introduction.");
                }
            }
        });
    }

    let body = move || {
        let current = tab.get();
        if current == CompanyTab::Location {
            return view! { <p class="company-location">{HEAD_OFFICE}</p> }.into_any();
        }
        match images.with(|i| current.image(i).map(|name| api.file_url("admin", name))) {
            Some(src) => view! { <img class="company-image" src=src alt=current.label() /> }.into_any(),
            None => view! { <p class="empty">"Not published yet."</p> }.into_any(),
        }
    };

    view! {
        <section class="company-page">
            <nav class="company-menu">
                {CompanyTab::ALL.into_iter().map(|t| view! {
                    <button
                        class=move || if tab.get() == t { "company-tab active" } else { "company-tab" }
                        on:click=move |_| set_tab.set(t)
                    >
                        {t.label()}
                    </button>
                }).collect_view()}
            </nav>
            <div class="company-body">{body}</div>
        </section>
    }
}
