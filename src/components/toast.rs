//! Toast Component
//!
//! Generic notice area. Each notice clears itself after a few seconds.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{use_app_context, NoticeKind};

const NOTICE_MS: u32 = 4_000;

#[component]
pub fn Toast() -> impl IntoView {
    let ctx = use_app_context();

    Effect::new(move |_| {
        if let Some(notice) = ctx.notice.get() {
            let id = notice.id;
            spawn_local(async move {
                TimeoutFuture::new(NOTICE_MS).await;
                ctx.dismiss(id);
            });
        }
    });

    move || ctx.notice.get().map(|notice| {
        let class = match notice.kind {
            NoticeKind::Info => "toast",
            NoticeKind::Error => "toast error",
        };
        let id = notice.id;
        view! {
            <div class=class role="status" on:click=move |_| ctx.dismiss(id)>
                {notice.message}
            </div>
        }
    })
}
