//! Header Component
//!
//! Site title, manager-mode badge and the login/logout controls.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::components::PasswordUpdateForm;
use crate::context::{use_app_context, NoticeKind};
use crate::error::ApiError;
use crate::role::ViewerRole;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let api = expect_context::<ApiClient>();

    let (password, set_password) = signal(String::new());
    let (show_password_form, set_show_password_form) = signal(false);

    let login = {
        let api = api.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let pw = password.get();
            if pw.is_empty() { return; }
            let api = api.clone();
            spawn_local(async move {
                match api.login(&pw).await {
                    Ok(()) => {
                        set_password.set(String::new());
                        ctx.set_role(ViewerRole::Admin);
                    }
                    Err(ApiError::Status { status: 401, .. }) | Err(ApiError::Status { status: 403, .. }) => {
                        ctx.notify(NoticeKind::Error, "Wrong password.");
                    }
                    Err(e) => {
                        log::error!("[APP] login failed: {}", e);
                        ctx.notify(NoticeKind::Error, "Could not log in.");
                    }
                }
            });
        }
    };

    let logout = move |_: web_sys::MouseEvent| {
        let api = api.clone();
        spawn_local(async move {
            if let Err(e) = api.logout().await {
                log::warn!("[APP] logout request failed: {}", e);
            }
            // leave manager mode either way
            set_show_password_form.set(false);
            ctx.set_role(ViewerRole::Guest);
        });
    };

    view! {
        <header class=move || ctx.role.get().header_class()>
            <h1 class="site-title">"Company"</h1>
            <Show when=move || ctx.role.get().is_admin()>
                <span class="manager-badge">"Manager mode"</span>
            </Show>

            {move || if ctx.role.get().is_admin() {
                let logout = logout.clone();
                view! {
                    <div class="manager-controls">
                        <button on:click=move |_| set_show_password_form.update(|v| *v = !*v)>
                            "Change password"
                        </button>
                        <button on:click=logout>"Log out"</button>
                    </div>
                }.into_any()
            } else {
                let login = login.clone();
                view! {
                    <form class="login-form" on:submit=login>
                        <input
                            type="password"
                            placeholder="Manager password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                        <button type="submit">"Log in"</button>
                    </form>
                }.into_any()
            }}

            <Show when=move || show_password_form.get() && ctx.role.get().is_admin()>
                <PasswordUpdateForm on_done=Callback::new(move |_: ()| set_show_password_form.set(false)) />
            </Show>
        </header>
    }
}
