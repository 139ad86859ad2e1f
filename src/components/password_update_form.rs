//! Password Update Form Component
//!
//! Manager password change. All three fields are validated on submit and
//! only a valid form reaches the backend.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::context::{use_app_context, NoticeKind};
use crate::models::PasswordUpdate;
use crate::validation::{validate_password_update, FieldErrors};

#[component]
pub fn PasswordUpdateForm(#[prop(into)] on_done: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let api = expect_context::<ApiClient>();

    let form = RwSignal::new(PasswordUpdate::default());
    let errors = RwSignal::new(FieldErrors::default());
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() { return; }
        let update = form.get_untracked();
        let found = validate_password_update(&update);
        let valid = found.is_valid();
        errors.set(found);
        if !valid { return; }

        set_submitting.set(true);
        let api = api.clone();
        spawn_local(async move {
            match api.update_password(&update).await {
                Ok(()) => {
                    form.set(PasswordUpdate::default());
                    ctx.notify(NoticeKind::Info, "Password changed.");
                    on_done.run(());
                }
                Err(e) => {
                    log::error!("[APP] password update failed: {}", e);
                    ctx.notify(NoticeKind::Error, "Could not change the password.");
                }
            }
            set_submitting.set(false);
        });
    };

    let field = move |name: &'static str, placeholder: &'static str, get: fn(&PasswordUpdate) -> String, set: fn(&mut PasswordUpdate, String)| {
        view! {
            <label class="form-field">
                <input
                    type="password"
                    placeholder=placeholder
                    class:error=move || errors.with(|e| e.get(name).is_some())
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
                <span class="helper-text">{move || errors.with(|e| e.get(name)).unwrap_or("")}</span>
            </label>
        }
    };

    view! {
        <form class="password-form" on:submit=submit>
            <h2>"Change password"</h2>
            {field("curPassword", "Current password", |f| f.cur_password.clone(), |f, v| f.cur_password = v)}
            {field("newPassword", "New password", |f| f.new_password.clone(), |f, v| f.new_password = v)}
            {field("newPasswordCheck", "Confirm new password", |f| f.new_password_check.clone(), |f, v| f.new_password_check = v)}
            <div class="form-actions">
                <button type="submit" disabled=move || submitting.get()>"Change"</button>
                <button type="button" on:click=move |_| on_done.run(())>"Cancel"</button>
            </div>
        </form>
    }
}
