//! Question Detail Component
//!
//! Full text, attachments and replies of one inquiry. Guests unlock their own
//! inquiry with its password; FAQ entries are open to everyone.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::context::{use_app_context, NoticeKind};
use crate::error::ApiError;
use crate::models::QuestionDetail;
use crate::role::QuestionAccess;

#[component]
pub fn QuestionDetailView(
    question_id: u32,
    faq: bool,
    #[prop(into)] on_close: Callback<()>,
    /// Board needs a refresh (status changed)
    #[prop(into)] on_changed: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let api = expect_context::<ApiClient>();

    let detail = RwSignal::new(None::<QuestionDetail>);
    let (password, set_password) = signal(String::new());
    let access = ctx.role.get_untracked().question_access(faq);

    let show_error = move |e: ApiError| match e.status() {
        Some(400) | Some(401) | Some(403) => ctx.notify(NoticeKind::Error, "Wrong password."),
        _ => {
            log::error!("[APP] load question {} failed: {}", question_id, e);
            ctx.notify(NoticeKind::Error, "Could not load the inquiry.");
        }
    };

    if access != QuestionAccess::Password {
        let api = api.clone();
        spawn_local(async move {
            let loaded = match access {
                QuestionAccess::Admin => api.get_question_as_admin(question_id).await,
                _ => api.get_faq(question_id).await,
            };
            match loaded {
                Ok(found) => detail.set(Some(found)),
                Err(e) => show_error(e),
            }
        });
    }

    let unlock = {
        let api = api.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let pw = password.get_untracked();
            if pw.is_empty() { return; }
            let api = api.clone();
            spawn_local(async move {
                match api.open_question(question_id, &pw).await {
                    Ok(found) => {
                        set_password.set(String::new());
                        detail.set(Some(found));
                    }
                    Err(e) => show_error(e),
                }
            });
        }
    };

    let complete = move |_: web_sys::MouseEvent| {
        let api = api.clone();
        spawn_local(async move {
            match api.complete_question(question_id).await {
                Ok(()) => {
                    detail.update(|d| if let Some(d) = d { d.status = true });
                    on_changed.run(());
                }
                Err(e) => {
                    log::error!("[APP] complete question {} failed: {}", question_id, e);
                    ctx.notify(NoticeKind::Error, "Could not update the inquiry.");
                }
            }
        });
    };

    let files_api = expect_context::<ApiClient>();

    view! {
        <article class="question-detail">
            <button class="close-btn" on:click=move |_| on_close.run(())>"×"</button>
            {move || match detail.get() {
                None if access == QuestionAccess::Password => {
                    let unlock = unlock.clone();
                    view! {
                        <form class="question-unlock" on:submit=unlock>
                            <input
                                type="password"
                                placeholder="Inquiry password"
                                prop:value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                            />
                            <button type="submit">"Open"</button>
                        </form>
                    }.into_any()
                }
                None => view! { <p class="loading">"Loading…"</p> }.into_any(),
                Some(d) => {
                    let images = d.files.iter()
                        .filter_map(|f| f.server_filename.as_ref().map(|name| (files_api.file_url("question", name), f.original_filename.clone())))
                        .collect::<Vec<_>>();
                    let answered = d.status;
                    let complete = complete.clone();
                    view! {
                        <h3 class="question-title">{d.title}</h3>
                        <p class="question-meta">{format!("{} | {}", d.writer, d.create_time)}</p>
                        <div class="question-files">
                            {images.into_iter().map(|(src, alt)| view! { <img src=src alt=alt /> }).collect_view()}
                        </div>
                        <p class="question-content">{d.content}</p>
                        <ul class="comments">
                            {d.comments.into_iter().map(|c| view! {
                                <li class="comment">
                                    <span class="comment-writer">{c.writer}</span>
                                    <span class="comment-content">{c.content}</span>
                                    <span class="comment-date">{c.create_time}</span>
                                </li>
                            }).collect_view()}
                        </ul>
                        <Show when=move || access == QuestionAccess::Admin && !answered>
                            <button class="complete-btn" on:click=complete.clone()>"Mark answered"</button>
                        </Show>
                    }.into_any()
                }
            }}
        </article>
    }
}
