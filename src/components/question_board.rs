//! Question Board Component
//!
//! Customer inquiry list with paging, plus the form for a new inquiry.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::components::QuestionDetailView;
use crate::context::{use_app_context, NoticeKind};
use crate::models::NewQuestion;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::validation::{validate_question, FieldErrors};

/// Clamp a requested page into `0..total_pages`
pub fn clamp_page(requested: i64, total_pages: u32) -> u32 {
    let last = total_pages.saturating_sub(1) as i64;
    requested.clamp(0, last) as u32
}

/// A page response is written only while the board still shows that page
pub fn is_current_page(requested: u32, showing: u32) -> bool {
    requested == showing
}

/// What a successful post does to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardRefresh {
    /// Switch to page 0; the page change itself triggers the load
    JumpToFirst,
    /// Already on page 0, refetch it
    Reload,
}

pub fn refresh_after_post(current_page: u32) -> BoardRefresh {
    if current_page == 0 { BoardRefresh::Reload } else { BoardRefresh::JumpToFirst }
}

#[component]
pub fn QuestionBoard() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let api = expect_context::<ApiClient>();

    let (page, set_page) = signal(0u32);
    let (board_version, set_board_version) = signal(0u32);

    {
        let api = api.clone();
        Effect::new(move |_| {
            let _ = board_version.get();
            let requested = page.get();
            let api = api.clone();
            spawn_local(async move {
                let loaded = api.list_questions(requested).await;
                if !is_current_page(requested, page.get_untracked()) {
                    log::debug!("[APP] dropping stale question page {}", requested);
                    return;
                }
                match loaded {
                    Ok(loaded) => store.questions().set(loaded),
                    Err(e) => {
                        log::error!("[APP] load questions page {} failed: {}", requested, e);
                        ctx.notify(NoticeKind::Error, "Could not load inquiries.");
                    }
                }
            });
        });
    }

    let total_pages = move || store.questions().with(|q| q.total_pages);
    let go = move |delta: i64| {
        let next = clamp_page(page.get_untracked() as i64 + delta, total_pages());
        if next != page.get_untracked() {
            set_page.set(next);
        }
    };

    let reload = move || set_board_version.update(|v| *v += 1);
    let on_posted = Callback::new(move |_: ()| {
        match refresh_after_post(page.get_untracked()) {
            BoardRefresh::JumpToFirst => set_page.set(0),
            BoardRefresh::Reload => reload(),
        }
    });

    // (id, faq) of the opened inquiry
    let opened = RwSignal::new(None::<(u32, bool)>);

    view! {
        <section class="question-board">
            <h2>"Customer inquiries"</h2>
            <table class="question-table">
                <thead>
                    <tr><th>"No."</th><th>"Title"</th><th>"Writer"</th><th>"Date"</th><th>"Status"</th></tr>
                </thead>
                <tbody>
                    <For
                        each=move || store.questions().get().content
                        // status is part of the key so a row re-renders once answered
                        key=|q| (q.id, q.status)
                        children=move |q| {
                            let (id, faq) = (q.id, q.faq);
                            view! {
                                <tr class:faq=q.faq>
                                    <td>{if q.faq { "FAQ".to_string() } else { q.id.to_string() }}</td>
                                    <td class="question-link" on:click=move |_| opened.set(Some((id, faq)))>{q.title.clone()}</td>
                                    <td>{q.writer.clone()}</td>
                                    <td>{q.created_date.clone()}</td>
                                    <td>{if q.status { "Answered" } else { "Waiting" }}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <div class="pager">
                <button on:click=move |_| go(-1) disabled=move || page.get() == 0>"‹"</button>
                <span>{move || format!("{} / {}", page.get() + 1, total_pages().max(1))}</span>
                <button on:click=move |_| go(1) disabled=move || page.get() + 1 >= total_pages()>"›"</button>
            </div>
            {move || opened.get().map(|(id, faq)| view! {
                <QuestionDetailView
                    question_id=id
                    faq=faq
                    on_close=Callback::new(move |_: ()| opened.set(None))
                    on_changed=Callback::new(move |_: ()| reload())
                />
            })}
            <QuestionForm on_posted=on_posted />
        </section>
    }
}

#[component]
fn QuestionForm(#[prop(into)] on_posted: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let api = expect_context::<ApiClient>();

    let draft = RwSignal::new(NewQuestion::default());
    let errors = RwSignal::new(FieldErrors::default());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let question = draft.get_untracked();
        let found = validate_question(&question);
        let valid = found.is_valid();
        errors.set(found);
        if !valid { return; }

        let api = api.clone();
        spawn_local(async move {
            match api.create_question(&question).await {
                Ok(()) => {
                    draft.set(NewQuestion::default());
                    ctx.notify(NoticeKind::Info, "Your inquiry was registered.");
                    on_posted.run(());
                }
                Err(e) => {
                    log::error!("[APP] create question failed: {}", e);
                    ctx.notify(NoticeKind::Error, "Could not register the inquiry.");
                }
            }
        });
    };

    let error_text = move |name: &'static str| move || errors.with(|e| e.get(name)).unwrap_or("");

    view! {
        <form class="question-form" on:submit=submit>
            <input
                type="text"
                placeholder="Title"
                prop:value=move || draft.with(|d| d.title.clone())
                on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
            />
            <span class="helper-text">{error_text("title")}</span>
            <input
                type="text"
                placeholder="Name"
                prop:value=move || draft.with(|d| d.writer.clone())
                on:input=move |ev| draft.update(|d| d.writer = event_target_value(&ev))
            />
            <span class="helper-text">{error_text("writer")}</span>
            <textarea
                placeholder="Inquiry"
                prop:value=move || draft.with(|d| d.content.clone())
                on:input=move |ev| draft.update(|d| d.content = event_target_value(&ev))
            />
            <span class="helper-text">{error_text("content")}</span>
            <input
                type="password"
                placeholder="Password (to view later)"
                prop:value=move || draft.with(|d| d.password.clone())
                on:input=move |ev| draft.update(|d| d.password = event_target_value(&ev))
            />
            <span class="helper-text">{error_text("password")}</span>
            <button type="submit">"Submit inquiry"</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(-1, 5), 0);
        assert_eq!(clamp_page(2, 5), 2);
        assert_eq!(clamp_page(5, 5), 4);
        // empty board still has page 0
        assert_eq!(clamp_page(1, 0), 0);
    }

    #[test]
    fn test_out_of_order_page_is_dropped() {
        // clicked "next" twice: page 1 answers after page 2 is showing
        let showing = clamp_page(2, 5);
        assert!(!is_current_page(1, showing));
        assert!(is_current_page(2, showing));
    }

    #[test]
    fn test_post_refreshes_once() {
        assert_eq!(refresh_after_post(0), BoardRefresh::Reload);
        assert_eq!(refresh_after_post(3), BoardRefresh::JumpToFirst);
    }
}
