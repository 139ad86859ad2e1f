//! Application Context
//!
//! Shared UI state provided via Leptos Context API by the `App` root.
//! Components read it through `use_app_context()` instead of a global store,
//! so the viewer role and the selected category are always explicit inputs.

use leptos::prelude::*;

use crate::role::ViewerRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Transient message shown by the toast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Increments per notice so an old timer never clears a newer message
    pub id: u32,
    pub kind: NoticeKind,
    pub message: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Guest or Admin (manager mode)
    pub role: ReadSignal<ViewerRole>,
    set_role: WriteSignal<ViewerRole>,
    /// Selected product category name (None = nothing selected yet)
    pub current_category: ReadSignal<Option<String>>,
    set_current_category: WriteSignal<Option<String>>,
    /// Trigger to refetch products from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to refetch products from backend - write
    set_reload_trigger: WriteSignal<u32>,
    pub notice: ReadSignal<Option<Notice>>,
    set_notice: WriteSignal<Option<Notice>>,
    notice_seq: StoredValue<u32>,
}

impl AppContext {
    pub fn new(
        role: (ReadSignal<ViewerRole>, WriteSignal<ViewerRole>),
        current_category: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        notice: (ReadSignal<Option<Notice>>, WriteSignal<Option<Notice>>),
    ) -> Self {
        Self {
            role: role.0,
            set_role: role.1,
            current_category: current_category.0,
            set_current_category: current_category.1,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            notice: notice.0,
            set_notice: notice.1,
            notice_seq: StoredValue::new(0),
        }
    }

    /// Refetch the product list of the current category
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn set_role(&self, role: ViewerRole) {
        log::info!("[APP] viewer role -> {:?}", role);
        self.set_role.set(role);
    }

    pub fn select_category(&self, name: Option<String>) {
        if self.current_category.get_untracked() != name {
            self.set_current_category.set(name);
        }
    }

    /// False once the user switched category while a request was in flight
    pub fn is_current_category(&self, category: Option<&str>) -> bool {
        self.current_category.with_untracked(|c| c.as_deref() == category)
    }

    pub fn notify(&self, kind: NoticeKind, message: impl Into<String>) {
        self.notice_seq.update_value(|seq| *seq += 1);
        let id = self.notice_seq.get_value();
        self.set_notice.set(Some(Notice { id, kind, message: message.into() }));
    }

    /// Clear the toast if it is still showing notice `id`
    pub fn dismiss(&self, id: u32) {
        if self.notice.get_untracked().map(|n| n.id) == Some(id) {
            self.set_notice.set(None);
        }
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
