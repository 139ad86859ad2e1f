//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Card being dragged, with its index in the rendered list at press time
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragSource {
    pub id: u32,
    pub index: usize,
}

/// How a drag gesture ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Release {
    /// Released over a card (possibly the dragged card itself)
    Dropped { source: DragSource, target: u32 },
    /// Released while no card was hovered
    Outside { source: DragSource },
}

impl Release {
    pub fn source(&self) -> DragSource {
        match self {
            Release::Dropped { source, .. } | Release::Outside { source } => *source,
        }
    }
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_read: ReadSignal<Option<DragSource>>,
    pub dragging_write: WriteSignal<Option<DragSource>>,
    /// Hovered card id while dragging
    pub drop_target_read: ReadSignal<Option<u32>>,
    pub drop_target_write: WriteSignal<Option<u32>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending card (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<DragSource>>,
    pub pending_write: WriteSignal<Option<DragSource>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// How long the click after a release is suppressed
const CLICK_SUPPRESS_MS: i32 = 100;

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<DragSource>);
    let (drop_target_read, drop_target_write) = signal(None::<u32>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<DragSource>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// True once the pointer moved far enough from the press point to count as a drag
pub fn exceeds_threshold(start: (i32, i32), now: (i32, i32)) -> bool {
    let dx = (now.0 - start.0).abs();
    let dy = (now.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

/// Promote a pending press to a drag once it passes the threshold.
///
/// Returns the source and the card under the pointer, which is still the
/// pressed card: its `mouseenter` fired before the drag existed.
pub fn start_drag(
    pending: Option<DragSource>,
    dragging: Option<DragSource>,
    start: (i32, i32),
    now: (i32, i32),
) -> Option<(DragSource, u32)> {
    if dragging.is_some() || !exceeds_threshold(start, now) {
        return None;
    }
    pending.map(|source| (source, source.id))
}

/// Classify a mouseup. `None` means no drag ever started (plain click).
pub fn classify_release(dragging: Option<DragSource>, drop_target: Option<u32>) -> Option<Release> {
    let source = dragging?;
    Some(match drop_target {
        Some(target) => Release::Dropped { source, target },
        None => Release::Outside { source },
    })
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_write.set(None);
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), CLICK_SUPPRESS_MS);
        cb.forget();
    }
}

/// Create mousedown handler for draggable cards
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, source: DragSource) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            dnd.pending_write.set(Some(source));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Bind mousemove on document - starts drag if moved enough
pub fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let start = (dnd.start_x_read.get_untracked(), dnd.start_y_read.get_untracked());
        let started = start_drag(
            dnd.pending_read.get_untracked(),
            dnd.dragging_read.get_untracked(),
            start,
            (ev.client_x(), ev.client_y()),
        );
        if let Some((source, hovered)) = started {
            log::debug!("[DND] drag started: {:?}", source);
            dnd.dragging_write.set(Some(source));
            dnd.drop_target_write.set(Some(hovered));
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for cards (become drop target)
///
/// The dragged card itself is a valid target; releasing on it is a cancel
/// rather than a release outside the list.
pub fn make_on_card_mouseenter(dnd: DndSignals, card_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(card_id));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_release: F)
where
    F: Fn(Release) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let release = classify_release(
            dnd.dragging_read.get_untracked(),
            dnd.drop_target_read.get_untracked(),
        );

        dnd.pending_write.set(None);

        match release {
            Some(release) => {
                end_drag(&dnd);
                on_release(release);
            }
            None => {
                // Not dragging - click event will fire naturally on the element
                dnd.drop_target_write.set(None);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: DragSource = DragSource { id: 7, index: 2 };

    #[test]
    fn test_threshold_ignores_jitter() {
        assert!(!exceeds_threshold((100, 100), (100, 100)));
        assert!(!exceeds_threshold((100, 100), (105, 95)));
        assert!(exceeds_threshold((100, 100), (106, 100)));
        assert!(exceeds_threshold((100, 100), (100, 94)));
    }

    #[test]
    fn test_click_is_not_a_release() {
        assert_eq!(classify_release(None, None), None);
        assert_eq!(classify_release(None, Some(3)), None);
    }

    #[test]
    fn test_release_over_card() {
        let release = classify_release(Some(SOURCE), Some(3));
        assert_eq!(release, Some(Release::Dropped { source: SOURCE, target: 3 }));
        assert_eq!(release.unwrap().source(), SOURCE);
    }

    #[test]
    fn test_drag_start_hovers_pressed_card() {
        assert_eq!(start_drag(Some(SOURCE), None, (100, 100), (103, 100)), None);
        assert_eq!(start_drag(None, None, (100, 100), (120, 100)), None);
        assert_eq!(start_drag(Some(SOURCE), Some(SOURCE), (100, 100), (120, 100)), None);

        let (source, hovered) = start_drag(Some(SOURCE), None, (100, 100), (108, 100)).unwrap();
        assert_eq!(hovered, SOURCE.id);
        // released without leaving the card
        assert_eq!(
            classify_release(Some(source), Some(hovered)),
            Some(Release::Dropped { source: SOURCE, target: SOURCE.id })
        );
    }

    #[test]
    fn test_release_outside() {
        assert_eq!(classify_release(Some(SOURCE), None), Some(Release::Outside { source: SOURCE }));
    }
}
