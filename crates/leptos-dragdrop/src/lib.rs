//! Leptos DragDrop Utilities
//!
//! Mouse-event drag-and-drop for kanban cards. A card becomes "pending" on
//! mousedown and only starts dragging once the pointer moves past a small
//! threshold, so plain clicks still reach buttons and checkboxes.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Where a dragged card would land
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropTarget {
    /// End of a column
    Column(u64),
    /// Before the card at `index` in a column
    Slot(u64, usize),
}

impl DropTarget {
    pub fn column(&self) -> u64 {
        match *self {
            DropTarget::Column(column) | DropTarget::Slot(column, _) => column,
        }
    }

    /// Insert position for a column of `len` cards
    pub fn position(&self, len: usize) -> usize {
        match *self {
            DropTarget::Column(_) => len,
            DropTarget::Slot(_, index) => index.min(len),
        }
    }
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id: RwSignal<Option<u64>>,
    pub drop_target: RwSignal<Option<DropTarget>>,
    /// Card under mousedown that has not moved far enough yet
    pub pending_id: RwSignal<Option<u64>>,
    pub start: RwSignal<(i32, i32)>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals() -> DndSignals {
    DndSignals {
        dragging_id: RwSignal::new(None),
        drop_target: RwSignal::new(None),
        pending_id: RwSignal::new(None),
        start: RwSignal::new((0, 0)),
    }
}

impl DndSignals {
    pub fn is_dragging(&self, card_id: u64) -> bool {
        self.dragging_id.get() == Some(card_id)
    }

    pub fn is_target(&self, target: DropTarget) -> bool {
        self.drop_target.get() == Some(target)
    }

    fn clear(&self) {
        self.dragging_id.set(None);
        self.drop_target.set(None);
        self.pending_id.set(None);
    }
}

/// mousedown on a card: remember it and where the pointer started
pub fn make_on_mousedown(dnd: DndSignals, card_id: u64) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        dnd.pending_id.set(Some(card_id));
        dnd.start.set((ev.client_x(), ev.client_y()));
    }
}

/// mouseenter on a card slot or column body
pub fn make_on_mouseenter(dnd: DndSignals, target: DropTarget) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id.get_untracked().is_some() {
            dnd.drop_target.set(Some(target));
        }
    }
}

/// mouseleave: fall back to `fallback` (e.g. the enclosing column) or clear
pub fn make_on_mouseleave(dnd: DndSignals, fallback: Option<DropTarget>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id.get_untracked().is_some() {
            dnd.drop_target.set(fallback);
        }
    }
}

fn add_document_listener(event: &str, handler: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::MouseEvent)>) {
    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref());
    }
    handler.forget();
}

/// Bind document-level mousemove/mouseup. `on_drop(card_id, target)` runs
/// when a real drag ends over a target.
pub fn bind_global_handlers<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(u64, DropTarget) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_id.get_untracked();
        if pending.is_none() || dnd.dragging_id.get_untracked().is_some() {
            return;
        }
        let (start_x, start_y) = dnd.start.get_untracked();
        let dx = (ev.client_x() - start_x).abs();
        let dy = (ev.client_y() - start_y).abs();
        if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
            dnd.dragging_id.set(pending);
        }
    });

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragged = dnd.dragging_id.get_untracked();
        let target = dnd.drop_target.get_untracked();
        dnd.clear();
        if let (Some(card_id), Some(target)) = (dragged, target) {
            on_drop(card_id, target);
        }
    });

    add_document_listener("mousemove", on_mousemove);
    add_document_listener("mouseup", on_mouseup);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_target_position() {
        assert_eq!(DropTarget::Column(7).position(3), 3);
        assert_eq!(DropTarget::Slot(7, 1).position(3), 1);
        assert_eq!(DropTarget::Slot(7, 9).position(3), 3);
        assert_eq!(DropTarget::Slot(7, 1).column(), 7);
    }
}
