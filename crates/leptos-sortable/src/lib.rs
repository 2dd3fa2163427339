//! Leptos Sortable List Utilities
//!
//! Mouse-driven reordering for flat lists.
//! Uses a movement threshold to distinguish click from drag, and places the
//! dragged row at the slot belonging to the element whose vertical midpoint
//! is nearest to the pointer.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Insertion slot in a list of `len` rows: 0 = before the first row,
/// `len` = after the last row.
pub type Slot = usize;

/// Sortable state signals
#[derive(Clone, Copy)]
pub struct SortSignals {
    pub dragging_id_read: ReadSignal<Option<u32>>,
    pub dragging_id_write: WriteSignal<Option<u32>>,
    pub hover_slot_read: ReadSignal<Option<Slot>>,
    pub hover_slot_write: WriteSignal<Option<Slot>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending row id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<u32>>,
    pub pending_id_write: WriteSignal<Option<u32>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_sort_signals() -> SortSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<u32>);
    let (hover_slot_read, hover_slot_write) = signal(None::<Slot>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<u32>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    SortSignals {
        dragging_id_read,
        dragging_id_write,
        hover_slot_read,
        hover_slot_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

// ========================
// Pure placement rules
// ========================

/// Slot for a pointer hovering a single row: before the row when the pointer
/// is above the row's vertical midpoint, after it otherwise.
pub fn slot_for_row(pointer_y: f64, row_top: f64, row_height: f64, row_index: usize) -> Slot {
    if pointer_y < row_top + row_height / 2.0 {
        row_index
    } else {
        row_index + 1
    }
}

/// Index of the row whose vertical midpoint is nearest to the pointer.
/// `rows` is a list of (top, height) pairs in display order.
pub fn nearest_row(pointer_y: f64, rows: &[(f64, f64)]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, (top, height)) in rows.iter().enumerate() {
        let distance = (pointer_y - (top + height / 2.0)).abs();
        match best {
            Some((_, d)) if d <= distance => {}
            _ => best = Some((i, distance)),
        }
    }
    best.map(|(i, _)| i)
}

/// Move the element at `from` so it ends up at insertion slot `to_slot`.
/// Slots are counted on the list as rendered, so dropping a row onto a slot
/// past its own position lands one index earlier after removal.
pub fn apply_move<T>(items: &mut Vec<T>, from: usize, to_slot: Slot) {
    if from >= items.len() {
        return;
    }
    let item = items.remove(from);
    let target = if to_slot > from { to_slot - 1 } else { to_slot };
    let target = target.min(items.len());
    items.insert(target, item);
}

// ========================
// Event wiring
// ========================

/// End drag operation
pub fn end_drag(sorts: &SortSignals) {
    sorts.dragging_id_write.set(None);
    sorts.hover_slot_write.set(None);
    sorts.pending_id_write.set(None);
    sorts.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = sorts.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            // The owning list may unmount within the timeout window
            let _ = clear.try_set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for draggable rows.
/// Records a pending drag with its start position.
pub fn make_on_mousedown(sorts: SortSignals, row_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            sorts.pending_id_write.set(Some(row_id));
            sorts.start_x_write.set(ev.client_x());
            sorts.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mousemove handler for a row - while dragging, publishes the slot
/// derived from this row's own midpoint.
pub fn make_on_row_mousemove(sorts: SortSignals, row_index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if sorts.dragging_id_read.get_untracked().is_none() {
            return;
        }
        let Some(element) = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else { return };
        let rect = element.get_bounding_client_rect();
        let slot = slot_for_row(ev.client_y() as f64, rect.top(), rect.height(), row_index);
        sorts.hover_slot_write.set(Some(slot));
    }
}

/// Create mouseleave handler for the list container
pub fn make_on_list_mouseleave(sorts: SortSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if sorts.dragging_id_read.get_untracked().is_some() {
            sorts.hover_slot_write.set(None);
        }
    }
}

/// Create mousemove handler for document - starts drag if moved enough.
/// The listener stays registered for the page lifetime; once the owning
/// list unmounts and its signals are disposed it becomes inert.
pub fn bind_global_mousemove(sorts: SortSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let Some(pending) = sorts.pending_id_read.try_get_untracked() else {
            return;
        };

        // If we have a pending drag and haven't started dragging yet
        if pending.is_some() && sorts.dragging_id_read.get_untracked().is_none() {
            let start_x = sorts.start_x_read.get_untracked();
            let start_y = sorts.start_y_read.get_untracked();
            let dx = (ev.client_x() - start_x).abs();
            let dy = (ev.client_y() - start_y).abs();

            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                sorts.dragging_id_write.set(pending);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Bind global mouseup handler for drop detection.
/// Like [`bind_global_mousemove`], the listener outlives the list and goes
/// inert after the sort signals are disposed.
pub fn bind_global_mouseup<F>(sorts: SortSignals, on_drop: F)
where
    F: Fn(u32, Slot) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let Some(dragging_id) = sorts.dragging_id_read.try_get_untracked() else {
            return;
        };
        let hover_slot = sorts.hover_slot_read.get_untracked();

        // Clear pending state first
        sorts.pending_id_write.set(None);

        // If we were actually dragging (not just clicking)
        if let (Some(dragged), Some(slot)) = (dragging_id, hover_slot) {
            end_drag(&sorts);
            on_drop(dragged, slot);
        } else {
            end_drag(&sorts);
            // Click event will fire naturally on the element
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(sorts);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_splits_row_at_midpoint() {
        // Row 2 occupies [40, 60), midpoint 50
        assert_eq!(slot_for_row(45.0, 40.0, 20.0, 2), 2);
        assert_eq!(slot_for_row(55.0, 40.0, 20.0, 2), 3);
        // Exactly on the midpoint counts as below
        assert_eq!(slot_for_row(50.0, 40.0, 20.0, 2), 3);
    }

    #[test]
    fn nearest_row_picks_closest_midpoint() {
        // Three rows of height 20 at tops 0, 20, 40 -> midpoints 10, 30, 50
        let rows = [(0.0, 20.0), (20.0, 20.0), (40.0, 20.0)];
        assert_eq!(nearest_row(0.0, &rows), Some(0));
        assert_eq!(nearest_row(19.0, &rows), Some(0));
        assert_eq!(nearest_row(21.0, &rows), Some(1));
        assert_eq!(nearest_row(100.0, &rows), Some(2));
        assert_eq!(nearest_row(10.0, &[]), None);
        // Ties keep the earlier row
        assert_eq!(nearest_row(20.0, &rows), Some(0));
    }

    #[test]
    fn apply_move_down() {
        let mut items = vec!["a", "b", "c", "d"];
        // Drag "a" to the slot after "c" (slot 3)
        apply_move(&mut items, 0, 3);
        assert_eq!(items, vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn apply_move_up() {
        let mut items = vec!["a", "b", "c", "d"];
        // Drag "d" to the slot before "b" (slot 1)
        apply_move(&mut items, 3, 1);
        assert_eq!(items, vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn apply_move_onto_own_slot_is_identity() {
        let mut items = vec!["a", "b", "c"];
        apply_move(&mut items, 1, 1);
        assert_eq!(items, vec!["a", "b", "c"]);
        apply_move(&mut items, 1, 2);
        assert_eq!(items, vec!["a", "b", "c"]);
    }

    #[test]
    fn apply_move_ignores_bad_from() {
        let mut items = vec!["a", "b"];
        apply_move(&mut items, 5, 0);
        assert_eq!(items, vec!["a", "b"]);
    }

    #[test]
    fn apply_move_clamps_slot() {
        let mut items = vec!["a", "b", "c"];
        apply_move(&mut items, 0, 99);
        assert_eq!(items, vec!["b", "c", "a"]);
    }
}
