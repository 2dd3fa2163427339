//! Slider answer editor
//!
//! A horizontal track with a draggable thumb. Two bands centered on the
//! thumb visualize the scoring zones: the wide one covers the partial
//! credit range, the narrow one the exact band. Band widths come from the
//! track's measured pixel width, so they are recomputed whenever the
//! track mounts.

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::{Answer, Question};
use crate::slider;

#[component]
pub fn SliderInput(question: Question, draft: RwSignal<Option<Answer>>) -> impl IntoView {
    let spec = match question.slider_spec() {
        Some(spec) if spec.is_valid() => spec,
        _ => {
            return view! {
                <div class="slider-invalid">
                    "This slider is misconfigured and cannot be displayed."
                </div>
            }
            .into_any();
        }
    };

    let (dragging, set_dragging) = signal(false);
    let (track_width, set_track_width) = signal(0.0f64);
    let track_ref = NodeRef::<Div>::new();

    // Measure the track once it is in the DOM
    Effect::new(move |_| {
        if let Some(track) = track_ref.get() {
            set_track_width.set(track.get_bounding_client_rect().width());
        }
    });

    // An untouched slider still carries a value, so leaving the screen
    // records the displayed midpoint.
    let default_value = slider::snap_to_step((spec.min + spec.max) / 2.0, &spec);
    if draft.get_untracked().is_none() {
        draft.set(Some(Answer::Slider(default_value)));
    }

    let current = move || match draft.get() {
        Some(Answer::Slider(v)) => v,
        _ => default_value,
    };

    let pointer_spec = spec.clone();
    let update_from_pointer = move |client_x: f64| {
        let Some(track) = track_ref.get_untracked() else {
            return;
        };
        let rect = track.get_bounding_client_rect();
        let value = slider::value_from_pointer(client_x - rect.left(), rect.width(), &pointer_spec);
        draft.set(Some(Answer::Slider(value)));
    };

    let on_track_mousedown = {
        let update = update_from_pointer.clone();
        move |ev: web_sys::MouseEvent| {
            ev.prevent_default();
            set_dragging.set(true);
            update(ev.client_x() as f64);
        }
    };

    // Document-level listeners so the drag keeps tracking outside the
    // widget. They stay registered for the page lifetime and go inert
    // once this question screen unmounts.
    {
        use wasm_bindgen::closure::Closure;

        let update = update_from_pointer.clone();
        let on_mousemove =
            Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
                if dragging.try_get_untracked() != Some(true) {
                    return;
                }
                update(ev.client_x() as f64);
            });
        let on_mouseup =
            Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
                if dragging.try_get_untracked() == Some(true) {
                    set_dragging.set(false);
                }
            });
        if let Some(win) = web_sys::window() {
            if let Some(doc) = win.document() {
                let _ = doc.add_event_listener_with_callback(
                    "mousemove",
                    on_mousemove.as_ref().unchecked_ref(),
                );
                let _ = doc
                    .add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
            }
        }
        on_mousemove.forget();
        on_mouseup.forget();
    }

    let partial_spec = spec.clone();
    let partial_style = move || {
        let w = track_width.get();
        let (partial_px, _) = slider::zone_widths_px(&partial_spec, w);
        let center = slider::pointer_from_value(current(), w, &partial_spec);
        format!("left: {:.1}px; width: {:.1}px;", center - partial_px / 2.0, partial_px)
    };
    let exact_spec = spec.clone();
    let exact_style = move || {
        let w = track_width.get();
        let (_, exact_px) = slider::zone_widths_px(&exact_spec, w);
        let center = slider::pointer_from_value(current(), w, &exact_spec);
        format!("left: {:.1}px; width: {:.1}px;", center - exact_px / 2.0, exact_px)
    };
    let thumb_spec = spec.clone();
    let thumb_style = move || {
        let w = track_width.get();
        let center = slider::pointer_from_value(current(), w, &thumb_spec);
        format!("left: {:.1}px;", center)
    };

    let step = spec.step;
    let readout = move || slider::format_value(current(), step);

    let unit = spec.unit.clone();
    let min_label = slider::format_value(spec.min, spec.step);
    let max_label = slider::format_value(spec.max, spec.step);
    let exact_legend = format!("Exact: {} pts", spec.points_exact);
    let partial_legend = format!(
        "Within ±{} {}: {} pts",
        slider::format_value(spec.threshold, spec.step),
        spec.unit,
        spec.points_partial
    );

    view! {
        <div class="slider-widget">
            <div class="slider-readout">
                <span class="slider-value">{readout}</span>
                <span class="slider-unit">{unit}</span>
            </div>
            <div class="slider-track" node_ref=track_ref on:mousedown=on_track_mousedown>
                <div class="slider-zone partial" style=partial_style></div>
                <div class="slider-zone exact" style=exact_style></div>
                <div class="slider-thumb" class:dragging=move || dragging.get() style=thumb_style></div>
            </div>
            <div class="slider-bounds">
                <span>{min_label}</span>
                <span>{max_label}</span>
            </div>
            <div class="slider-legend">
                <span class="legend-exact">{exact_legend}</span>
                <span class="legend-partial">{partial_legend}</span>
            </div>
        </div>
    }
    .into_any()
}
