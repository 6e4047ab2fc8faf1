use std::time::Duration;

use leptos::leptos_dom::helpers::{
    request_animation_frame_with_handle, set_timeout_with_handle, AnimationFrameRequestHandle,
    TimeoutHandle,
};
use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_media_query, use_window};
use wasm_bindgen::JsCast;

use crate::scroll::{active_section, ScrollObserver, SectionExtent, THROTTLE_MS};

/// Publishes the window's vertical scroll offset, throttled and coalesced by
/// [`ScrollObserver`]: each native event replaces the pending throttle
/// timer, the timer requests at most one animation-frame read, and only
/// movements beyond the dead zone reach subscribers.
pub fn use_scroll_offset() -> ReadSignal<f64> {
    let (offset, set_offset) = signal(0.0_f64);
    let observer = StoredValue::new(ScrollObserver::new());
    let timer = StoredValue::new_local(None::<TimeoutHandle>);
    let frame = StoredValue::new_local(None::<AnimationFrameRequestHandle>);

    let flush = move || {
        frame.set_value(None);
        let y = window().scroll_y().unwrap_or_default();
        if let Some(published) = observer.try_update_value(|o| o.finish_sample(y)).flatten() {
            set_offset.set(published);
        }
    };

    let throttle_elapsed = move || {
        timer.set_value(None);
        let wants_frame = observer
            .try_update_value(|o| o.begin_sample())
            .unwrap_or(false);
        if !wants_frame {
            return;
        }
        if let Ok(handle) = request_animation_frame_with_handle(flush) {
            frame.set_value(Some(handle));
        }
    };

    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        // Last write wins: a fresh notification supersedes the pending timer.
        if let Some(prev) = timer.try_update_value(|t| t.take()).flatten() {
            prev.clear();
        }
        if let Ok(handle) =
            set_timeout_with_handle(throttle_elapsed, Duration::from_millis(THROTTLE_MS))
        {
            timer.set_value(Some(handle));
        }
    });

    on_cleanup(move || {
        if let Some(pending) = timer.try_update_value(|t| t.take()).flatten() {
            pending.clear();
        }
        if let Some(pending) = frame.try_update_value(|f| f.take()).flatten() {
            pending.cancel();
        }
    });

    offset
}

/// Tracks which labelled section the viewport is inside, for navigation
/// highlighting. Coalesced to one measurement per frame: every scroll event
/// cancels the pending frame and requests a fresh one.
pub fn use_active_section(ids: &'static [&'static str]) -> ReadSignal<Option<&'static str>> {
    let (active, set_active) = signal(None::<&'static str>);
    let frame = StoredValue::new_local(None::<AnimationFrameRequestHandle>);

    let measure = move || {
        frame.set_value(None);
        let y = window().scroll_y().unwrap_or_default();
        let doc = document();
        let extents = ids
            .iter()
            .filter_map(|&id| {
                let el = doc.get_element_by_id(id)?;
                let el = el.dyn_into::<web_sys::HtmlElement>().ok()?;
                Some(SectionExtent {
                    id,
                    top: el.offset_top() as f64,
                    height: el.offset_height() as f64,
                })
            })
            .collect::<Vec<_>>();
        let next = active_section(y, &extents);
        if next != active.get_untracked() {
            set_active.set(next);
        }
    };

    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        if let Some(prev) = frame.try_update_value(|f| f.take()).flatten() {
            prev.cancel();
        }
        if let Ok(handle) = request_animation_frame_with_handle(measure) {
            frame.set_value(Some(handle));
        }
    });

    on_cleanup(move || {
        if let Some(pending) = frame.try_update_value(|f| f.take()).flatten() {
            pending.cancel();
        }
    });

    active
}

pub fn use_reduced_motion() -> Signal<bool> {
    use_media_query("(prefers-reduced-motion: reduce)")
}

/// Smoothly scrolls the viewport to a section by element id.
pub fn smooth_scroll_to(id: &str) {
    let Some(el) = document().get_element_by_id(id) else {
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Body-level scroll lock for the modal overlay. Setting the same value
/// twice is harmless, so repeated open/close cycles cannot leak a lock.
pub fn set_scroll_lock(locked: bool) {
    let Some(body) = document().body() else {
        return;
    };
    let value = if locked { "hidden" } else { "unset" };
    let _ = body.style().set_property("overflow", value);
}
