//! Browser wiring for the splash timer and the scroll tracker.
//!
//! Both hooks are inert during server rendering; the timer and the window
//! listener only exist once the page is hydrated, and both are released
//! when the owning component is cleaned up.

use leptos::prelude::*;

use crate::behaviors::ScrollState;
#[cfg(feature = "hydrate")]
use crate::behaviors::{LoadingSequencer, ScrollSample, ScrollSpy, SectionSpan, Tick};
use crate::models::Section;

/// Splash sequence timing used by the landing page.
pub const SPLASH_DURATION_MS: u32 = 1500;
pub const SPLASH_INTERVAL_MS: u32 = 50;

#[derive(Clone, Copy)]
pub struct LoadingSignals {
    pub progress: ReadSignal<f64>,
    pub is_loading: ReadSignal<bool>,
}

pub fn use_loading_sequence(duration_ms: u32, interval_ms: u32) -> LoadingSignals {
    let (progress, set_progress) = signal(0.0_f64);
    let (is_loading, set_is_loading) = signal(true);

    #[cfg(feature = "hydrate")]
    {
        use std::time::Duration;

        let sequencer = StoredValue::new(LoadingSequencer::new(duration_ms, interval_ms));
        let interval = StoredValue::new(None::<IntervalHandle>);

        let on_tick = move || {
            // A disposed sequencer means the page is gone; treat it as idle.
            let tick = sequencer.try_update_value(|s| s.tick()).unwrap_or(Tick::Idle);
            match tick {
                Tick::Progress(p) => set_progress.set(p),
                Tick::Completed => {
                    if let Some(handle) = interval.try_get_value().flatten() {
                        handle.clear();
                    }
                    set_progress.set(LoadingSequencer::MAX);
                    set_is_loading.set(false);
                    scroll_to_top();
                }
                Tick::Idle => {}
            }
        };

        match set_interval_with_handle(on_tick, Duration::from_millis(u64::from(interval_ms))) {
            Ok(handle) => interval.set_value(Some(handle)),
            Err(e) => {
                leptos::logging::warn!("splash timer unavailable, skipping: {e:?}");
                set_progress.set(LoadingSequencer::MAX);
                set_is_loading.set(false);
            }
        }

        on_cleanup(move || {
            if let Some(handle) = interval.try_get_value().flatten() {
                handle.clear();
            }
            sequencer.try_update_value(|s| s.cancel());
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (duration_ms, interval_ms, set_progress, set_is_loading);

    LoadingSignals {
        progress,
        is_loading,
    }
}

#[derive(Clone, Copy)]
pub struct ScrollSignals {
    pub scrolled: Signal<bool>,
    pub active: Signal<Section>,
}

/// Tracks the header style and the active landing section. Recomputed once
/// after mount and on every window scroll event.
pub fn use_scroll_spy() -> ScrollSignals {
    let (state, set_state) = signal(ScrollState {
        scrolled: false,
        active: Section::ALL[0],
    });

    #[cfg(feature = "hydrate")]
    {
        let spy = StoredValue::new(ScrollSpy::new(Section::ALL[0]));

        let recompute = move || {
            let Some(sample) = read_scroll_sample() else {
                return;
            };
            let spans = measure_sections(sample.offset);
            let next = spy.try_update_value(|s| s.observe(sample, &spans)).flatten();
            if let Some(next) = next {
                if state.get_untracked() != next {
                    set_state.set(next);
                }
            }
        };

        Effect::new(move |_| recompute());
        let listener = window_event_listener(leptos::ev::scroll, move |_| recompute());

        on_cleanup(move || {
            spy.try_update_value(|s| s.detach());
            listener.remove();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = set_state;

    ScrollSignals {
        scrolled: Signal::derive(move || state.get().scrolled),
        active: Signal::derive(move || state.get().active),
    }
}

#[cfg(feature = "hydrate")]
fn read_scroll_sample() -> Option<ScrollSample> {
    let window = web_sys::window()?;
    Some(ScrollSample {
        offset: window.scroll_y().ok()?,
        viewport_height: window.inner_height().ok()?.as_f64()?,
    })
}

/// Document-space spans of the landing sections that are currently
/// rendered, in page order.
#[cfg(feature = "hydrate")]
fn measure_sections(offset: f64) -> Vec<SectionSpan<Section>> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    Section::ALL
        .iter()
        .filter_map(|section| {
            let rect = document.get_element_by_id(section.id())?.get_bounding_client_rect();
            Some(SectionSpan::new(*section, rect.top() + offset, rect.height()))
        })
        .collect()
}

#[cfg(feature = "hydrate")]
fn scroll_to_top() {
    use web_sys::{ScrollBehavior, ScrollToOptions};

    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Smooth-scrolls the page so `section` starts at the top of the viewport.
pub fn scroll_to_section(section: Section) {
    #[cfg(feature = "hydrate")]
    {
        use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(section.id()))
        else {
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = section;
}
