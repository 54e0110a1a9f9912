use leptos::prelude::*;

use crate::behaviors::Carousel;

/// Paged row of `per_view` slides with wrap-around arrows and dots.
#[component]
pub fn Slider<F, IV>(len: usize, per_view: usize, render: F) -> impl IntoView
where
    F: Fn(usize) -> IV + Send + Sync + 'static,
    IV: IntoView + 'static,
{
    let pager = RwSignal::new(Carousel::new(len));
    let pageable = len > per_view;

    view! {
        <div class="slider">
            <div class="slider-row">
                <button
                    class="slider-arrow prev"
                    aria-label="Previous"
                    disabled=!pageable
                    on:click=move |_| pager.update(|p| p.prev())
                >
                    "\u{2039}"
                </button>
                <div class="slider-track">
                    {move || pager.get().window(per_view).into_iter().map(&render).collect_view()}
                </div>
                <button
                    class="slider-arrow next"
                    aria-label="Next"
                    disabled=!pageable
                    on:click=move |_| pager.update(|p| p.next())
                >
                    "\u{203a}"
                </button>
            </div>
            <Show when=move || pageable>
                <div class="slider-dots">
                    {(0..len)
                        .map(|i| {
                            view! {
                                <button
                                    class="slider-dot"
                                    class:active=move || pager.get().index() == i
                                    aria-label=format!("Slide {}", i + 1)
                                    on:click=move |_| pager.update(|p| p.go_to(i))
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
