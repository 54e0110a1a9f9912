use leptos::prelude::*;

use crate::behaviors::loading::caption_opacity;
use crate::models::Brand;

/// Full-screen loading overlay. The marker walks along the bar with the
/// progress and the caption fades in.
#[component]
pub fn Splash(brand: Brand, progress: ReadSignal<f64>) -> impl IntoView {
    let percent = move || format!("{}%", progress.get());
    let opacity = move || caption_opacity(progress.get()).to_string();

    view! {
        <div class="splash" role="progressbar" aria-valuemin="0" aria-valuemax="100"
            aria-valuenow=move || progress.get().round().to_string()>
            <img class="splash-logo" src=brand.logo_dark alt=brand.name.clone()/>
            <div class="splash-bar-wrap">
                <span class="splash-caption" style:opacity=opacity>
                    {brand.splash_caption}
                </span>
                <div class="splash-track">
                    <div class="splash-bar" style:width=percent></div>
                    <img class="splash-marker" src=brand.splash_marker alt="" style:left=percent/>
                </div>
            </div>
        </div>
    }
}
