use leptos::prelude::*;
use leptos_router::components::A;

use crate::behaviors::PresentationState;
use crate::models::Presentation;
use crate::server_fns::get_site_content;

#[component]
pub fn VideoPage() -> impl IntoView {
    let content = Resource::new(|| (), |_| get_site_content());

    view! {
        <Suspense fallback=|| view! { <div class="loading">"Loading..."</div> }>
            {move || {
                content.get().map(|result| {
                    match result {
                        Ok(content) => view! {
                            <VideoPresentation
                                presentation=content.presentation
                                logo=content.brand.logo_dark
                                close_href="/"
                            />
                        }
                        .into_any(),
                        Err(e) => view! { <p class="error">{e.to_string()}</p> }.into_any(),
                    }
                })
            }}
        </Suspense>
    }
}

/// Language picker followed by the chosen language's video. Nothing is
/// mounted (or autoplayed) until a language is picked.
#[component]
pub fn VideoPresentation(
    presentation: Presentation,
    logo: String,
    /// Route for the close button; no button when absent.
    #[prop(optional, into)]
    close_href: Option<String>,
) -> impl IntoView {
    let (state, set_state) = signal(PresentationState::default());
    let back = move || set_state.update(|s| s.back());
    let media_failed = move || {
        leptos::logging::warn!("presentation video failed to decode");
        set_state.update(|s| s.media_failed());
    };

    let background = format!(
        "--bg: url('{}'); --bg-mobile: url('{}')",
        presentation.background, presentation.background_mobile
    );
    let presentation = StoredValue::new(presentation);

    view! {
        <div class="presentation" style=background>
            <header class="presentation-header">
                <img class="presentation-logo" src=logo alt="Logo"/>
                {close_href.map(|href| view! {
                    <A href=href attr:class="presentation-close">"\u{2715}"</A>
                })}
            </header>

            <div class="presentation-body">
                {move || match state.get() {
                    PresentationState::Choosing => {
                        let p = presentation.get_value();
                        view! {
                            <div class="language-picker">
                                <img class="presentation-mascot" src=p.mascot alt=""/>
                                <h1 class="hero-title">{p.heading}</h1>
                                <p class="presentation-prompt">{p.prompt}</p>
                                <div class="language-grid">
                                    {p.languages
                                        .into_iter()
                                        .map(|lang| {
                                            let code = lang.code;
                                            view! {
                                                <button
                                                    class="language-option"
                                                    data-lang=code.as_str()
                                                    on:click=move |_| set_state.update(|s| s.select(code))
                                                >
                                                    <span class="language-flag">{lang.flag}</span>
                                                    <span class="language-name">{lang.name}</span>
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                        .into_any()
                    }
                    PresentationState::Playing(code) => {
                        let src = presentation
                            .with_value(|p| p.language(code).map(|l| l.video.clone()))
                            .unwrap_or_default();
                        view! {
                            <div class="player">
                                <button class="btn player-back" on:click=move |_| back()>"\u{2039} Back"</button>
                                <div class="player-frame">
                                    <video
                                        class="player-video"
                                        data-lang=code.as_str()
                                        controls
                                        autoplay
                                        playsinline
                                        controlslist="nodownload"
                                        on:error=move |_| media_failed()
                                    >
                                        <source src=src.clone() type="video/mp4"/>
                                        // Errors from <source> children do not bubble to the
                                        // <video>; the last one fires when every source failed.
                                        <source src=src type="video/quicktime" on:error=move |_| media_failed()/>
                                        "Your browser does not support the video tag."
                                    </video>
                                </div>
                            </div>
                        }
                        .into_any()
                    }
                    PresentationState::Failed(_) => view! {
                        <div class="player">
                            <div class="player-frame player-error">
                                <div class="player-error-icon">"\u{26a0}"</div>
                                <h3>"Video Cannot Play"</h3>
                                <p>
                                    "Your browser doesn't support this video format. "
                                    "Please try another language or a different browser."
                                </p>
                                <button class="btn btn-primary" on:click=move |_| back()>
                                    "Choose Another Language"
                                </button>
                            </div>
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}
