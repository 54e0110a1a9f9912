use leptos::prelude::*;

use crate::components::*;
use crate::hooks::{use_loading_sequence, use_scroll_spy, SPLASH_DURATION_MS, SPLASH_INTERVAL_MS};
use crate::models::{Section, SiteContent};
use crate::server_fns::get_site_content;

#[component]
pub fn HomePage() -> impl IntoView {
    let content = Resource::new(|| (), |_| get_site_content());

    view! {
        <Suspense fallback=|| view! { <div class="splash"></div> }>
            {move || {
                content.get().map(|result| {
                    match result {
                        Ok(content) => view! { <Landing content/> }.into_any(),
                        Err(e) => view! { <p class="error">{e.to_string()}</p> }.into_any(),
                    }
                })
            }}
        </Suspense>
    }
}

#[component]
fn Landing(content: SiteContent) -> impl IntoView {
    let loading = use_loading_sequence(SPLASH_DURATION_MS, SPLASH_INTERVAL_MS);
    let scroll = use_scroll_spy();
    let revealed = Signal::derive(move || !loading.is_loading.get());

    let (booking_open, set_booking_open) = signal(false);
    let open_booking = Callback::new(move |_: ()| set_booking_open.set(true));

    let splash_brand = content.brand.clone();
    let phone = content.contact.phone.clone();

    // Sections render in scroll-spy order; the match forces every section
    // to have a view.
    let sections = Section::ALL
        .into_iter()
        .map(|section| match section {
            Section::Home => view! { <HeroBanner hero=content.hero.clone() revealed/> }.into_any(),
            Section::About => view! { <AboutSection about=content.about.clone()/> }.into_any(),
            Section::Accommodation => view! {
                <AccommodationSection rooms=content.accommodations.clone() on_book=open_booking/>
            }
            .into_any(),
            Section::Services => view! { <ServicesSection services=content.services.clone()/> }.into_any(),
            Section::Gallery => view! { <GallerySection images=content.gallery.clone()/> }.into_any(),
            Section::Team => view! { <TeamSection team=content.team.clone()/> }.into_any(),
            Section::Testimonials => view! {
                <TestimonialsSection testimonials=content.testimonials.clone()/>
            }
            .into_any(),
            Section::Contact => view! {
                <SiteFooter
                    brand_name=content.brand.name.clone()
                    contact=content.contact.clone()
                    footer=content.footer.clone()
                />
            }
            .into_any(),
        })
        .collect_view();

    view! {
        <div class="landing" class:loaded=move || revealed.get()>
            <Show when=move || loading.is_loading.get()>
                <Splash brand=splash_brand.clone() progress=loading.progress/>
            </Show>

            <Header
                brand=content.brand
                contact=content.contact
                nav=content.nav
                scrolled=scroll.scrolled
                active=scroll.active
                revealed
                on_book=open_booking
            />

            {sections}

            <BookingModal open=booking_open set_open=set_booking_open phone/>
        </div>
    }
}
