use leptos::prelude::*;

use crate::components::Slider;
use crate::models::{
    About, Accommodation, Contact, Footer, GalleryImage, Hero, Section, Service, TeamMember,
    Testimonial,
};

#[component]
pub fn HeroBanner(hero: Hero, revealed: Signal<bool>) -> impl IntoView {
    view! {
        <section id=Section::Home.id() class="hero" class:revealed=move || revealed.get()>
            <div class="hero-bg" style:background-image=format!("url('{}')", hero.background)>
                <div class="hero-overlay"></div>
            </div>
            <div class="hero-content">
                <h1 class="hero-title">{hero.title}</h1>
                <p class="hero-subtitle">{hero.subtitle}</p>
            </div>
        </section>
    }
}

#[component]
pub fn AboutSection(about: About) -> impl IntoView {
    view! {
        <section id=Section::About.id() class="section about">
            <div class="container about-grid">
                <div class="about-text">
                    <h2 class="section-title">{about.heading}</h2>
                    {about.paragraphs.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
                </div>
                <img class="about-image" src=about.image alt=""/>
            </div>
        </section>
    }
}

#[component]
pub fn AccommodationSection(rooms: Vec<Accommodation>, on_book: Callback<()>) -> impl IntoView {
    view! {
        <section id=Section::Accommodation.id() class="section accommodation">
            <div class="container">
                <h2 class="section-title">"Accommodation"</h2>
                <Slider len=rooms.len() per_view=3 render=move |i| {
                    let room = rooms[i].clone();
                    view! {
                        <article class="card room-card">
                            <img src=room.image alt=room.name.clone()/>
                            <div class="card-body">
                                <h3>{room.name}</h3>
                                <p class="room-meta">
                                    {format!("{} m\u{b2} \u{b7} up to {} guests", room.size_sqm, room.max_guests)}
                                </p>
                                <p>{room.description}</p>
                                <button class="btn btn-outline" on:click=move |_| on_book.run(())>
                                    "Book this room"
                                </button>
                            </div>
                        </article>
                    }
                }/>
            </div>
        </section>
    }
}

#[component]
pub fn ServicesSection(services: Vec<Service>) -> impl IntoView {
    view! {
        <section id=Section::Services.id() class="section services">
            <div class="container">
                <h2 class="section-title">"Services"</h2>
                <Slider len=services.len() per_view=3 render=move |i| {
                    let service = services[i].clone();
                    view! {
                        <article class="card service-card">
                            <img src=service.image alt=service.name.clone()/>
                            <div class="card-body">
                                <h3>{service.name}</h3>
                                <p>{service.description}</p>
                            </div>
                        </article>
                    }
                }/>
            </div>
        </section>
    }
}

#[component]
pub fn GallerySection(images: Vec<GalleryImage>) -> impl IntoView {
    let (opened, set_opened) = signal(Option::<usize>::None);
    let lightbox_images = images.clone();

    view! {
        <section id=Section::Gallery.id() class="section gallery">
            <div class="container">
                <h2 class="section-title">"Gallery"</h2>
                <div class="gallery-grid">
                    {images
                        .into_iter()
                        .enumerate()
                        .map(|(i, img)| {
                            view! {
                                <button class="gallery-item" on:click=move |_| set_opened.set(Some(i))>
                                    <img src=img.src alt=img.alt loading="lazy"/>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            {move || {
                opened
                    .get()
                    .and_then(|i| lightbox_images.get(i).cloned())
                    .map(|img| {
                        view! {
                            <div class="lightbox" on:click=move |_| set_opened.set(None)>
                                <img src=img.src alt=img.alt/>
                            </div>
                        }
                    })
            }}
        </section>
    }
}

#[component]
pub fn TeamSection(team: Vec<TeamMember>) -> impl IntoView {
    view! {
        <section id=Section::Team.id() class="section team">
            <div class="container">
                <h2 class="section-title">"Our Team"</h2>
                <div class="team-grid">
                    {team
                        .into_iter()
                        .map(|member| {
                            view! {
                                <div class="team-member">
                                    <img src=member.photo alt=member.name.clone()/>
                                    <h3>{member.name}</h3>
                                    <p>{member.role}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn TestimonialsSection(testimonials: Vec<Testimonial>) -> impl IntoView {
    view! {
        <section id=Section::Testimonials.id() class="section testimonials">
            <div class="container">
                <h2 class="section-title">"What Our Guests Say"</h2>
                <Slider len=testimonials.len() per_view=1 render=move |i| {
                    let t = testimonials[i].clone();
                    view! {
                        <blockquote class="testimonial">
                            <p>{t.quote}</p>
                            <footer>{t.author} ", " {t.origin}</footer>
                        </blockquote>
                    }
                }/>
            </div>
        </section>
    }
}

#[component]
pub fn SiteFooter(brand_name: String, contact: Contact, footer: Footer) -> impl IntoView {
    let phone_href = contact.phone_href();
    view! {
        <footer id=Section::Contact.id() class="site-footer">
            <div class="container footer-grid">
                <div>
                    <h3>{brand_name}</h3>
                    <p>{footer.blurb}</p>
                </div>
                <div>
                    <h4>"Contact"</h4>
                    <p>{contact.address}</p>
                    <p><a href=phone_href>{contact.phone}</a></p>
                    <p><a href=format!("mailto:{}", contact.email)>{contact.email.clone()}</a></p>
                </div>
                <div>
                    <h4>"Follow us"</h4>
                    {footer
                        .socials
                        .into_iter()
                        .map(|link| view! { <p><a href=link.href target="_blank" rel="noopener">{link.label}</a></p> })
                        .collect_view()}
                </div>
            </div>
            <p class="copyright">{footer.copyright}</p>
        </footer>
    }
}
