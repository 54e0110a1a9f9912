use leptos::prelude::*;
use leptos_router::components::A;

use crate::hooks::scroll_to_section;
use crate::models::{Brand, Contact, NavItem, NavTarget, Section};

#[component]
pub fn Header(
    brand: Brand,
    contact: Contact,
    nav: Vec<NavItem>,
    scrolled: Signal<bool>,
    active: Signal<Section>,
    /// False while the splash is up; the header slides in afterwards.
    revealed: Signal<bool>,
    on_book: Callback<()>,
) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let close_menu = Callback::new(move |_: ()| set_menu_open.set(false));

    let logo_light = brand.logo_light;
    let logo_dark = brand.logo_dark;
    let logo = move || {
        if scrolled.get() {
            logo_dark.clone()
        } else {
            logo_light.clone()
        }
    };
    let phone_href = contact.phone_href();
    let phone = contact.phone;

    view! {
        <header
            class="site-header"
            class:scrolled=move || scrolled.get()
            class:revealed=move || revealed.get()
        >
            <div class="header-inner">
                <a href="#home" class="header-logo" on:click=move |ev| {
                    ev.prevent_default();
                    scroll_to_section(Section::Home);
                }>
                    <img src=logo alt=brand.name/>
                </a>

                <nav class="header-nav">
                    <NavLinks items=nav.clone() active=active/>
                </nav>

                <div class="header-actions">
                    <a href=phone_href.clone() class="header-phone">{phone.clone()}</a>
                    <button class="btn btn-book" on:click=move |_| on_book.run(())>
                        "BOOK NOW"
                    </button>
                    <button
                        class="menu-toggle"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "\u{2715}" } else { "\u{2630}" }}
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <div class="mobile-menu">
                    <nav class="mobile-nav">
                        <NavLinks items=nav.clone() active=active on_select=close_menu/>
                        <a href=phone_href.clone() class="header-phone">{phone.clone()}</a>
                        <button class="btn btn-book btn-block" on:click=move |_| {
                            set_menu_open.set(false);
                            on_book.run(());
                        }>
                            "BOOK NOW"
                        </button>
                    </nav>
                </div>
            </Show>
        </header>
    }
}

/// Navigation entries. Section targets scroll in place; route targets leave
/// the landing page, which unmounts the menu along with it.
#[component]
fn NavLinks(
    items: Vec<NavItem>,
    active: Signal<Section>,
    #[prop(optional)] on_select: Option<Callback<()>>,
) -> impl IntoView {
    let notify = move || {
        if let Some(cb) = on_select {
            cb.run(());
        }
    };

    items
        .into_iter()
        .map(|item| match item.target {
            NavTarget::Section(section) => view! {
                <a
                    href=format!("#{}", section.id())
                    class="nav-link"
                    class:active=move || active.get() == section
                    on:click=move |ev| {
                        ev.prevent_default();
                        scroll_to_section(section);
                        notify();
                    }
                >
                    {item.label}
                </a>
            }
            .into_any(),
            NavTarget::Route(path) => view! {
                <A href=path attr:class="nav-link">
                    {item.label}
                </A>
            }
            .into_any(),
        })
        .collect_view()
}
