use serde::{Deserialize, Serialize};

/// Page sections in top-to-bottom order. The scroll-spy walks them in this
/// order and falls back to the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    About,
    Accommodation,
    Services,
    Gallery,
    Team,
    Testimonials,
    Contact,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Home,
        Section::About,
        Section::Accommodation,
        Section::Services,
        Section::Gallery,
        Section::Team,
        Section::Testimonials,
        Section::Contact,
    ];

    /// DOM id of the section element.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Accommodation => "accommodation",
            Section::Services => "services",
            Section::Gallery => "gallery",
            Section::Team => "team",
            Section::Testimonials => "testimonials",
            Section::Contact => "contact",
        }
    }
}

/// Where a navigation entry leads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "to", rename_all = "lowercase")]
pub enum NavTarget {
    /// Smooth-scroll to a section of the landing page.
    Section(Section),
    /// Leave the landing page for another route.
    Route(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub target: NavTarget,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
    /// Logo over dark imagery (unscrolled header).
    pub logo_light: String,
    /// Logo over white backgrounds (scrolled header, splash).
    pub logo_dark: String,
    /// Marker that walks along the splash progress bar.
    pub splash_marker: String,
    pub splash_caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl Contact {
    pub fn phone_href(&self) -> String {
        format!("tel:{}", self.phone.replace(' ', ""))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub background: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub heading: String,
    pub paragraphs: Vec<String>,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accommodation {
    pub name: String,
    pub description: String,
    pub image: String,
    pub size_sqm: u32,
    pub max_guests: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub photo: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub origin: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footer {
    pub blurb: String,
    pub socials: Vec<Link>,
    pub copyright: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    Vn,
    En,
    Ko,
}

impl LanguageCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::Vn => "vn",
            LanguageCode::En => "en",
            LanguageCode::Ko => "ko",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentationLanguage {
    pub code: LanguageCode,
    pub name: String,
    pub flag: String,
    pub video: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presentation {
    pub heading: String,
    pub prompt: String,
    pub mascot: String,
    pub background: String,
    pub background_mobile: String,
    pub languages: Vec<PresentationLanguage>,
}

impl Presentation {
    pub fn language(&self, code: LanguageCode) -> Option<&PresentationLanguage> {
        self.languages.iter().find(|l| l.code == code)
    }
}

/// Everything that varies between page variants. One value drives the whole
/// landing page and the presentation screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub brand: Brand,
    pub contact: Contact,
    pub nav: Vec<NavItem>,
    pub hero: Hero,
    pub about: About,
    pub accommodations: Vec<Accommodation>,
    pub services: Vec<Service>,
    pub gallery: Vec<GalleryImage>,
    pub team: Vec<TeamMember>,
    pub testimonials: Vec<Testimonial>,
    pub footer: Footer,
    pub presentation: Presentation,
}

fn s(text: &str) -> String {
    text.to_string()
}

fn nav(label: &str, section: Section) -> NavItem {
    NavItem {
        label: s(label),
        target: NavTarget::Section(section),
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            brand: Brand {
                name: s("Anis Villa"),
                logo_light: s("/logo-white.png"),
                logo_dark: s("/logo-green.png"),
                splash_marker: s("/pet.gif"),
                splash_caption: s("Welcome to Anis Villa"),
            },
            contact: Contact {
                phone: s("+84 236 3656 293"),
                email: s("hello@anisvilla.vn"),
                address: s("Ngu Hanh Son, Da Nang, Vietnam"),
            },
            nav: vec![
                nav("About", Section::About),
                nav("Accommodation", Section::Accommodation),
                nav("Services", Section::Services),
                nav("Gallery", Section::Gallery),
                NavItem {
                    label: s("Video"),
                    target: NavTarget::Route(s("/video")),
                },
                nav("Contact", Section::Contact),
            ],
            hero: Hero {
                title: s("\u{201c} Where nature embraces peace...\u{201d}"),
                subtitle: s(
                    "Connection - Sustainability - Healing - Mindfulness & Respect - Purposeful Creativity",
                ),
                background: s("https://laretreatdanang.com/wp-content/uploads/elementor/thumbs/DSC03820-HDR-qz67jc318tiyfgslimul53chyi60j2byb1mnan3nsg.jpg"),
            },
            about: About {
                heading: s("Welcome to Anis Villa"),
                paragraphs: vec![
                    s("Experience luxurious accommodation in the heart of nature, a few minutes from the beaches of Da Nang."),
                    s("Our garden villas are built from local materials and run on the values we live by: connection, sustainability and healing."),
                ],
                image: s("/about.jpg"),
            },
            accommodations: vec![
                Accommodation {
                    name: s("Deluxe Room"),
                    description: s("Garden-facing room with a private balcony and rain shower."),
                    image: s("/rooms/deluxe.jpg"),
                    size_sqm: 32,
                    max_guests: 2,
                },
                Accommodation {
                    name: s("Suite Room"),
                    description: s("Separate living area, soaking tub and views over the pool."),
                    image: s("/rooms/suite.jpg"),
                    size_sqm: 48,
                    max_guests: 3,
                },
                Accommodation {
                    name: s("Family Room"),
                    description: s("Two bedrooms joined by a shared lounge, made for families."),
                    image: s("/rooms/family.jpg"),
                    size_sqm: 60,
                    max_guests: 5,
                },
                Accommodation {
                    name: s("Private Villa"),
                    description: s("A whole villa with its own pool, kitchen and garden."),
                    image: s("/rooms/villa.jpg"),
                    size_sqm: 140,
                    max_guests: 10,
                },
            ],
            services: vec![
                Service {
                    name: s("Spa & Healing"),
                    description: s("Herbal treatments and massages using plants from our garden."),
                    image: s("/services/spa.jpg"),
                },
                Service {
                    name: s("Garden Restaurant"),
                    description: s("Seasonal Vietnamese cooking, farm to table."),
                    image: s("/services/restaurant.jpg"),
                },
                Service {
                    name: s("Yoga & Mindfulness"),
                    description: s("Morning sessions on the riverside deck."),
                    image: s("/services/yoga.jpg"),
                },
                Service {
                    name: s("Bicycle Tours"),
                    description: s("Guided rides through villages and rice fields."),
                    image: s("/services/bicycle.jpg"),
                },
                Service {
                    name: s("Airport Transfer"),
                    description: s("Pick-up and drop-off from Da Nang International Airport."),
                    image: s("/services/transfer.jpg"),
                },
            ],
            gallery: (1..=8)
                .map(|i| GalleryImage {
                    src: format!("/gallery/{i}.jpg"),
                    alt: format!("Anis Villa photo {i}"),
                })
                .collect(),
            team: vec![
                TeamMember {
                    name: s("Anh Nguyen"),
                    role: s("Founder"),
                    photo: s("/team/founder.jpg"),
                },
                TeamMember {
                    name: s("Linh Tran"),
                    role: s("Guest Experience"),
                    photo: s("/team/guest.jpg"),
                },
                TeamMember {
                    name: s("Minh Pham"),
                    role: s("Head Chef"),
                    photo: s("/team/chef.jpg"),
                },
            ],
            testimonials: vec![
                Testimonial {
                    quote: s("The quietest, greenest place we stayed in Vietnam. The staff felt like family."),
                    author: s("Sarah M."),
                    origin: s("United Kingdom"),
                },
                Testimonial {
                    quote: s("Beautiful villa, wonderful breakfast and the bicycle tour was a highlight."),
                    author: s("Ji-woo K."),
                    origin: s("South Korea"),
                },
                Testimonial {
                    quote: s("Peaceful, clean and close to the beach. We will come back."),
                    author: s("Thu H."),
                    origin: s("Vietnam"),
                },
            ],
            footer: Footer {
                blurb: s("A nature retreat in Da Nang."),
                socials: vec![
                    Link {
                        label: s("Facebook"),
                        href: s("https://facebook.com/anisvilla"),
                    },
                    Link {
                        label: s("Instagram"),
                        href: s("https://instagram.com/anisvilla"),
                    },
                ],
                copyright: s("\u{a9} Anis Villa. All rights reserved."),
            },
            presentation: Presentation {
                heading: s("Welcome to Anis Villa"),
                prompt: s("Please select your preferred language"),
                mascot: s("/pet-video.png"),
                background: s("/bg-video.jpg"),
                background_mobile: s("/bg-video-mobile.jpg"),
                languages: vec![
                    PresentationLanguage {
                        code: LanguageCode::Vn,
                        name: s("Ti\u{1ebf}ng Vi\u{1ec7}t"),
                        flag: s("\u{1f1fb}\u{1f1f3}"),
                        video: s("/video-vn.mov"),
                    },
                    PresentationLanguage {
                        code: LanguageCode::En,
                        name: s("English"),
                        flag: s("\u{1f1ec}\u{1f1e7}"),
                        video: s("/video-en.mov"),
                    },
                    PresentationLanguage {
                        code: LanguageCode::Ko,
                        name: s("\u{d55c}\u{ad6d}\u{c5b4}"),
                        flag: s("\u{1f1f0}\u{1f1f7}"),
                        video: s("/video-ko.mov"),
                    },
                ],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sections_are_unique_and_start_at_home() {
        let ids: HashSet<&str> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids.len(), Section::ALL.len());
        assert_eq!(Section::ALL[0], Section::Home);
    }

    #[test]
    fn sections_run_top_to_bottom() {
        // The landing page renders sections by walking Section::ALL.
        assert_eq!(
            Section::ALL,
            [
                Section::Home,
                Section::About,
                Section::Accommodation,
                Section::Services,
                Section::Gallery,
                Section::Team,
                Section::Testimonials,
                Section::Contact,
            ]
        );
    }

    #[test]
    fn default_nav_sections_follow_page_order() {
        let content = SiteContent::default();
        let positions: Vec<usize> = content
            .nav
            .iter()
            .filter_map(|item| match item.target {
                NavTarget::Section(section) => Section::ALL.iter().position(|s| *s == section),
                NavTarget::Route(_) => None,
            })
            .collect();
        let section_items = content
            .nav
            .iter()
            .filter(|item| matches!(item.target, NavTarget::Section(_)))
            .count();
        assert_eq!(positions.len(), section_items);
        assert!(!positions.is_empty());
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[test]
    fn default_nav_leaves_page_only_for_video() {
        let content = SiteContent::default();
        let routes: Vec<&NavTarget> = content
            .nav
            .iter()
            .map(|item| &item.target)
            .filter(|t| matches!(t, NavTarget::Route(_)))
            .collect();
        assert_eq!(routes, vec![&NavTarget::Route("/video".into())]);
    }

    #[test]
    fn default_presentation_has_three_languages() {
        let content = SiteContent::default();
        let codes: Vec<LanguageCode> = content
            .presentation
            .languages
            .iter()
            .map(|l| l.code)
            .collect();
        assert_eq!(codes, vec![LanguageCode::Vn, LanguageCode::En, LanguageCode::Ko]);
        assert_eq!(
            content.presentation.language(LanguageCode::Ko).map(|l| l.video.as_str()),
            Some("/video-ko.mov")
        );
    }

    #[test]
    fn nav_target_json_shape() {
        let item = NavItem {
            label: "Gallery".into(),
            target: NavTarget::Section(Section::Gallery),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "label": "Gallery", "target": { "kind": "section", "to": "gallery" } })
        );
    }

    #[test]
    fn phone_href_strips_spaces() {
        let content = SiteContent::default();
        assert_eq!(content.contact.phone_href(), "tel:+842363656293");
    }
}
