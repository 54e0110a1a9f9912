//! Framework-free state behind the interactive parts of the site.
//!
//! Everything here is plain Rust so it can be driven by Leptos effects in the
//! browser and exercised by unit tests on the host.

pub mod carousel;
pub mod loading;
pub mod presentation;
pub mod scroll;

pub use carousel::Carousel;
pub use loading::{LoadingSequencer, Tick};
pub use presentation::PresentationState;
pub use scroll::{active_section, header_scrolled, ScrollSample, ScrollSpy, ScrollState, SectionSpan};
