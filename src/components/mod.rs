mod booking_modal;
mod header;
mod sections;
mod slider;
mod splash;

pub use booking_modal::BookingModal;
pub use header::Header;
pub use sections::*;
pub use slider::Slider;
pub use splash::Splash;
