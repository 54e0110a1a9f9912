mod booking;
mod content;

pub use booking::*;
pub use content::*;
