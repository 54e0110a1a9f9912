mod home;
mod video;

pub use home::HomePage;
pub use video::{VideoPage, VideoPresentation};
