use std::sync::Arc;

use crate::models::SiteContent;

#[derive(Clone)]
pub struct AppState {
    pub content: Arc<SiteContent>,
}
