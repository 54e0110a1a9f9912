use leptos::prelude::*;

use crate::models::SiteContent;

/// Content for the landing page and the presentation screen
#[server]
pub async fn get_site_content() -> Result<SiteContent, ServerFnError> {
    use crate::state::AppState;
    use axum::Extension;
    use leptos_axum::extract;

    let Extension(state) = extract::<Extension<AppState>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(state.content.as_ref().clone())
}
