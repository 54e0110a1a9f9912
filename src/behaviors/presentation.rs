use crate::models::LanguageCode;

/// Screen state of the video presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresentationState {
    /// Language picker; no media element exists.
    #[default]
    Choosing,
    Playing(LanguageCode),
    /// Playback of the chosen language's media failed to decode.
    Failed(LanguageCode),
}

impl PresentationState {
    pub fn select(&mut self, code: LanguageCode) {
        *self = Self::Playing(code);
    }

    /// Reaction to the media element's `error` event. Only meaningful while
    /// playing; a stray error after leaving the player is dropped.
    pub fn media_failed(&mut self) {
        if let Self::Playing(code) = *self {
            *self = Self::Failed(code);
        }
    }

    pub fn back(&mut self) {
        *self = Self::Choosing;
    }

    pub fn selected(&self) -> Option<LanguageCode> {
        match *self {
            Self::Choosing => None,
            Self::Playing(code) | Self::Failed(code) => Some(code),
        }
    }

    /// Language whose media should be mounted and autoplayed.
    pub fn playing(&self) -> Option<LanguageCode> {
        match *self {
            Self::Playing(code) => Some(code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SiteContent;

    #[test]
    fn nothing_plays_before_selection() {
        let state = PresentationState::default();
        assert_eq!(state, PresentationState::Choosing);
        assert_eq!(state.playing(), None);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn each_language_plays_only_its_own_media() {
        let content = SiteContent::default();
        for lang in &content.presentation.languages {
            let mut state = PresentationState::default();
            state.select(lang.code);
            assert_eq!(state.playing(), Some(lang.code));

            let sources: Vec<&str> = content
                .presentation
                .languages
                .iter()
                .filter(|l| Some(l.code) == state.playing())
                .map(|l| l.video.as_str())
                .collect();
            assert_eq!(sources, vec![lang.video.as_str()]);
        }
    }

    #[test]
    fn decode_failure_then_choose_another() {
        let mut state = PresentationState::default();
        state.select(LanguageCode::En);
        state.media_failed();
        assert_eq!(state, PresentationState::Failed(LanguageCode::En));
        assert_eq!(state.playing(), None);
        assert_eq!(state.selected(), Some(LanguageCode::En));

        state.back();
        assert_eq!(state, PresentationState::Choosing);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn stray_error_on_picker_is_ignored() {
        let mut state = PresentationState::default();
        state.media_failed();
        assert_eq!(state, PresentationState::Choosing);
    }

    #[test]
    fn reselecting_clears_failure() {
        let mut state = PresentationState::Failed(LanguageCode::Ko);
        state.select(LanguageCode::Vn);
        assert_eq!(state.playing(), Some(LanguageCode::Vn));
    }
}
