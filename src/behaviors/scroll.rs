/// Offset past which the header switches to its solid style.
pub const HEADER_THRESHOLD: f64 = 100.0;

/// Vertical range `[top, top + height)` of a page section in document
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionSpan<Id> {
    pub id: Id,
    pub top: f64,
    pub height: f64,
}

impl<Id> SectionSpan<Id> {
    pub fn new(id: Id, top: f64, height: f64) -> Self {
        Self { id, top, height }
    }

    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// One reading of the window's scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    pub offset: f64,
    pub viewport_height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState<Id> {
    pub scrolled: bool,
    pub active: Id,
}

pub fn header_scrolled(offset: f64) -> bool {
    offset > HEADER_THRESHOLD
}

/// Picks the section containing the point a quarter of the way down the
/// viewport. Earlier spans win on overlap; with no match the first span is
/// returned. `None` only when `spans` is empty.
pub fn active_section<Id: Copy>(
    offset: f64,
    viewport_height: f64,
    spans: &[SectionSpan<Id>],
) -> Option<Id> {
    let probe = offset + viewport_height / 4.0;
    spans
        .iter()
        .find(|span| span.contains(probe))
        .or_else(|| spans.first())
        .map(|span| span.id)
}

/// Scroll-derived header and navigation state for one mounted page.
///
/// Once [`ScrollSpy::detach`] is called the spy stops reacting, so a listener
/// that fires late during teardown cannot update anything.
#[derive(Debug, Clone)]
pub struct ScrollSpy<Id> {
    state: ScrollState<Id>,
    attached: bool,
}

impl<Id: Copy + PartialEq> ScrollSpy<Id> {
    /// `default` is the first section of the page; it is active until a
    /// sample says otherwise.
    pub fn new(default: Id) -> Self {
        Self {
            state: ScrollState {
                scrolled: false,
                active: default,
            },
            attached: true,
        }
    }

    pub fn state(&self) -> ScrollState<Id> {
        self.state
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Recomputes from a fresh sample. Returns the new state, or `None` when
    /// detached.
    pub fn observe(
        &mut self,
        sample: ScrollSample,
        spans: &[SectionSpan<Id>],
    ) -> Option<ScrollState<Id>> {
        if !self.attached {
            return None;
        }
        self.state.scrolled = header_scrolled(sample.offset);
        if let Some(active) = active_section(sample.offset, sample.viewport_height, spans) {
            self.state.active = active;
        }
        Some(self.state)
    }

    pub fn detach(&mut self) {
        self.attached = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<SectionSpan<&'static str>> {
        vec![
            SectionSpan::new("id1", 0.0, 300.0),
            SectionSpan::new("id2", 300.0, 400.0),
            SectionSpan::new("id3", 700.0, 500.0),
        ]
    }

    #[test]
    fn header_threshold_is_strict() {
        assert!(!header_scrolled(0.0));
        assert!(!header_scrolled(100.0));
        assert!(header_scrolled(100.5));
        assert!(header_scrolled(5000.0));
        // No memory of earlier offsets.
        assert!(!header_scrolled(99.0));
    }

    #[test]
    fn picks_section_under_quarter_viewport() {
        let spans = layout();
        assert_eq!(active_section(0.0, 800.0, &spans), Some("id1"));
        assert_eq!(active_section(200.0, 800.0, &spans), Some("id2"));
        assert_eq!(active_section(600.0, 800.0, &spans), Some("id3"));
    }

    #[test]
    fn falls_back_to_first_section() {
        let spans = layout();
        // Probe lands on 1200, the excluded end of the last span.
        assert_eq!(active_section(1000.0, 800.0, &spans), Some("id1"));

        let gapped = vec![
            SectionSpan::new("hero", 500.0, 100.0),
            SectionSpan::new("about", 800.0, 100.0),
        ];
        assert_eq!(active_section(0.0, 800.0, &gapped), Some("hero"));
        assert_eq!(active_section(500.0, 800.0, &gapped), Some("hero"));
    }

    #[test]
    fn earlier_span_wins_on_overlap() {
        let spans = vec![
            SectionSpan::new("a", 0.0, 500.0),
            SectionSpan::new("b", 100.0, 500.0),
        ];
        assert_eq!(active_section(200.0, 400.0, &spans), Some("a"));
    }

    #[test]
    fn empty_layout_has_no_section() {
        let spans: Vec<SectionSpan<&str>> = Vec::new();
        assert_eq!(active_section(0.0, 800.0, &spans), None);
    }

    #[test]
    fn spy_tracks_samples() {
        let spans = layout();
        let mut spy = ScrollSpy::new("id1");
        assert_eq!(
            spy.state(),
            ScrollState {
                scrolled: false,
                active: "id1"
            }
        );

        let state = spy
            .observe(
                ScrollSample {
                    offset: 200.0,
                    viewport_height: 800.0,
                },
                &spans,
            )
            .unwrap();
        assert!(state.scrolled);
        assert_eq!(state.active, "id2");
    }

    #[test]
    fn detached_spy_ignores_samples() {
        let spans = layout();
        let mut spy = ScrollSpy::new("id1");
        spy.observe(
            ScrollSample {
                offset: 50.0,
                viewport_height: 800.0,
            },
            &spans,
        );
        spy.detach();
        assert!(!spy.is_attached());

        for offset in [200.0, 600.0, 900.0] {
            let sample = ScrollSample {
                offset,
                viewport_height: 800.0,
            };
            assert_eq!(spy.observe(sample, &spans), None);
        }
        assert_eq!(
            spy.state(),
            ScrollState {
                scrolled: false,
                active: "id1"
            }
        );
    }
}
