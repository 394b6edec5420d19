use crate::config::ScrollConfig;

pub const NAVBAR_BACKGROUND_SCROLLED: &str = "rgba(29, 3, 3, 0.95)";
pub const NAVBAR_BACKGROUND_TOP: &str = "rgba(21, 2, 2, 0.95)";
pub const NAVBAR_BACKDROP: &str = "blur(10px)";

// layout snapshot of a page section, taken on each scroll tick
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: Option<String>,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: Option<String>, top: f64, height: f64) -> Self {
        SectionBounds { id, top, height }
    }

    // inclusive detection range for this section
    pub fn range(&self, config: &ScrollConfig) -> (f64, f64) {
        let top = self.top - config.section_offset;
        (top, top + self.height)
    }

    pub fn contains(&self, position: f64, config: &ScrollConfig) -> bool {
        let (top, bottom) = self.range(config);
        position >= top && position <= bottom
    }

    // the href a nav link needs to point at this section
    pub fn link_href(&self) -> Option<String> {
        self.id.as_ref().map(|id| format!("#{id}"))
    }
}

// which section the nav bar should highlight
//
// sections are scanned in document order without an early exit, so when ranges overlap the
// last match wins.  None means no section matched and the current markers should be kept
pub fn active_section<'a>(
    sections: &'a [SectionBounds],
    scroll_y: f64,
    config: &ScrollConfig,
) -> Option<&'a SectionBounds> {
    let position = scroll_y + config.lookahead;

    sections
        .iter()
        .filter(|section| section.contains(position, config))
        .last()
}

// everything on the page that is a pure function of the scroll offset
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScrollView {
    pub navbar_scrolled: bool,
    pub show_scroll_top: bool,
}

impl ScrollView {
    pub fn at(scroll_y: f64, config: &ScrollConfig) -> Self {
        ScrollView {
            navbar_scrolled: scroll_y > config.navbar_threshold,
            show_scroll_top: scroll_y > config.scroll_top_threshold,
        }
    }

    pub fn navbar_background(&self) -> &'static str {
        if self.navbar_scrolled {
            NAVBAR_BACKGROUND_SCROLLED
        } else {
            NAVBAR_BACKGROUND_TOP
        }
    }
}

// coalesces bursts of scroll events into one recomputation per frame
//
// the gate holds the handle of the single pending frame request; while it is held, further
// schedule attempts are dropped.  the frame callback calls complete() once its work is done
#[derive(Debug)]
pub struct FrameGate<H> {
    pending: Option<H>,
}

impl<H> Default for FrameGate<H> {
    fn default() -> Self {
        FrameGate { pending: None }
    }
}

impl<H> FrameGate<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    // returns Ok(true) if a new frame was requested, Ok(false) if one was already in flight
    pub fn schedule<E>(&mut self, request: impl FnOnce() -> Result<H, E>) -> Result<bool, E> {
        if self.pending.is_some() {
            return Ok(false);
        }

        self.pending = Some(request()?);
        Ok(true)
    }

    pub fn complete(&mut self) -> Option<H> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new(Some("home".to_owned()), 0.0, 700.0),
            SectionBounds::new(Some("about".to_owned()), 700.0, 600.0),
            SectionBounds::new(Some("projects".to_owned()), 1300.0, 900.0),
            SectionBounds::new(Some("contact".to_owned()), 2200.0, 500.0),
        ]
    }

    fn active_id(sections: &[SectionBounds], scroll_y: f64) -> Option<&str> {
        active_section(sections, scroll_y, &ScrollConfig::default())
            .and_then(|section| section.id.as_deref())
    }

    #[test]
    fn picks_section_containing_lookahead_position() {
        let sections = sections();

        assert_eq!(active_id(&sections, 0.0), Some("home"));
        assert_eq!(active_id(&sections, 450.0), Some("home"));
        assert_eq!(active_id(&sections, 1000.0), Some("about"));
        assert_eq!(active_id(&sections, 2000.0), Some("contact"));
    }

    #[test]
    fn boundaries_are_inclusive_and_last_match_wins() {
        let sections = sections();

        // about spans [600, 1200] and projects spans [1200, 2100]; 1100 + 100 touches both
        assert_eq!(active_id(&sections, 1100.0), Some("projects"));
        // home spans [-100, 600] and about starts at 600
        assert_eq!(active_id(&sections, 500.0), Some("about"));
    }

    #[test]
    fn nothing_matches_past_the_last_section() {
        let sections = sections();

        assert_eq!(active_section(&sections, 5000.0, &ScrollConfig::default()), None);
        assert_eq!(active_section(&[], 0.0, &ScrollConfig::default()), None);
    }

    #[test]
    fn exactly_one_section_wins_for_every_offset() {
        let config = ScrollConfig::default();
        let sections = sections();

        for step in 0..260 {
            let scroll_y = f64::from(step) * 10.0;
            let position = scroll_y + config.lookahead;
            let matching: Vec<_> = sections
                .iter()
                .filter(|s| s.contains(position, &config))
                .collect();

            assert_eq!(active_section(&sections, scroll_y, &config), matching.last().copied());
        }
    }

    #[test]
    fn section_without_id_has_no_link() {
        let anonymous = SectionBounds::new(None, 0.0, 100.0);
        let named = SectionBounds::new(Some("skills".to_owned()), 0.0, 100.0);

        assert_eq!(anonymous.link_href(), None);
        assert_eq!(named.link_href().as_deref(), Some("#skills"));
    }

    #[test]
    fn thresholds_are_strict() {
        let config = ScrollConfig::default();

        assert_eq!(
            ScrollView::at(50.0, &config),
            ScrollView {
                navbar_scrolled: false,
                show_scroll_top: false
            }
        );

        let view = ScrollView::at(51.0, &config);
        assert!(view.navbar_scrolled);
        assert!(!view.show_scroll_top);
        assert_eq!(view.navbar_background(), NAVBAR_BACKGROUND_SCROLLED);

        assert!(!ScrollView::at(300.0, &config).show_scroll_top);
        assert!(ScrollView::at(301.0, &config).show_scroll_top);
        assert_eq!(ScrollView::at(0.0, &config).navbar_background(), NAVBAR_BACKGROUND_TOP);
    }

    #[test]
    fn gate_allows_one_pending_frame() {
        let mut gate = FrameGate::new();
        let mut requests = 0;

        for attempt in 0..10 {
            let scheduled = gate
                .schedule(|| {
                    requests += 1;
                    Ok::<_, ()>(requests)
                })
                .unwrap();
            assert_eq!(scheduled, attempt == 0);
        }

        assert_eq!(requests, 1);
        assert!(gate.is_pending());
        assert_eq!(gate.complete(), Some(1));
        assert!(!gate.is_pending());

        assert_eq!(gate.schedule(|| Ok::<_, ()>(2)), Ok(true));
    }

    #[test]
    fn failed_request_leaves_gate_open() {
        let mut gate: FrameGate<i32> = FrameGate::new();

        assert_eq!(gate.schedule(|| Err("no frame")), Err("no frame"));
        assert!(!gate.is_pending());
        assert_eq!(gate.schedule(|| Ok::<_, &str>(7)), Ok(true));
    }
}
