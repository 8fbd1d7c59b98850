//! Scroll-spy and scroll position helpers

/// Distance below the viewport top used to decide the current section
pub const SPY_OFFSET: f64 = 150.0;

/// Scroll position past which the scroll-to-top control is shown
pub const SCROLL_TOP_THRESHOLD: f64 = 500.0;

/// Space left above a section when jumping to an anchor (fixed header)
pub const ANCHOR_OFFSET: f64 = 80.0;

/// Vertical extent of a content section
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Tracks which navigation entry is active
///
/// Navigation entries are identified by their `href`; an entry matches a
/// section when its href is `#<section id>`.
#[derive(Debug, Clone, Default)]
pub struct ScrollSpy {
    sections: Vec<Section>,
    nav_hrefs: Vec<String>,
    active: Option<usize>,
}

impl ScrollSpy {
    pub fn new(sections: Vec<Section>, nav_hrefs: Vec<String>) -> Self {
        Self {
            sections,
            nav_hrefs,
            active: None,
        }
    }

    /// Recompute the active entry for a scroll position
    ///
    /// When no section contains `scroll_y + SPY_OFFSET` the previous state is
    /// kept. When several overlap, the last one in document order wins.
    pub fn update(&mut self, scroll_y: f64) -> Option<&str> {
        let position = scroll_y + SPY_OFFSET;

        if let Some(section) = self.sections.iter().rev().find(|s| s.contains(position)) {
            let href = format!("#{}", section.id);
            self.active = self.nav_hrefs.iter().position(|h| *h == href);
        }

        self.active_href()
    }

    /// Href of the active entry
    pub fn active_href(&self) -> Option<&str> {
        self.active.map(|i| self.nav_hrefs[i].as_str())
    }

    /// Active flag of every navigation entry, in order
    pub fn active_flags(&self) -> Vec<bool> {
        (0..self.nav_hrefs.len())
            .map(|i| Some(i) == self.active)
            .collect()
    }
}

/// Coalesces scroll events to one recomputation per frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameThrottle {
    ticking: bool,
}

impl FrameThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called for every scroll event; true when a frame should be scheduled
    pub fn request(&mut self) -> bool {
        if self.ticking {
            false
        } else {
            self.ticking = true;
            true
        }
    }

    /// Called from the scheduled frame after recomputing
    pub fn on_frame(&mut self) {
        self.ticking = false;
    }

    pub fn is_pending(&self) -> bool {
        self.ticking
    }
}

/// Whether the scroll-to-top control is visible
pub fn scroll_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD
}

/// Scroll target for an in-page anchor, or `None` for a bare `#`
pub fn anchor_target(href: &str, section_top: f64) -> Option<f64> {
    if href == "#" {
        None
    } else {
        Some(section_top - ANCHOR_OFFSET)
    }
}
