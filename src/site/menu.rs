//! Mobile navigation menu

/// Viewport width at or below which the sidebar behaves as a mobile menu
pub const MOBILE_BREAKPOINT: u32 = 1024;

/// Keys the page reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Escape,
    Home,
    Other,
}

/// Side effect requested by a key press besides menu state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    None,
    ScrollToTop,
}

/// Open/closed state of the sidebar and its overlay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Clicking the overlay always closes the menu
    pub fn on_overlay_click(&mut self) {
        self.close();
    }

    /// Following a navigation link closes the menu on narrow viewports
    pub fn on_nav_click(&mut self, viewport_width: u32) {
        if is_mobile(viewport_width) {
            self.close();
        }
    }

    /// Keyboard shortcuts: `m` toggles on narrow viewports, Escape closes, Home scrolls up
    pub fn on_key(&mut self, key: Key, viewport_width: u32) -> KeyAction {
        match key {
            Key::Char('m') | Key::Char('M') => {
                if is_mobile(viewport_width) {
                    self.toggle();
                }
                KeyAction::None
            }
            Key::Escape => {
                self.close();
                KeyAction::None
            }
            Key::Home => KeyAction::ScrollToTop,
            _ => KeyAction::None,
        }
    }
}

/// Whether a viewport width counts as mobile
pub fn is_mobile(viewport_width: u32) -> bool {
    viewport_width <= MOBILE_BREAKPOINT
}
