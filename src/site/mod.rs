//! Documentation page behavior, independent of any UI toolkit
//!
//! These are the state machines behind the page chrome: which navigation
//! entry is active, whether the mobile menu is open, which sections match a
//! search, when a code sample's copy button reverts. A host wires them to
//! its own events.

pub mod code_copy;
pub mod menu;
pub mod scroll_spy;
pub mod search;

pub use code_copy::{CodeBlocks, CodeCopyButton, CopyButtonState};
pub use menu::{Key, KeyAction, MenuState};
pub use scroll_spy::{FrameThrottle, ScrollSpy, Section};
pub use search::{SearchableSection, SectionFilter};

/// Which page elements a host found
///
/// A missing element disables only the feature that needs it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageElements {
    pub sidebar: bool,
    pub overlay: bool,
    pub menu_toggle: bool,
    pub scroll_top_button: bool,
    pub header_actions: bool,
    pub code_blocks: bool,
    pub simple_generator: GeneratorElements,
    pub blue_green_generator: GeneratorElements,
}

/// Elements of one generator form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneratorElements {
    pub form: bool,
    pub output_container: bool,
    pub output_code: bool,
    pub copy_button: bool,
    pub download_button: bool,
    pub reset_button: bool,
}

/// Actions a wired generator offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorFeatures {
    pub copy: bool,
    pub download: bool,
    pub reset: bool,
}

impl GeneratorFeatures {
    /// A generator needs its form and both output elements; buttons are optional
    pub fn for_elements(elements: &GeneratorElements) -> Option<Self> {
        if !(elements.form && elements.output_container && elements.output_code) {
            return None;
        }
        Some(Self {
            copy: elements.copy_button,
            download: elements.download_button,
            reset: elements.reset_button,
        })
    }
}

/// Features that can be wired for a set of page elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Features {
    pub menu: bool,
    pub overlay_close: bool,
    pub scroll_top: bool,
    pub search: bool,
    pub code_copy: bool,
    pub simple_generator: Option<GeneratorFeatures>,
    pub blue_green_generator: Option<GeneratorFeatures>,
}

impl Features {
    /// Decide what to wire; a page without a sidebar is a landing page and gets nothing
    pub fn for_page(elements: &PageElements) -> Self {
        if !elements.sidebar {
            return Self {
                menu: false,
                overlay_close: false,
                scroll_top: false,
                search: false,
                code_copy: false,
                simple_generator: None,
                blue_green_generator: None,
            };
        }

        Self {
            menu: elements.menu_toggle,
            overlay_close: elements.overlay,
            scroll_top: elements.scroll_top_button,
            search: elements.header_actions,
            code_copy: elements.code_blocks,
            simple_generator: GeneratorFeatures::for_elements(&elements.simple_generator),
            blue_green_generator: GeneratorFeatures::for_elements(&elements.blue_green_generator),
        }
    }
}
