//! UI state types for the TUI layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.
//! Used by both the engine (state ownership) and tui (rendering/input).

/// The closed set of screens. Only `Calculator` consumes the estimator;
/// the rest are static text pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Calculator,
    Privacy,
    Terms,
    Disclaimer,
    About,
    Contact,
}

impl View {
    /// Footer order.
    pub const PAGES: [Self; 5] = [
        Self::About,
        Self::Contact,
        Self::Privacy,
        Self::Terms,
        Self::Disclaimer,
    ];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Calculator => "Calculator",
            Self::Privacy => "Privacy Policy",
            Self::Terms => "Terms of Service",
            Self::Disclaimer => "Disclaimer",
            Self::About => "About Us",
            Self::Contact => "Contact Us",
        }
    }

    /// Single-key shortcut used by the footer navigation.
    #[must_use]
    pub const fn shortcut(self) -> Option<char> {
        match self {
            Self::Calculator => None,
            Self::Privacy => Some('v'),
            Self::Terms => Some('t'),
            Self::Disclaimer => Some('d'),
            Self::About => Some('a'),
            Self::Contact => Some('c'),
        }
    }

    #[must_use]
    pub fn from_shortcut(key: char) -> Option<Self> {
        Self::PAGES
            .into_iter()
            .find(|view| view.shortcut() == Some(key))
    }
}

/// Focusable widgets on the calculator form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormField {
    #[default]
    Area,
    Quality,
    City,
    Material,
    Calculate,
}

impl FormField {
    pub const ORDER: [Self; 5] = [
        Self::Area,
        Self::Quality,
        Self::City,
        Self::Material,
        Self::Calculate,
    ];

    #[must_use]
    pub fn next(self) -> Self {
        let idx = self.index();
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        let idx = self.index();
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    fn index(self) -> usize {
        Self::ORDER
            .iter()
            .position(|field| *field == self)
            .unwrap_or(0)
    }
}

/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiOptions {
    /// Use ASCII-only glyphs and the `Rs.` currency prefix.
    pub ascii_only: bool,
    pub high_contrast: bool,
    pub show_ads: bool,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            ascii_only: false,
            high_contrast: false,
            show_ads: true,
        }
    }
}
