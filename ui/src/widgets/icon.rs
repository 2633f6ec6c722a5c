//! Icons for the navigation rail.
//!
//! Callers pick the icon; nothing here guesses one from a tab name.

/// Glyphs drawn from egui's bundled emoji font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabIcon {
    Dashboard,
    Orders,
    Users,
    Restaurants,
    Foods,
    Staff,
    Subscription,
    Revenue,
    Settings,
}

impl TabIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Dashboard => "📊",
            Self::Orders => "📦",
            Self::Users => "👥",
            Self::Restaurants => "🏠",
            Self::Foods => "🍴",
            Self::Staff => "👤",
            Self::Subscription => "🔁",
            Self::Revenue => "💰",
            Self::Settings => "⚙",
        }
    }
}

/// Anything that displays with an icon in front of its label.
pub trait RenderIcon {
    fn icon(&self) -> TabIcon;

    fn label(&self) -> &'static str;

    fn icon_label(&self) -> String {
        format!("{} {}", self.icon().glyph(), self.label())
    }
}
