//! Page sections reachable from the navigation bar.

/// A content section of the portfolio page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    About,
    Skills,
    Projects,
    Testimonials,
    Contact,
}

impl Section {
    /// All sections in navigation order.
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Testimonials,
        Section::Contact,
    ];

    /// Label shown in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Testimonials => "Testimonials",
            Section::Contact => "Contact",
        }
    }

    /// Heading shown above the section body.
    pub fn heading(self) -> &'static str {
        match self {
            Section::About => "About Me",
            Section::Contact => "Contact Me",
            other => other.label(),
        }
    }

    /// Zero-based position in the navigation bar.
    pub fn index(self) -> usize {
        match self {
            Section::About => 0,
            Section::Skills => 1,
            Section::Projects => 2,
            Section::Testimonials => 3,
            Section::Contact => 4,
        }
    }

    /// Section at the given position, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next section, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous section, wrapping around.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
