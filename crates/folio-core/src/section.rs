//! Page section identifiers.

use serde::Deserialize;

/// One of the page sections, in page order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    #[default]
    Hero,
    About,
    Skills,
    Experience,
    Projects,
    Contact,
}

impl SectionId {
    /// All sections in page order. Scroll tracking checks them in this order.
    pub const ALL: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// Sections listed in the navigation bar.
    pub const NAV: [SectionId; 5] = [
        SectionId::About,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// Stable lowercase identifier.
    pub fn id(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    /// Label shown in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }

    /// The following section, staying on the last one.
    pub fn next(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1).min(Self::ALL.len() - 1)]
    }

    /// The preceding section, staying on the first one.
    pub fn prev(self) -> Self {
        Self::ALL[self.index().saturating_sub(1)]
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }
}
