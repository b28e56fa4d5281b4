//! Core types shared across the folio crates.

mod color;
mod section;
mod settings;
mod theme;

pub use color::Rgb;
pub use section::SectionId;
pub use settings::BackgroundSettings;
pub use theme::AccentColor;
