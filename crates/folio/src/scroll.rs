//! Active section tracking for the navigation bar.

use folio_core::SectionId;

use crate::page::SectionSpan;

/// Row of the content area, counted from its top, that decides which
/// section is active.
pub const MARKER_ROW: usize = 2;

/// Remembers which section the navigation bar highlights.
#[derive(Debug, Clone, Copy)]
pub struct ScrollTracker {
    active: SectionId,
}

impl ScrollTracker {
    pub fn new(start: SectionId) -> Self {
        Self { active: start }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Re-evaluate the active section for a page scrolled down by `offset`
    /// rows, marking at `marker` rows below the top of the content area.
    ///
    /// Sections are checked in page order and the first whose visible rows
    /// contain the marker row wins. The previous section stays active when none
    /// does.
    pub fn update(
        &mut self,
        spans: &[(SectionId, SectionSpan)],
        offset: usize,
        marker: usize,
    ) -> SectionId {
        let marker = marker as i64;
        let found = SectionId::ALL.into_iter().find(|id| {
            spans
                .iter()
                .find(|(section, _)| section == id)
                .is_some_and(|(_, span)| {
                    let top = span.start as i64 - offset as i64;
                    let bottom = span.end as i64 - offset as i64;
                    top <= marker && bottom >= marker
                })
        });
        if let Some(id) = found {
            if id != self.active {
                tracing::debug!(section = id.id(), "active section changed");
            }
            self.active = id;
        }
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans() -> Vec<(SectionId, SectionSpan)> {
        let bounds = [(0, 10), (10, 25), (25, 30), (30, 50), (50, 70), (70, 80)];
        SectionId::ALL
            .into_iter()
            .zip(bounds)
            .map(|(id, (start, end))| (id, SectionSpan { start, end }))
            .collect()
    }

    #[test]
    fn test_tracks_section_under_marker_row() {
        let spans = spans();
        let mut tracker = ScrollTracker::new(SectionId::Hero);
        assert_eq!(tracker.update(&spans, 0, MARKER_ROW), SectionId::Hero);
        assert_eq!(tracker.update(&spans, 12, MARKER_ROW), SectionId::About);
        assert_eq!(tracker.update(&spans, 26, MARKER_ROW), SectionId::Skills);
        assert_eq!(tracker.update(&spans, 75, MARKER_ROW), SectionId::Contact);
    }

    #[test]
    fn test_boundary_goes_to_earlier_section() {
        // Row 10 is both hero's bottom edge and about's top edge.
        let spans = spans();
        let mut tracker = ScrollTracker::new(SectionId::Contact);
        assert_eq!(tracker.update(&spans, 8, 2), SectionId::Hero);
        assert_eq!(tracker.update(&spans, 9, 2), SectionId::About);
    }

    #[test]
    fn test_keeps_previous_when_nothing_matches() {
        let spans = spans();
        let mut tracker = ScrollTracker::new(SectionId::Hero);
        tracker.update(&spans, 55, MARKER_ROW);
        assert_eq!(tracker.active(), SectionId::Projects);

        // Scrolled past the end of the page: nothing under the marker row.
        assert_eq!(tracker.update(&spans, 500, MARKER_ROW), SectionId::Projects);
        assert_eq!(tracker.update(&[], 0, MARKER_ROW), SectionId::Projects);
    }

    #[test]
    fn test_missing_sections_are_skipped() {
        let spans: Vec<_> = spans()
            .into_iter()
            .filter(|(id, _)| *id != SectionId::About)
            .collect();
        let mut tracker = ScrollTracker::new(SectionId::Hero);
        assert_eq!(tracker.update(&spans, 14, MARKER_ROW), SectionId::Hero);
        assert_eq!(tracker.update(&spans, 24, MARKER_ROW), SectionId::Skills);
    }
}
