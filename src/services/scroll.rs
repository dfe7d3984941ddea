//! Scroll-spy for the single-page layout.

use std::fmt;
use std::str::FromStr;

/// Height of the fixed header, added to the scroll position.
pub const HEADER_OFFSET: f64 = 100.0;

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub enum SectionId {
    #[default]
    Home,
    Projects,
    OdonAi,
    Contact,
}

impl SectionId {
    /// Tie-break order when spans overlap.
    pub const ALL: [SectionId; 4] = [Self::Home, Self::Projects, Self::OdonAi, Self::Contact];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Projects => "projects",
            Self::OdonAi => "odonai",
            Self::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Projects => "Projects",
            Self::OdonAi => "OdonAI",
            Self::Contact => "Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "home" => Ok(Self::Home),
            "projects" => Ok(Self::Projects),
            "odonai" => Ok(Self::OdonAi),
            "contact" => Ok(Self::Contact),
            _ => Err(format!("invalid section: {}", s)),
        }
    }
}

/// Vertical extent of a rendered section, in document pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionSpan {
    pub id: SectionId,
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// First section in priority order whose span contains `position`.
pub fn section_at(position: f64, spans: &[SectionSpan]) -> Option<SectionId> {
    SectionId::ALL.into_iter().find(|id| {
        spans
            .iter()
            .any(|span| span.id == *id && span.contains(position))
    })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTracker {
    active: SectionId,
    header_offset: f64,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::with_offset(HEADER_OFFSET)
    }

    pub fn with_offset(header_offset: f64) -> Self {
        Self {
            active: SectionId::default(),
            header_offset,
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Navigation click: highlight immediately, before the scroll settles.
    pub fn select(&mut self, id: SectionId) {
        self.active = id;
    }

    /// Keeps the previous section when no span matches (e.g. in a gap).
    pub fn on_scroll(&mut self, scroll_y: f64, spans: &[SectionSpan]) -> SectionId {
        if let Some(id) = section_at(scroll_y + self.header_offset, spans) {
            self.active = id;
        }
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans() -> Vec<SectionSpan> {
        vec![
            SectionSpan { id: SectionId::Home, top: 0.0, height: 800.0 },
            SectionSpan { id: SectionId::Projects, top: 800.0, height: 600.0 },
            SectionSpan { id: SectionId::OdonAi, top: 1400.0, height: 700.0 },
            SectionSpan { id: SectionId::Contact, top: 2100.0, height: 500.0 },
        ]
    }

    #[test]
    fn test_on_scroll_applies_header_offset() {
        let mut tracker = ScrollTracker::new();

        assert_eq!(tracker.on_scroll(650.0, &spans()), SectionId::Home);
        assert_eq!(tracker.on_scroll(700.0, &spans()), SectionId::Projects);
        assert_eq!(tracker.on_scroll(2050.0, &spans()), SectionId::Contact);
    }

    #[test]
    fn test_on_scroll_keeps_active_outside_every_span() {
        let mut tracker = ScrollTracker::new();
        tracker.on_scroll(1500.0, &spans());

        assert_eq!(tracker.on_scroll(10_000.0, &spans()), SectionId::OdonAi);
    }

    #[test]
    fn test_section_at_breaks_ties_by_priority() {
        let overlapping = vec![
            SectionSpan { id: SectionId::Contact, top: 0.0, height: 500.0 },
            SectionSpan { id: SectionId::Projects, top: 0.0, height: 500.0 },
        ];

        assert_eq!(section_at(100.0, &overlapping), Some(SectionId::Projects));
    }

    #[test]
    fn test_span_end_is_exclusive() {
        let span = SectionSpan { id: SectionId::Home, top: 0.0, height: 100.0 };
        assert!(span.contains(0.0));
        assert!(!span.contains(100.0));
    }

    #[test]
    fn test_select_overrides_active() {
        let mut tracker = ScrollTracker::new();
        tracker.select(SectionId::Contact);
        assert_eq!(tracker.active(), SectionId::Contact);
    }

    #[test]
    fn test_section_id_from_str() {
        assert_eq!("OdonAI".parse::<SectionId>(), Ok(SectionId::OdonAi));
        assert!("blog".parse::<SectionId>().is_err());
    }
}
