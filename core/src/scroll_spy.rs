//! Active-link tracking for the page sections.
//!
//! Each section owns one flag. The flag follows the section's intersection
//! with the focus band: set on enter, cleared on leave. Sections never affect
//! each other's flags.

use crate::config::SECTION_IDS;

pub const ACTIVE_CLASS: &str = "active";

/// Viewport band considered "in focus", as fractions trimmed from each edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusBand {
    pub top_inset: f64,
    pub bottom_inset: f64,
}

impl Default for FocusBand {
    fn default() -> Self {
        Self {
            top_inset: 0.2,
            bottom_inset: 0.4,
        }
    }
}

impl FocusBand {
    /// `rootMargin` for an `IntersectionObserver` rooted at the viewport.
    pub fn root_margin(&self) -> String {
        format!(
            "-{}% 0px -{}% 0px",
            percent(self.top_inset),
            percent(self.bottom_inset)
        )
    }
}

fn percent(fraction: f64) -> f64 {
    (fraction * 100.0).round()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkUpdate {
    pub href: String,
    pub active: bool,
}

#[derive(Clone, Debug)]
pub struct ScrollSpy {
    regions: Vec<(String, bool)>,
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self::new(SECTION_IDS.iter().copied())
    }
}

impl ScrollSpy {
    pub fn new<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        let regions = ids
            .into_iter()
            .map(|id| (id.to_string(), false))
            .collect();
        Self { regions }
    }

    pub fn region_ids(&self) -> impl Iterator<Item = &str> {
        self.regions.iter().map(|(id, _)| id.as_str())
    }

    /// Records an intersection change. Unknown regions yield `None`.
    pub fn observe(&mut self, id: &str, intersecting: bool) -> Option<LinkUpdate> {
        let (_, active) = self.regions.iter_mut().find(|(region, _)| region == id)?;
        *active = intersecting;
        Some(LinkUpdate {
            href: format!("#{id}"),
            active: intersecting,
        })
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.regions
            .iter()
            .any(|(region, active)| region == id && *active)
    }
}

/// Selector for the nav link whose `href` is exactly `href`.
pub fn link_selector(href: &str) -> String {
    format!(".nav-link[href=\"{href}\"]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_band_margin() {
        assert_eq!(FocusBand::default().root_margin(), "-20% 0px -40% 0px");
    }

    #[test]
    fn default_regions_come_from_site_config() {
        let spy = ScrollSpy::default();
        let ids: Vec<&str> = spy.region_ids().collect();
        assert_eq!(ids, SECTION_IDS);
    }

    #[test]
    fn unknown_region_is_ignored() {
        let mut spy = ScrollSpy::new(["home"]);
        assert_eq!(spy.observe("blog", true), None);
        assert!(!spy.is_active("home"));
    }

    #[test]
    fn selector_targets_fragment_link() {
        assert_eq!(link_selector("#about"), ".nav-link[href=\"#about\"]");
    }
}
