use crate::config::{CONTENT_THRESHOLD, PROGRESS_THRESHOLD};

pub const PROGRESS_SELECTOR: &str = ".progress";
pub const PROGRESS_FILL_SELECTOR: &str = "span";
pub const PROGRESS_PERCENT_ATTR: &str = "data-percent";
pub const PROGRESS_TRANSITION: &str = "width 1.2s ease-in-out";

pub const CONTENT_SELECTOR: &str = "section, .fade-in, img, h1, h2, h3, p, .card";
pub const CONTENT_TRANSITION: &str = "opacity 0.8s ease, transform 0.8s ease";
pub const CONTENT_HIDDEN_OPACITY: &str = "0";
pub const CONTENT_HIDDEN_TRANSFORM: &str = "translateY(20px)";
pub const CONTENT_SHOWN_OPACITY: &str = "1";
pub const CONTENT_SHOWN_TRANSFORM: &str = "translateY(0)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealKind {
    ProgressBar,
    Content,
}

impl RevealKind {
    pub fn selector(self) -> &'static str {
        match self {
            RevealKind::ProgressBar => PROGRESS_SELECTOR,
            RevealKind::Content => CONTENT_SELECTOR,
        }
    }

    /// Fraction of the target that must be visible before the observer reports it.
    pub fn threshold(self) -> f64 {
        match self {
            RevealKind::ProgressBar => PROGRESS_THRESHOLD,
            RevealKind::Content => CONTENT_THRESHOLD,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RevealKind::ProgressBar => "progress",
            RevealKind::Content => "fade-in",
        }
    }
}

/// One-shot reveal bookkeeping for a fixed set of targets.
///
/// Every target starts pending and can be revealed exactly once.
#[derive(Clone, Debug)]
pub struct RevealSet {
    revealed: Vec<bool>,
}

impl RevealSet {
    pub fn new(len: usize) -> Self {
        Self {
            revealed: vec![false; len],
        }
    }

    /// Returns true exactly once per target: on its first intersecting report.
    pub fn on_intersection(&mut self, index: usize, intersecting: bool) -> bool {
        if !intersecting {
            return false;
        }
        match self.revealed.get_mut(index) {
            Some(revealed) if !*revealed => {
                *revealed = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn pending(&self) -> usize {
        self.revealed.iter().filter(|revealed| !**revealed).count()
    }
}

/// Reads a `data-percent` value. Missing or unparseable values mean zero.
pub fn parse_percent(raw: Option<&str>) -> f64 {
    let value = raw
        .map(str::trim)
        .map(|raw| raw.strip_suffix('%').unwrap_or(raw).trim())
        .and_then(|raw| raw.parse::<f64>().ok())
        .unwrap_or(0.0);
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

pub fn width_value(percent: f64) -> String {
    format!("{percent}%")
}
