use crate::config::SCROLL_TOP_SHOW_AT;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTopButton {
    show_at: f64,
}

impl Default for ScrollTopButton {
    fn default() -> Self {
        Self::new(SCROLL_TOP_SHOW_AT)
    }
}

impl ScrollTopButton {
    pub fn new(show_at: f64) -> Self {
        Self { show_at }
    }

    /// Strictly past the threshold; sitting exactly on it stays hidden.
    pub fn is_visible(&self, scroll_y: f64) -> bool {
        scroll_y > self.show_at
    }

    pub fn display(&self, scroll_y: f64) -> &'static str {
        if self.is_visible(scroll_y) {
            "block"
        } else {
            "none"
        }
    }
}
