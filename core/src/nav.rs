pub const NAV_OPEN_CLASS: &str = "show";

/// Mobile menu state. Starts closed and is never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    open: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Returns true if the menu was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    pub fn aria_expanded(self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }
}

/// Element id an in-page link points at, or `None` for anything that is not a bare fragment.
pub fn fragment_id(href: &str) -> Option<&str> {
    let id = href.trim().strip_prefix('#')?;
    if id.is_empty() {
        return None;
    }
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let nav = NavState::new();
        assert!(!nav.is_open());
        assert_eq!(nav.aria_expanded(), "false");
    }

    #[test]
    fn toggle_then_close() {
        let mut nav = NavState::new();
        assert!(nav.toggle());
        assert_eq!(nav.aria_expanded(), "true");
        assert!(nav.close());
        assert!(!nav.is_open());
    }

    #[test]
    fn close_is_idempotent() {
        let mut nav = NavState::new();
        assert!(!nav.close());
        assert!(!nav.close());
        assert!(!nav.is_open());
    }

    #[test]
    fn fragment_ids() {
        assert_eq!(fragment_id("#about"), Some("about"));
        assert_eq!(fragment_id(" #contact "), Some("contact"));
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id("/blog"), None);
        assert_eq!(fragment_id("https://example.com/#about"), None);
    }
}
