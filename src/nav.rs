#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", path: "/" },
    NavItem { label: "About", path: "/about" },
    NavItem { label: "Education", path: "/education" },
    NavItem { label: "Experience", path: "/experience" },
    NavItem { label: "Skills", path: "/skills" },
    NavItem { label: "Services", path: "/services" },
    NavItem { label: "Testimonials", path: "/testimonials" },
    NavItem { label: "Contact", path: "/contact" },
];

/// Vertical offset in px past which the bar switches to its scrolled look.
pub const SCROLL_THRESHOLD: f64 = 20.0;

impl NavItem {
    pub fn is_active(&self, current_path: &str) -> bool {
        self.path == current_path
    }
}

pub fn active_item(current_path: &str) -> Option<&'static NavItem> {
    NAV_ITEMS.iter().find(|item| item.is_active(current_path))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl NavState {
    pub fn on_scroll(&mut self, y: f64) {
        self.scrolled = y > SCROLL_THRESHOLD;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Selecting an item or any route change closes the mobile menu.
    pub fn on_navigate(&mut self) {
        self.menu_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_active_item_per_route() {
        for item in NAV_ITEMS {
            let active = NAV_ITEMS
                .iter()
                .filter(|i| i.is_active(item.path))
                .collect::<Vec<_>>();
            assert_eq!(active, vec![item]);
        }
    }

    #[test]
    fn test_no_active_item_for_unknown_route() {
        assert!(active_item("/blog").is_none());
        // no prefix matching: "/about/team" is not "/about"
        assert!(active_item("/about/team").is_none());
        assert_eq!(active_item("/").map(|i| i.label), Some("Home"));
    }

    #[test]
    fn test_scroll_threshold() {
        let mut state = NavState::default();
        state.on_scroll(20.0);
        assert!(!state.scrolled);
        state.on_scroll(20.5);
        assert!(state.scrolled);
        state.on_scroll(0.0);
        assert!(!state.scrolled);
    }

    #[test]
    fn test_menu_toggle_and_close() {
        let mut state = NavState::default();
        state.toggle_menu();
        assert!(state.menu_open);
        state.toggle_menu();
        assert!(!state.menu_open);

        state.toggle_menu();
        state.on_navigate();
        assert!(!state.menu_open);
        state.on_navigate();
        assert!(!state.menu_open);
    }
}
