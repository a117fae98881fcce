/// Page sections reachable from the navbar, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Projects,
    Contact,
}

impl Section {
    pub const NAVBAR: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    /// Element id of the section on the page.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }
}

/// Navbar state: the highlighted link and whether the mobile menu is open.
///
/// While the menu is open the page behind it must not scroll; the shell reads
/// [`NavState::scroll_locked`] and applies that to its own wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    active: Section,
    menu_open: bool,
}

impl NavState {
    pub fn active(&self) -> Section {
        self.active
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn scroll_locked(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Highlights `section`, closes the menu, and returns the anchor to scroll to.
    pub fn navigate(&mut self, section: Section) -> &'static str {
        self.active = section;
        self.menu_open = false;
        section.anchor()
    }
}

/// Scroll offset in pixels past which the scroll-to-top button appears.
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;

/// Debounce applied to scroll events before re-evaluating the button.
pub const SCROLL_DEBOUNCE_MS: f64 = 100.0;

pub fn scroll_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_nav_state() {
        let nav = NavState::default();
        assert_eq!(nav.active(), Section::Home);
        assert!(!nav.menu_open());
        assert!(!nav.scroll_locked());
    }

    #[test]
    fn test_menu_locks_scroll() {
        let mut nav = NavState::default();
        nav.toggle_menu();
        assert!(nav.menu_open());
        assert!(nav.scroll_locked());
        nav.toggle_menu();
        assert!(!nav.scroll_locked());
    }

    #[test]
    fn test_navigate_closes_menu() {
        let mut nav = NavState::default();
        nav.toggle_menu();
        let anchor = nav.navigate(Section::Contact);
        assert_eq!(anchor, "contact");
        assert_eq!(nav.active(), Section::Contact);
        assert!(!nav.menu_open());
        assert!(!nav.scroll_locked());
    }

    #[test]
    fn test_navbar_order_and_anchors() {
        let labels = Section::NAVBAR.map(Section::label);
        assert_eq!(labels, ["Home", "About", "Projects", "Contact"]);
        for section in Section::NAVBAR {
            assert_eq!(section.anchor(), section.label().to_lowercase());
        }
    }

    #[test]
    fn test_scroll_top_threshold() {
        assert!(!scroll_top_visible(0.0));
        assert!(!scroll_top_visible(300.0));
        assert!(scroll_top_visible(300.5));
    }
}
