/// In-page destination shown in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub anchor: &'static str,
    pub label: &'static str,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

pub static NAV_LINKS: [NavLink; 5] = [
    NavLink {
        anchor: "sobre",
        label: "Sobre",
    },
    NavLink {
        anchor: "formacao",
        label: "Formação",
    },
    NavLink {
        anchor: "competencias",
        label: "Competências",
    },
    NavLink {
        anchor: "experiencia",
        label: "Experiência",
    },
    NavLink {
        anchor: "contato",
        label: "Contato",
    },
];

/// Collapsible link list for narrow viewports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn open() -> Self {
        Self { open: true }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// Picking any destination closes the menu.
    pub fn navigated(self, _link: &NavLink) -> Self {
        Self { open: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        assert!(!MenuState::default().is_open());
        assert!(MenuState::open().is_open());
    }

    #[test]
    fn test_toggle_round_trip() {
        let menu = MenuState::default();
        let opened = menu.toggled();
        assert!(opened.is_open());
        assert_eq!(opened.toggled(), menu);
    }

    #[test]
    fn test_navigating_closes() {
        for link in &NAV_LINKS {
            assert!(!MenuState::open().navigated(link).is_open());
            assert!(!MenuState::default().navigated(link).is_open());
        }
    }

    #[test]
    fn test_nav_hrefs() {
        let hrefs = NAV_LINKS.iter().map(NavLink::href).collect::<Vec<_>>();
        assert_eq!(
            hrefs,
            ["#sobre", "#formacao", "#competencias", "#experiencia", "#contato"]
        );
    }
}
