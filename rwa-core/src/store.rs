use crate::config::DashboardConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Class toggled on the document root.
    pub fn class(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SidebarState {
    #[default]
    Expanded,
    Collapsed,
}

/// Application-wide UI flags.
///
/// One value is created at startup and handed to the view tree; every
/// change goes through the methods below.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiStore {
    theme: Theme,
    sidebar: SidebarState,
}

impl UiStore {
    pub fn from_config(config: &DashboardConfig) -> Self {
        let mut store = Self::default();
        store.set_dark(config.dark_theme);
        store.set_sidebar_collapsed(config.sidebar_collapsed);
        store
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme == Theme::Dark
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.flipped();
        tracing::debug!(theme = ?self.theme, "theme toggled");
    }

    pub fn set_dark(&mut self, dark: bool) {
        self.theme = if dark { Theme::Dark } else { Theme::Light };
    }

    pub fn is_collapsed(&self) -> bool {
        self.sidebar == SidebarState::Collapsed
    }

    pub fn toggle_sidebar(&mut self) {
        let collapsed = !self.is_collapsed();
        self.set_sidebar_collapsed(collapsed);
        tracing::debug!(collapsed, "sidebar toggled");
    }

    pub fn set_sidebar_collapsed(&mut self, collapsed: bool) {
        self.sidebar = if collapsed {
            SidebarState::Collapsed
        } else {
            SidebarState::Expanded
        };
    }

    /// Left margin class for the routed content area.
    pub fn content_offset(&self) -> &'static str {
        if self.is_collapsed() {
            "offset-collapsed"
        } else {
            "offset-expanded"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_flip_and_setters_force() {
        let mut store = UiStore::default();
        assert!(store.is_dark());
        assert!(!store.is_collapsed());

        store.toggle_theme();
        assert!(!store.is_dark());
        store.toggle_theme();
        assert!(store.is_dark());
        store.set_dark(false);
        store.set_dark(false);
        assert_eq!(store.theme(), Theme::Light);

        store.toggle_sidebar();
        assert!(store.is_collapsed());
        store.set_sidebar_collapsed(true);
        assert!(store.is_collapsed());
        store.toggle_sidebar();
        assert!(!store.is_collapsed());
        store.set_sidebar_collapsed(false);
        assert!(!store.is_collapsed());
    }

    #[test]
    fn initial_flags_come_from_config() {
        let config = DashboardConfig {
            dark_theme: false,
            sidebar_collapsed: true,
            ..DashboardConfig::default()
        };
        let store = UiStore::from_config(&config);
        assert!(!store.is_dark());
        assert!(store.is_collapsed());
        assert_eq!(store.content_offset(), "offset-collapsed");
    }
}
