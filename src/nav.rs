//! Mobile menu and skill category tabs.

/// Open/closed state of the mobile navigation menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the menu, returning whether it is now open.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Closes the menu, as following one of its links does.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// Skill category tabs; exactly one is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTabs {
    categories: Vec<String>,
    active: usize,
}

impl CategoryTabs {
    /// Builds the tab set with the first category active.
    ///
    /// Returns `None` when `categories` is empty.
    pub fn new<I, S>(categories: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let categories: Vec<String> = categories.into_iter().map(Into::into).collect();
        if categories.is_empty() {
            return None;
        }
        Some(Self {
            categories,
            active: 0,
        })
    }

    /// Activates the tab for `category`.
    ///
    /// Unknown categories leave the selection unchanged and return `false`.
    pub fn select(&mut self, category: &str) -> bool {
        match self.categories.iter().position(|c| c == category) {
            Some(index) => {
                self.active = index;
                true
            }
            None => {
                tracing::debug!(category, "no content for skill category");
                false
            }
        }
    }

    pub fn active(&self) -> &str {
        &self.categories[self.active]
    }

    pub fn is_active(&self, category: &str) -> bool {
        self.active() == category
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }
}
