/// Information panels reachable from the footer, in render order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tab {
    About,
    Download,
    Documentation,
    Contact,
}

impl Tab {
    pub const ALL: [Self; 4] = [Self::About, Self::Download, Self::Documentation, Self::Contact];

    /// Stable identifier used for list keys, anchors and dialog ids.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Download => "download",
            Self::Documentation => "documentation",
            Self::Contact => "contact",
        }
    }

    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::About => "footer.nav.about",
            Self::Download => "footer.nav.download",
            Self::Documentation => "footer.nav.documentation",
            Self::Contact => "footer.nav.contact",
        }
    }

    #[must_use]
    pub const fn title_key(self) -> &'static str {
        match self {
            Self::About => "about.title",
            Self::Download => "download.title",
            Self::Documentation => "documentation.title",
            Self::Contact => "contact.title",
        }
    }

    /// Font Awesome icon class shown next to the label.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::About => "fa-question-circle",
            Self::Download => "fa-download",
            Self::Documentation => "fa-book",
            Self::Contact => "fa-envelope",
        }
    }
}

/// Which panel is open. A single slot: opening one tab closes any other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpenTab(Option<Tab>);

impl OpenTab {
    pub const CLOSED: Self = Self(None);

    #[must_use]
    pub const fn open(tab: Tab) -> Self {
        Self(Some(tab))
    }

    #[must_use]
    pub const fn current(self) -> Option<Tab> {
        self.0
    }

    #[must_use]
    pub fn is_visible(self, tab: Tab) -> bool {
        self.0 == Some(tab)
    }

    /// Tabs whose dialog is currently shown; never more than one.
    pub fn visible_tabs(self) -> impl Iterator<Item = Tab> {
        Tab::ALL.into_iter().filter(move |tab| self.is_visible(*tab))
    }
}

impl From<Option<Tab>> for OpenTab {
    fn from(tab: Option<Tab>) -> Self {
        Self(tab)
    }
}
