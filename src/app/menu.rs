//! Side navigation menu entries.
//!
//! The menu is recomputed on every render from a single input, the number of
//! pending requests, and never reads routing state.

use super::routes::{
    RouteTable, RouteTableError, CONTENT_PATH, DASHBOARD_PATH, HISTORY_PATH, REQUESTS_PATH,
    WORD_PATH,
};

/// Largest count a badge shows before collapsing to `99+`.
pub const BADGE_MAX: u32 = 99;

/// Glyph drawn next to a menu label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Home,
    History,
    Movie,
    TextFormat,
    Mail,
}

/// Numeric indicator overlaid on a menu icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    content: Option<u32>,
}

impl Badge {
    pub fn new(content: Option<u32>) -> Self {
        Self { content }
    }

    /// The count as supplied, including zero.
    pub fn content(&self) -> Option<u32> {
        self.content
    }

    /// Absent and zero counts render nothing.
    pub fn is_visible(&self) -> bool {
        matches!(self.content, Some(n) if n > 0)
    }

    /// Text shown inside the badge, if it is visible.
    pub fn text(&self) -> Option<String> {
        match self.content {
            Some(n) if n > BADGE_MAX => Some(format!("{BADGE_MAX}+")),
            Some(n) if n > 0 => Some(n.to_string()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: Icon,
    pub badge: Option<Badge>,
}

impl MenuEntry {
    const fn link(label: &'static str, path: &'static str, icon: Icon) -> Self {
        Self {
            label,
            path,
            icon,
            badge: None,
        }
    }
}

/// Build the side menu: home, history, contents, expression words, requests.
/// Only the requests entry carries a badge.
pub fn main_menu(pending_requests: Option<u32>) -> [MenuEntry; 5] {
    [
        MenuEntry::link("ホーム", DASHBOARD_PATH, Icon::Home),
        MenuEntry::link("履歴", HISTORY_PATH, Icon::History),
        MenuEntry::link("コンテンツ", CONTENT_PATH, Icon::Movie),
        MenuEntry::link("表現語", WORD_PATH, Icon::TextFormat),
        MenuEntry {
            badge: Some(Badge::new(pending_requests)),
            ..MenuEntry::link("依頼", REQUESTS_PATH, Icon::Mail)
        },
    ]
}

/// Verify every entry links to an exact view route of `table`.
pub fn check_menu(table: &RouteTable, entries: &[MenuEntry]) -> Result<(), RouteTableError> {
    match entries
        .iter()
        .find(|entry| !table.is_exact_view_route(entry.path))
    {
        Some(entry) => Err(RouteTableError::DeadLink {
            label: entry.label,
            path: entry.path.to_string(),
        }),
        None => Ok(()),
    }
}
