//! Type definitions for navigation and focus state.
//!
//! - [`Tab`] - Which bottom-bar tab is displayed
//! - [`Overlay`] - Which modal layer sits on top of the tab
//! - [`Focus`] - Where typed characters go

/// Bottom navigation tabs, in key order `1`..`4`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Search,
    Sessions,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Search, Tab::Sessions, Tab::Profile];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Search => "Search",
            Tab::Sessions => "Chat",
            Tab::Profile => "Me",
        }
    }

    pub fn from_digit(c: char) -> Option<Tab> {
        match c {
            '1' => Some(Tab::Home),
            '2' => Some(Tab::Search),
            '3' => Some(Tab::Sessions),
            '4' => Some(Tab::Profile),
            _ => None,
        }
    }
}

/// The topmost modal layer, derived from app state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Detail,
    Session,
    Billing,
    Summary,
}

/// Represents which component receives text input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    List,
    Search,
    Chat,
    ReviewComment,
}

impl Focus {
    pub fn is_text(self) -> bool {
        !matches!(self, Focus::List)
    }
}
