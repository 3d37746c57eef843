//! Shared UI components for the Dioxus fullstack web UI.

pub mod icon;
pub mod layout;
pub mod nav;

pub use icon::MenuIcon;
pub use layout::Shell;
pub use nav::{MenuBadge, SideMenu};
