//! View building blocks. Each takes the slice of dashboard state it renders
//! and a callback that turns user input into an [`Intent`](crate::dashboard::Intent).

pub mod book_card;
pub mod dialogs;
pub mod navbar;
pub mod sheet;
pub mod sidebar;
pub mod toasts;
