//! Render layer. Each function draws from state and reports what the user
//! did; [`crate::app`] applies the resulting actions to [`crate::state::AppState`].

pub mod detail;
pub mod list;
pub mod panels;
