//! Page controllers.
//!
//! # Responsibility
//! - Turn user actions into record edits, persist them, and return the page
//!   regions that need re-rendering.
//! - Own the state of one view explicitly; nothing is global.
//!
//! # Invariants
//! - Edits are applied to a copy and committed only after a successful save,
//!   so a rejected or failed edit leaves the view state unchanged.

pub mod forms;
pub mod hero_service;
pub mod list_service;
pub mod profile_service;
