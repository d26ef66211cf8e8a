//! Interaction state for the site, free of any DOM access so it can be
//! exercised directly in unit tests. Components keep these in signals.

pub mod carousel;
pub mod chat;
pub mod contact;
pub mod counter;
pub mod disclosure;
pub mod filter;
pub mod nav;
pub mod overlay;
