//! Utility modules: build info, randomness, persistence, formatting, debug menu.

pub mod build_info;
pub mod debug_menu;
pub mod format;
pub mod persistence;
pub mod random;

pub use format::format_balance;
pub use random::{choose, random_range, random_range_int, weighted_choose};
