//! Menu operations and setup steps

pub mod completions;
pub mod extract;
pub mod print;
pub mod root;
pub mod setup;
