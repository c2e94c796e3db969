//! FTR: Floridian Tooth Records
//!
//! An interactive console that records the teeth of up to six family
//! members, lets the user print the records and extract teeth, and reports
//! the family's root canal indices.

pub mod cli;
pub mod core;
