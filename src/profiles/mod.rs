//! Document profiles.
//!
//! A profile is a named preset distinguishing one document style from
//! others: it supplies default configuration, lint rules, and the header
//! template used for its documents.

pub mod kikv;
