//! Terminal presentation for the clasp-shell binary

pub mod context;
pub mod primitives;
pub mod sink;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
