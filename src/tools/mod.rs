//! Interactive tools

pub mod pen;
