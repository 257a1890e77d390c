//! This module contains models that predict the next symbol in a sequence of
//! binary choices.

pub mod context;
pub mod model;

pub use model::Model;
