//! Static evaluation of marker arguments.
//!
//! A restricted constant folder: it turns literal-only expressions into
//! `StaticValue`s and gives up on everything else. It never runs code.

pub mod evaluator;
pub mod value;

pub use evaluator::{Evaluation, evaluate};
pub use value::StaticValue;
