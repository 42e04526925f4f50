//! Intermediate block model for document content.
//!
//! Parsers (structured and legacy) convert their input into an ordered
//! sequence of these blocks, and the renderer converts the sequence to
//! presentational markup. The block form is a transient representation:
//! only the rendered markup is held in a session.

mod block;

pub use block::*;
