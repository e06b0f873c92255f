//! Request workflows: validated input in, store calls, response payload out

pub mod lookup;
pub mod registration;

pub use lookup::lookup;
pub use registration::{format_created_at, register};
