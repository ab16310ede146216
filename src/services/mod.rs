//! Business logic behind the HTTP routes.

pub mod knowledge;
