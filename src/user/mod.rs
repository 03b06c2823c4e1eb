//! User endpoint
//!
//! `/user`

mod service;

pub use service::{Service, User};

#[cfg(test)]
mod tests;
