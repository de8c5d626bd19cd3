pub mod client;
pub mod error;

pub use client::*;
pub use error::*;

// Callers build `reqwest::Method` values without taking their own dependency.
pub use reqwest;
