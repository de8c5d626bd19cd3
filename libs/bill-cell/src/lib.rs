pub mod form;
pub mod models;
pub mod service;

pub use form::*;
pub use models::*;
pub use service::*;
