pub mod guard;
pub mod menu;
pub mod service;

pub use guard::*;
pub use menu::*;
pub use service::*;
