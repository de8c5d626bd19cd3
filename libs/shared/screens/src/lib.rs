pub mod form;
pub mod list;
pub mod picker;
pub mod resource;
pub mod testing;
pub mod ui;
pub mod validate;

pub use form::*;
pub use list::*;
pub use picker::*;
pub use resource::*;
pub use ui::*;
