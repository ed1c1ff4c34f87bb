pub mod error;
pub mod event;
pub mod extract;
pub mod format;

pub use error::{ExtractError, Result};
pub use event::Event;
