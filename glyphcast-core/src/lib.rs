pub mod format;
pub mod error;
pub mod grid;
pub mod compress;
pub mod encode;
pub mod decode;

pub use error::{Error, Result};
