mod error;
mod parser;
mod types;

pub mod headers;
pub mod sfv;

pub use error::{Error, Result};
pub use parser::ClientHintsParser;
pub use types::*;
