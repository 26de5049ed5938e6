mod brand;
mod client_hints;
mod platform;

pub use brand::*;
pub use client_hints::*;
pub use platform::*;
