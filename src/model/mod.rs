pub mod types;
pub use types::*;

#[cfg(feature = "ssr")]
pub mod functions;
#[cfg(feature = "ssr")]
pub use functions::*;

pub mod requests;
