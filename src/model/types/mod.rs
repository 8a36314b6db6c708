pub mod error;
pub use error::*;

pub mod feed;
pub use feed::*;

pub mod song;
pub use song::*;

#[cfg(feature = "ssr")]
pub mod app_state;
#[cfg(feature = "ssr")]
pub use app_state::*;

#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub use config::*;

#[cfg(feature = "ssr")]
pub mod store;
#[cfg(feature = "ssr")]
pub use store::*;
