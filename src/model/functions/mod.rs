mod song;
pub use song::*;
