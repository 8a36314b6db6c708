pub mod song;
pub mod song_feed;
pub mod upload;

#[allow(unused_imports)]
pub use song::*;
#[allow(unused_imports)]
pub use song_feed::*;
#[allow(unused_imports)]
pub use upload::*;
