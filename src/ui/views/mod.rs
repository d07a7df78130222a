pub mod config;
pub mod excerpt;
pub mod sync;
pub mod watch;
