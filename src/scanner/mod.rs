//! Tree walking and the dump driver

pub mod core;
pub mod directory;
pub mod types;

pub use self::core::Dumper;
pub use directory::{TreeWalker, Walk};
pub use types::{DumpObserver, DumpStats, SilentObserver, WalkEvent};
