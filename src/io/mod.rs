//! I/O layer. The parser only touches the filesystem to list the folder given to
//! `-f`; that listing goes through the `DirLister` trait so callers can swap it.
pub mod folder;
pub use folder::{DirLister, FsDirLister};
