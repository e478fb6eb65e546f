//! File emission for scaffolded routers

pub mod writer;

pub use writer::{router_path, write_file};
