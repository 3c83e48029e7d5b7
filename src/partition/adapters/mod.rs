//! Adapter implementations of the partition ports.

pub mod http;
pub mod memory;

pub use http::HttpStatusProvider;
pub use memory::InMemoryStatusProvider;
