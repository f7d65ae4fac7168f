//! Directory adapters implementing the [`Directory`](sos_application::Directory) port.

mod json_file;
mod memory;
mod snapshot;

pub use json_file::JsonFileDirectory;
pub use memory::InMemoryDirectory;
pub use snapshot::DirectorySnapshot;
