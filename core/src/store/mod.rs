pub mod file;

pub use file::PingStore;
