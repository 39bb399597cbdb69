pub mod file;
pub mod traits;

// Re-export
pub use file::FileTaskStore;
pub use traits::TaskStore;
