use crate::error::PersistenceError;

/// Byte-level load/store facility for the persisted task file. The
/// session owns one of these and writes through after every mutation.
pub trait TaskStore {
    /// Returns the persisted blob, or `None` when nothing has been
    /// saved yet.
    fn load(&self) -> Result<Option<String>, PersistenceError>;

    fn save(&self, blob: &str) -> Result<(), PersistenceError>;
}
