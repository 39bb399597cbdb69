use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PersistenceError;
use crate::repository::traits::TaskStore;

const DEFAULT_FILE_NAME: &str = "tasks.txt";

/// Flat-file store holding one record line per task.
#[derive(Clone)]
pub struct FileTaskStore {
    file_path: PathBuf,
}

impl FileTaskStore {
    /// Uses `base_dir` when given, otherwise `~/.taskline`. The
    /// directory is created up front; the file itself appears on the
    /// first save.
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self, PersistenceError> {
        let mut path = match base_dir {
            Some(dir) => dir,
            None => {
                let home_dir = dirs::home_dir().ok_or(PersistenceError::NoHomeDir)?;
                home_dir.join(".taskline")
            }
        };
        fs::create_dir_all(&path)?;
        path.push(DEFAULT_FILE_NAME);

        Ok(FileTaskStore { file_path: path })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl TaskStore for FileTaskStore {
    fn load(&self) -> Result<Option<String>, PersistenceError> {
        if !self.file_path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&self.file_path)?))
    }

    fn save(&self, blob: &str) -> Result<(), PersistenceError> {
        fs::write(&self.file_path, blob)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::env;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("taskline-test-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_load_before_first_save_is_none() {
        let dir = temp_dir("fresh");
        let store = FileTaskStore::new(Some(dir.clone())).unwrap();
        assert_eq!(store.load().unwrap(), None);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = temp_dir("roundtrip");
        let store = FileTaskStore::new(Some(dir.clone())).unwrap();
        store.save("T | 0 | read book\n").unwrap();
        assert_eq!(store.load().unwrap(), Some("T | 0 | read book\n".to_string()));
        let _ = fs::remove_dir_all(&dir);
    }
}
