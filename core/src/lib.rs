pub mod command;
pub mod error;
pub mod model;
pub mod record;
pub mod registry;
pub mod repository;
pub mod service;

pub use command::{parse, Command};
pub use error::{CorruptRecordError, IndexError, ParseError, PersistenceError, ValidationError};
pub use model::task::{Task, TaskKind};
pub use registry::TaskRegistry;
pub use repository::{FileTaskStore, TaskStore};
pub use service::session::{Session, SessionState, GREETING};
