use thiserror::Error;

/// A required field was empty after trimming when constructing a task.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please include the name of the {0} task.")]
    EmptyDescription(&'static str),
    #[error("Please include the date of the Deadline task.")]
    EmptyDeadlineDate,
    #[error("Please include the dates for the Event task.")]
    EmptyEventDates,
}

/// A command line that could not be turned into a `Command`.
/// Always user-recoverable; the message is shown verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid task number. Please enter a valid task number to {0}.")]
    InvalidNumber(&'static str),
    #[error("Please include the name of the ToDo task.")]
    EmptyTodo,
    #[error("Please include the date of the Deadline task.")]
    MissingDeadlineDate,
    #[error("Please include the dates for the Event task.")]
    MissingEventDates,
    #[error("I'm sorry, but I don't know what that means.")]
    UnknownCommand,
}

/// A 1-based task number outside `[1, len]`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("task number {index} is out of range (the list has {len} tasks)")]
pub struct IndexError {
    pub index: usize,
    pub len: usize,
}

/// A persisted line that does not match the record format.
/// `line` is 1-based within the loaded blob.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("corrupt record at line {line}: {reason}")]
pub struct CorruptRecordError {
    pub line: usize,
    pub reason: String,
}

/// The backing store could not be read or written.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Could not determine home directory")]
    NoHomeDir,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
