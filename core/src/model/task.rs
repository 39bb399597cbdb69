use std::fmt;

use crate::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Deadline { by: String },
    Event { from: String, to: String },
}

/// A single entry in the task list. `description` and every date-like
/// field are trimmed and non-empty; the constructors enforce this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub description: String,
    pub done: bool,
    pub kind: TaskKind,
}

impl Task {
    pub fn todo(description: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            description: required(description, ValidationError::EmptyDescription("ToDo"))?,
            done: false,
            kind: TaskKind::Todo,
        })
    }

    pub fn deadline(description: &str, by: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            description: required(description, ValidationError::EmptyDescription("Deadline"))?,
            done: false,
            kind: TaskKind::Deadline {
                by: required(by, ValidationError::EmptyDeadlineDate)?,
            },
        })
    }

    pub fn event(description: &str, from: &str, to: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            description: required(description, ValidationError::EmptyDescription("Event"))?,
            done: false,
            kind: TaskKind::Event {
                from: required(from, ValidationError::EmptyEventDates)?,
                to: required(to, ValidationError::EmptyEventDates)?,
            },
        })
    }

    // Both are idempotent; re-marking a task is not an error.
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    pub fn mark_undone(&mut self) {
        self.done = false;
    }

    pub fn glyph(&self) -> char {
        match self.kind {
            TaskKind::Todo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }

    /// The persisted one-line form, e.g. `D | 0 | return book | Sunday`.
    pub fn record_line(&self) -> String {
        let flag = if self.done { '1' } else { '0' };
        match &self.kind {
            TaskKind::Todo => format!("T | {} | {}", flag, self.description),
            TaskKind::Deadline { by } => {
                format!("D | {} | {} | {}", flag, self.description, by)
            }
            TaskKind::Event { from, to } => {
                format!("E | {} | {} | {} | {}", flag, self.description, from, to)
            }
        }
    }
}

fn required(value: &str, err: ValidationError) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(err)
    } else {
        Ok(trimmed.to_string())
    }
}

impl fmt::Display for Task {
    /// Renders `[T][X] read book` style display text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let done = if self.done { 'X' } else { ' ' };
        write!(f, "[{}][{}] {}", self.glyph(), done, self.description)?;
        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { by } => write!(f, " (by: {})", by),
            TaskKind::Event { from, to } => write!(f, " (from: {} to: {})", from, to),
        }
    }
}
