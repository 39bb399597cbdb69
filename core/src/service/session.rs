//! The session façade: owns the registry and the backing store, applies
//! one parsed command at a time, and writes the whole registry through
//! after every successful mutation.

use crate::command::{self, Command};
use crate::error::{PersistenceError, ValidationError};
use crate::model::task::Task;
use crate::record;
use crate::registry::TaskRegistry;
use crate::repository::TaskStore;

pub const GREETING: &str = "Hello! I'm Taskline\nWhat can I do for you?";

const GOODBYE: &str = "Bye. Hope to see you again soon!";
const SAVE_FAILED: &str = "An error occurred while saving the tasks.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Exited,
}

pub struct Session<S: TaskStore> {
    registry: TaskRegistry,
    store: S,
    state: SessionState,
}

impl<S: TaskStore> Session<S> {
    /// Loads persisted tasks and returns the session plus an optional
    /// non-fatal load warning. A missing file is a normal first run; an
    /// unreadable or corrupt file degrades to an empty registry.
    pub fn start(store: S) -> (Self, Option<String>) {
        let (registry, warning) = match store.load() {
            Ok(None) => (TaskRegistry::new(), None),
            Ok(Some(blob)) => match record::deserialize(&blob) {
                Ok(tasks) => (TaskRegistry::from_tasks(tasks), None),
                Err(e) => (TaskRegistry::new(), Some(load_warning(&e.to_string()))),
            },
            Err(e) => (TaskRegistry::new(), Some(load_warning(&e.to_string()))),
        };
        let session = Session {
            registry,
            store,
            state: SessionState::Running,
        };
        (session, warning)
    }

    pub fn is_exited(&self) -> bool {
        self.state == SessionState::Exited
    }

    pub fn registry(&self) -> &TaskRegistry {
        &self.registry
    }

    /// Applies one raw input line and returns the text to show the
    /// user. Never panics and never ends the process; every failure
    /// comes back as a message.
    pub fn handle_line(&mut self, raw: &str) -> String {
        let command = match command::parse(raw) {
            Ok(command) => command,
            Err(e) => return e.to_string(),
        };

        match command {
            Command::Bye => {
                self.state = SessionState::Exited;
                let mut lines = vec![GOODBYE.to_string()];
                if !self.registry.is_empty() && self.persist().is_err() {
                    lines.push(SAVE_FAILED.to_string());
                }
                lines.join("\n")
            }
            Command::List => {
                let mut lines = vec!["Here are the tasks in your list:".to_string()];
                for (i, task) in self.registry.all().iter().enumerate() {
                    lines.push(format!("{}.{}", i + 1, task));
                }
                lines.join("\n")
            }
            Command::Find(keyword) => {
                let hits: Vec<String> = self
                    .registry
                    .find_by_keyword(&keyword)
                    .map(|(i, task)| format!("{}.{}", i, task))
                    .collect();
                if hits.is_empty() {
                    format!("No tasks found with the keyword: {}", keyword)
                } else {
                    let mut lines = vec!["Here are the matching tasks in your list:".to_string()];
                    lines.extend(hits);
                    lines.join("\n")
                }
            }
            Command::Mark(index) => {
                let shown = match self.registry.mark_done(index) {
                    Ok(task) => task.to_string(),
                    Err(_) => return out_of_range("mark"),
                };
                self.mutated(vec!["Nice! I've marked this task as done:".to_string(), shown])
            }
            Command::Unmark(index) => {
                let shown = match self.registry.mark_undone(index) {
                    Ok(task) => task.to_string(),
                    Err(_) => return out_of_range("unmark"),
                };
                self.mutated(vec![
                    "OK, I've marked this task as not done yet:".to_string(),
                    shown,
                ])
            }
            Command::Delete(index) => {
                let removed = match self.registry.delete(index) {
                    Ok(task) => task,
                    Err(_) => return out_of_range("delete"),
                };
                self.mutated(vec![
                    "Noted. I've removed this task:".to_string(),
                    removed.to_string(),
                    format!("Now you have {} tasks in the list", self.registry.len()),
                ])
            }
            Command::AddTodo(description) => self.add_task(Task::todo(&description)),
            Command::AddDeadline { description, by } => {
                self.add_task(Task::deadline(&description, &by))
            }
            Command::AddEvent {
                description,
                from,
                to,
            } => self.add_task(Task::event(&description, &from, &to)),
        }
    }

    fn add_task(&mut self, task: Result<Task, ValidationError>) -> String {
        let task = match task {
            Ok(task) => task,
            Err(e) => return e.to_string(),
        };
        let shown = task.to_string();
        let size = self.registry.add(task);
        self.mutated(vec![
            "Got it. I've added this task:".to_string(),
            shown,
            format!("Now you have {} tasks in the list", size),
        ])
    }

    // Write-through after a successful mutation. A save failure is
    // reported but the in-memory change stands; the next successful
    // save carries it.
    fn mutated(&mut self, mut lines: Vec<String>) -> String {
        if self.persist().is_err() {
            lines.push(SAVE_FAILED.to_string());
        }
        lines.join("\n")
    }

    fn persist(&self) -> Result<(), PersistenceError> {
        self.store.save(&record::serialize(self.registry.all()))
    }
}

fn load_warning(reason: &str) -> String {
    format!("Error loading tasks ({}). Starting with an empty list.", reason)
}

fn out_of_range(action: &str) -> String {
    format!(
        "Task number out of range. Please enter a valid task number to {}.",
        action
    )
}
