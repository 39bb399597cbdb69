//! The persisted text format: one pipe-delimited record per task.
//!
//! ```text
//! T | 0 | read book
//! D | 1 | return book | Sunday
//! E | 0 | project meeting | 2pm | 4pm
//! ```
//!
//! Field order and the ` | ` delimiter are an on-disk contract; a
//! serialize/deserialize round trip must reproduce the tasks exactly.

use crate::error::CorruptRecordError;
use crate::model::task::Task;

const FIELD_SEPARATOR: &str = " | ";

/// One record line per task, in registry order, newline-terminated.
pub fn serialize(tasks: &[Task]) -> String {
    let mut blob = String::new();
    for task in tasks {
        blob.push_str(&task.record_line());
        blob.push('\n');
    }
    blob
}

/// Parses a whole persisted blob. Blank lines (the trailing one in
/// particular) are skipped; anything else that does not match the
/// record format fails with the offending 1-based line number.
pub fn deserialize(blob: &str) -> Result<Vec<Task>, CorruptRecordError> {
    let mut tasks = Vec::new();
    for (i, line) in blob.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let task = parse_record(line).map_err(|reason| CorruptRecordError {
            line: i + 1,
            reason,
        })?;
        tasks.push(task);
    }
    Ok(tasks)
}

fn parse_record(line: &str) -> Result<Task, String> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    let tag = fields[0];
    let expected = match tag {
        "T" => 3,
        "D" => 4,
        "E" => 5,
        other => return Err(format!("unknown type tag '{}'", other)),
    };
    if fields.len() != expected {
        return Err(format!(
            "expected {} fields for tag '{}', got {}",
            expected,
            tag,
            fields.len()
        ));
    }

    let done = match fields[1] {
        "0" => false,
        "1" => true,
        other => return Err(format!("invalid done flag '{}'", other)),
    };

    let mut task = match tag {
        "T" => Task::todo(fields[2]),
        "D" => Task::deadline(fields[2], fields[3]),
        _ => Task::event(fields[2], fields[3], fields[4]),
    }
    .map_err(|e| e.to_string())?;

    if done {
        task.mark_done();
    }
    Ok(task)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tasks() -> Vec<Task> {
        let mut done = Task::todo("read book").unwrap();
        done.mark_done();
        vec![
            done,
            Task::deadline("return book", "Sunday").unwrap(),
            Task::event("project meeting", "2pm", "4pm").unwrap(),
        ]
    }

    #[test]
    fn test_serialize_format() {
        let blob = serialize(&sample_tasks());
        assert_eq!(
            blob,
            "T | 1 | read book\n\
             D | 0 | return book | Sunday\n\
             E | 0 | project meeting | 2pm | 4pm\n"
        );
    }

    #[test]
    fn test_round_trip() {
        let tasks = sample_tasks();
        let restored = deserialize(&serialize(&tasks)).unwrap();
        assert_eq!(restored, tasks);
    }

    #[test]
    fn test_blank_trailing_line_ignored() {
        let restored = deserialize("T | 0 | read book\n\n").unwrap();
        assert_eq!(restored.len(), 1);
        assert_eq!(deserialize("").unwrap(), Vec::new());
    }

    #[test]
    fn test_unknown_tag_is_corrupt() {
        let err = deserialize("X | 0 | foo\n").unwrap_err();
        assert_eq!(err.line, 1);
        assert!(err.reason.contains("unknown type tag 'X'"));
    }

    #[test]
    fn test_wrong_arity_is_corrupt() {
        // A deadline record missing its date field.
        let err = deserialize("T | 0 | read book\nD | 0 | return book\n").unwrap_err();
        assert_eq!(err.line, 2);
        assert!(err.reason.contains("expected 4 fields"));
    }

    #[test]
    fn test_bad_done_flag_is_corrupt() {
        let err = deserialize("T | 2 | read book\n").unwrap_err();
        assert_eq!(err.line, 1);
        assert!(err.reason.contains("invalid done flag '2'"));
    }

    #[test]
    fn test_empty_field_is_corrupt() {
        let err = deserialize("D | 0 | return book |  \n").unwrap_err();
        assert_eq!(err.line, 1);
    }
}
