//! Turns one raw input line into a structured [`Command`].
//!
//! Recognition goes by the first whole token; the ` /by `, ` /from ` and
//! ` /to ` separator literals are part of the user-facing grammar and
//! must not change.

use crate::error::ParseError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Bye,
    List,
    Mark(usize),
    Unmark(usize),
    Delete(usize),
    Find(String),
    AddTodo(String),
    AddDeadline { description: String, by: String },
    AddEvent { description: String, from: String, to: String },
}

pub fn parse(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    let head = line.split_whitespace().next().unwrap_or("");
    // Everything after the command word, leading space included, so the
    // separator literals still match when the description is empty
    // (e.g. "deadline /by Sunday").
    let rest = &line[head.len()..];

    match head {
        "bye" if rest.is_empty() => Ok(Command::Bye),
        "list" if rest.is_empty() => Ok(Command::List),
        "mark" => Ok(Command::Mark(parse_index(rest, "mark")?)),
        "unmark" => Ok(Command::Unmark(parse_index(rest, "unmark")?)),
        "delete" => Ok(Command::Delete(parse_index(rest, "delete")?)),
        "find" => Ok(Command::Find(rest.trim().to_string())),
        "todo" => {
            let description = rest.trim();
            if description.is_empty() {
                return Err(ParseError::EmptyTodo);
            }
            Ok(Command::AddTodo(description.to_string()))
        }
        "deadline" => parse_deadline(rest),
        "event" => parse_event(rest),
        _ => Err(ParseError::UnknownCommand),
    }
}

// The parser only checks that the number is a positive integer; whether
// it is in range for the current list is the registry's call.
fn parse_index(rest: &str, action: &'static str) -> Result<usize, ParseError> {
    match rest.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(ParseError::InvalidNumber(action)),
    }
}

fn parse_deadline(rest: &str) -> Result<Command, ParseError> {
    let (description, by) = rest
        .split_once(" /by ")
        .ok_or(ParseError::MissingDeadlineDate)?;
    let by = by.trim();
    if by.is_empty() {
        return Err(ParseError::MissingDeadlineDate);
    }
    Ok(Command::AddDeadline {
        description: description.trim().to_string(),
        by: by.to_string(),
    })
}

fn parse_event(rest: &str) -> Result<Command, ParseError> {
    let (description, dates) = rest
        .split_once(" /from ")
        .ok_or(ParseError::MissingEventDates)?;
    let (from, to) = dates
        .split_once(" /to ")
        .ok_or(ParseError::MissingEventDates)?;
    let from = from.trim();
    let to = to.trim();
    if from.is_empty() || to.is_empty() {
        return Err(ParseError::MissingEventDates);
    }
    Ok(Command::AddEvent {
        description: description.trim().to_string(),
        from: from.to_string(),
        to: to.to_string(),
    })
}
