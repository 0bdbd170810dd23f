use chrono::NaiveDate;
use domain_tasklist::input::{InputError, parse_deadline, parse_task_id};

/// One line of console input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show,
    Today,
    ViewByDeadline,
    AddProject(String),
    AddTask { project: String, description: String },
    Check(u64),
    Uncheck(u64),
    Deadline { task_id: u64, deadline: NaiveDate },
    Help,
    Quit,
    /// Anything else; holds the text reported back to the user
    Unknown(String),
}

impl Command {
    /// Parse a line. Verbs and sub-commands are case-insensitive; names and
    /// descriptions are kept as typed.
    ///
    /// An unrecognised verb is reported by itself, a known verb with missing
    /// arguments by the whole line.
    pub fn parse(line: &str) -> Result<Self, InputError> {
        let line = line.trim();
        let (verb, rest) = split_word(line);
        let incomplete = || Ok(Command::Unknown(line.to_string()));

        match verb.to_ascii_lowercase().as_str() {
            "show" => Ok(Command::Show),
            "today" => Ok(Command::Today),
            "view-by-deadline" => Ok(Command::ViewByDeadline),
            "help" => Ok(Command::Help),
            "quit" => Ok(Command::Quit),
            "add" => {
                let (kind, rest) = split_word(rest);
                if kind.eq_ignore_ascii_case("project") && !rest.is_empty() {
                    Ok(Command::AddProject(rest.to_string()))
                } else if kind.eq_ignore_ascii_case("task") {
                    match split_word(rest) {
                        (project, description) if !project.is_empty() && !description.is_empty() => {
                            Ok(Command::AddTask {
                                project: project.to_string(),
                                description: description.to_string(),
                            })
                        }
                        _ => incomplete(),
                    }
                } else {
                    incomplete()
                }
            }
            "check" if !rest.is_empty() => Ok(Command::Check(parse_task_id(rest)?)),
            "uncheck" if !rest.is_empty() => Ok(Command::Uncheck(parse_task_id(rest)?)),
            "deadline" => match split_word(rest) {
                (task_id, deadline) if !task_id.is_empty() && !deadline.is_empty() => {
                    Ok(Command::Deadline {
                        task_id: parse_task_id(task_id)?,
                        deadline: parse_deadline(deadline)?,
                    })
                }
                _ => incomplete(),
            },
            "check" | "uncheck" => incomplete(),
            _ => Ok(Command::Unknown(verb.to_string())),
        }
    }
}

/// First space-separated word and the trimmed remainder
fn split_word(text: &str) -> (&str, &str) {
    match text.split_once(' ') {
        Some((word, rest)) => (word, rest.trim()),
        None => (text, ""),
    }
}
