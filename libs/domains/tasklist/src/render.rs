//! Text and JSON renderings of the derived listings.

use std::fmt::Write as _;

use crate::error::TaskListResult;
use crate::models::{DeadlineView, ProjectView, TaskView};

/// Turns listings into the text returned to a client.
pub trait Renderer: Send + Sync {
    fn render_projects(&self, projects: &[ProjectView]) -> TaskListResult<String>;

    fn render_deadlines(&self, groups: &[DeadlineView]) -> TaskListResult<String>;
}

/// Indented plain text for the console.
///
/// ```text
/// Secrets:
///     [x] 1: Eat more donuts.
///     [ ] 2: Destroy all humans.
///
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleRenderer;

const INDENT: &str = "    ";

impl ConsoleRenderer {
    fn write_project(out: &mut String, project: &ProjectView, depth: usize) {
        let indent = INDENT.repeat(depth);
        let _ = writeln!(out, "{indent}{}:", project.name);
        for task in &project.tasks {
            Self::write_task(out, task, depth + 1);
        }
        out.push('\n');
    }

    fn write_task(out: &mut String, task: &TaskView, depth: usize) {
        let mark = if task.done { 'x' } else { ' ' };
        let _ = writeln!(
            out,
            "{}[{mark}] {}: {}",
            INDENT.repeat(depth),
            task.id,
            task.name
        );
    }
}

impl Renderer for ConsoleRenderer {
    fn render_projects(&self, projects: &[ProjectView]) -> TaskListResult<String> {
        let mut out = String::new();
        for project in projects {
            Self::write_project(&mut out, project, 0);
        }
        Ok(out)
    }

    fn render_deadlines(&self, groups: &[DeadlineView]) -> TaskListResult<String> {
        let mut out = String::new();
        for group in groups {
            let _ = writeln!(out, "{}:", group.label());
            for project in &group.projects {
                Self::write_project(&mut out, project, 1);
            }
        }
        Ok(out)
    }
}

/// JSON arrays of the listing views, for the HTTP API
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render_projects(&self, projects: &[ProjectView]) -> TaskListResult<String> {
        Ok(serde_json::to_string(projects)?)
    }

    fn render_deadlines(&self, groups: &[DeadlineView]) -> TaskListResult<String> {
        Ok(serde_json::to_string(groups)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn task(id: u64, name: &str, done: bool) -> TaskView {
        TaskView {
            id,
            name: name.to_string(),
            done,
            deadline: None,
        }
    }

    fn secrets() -> ProjectView {
        ProjectView {
            id: 1,
            name: "Secrets".into(),
            tasks: vec![
                task(1, "Eat more donuts.", true),
                task(2, "Destroy all humans.", false),
            ],
        }
    }

    #[test]
    fn test_console_projects() {
        let empty = ProjectView {
            id: 2,
            name: "Later".into(),
            tasks: vec![],
        };

        let text = ConsoleRenderer
            .render_projects(&[secrets(), empty])
            .unwrap();

        assert_eq!(
            text,
            "Secrets:\n    [x] 1: Eat more donuts.\n    [ ] 2: Destroy all humans.\n\nLater:\n\n"
        );
    }

    #[test]
    fn test_console_nothing_to_show() {
        assert_eq!(ConsoleRenderer.render_projects(&[]).unwrap(), "");
        assert_eq!(ConsoleRenderer.render_deadlines(&[]).unwrap(), "");
    }

    #[test]
    fn test_console_deadlines() {
        let groups = [
            DeadlineView {
                deadline: NaiveDate::from_ymd_opt(2024, 2, 29),
                projects: vec![secrets()],
            },
            DeadlineView {
                deadline: None,
                projects: vec![ProjectView {
                    id: 3,
                    name: "Training".into(),
                    tasks: vec![task(7, "Outside-In TDD", false)],
                }],
            },
        ];

        let text = ConsoleRenderer.render_deadlines(&groups).unwrap();

        assert_eq!(
            text,
            concat!(
                "29-02-2024:\n",
                "    Secrets:\n",
                "        [x] 1: Eat more donuts.\n",
                "        [ ] 2: Destroy all humans.\n",
                "\n",
                "No deadline:\n",
                "    Training:\n",
                "        [ ] 7: Outside-In TDD\n",
                "\n",
            )
        );
    }

    #[test]
    fn test_json_projects() {
        let text = JsonRenderer.render_projects(&[secrets()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value[0]["name"], "Secrets");
        assert_eq!(value[0]["tasks"][0]["done"], true);
        assert_eq!(value[0]["tasks"][1]["id"], 2);
    }

    #[test]
    fn test_json_deadlines_use_iso_dates() {
        let groups = [DeadlineView {
            deadline: NaiveDate::from_ymd_opt(2024, 2, 29),
            projects: vec![],
        }];

        let text = JsonRenderer.render_deadlines(&groups).unwrap();
        assert_eq!(text, r#"[{"deadline":"2024-02-29","projects":[]}]"#);
    }
}
