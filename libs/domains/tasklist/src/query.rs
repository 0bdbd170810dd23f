//! Read-only listings derived from a [`Snapshot`].

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::models::{DeadlineView, NO_DEADLINE, Project, ProjectView, Snapshot, Task, TaskView};

/// Projects in creation order, each with its tasks sorted by ID.
///
/// Without a filter every project is listed, empty ones included. With a
/// filter, projects left without a matching task are omitted.
pub fn by_project(
    snapshot: &Snapshot,
    filter: Option<&dyn Fn(&Task) -> bool>,
) -> Vec<ProjectView> {
    projects_in_order(snapshot)
        .into_iter()
        .filter_map(|project| {
            let tasks: Vec<TaskView> = tasks_of(snapshot, project)
                .filter(|task| filter.is_none_or(|keep| keep(*task)))
                .map(TaskView::from)
                .collect();

            if filter.is_some() && tasks.is_empty() {
                return None;
            }

            Some(ProjectView {
                id: project.id,
                name: project.name.clone(),
                tasks,
            })
        })
        .collect()
}

/// Tasks whose deadline is exactly `date`, grouped by project
pub fn due_on(snapshot: &Snapshot, date: NaiveDate) -> Vec<ProjectView> {
    by_project(snapshot, Some(&|task: &Task| task.deadline == date))
}

/// Tasks grouped by deadline ascending, then by project, then by ID.
/// Tasks without a deadline form the last group.
pub fn by_deadline(snapshot: &Snapshot) -> Vec<DeadlineView> {
    let mut groups: BTreeMap<NaiveDate, Vec<ProjectView>> = BTreeMap::new();

    for project in projects_in_order(snapshot) {
        let mut per_deadline: BTreeMap<NaiveDate, Vec<TaskView>> = BTreeMap::new();
        for task in tasks_of(snapshot, project) {
            per_deadline
                .entry(task.deadline)
                .or_default()
                .push(TaskView::from(task));
        }

        for (deadline, tasks) in per_deadline {
            groups.entry(deadline).or_default().push(ProjectView {
                id: project.id,
                name: project.name.clone(),
                tasks,
            });
        }
    }

    groups
        .into_iter()
        .map(|(deadline, projects)| DeadlineView {
            deadline: (deadline != NO_DEADLINE).then_some(deadline),
            projects,
        })
        .collect()
}

fn projects_in_order(snapshot: &Snapshot) -> Vec<&Project> {
    let mut projects: Vec<&Project> = snapshot.projects.values().collect();
    projects.sort_by_key(|project| project.id);
    projects
}

fn tasks_of<'a>(snapshot: &'a Snapshot, project: &'a Project) -> impl Iterator<Item = &'a Task> {
    let mut ids = project.task_ids.clone();
    ids.sort_unstable();
    ids.into_iter().filter_map(|id| snapshot.tasks.get(&id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Projects are inserted out of ID order to make ordering observable.
    fn sample() -> Snapshot {
        let mut snapshot = Snapshot::default();
        let specs = [
            (2, "Zeta", vec![(3, Some(date(2024, 1, 2))), (1, None)]),
            (1, "Alpha", vec![(2, Some(date(2024, 1, 2))), (4, Some(date(2023, 12, 31)))]),
            (3, "Empty", vec![]),
        ];

        for (project_id, name, tasks) in specs {
            let mut project = Project::new(project_id, name.to_string());
            for (task_id, deadline) in tasks {
                let mut task = Task::new(task_id, format!("task {task_id}"), name.to_string());
                task.deadline = deadline.unwrap_or(NO_DEADLINE);
                project.task_ids.push(task_id);
                snapshot.tasks.insert(task_id, task);
            }
            snapshot.projects.insert(name.to_string(), project);
        }
        snapshot
    }

    fn ids(view: &ProjectView) -> Vec<u64> {
        view.tasks.iter().map(|task| task.id).collect()
    }

    #[test]
    fn test_by_project_orders_by_id_and_keeps_empty_projects() {
        let views = by_project(&sample(), None);

        let names: Vec<_> = views.iter().map(|view| view.name.as_str()).collect();
        assert_eq!(names, ["Alpha", "Zeta", "Empty"]);
        assert_eq!(ids(&views[0]), [2, 4]);
        assert_eq!(ids(&views[1]), [1, 3]);
        assert!(views[2].tasks.is_empty());
    }

    #[test]
    fn test_due_on_drops_projects_without_matches() {
        let views = due_on(&sample(), date(2023, 12, 31));

        assert_eq!(views.len(), 1);
        assert_eq!(views[0].name, "Alpha");
        assert_eq!(ids(&views[0]), [4]);
    }

    #[test]
    fn test_due_on_with_no_matches_is_empty() {
        assert!(due_on(&sample(), date(2030, 1, 1)).is_empty());
    }

    #[test]
    fn test_by_deadline_groups_ascending_with_undated_last() {
        let groups = by_deadline(&sample());

        let labels: Vec<_> = groups.iter().map(DeadlineView::label).collect();
        assert_eq!(labels, ["31-12-2023", "02-01-2024", "No deadline"]);

        let shared = &groups[1];
        let names: Vec<_> = shared.projects.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Alpha", "Zeta"]);
        assert_eq!(ids(&shared.projects[0]), [2]);
        assert_eq!(ids(&shared.projects[1]), [3]);

        assert_eq!(groups[2].deadline, None);
        assert_eq!(ids(&groups[2].projects[0]), [1]);
    }

    #[test]
    fn test_by_deadline_on_empty_snapshot() {
        assert!(by_deadline(&Snapshot::default()).is_empty());
    }
}
