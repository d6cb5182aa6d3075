//! Agenda building: admission, ordering, and date bucketing

use crate::config::{AgendaConfig, BucketBoundary};
use crate::task::Task;
use chrono::{Duration, NaiveDateTime, NaiveTime};

/// One day of the agenda
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayBucket {
    /// Instant the bucket starts at; its heading is rendered from this
    pub start: NaiveDateTime,
    pub tasks: Vec<Task>,
}

impl DayBucket {
    pub fn end(&self) -> NaiveDateTime {
        self.start + Duration::days(1)
    }
}

/// Grouped agenda ready for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agenda {
    pub past_due: Vec<Task>,
    pub days: Vec<DayBucket>,
}

/// Keep only incomplete tasks that have a due date
pub fn apply_admission_filter(tasks: &mut Vec<Task>) {
    tasks.retain(Task::is_agenda_candidate);
}

/// Sort tasks by due date, keeping the input order for equal dates
pub fn sort_by_due_date(tasks: &mut [Task]) {
    tasks.sort_by_key(Task::due_date);
}

fn window_start(now: NaiveDateTime, boundary: BucketBoundary) -> NaiveDateTime {
    match boundary {
        BucketBoundary::Rolling => now,
        BucketBoundary::Midnight => now.date().and_time(NaiveTime::MIN),
    }
}

fn in_bucket(due: NaiveDateTime, start: NaiveDateTime, boundary: BucketBoundary) -> bool {
    let end = start + Duration::days(1);
    match boundary {
        BucketBoundary::Rolling => due > start && due < end,
        BucketBoundary::Midnight => due >= start && due < end,
    }
}

/// Build the agenda from every parsed task
///
/// # Arguments
/// * `tasks` - All tasks in file-then-line order
/// * `now` - Current local wall-clock time
/// * `config` - Bucket count and boundary mode
///
/// # Description
/// Tasks are admitted, stably sorted by due date, and then matched against
/// the past-due bucket and each daily bucket independently. With rolling
/// boundaries a task due exactly at `now` matches no bucket.
pub fn build_agenda(mut tasks: Vec<Task>, now: NaiveDateTime, config: &AgendaConfig) -> Agenda {
    apply_admission_filter(&mut tasks);
    sort_by_due_date(&mut tasks);

    let start = window_start(now, config.boundary);

    let past_due = tasks
        .iter()
        .filter(|task| task.due_date().is_some_and(|due| due < start))
        .cloned()
        .collect();

    let days = (0..i64::from(config.days))
        .map(|offset| {
            let bucket_start = start + Duration::days(offset);
            let tasks = tasks
                .iter()
                .filter(|task| {
                    task.due_date()
                        .is_some_and(|due| in_bucket(due, bucket_start, config.boundary))
                })
                .cloned()
                .collect();
            DayBucket {
                start: bucket_start,
                tasks,
            }
        })
        .collect();

    Agenda { past_due, days }
}

impl Agenda {
    /// Number of tasks placed in any bucket
    pub fn task_count(&self) -> usize {
        self.past_due.len() + self.days.iter().map(|day| day.tasks.len()).sum::<usize>()
    }
}
