//! Display of the time spent on a task while its timer may be running

use officehub_shared::resources::Task;
use officehub_time::{Seconds, TimestampMillis};

/// The server owns the timer, this only extrapolates from what it reported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskTimer {
    total_time_spent: Seconds,
    is_running: bool,
    started_at: Option<TimestampMillis>,
    total_time_formatted: Option<String>,
}

impl TaskTimer {
    pub fn new(
        total_time_spent: Seconds,
        is_running: bool,
        started_at: Option<TimestampMillis>,
        total_time_formatted: Option<String>,
    ) -> Self {
        Self {
            total_time_spent,
            is_running,
            started_at,
            total_time_formatted,
        }
    }

    pub fn is_running(&self) -> bool {
        self.is_running && self.started_at.is_some()
    }

    /// `total_time_spent + floor((now - started_at) / 1s)` while running
    pub fn elapsed_at(&self, now: TimestampMillis) -> Seconds {
        match (self.is_running, self.started_at) {
            (true, Some(started_at)) => {
                self.total_time_spent + now.whole_seconds_since(started_at)
            }
            _ => self.total_time_spent,
        }
    }

    /// `HH:MM:SS` while running, otherwise the value the server formatted
    pub fn display_at(&self, now: TimestampMillis) -> String {
        if self.is_running() {
            return self.elapsed_at(now).display_hh_mm_ss();
        }
        match self.total_time_formatted.as_ref() {
            Some(formatted) if !formatted.is_empty() => formatted.clone(),
            _ => self.total_time_spent.display_hh_mm_ss(),
        }
    }

    /// True if the time shown for any of `tasks` changes as the clock moves
    pub fn any_running(tasks: &[Task]) -> bool {
        tasks.iter().any(|task| Self::from(task).is_running())
    }
}

impl From<&Task> for TaskTimer {
    fn from(task: &Task) -> Self {
        Self::new(
            Seconds::new(task.total_time_spent),
            task.is_timer_running,
            task.timer_started_at.map(TimestampMillis::from),
            task.total_time_spent_formatted.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const NOW: TimestampMillis = TimestampMillis::from_millis(1_715_000_000_250);

    fn running_since_5s() -> TaskTimer {
        TaskTimer::new(
            Seconds::new(120),
            true,
            Some(NOW - Seconds::new(5)),
            Some("00:02:00".into()),
        )
    }

    #[test]
    fn running_starts_from_total_plus_elapsed() {
        assert_eq!(running_since_5s().display_at(NOW), "00:02:05");
    }

    #[test]
    fn running_increases_once_per_second_and_never_decreases() {
        // Arrange
        let timer = running_since_5s();
        let mut previous = timer.elapsed_at(NOW);

        // Act / Assert
        for tick in 1..=120u64 {
            let now = NOW + Seconds::new(tick);
            let actual = timer.elapsed_at(now);
            assert_eq!(actual, Seconds::new(125 + tick));
            assert!(actual >= previous);
            previous = actual;
        }
        assert_eq!(timer.display_at(NOW + Seconds::new(1)), "00:02:06");
    }

    #[test]
    fn sub_second_progress_does_not_round_up() {
        let timer = running_since_5s();
        let now = TimestampMillis::from_millis(NOW.as_millis() + 999);
        assert_eq!(timer.display_at(now), "00:02:05");
    }

    #[test]
    fn start_in_the_future_shows_total() {
        let timer = TaskTimer::new(
            Seconds::new(120),
            true,
            Some(NOW + Seconds::new(3)),
            None,
        );
        assert_eq!(timer.display_at(NOW), "00:02:00");
    }

    #[rstest]
    #[case::server_formatted(Some("2h 0m".to_string()), "2h 0m")]
    #[case::not_formatted(None, "02:00:00")]
    #[case::empty_formatted(Some(String::new()), "02:00:00")]
    fn stopped_shows_stored_value(#[case] formatted: Option<String>, #[case] expected: &str) {
        // Arrange
        let timer = TaskTimer::new(Seconds::new(7200), false, Some(NOW), formatted);

        // Act
        let actual = timer.display_at(NOW + Seconds::new(30));

        // Assert
        assert_eq!(actual, expected);
    }

    #[rstest]
    #[case::none_running(r#"[{"id":1,"title":"a","status":"PENDING"},{"id":2,"title":"b","status":"PENDING"}]"#, false)]
    #[case::one_running(
        r#"[{"id":1,"title":"a","status":"PENDING"},
            {"id":2,"title":"b","status":"IN_PROGRESS","is_timer_running":true,"timer_started_at":"2024-05-06T12:53:15Z"}]"#,
        true
    )]
    #[case::flag_without_start(r#"[{"id":1,"title":"a","status":"PENDING","is_timer_running":true}]"#, false)]
    #[case::empty("[]", false)]
    fn any_running(#[case] json: &str, #[case] expected: bool) {
        // Arrange
        let tasks: Vec<Task> = serde_json::from_str(json).unwrap();

        // Act
        let actual = TaskTimer::any_running(&tasks);

        // Assert
        assert_eq!(actual, expected);
    }

    #[test]
    fn from_task() {
        // Arrange
        let task: Task = serde_json::from_str(
            r#"{"id":1,"title":"Payroll","status":"IN_PROGRESS","total_time_spent":120,
                "is_timer_running":true,"timer_started_at":"2024-05-06T12:53:15.250Z"}"#,
        )
        .unwrap();
        let started = TimestampMillis::from(
            chrono::DateTime::parse_from_rfc3339("2024-05-06T12:53:15.250Z").unwrap(),
        );

        // Act
        let timer = TaskTimer::from(&task);

        // Assert
        assert!(timer.is_running());
        assert_eq!(
            timer.display_at(started + Seconds::new(5)),
            "00:02:05"
        );
    }
}
