//! Job Runner Module
//!
//! Spawns the periodic maintenance jobs. Each job sleeps for its
//! interval, runs one pass, appends the pass's lines to its log file
//! and goes back to sleep. A failing pass writes an error line and is
//! otherwise swallowed, so one bad pass never stops the schedule.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::api::AppState;
use crate::tasks::log::JobLog;

// == Job Spec ==
/// Schedule and logging wiring for one periodic job.
#[derive(Debug, Clone)]
pub struct JobSpec {
    /// Name used in tracing output
    pub name: &'static str,
    /// Time between passes; the first pass runs after one interval
    pub interval: Duration,
    /// Log file the job appends to
    pub log: JobLog,
    /// Prefix for the error line written when a pass fails
    pub error_label: &'static str,
}

// == Spawn Job ==
/// Spawns a periodic job that runs `body` every `spec.interval`.
///
/// The returned handle can be used to abort the job during graceful
/// shutdown. Pass failures and log-write failures are reported through
/// tracing and the job's own log file; neither ends the loop.
pub fn spawn_job<F, Fut>(spec: JobSpec, state: AppState, body: F) -> JoinHandle<()>
where
    F: Fn(AppState) -> Fut + Send + 'static,
    Fut: Future<Output = anyhow::Result<Vec<String>>> + Send + 'static,
{
    tokio::spawn(async move {
        info!(
            job = spec.name,
            interval_secs = spec.interval.as_secs(),
            log = %spec.log.path().display(),
            "starting periodic job"
        );

        loop {
            tokio::time::sleep(spec.interval).await;

            match body(state.clone()).await {
                Ok(lines) => {
                    if let Err(err) = spec.log.append_all(&lines) {
                        warn!(job = spec.name, "failed to write job log: {err:#}");
                    } else if lines.is_empty() {
                        debug!(job = spec.name, "pass produced no output");
                    } else {
                        info!(job = spec.name, lines = lines.len(), "pass logged");
                    }
                }
                Err(err) => {
                    warn!(job = spec.name, "pass failed: {err:#}");
                    let line = format!("{}: {}", spec.error_label, err);
                    if let Err(log_err) = spec.log.append(&line) {
                        warn!(job = spec.name, "failed to write error line: {log_err:#}");
                    }
                }
            }
        }
    })
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::AppState;
    use crate::cache::{QueryCache, SystemClock};
    use crate::crm::CrmStore;
    use crate::properties::MemoryProperties;
    use anyhow::anyhow;
    use std::sync::Arc;

    fn test_state() -> AppState {
        AppState::new(
            Arc::new(CrmStore::new()),
            Arc::new(MemoryProperties::new()),
            QueryCache::new(Arc::new(SystemClock)),
            Duration::from_secs(3600),
        )
    }

    fn spec(log: JobLog) -> JobSpec {
        JobSpec {
            name: "test_job",
            interval: Duration::from_millis(10),
            log,
            error_label: "Error running test job",
        }
    }

    #[tokio::test]
    async fn test_job_appends_output_every_pass() {
        let dir = tempfile::tempdir().unwrap();
        let log = JobLog::compact(dir.path().join("job.txt"));
        let path = log.path().to_path_buf();

        let handle = spawn_job(spec(log), test_state(), |_state| async {
            Ok(vec!["pass done".to_string()])
        });

        tokio::time::sleep(Duration::from_millis(100)).await;
        handle.abort();

        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.lines().count() >= 2, "expected multiple passes");
        assert!(content.lines().all(|l| l.ends_with(" pass done")));
    }

    #[tokio::test]
    async fn test_failing_pass_writes_error_line_and_continues() {
        let dir = tempfile::tempdir().unwrap();
        let log = JobLog::compact(dir.path().join("job.txt"));
        let path = log.path().to_path_buf();

        let handle = spawn_job(spec(log), test_state(), |_state| async {
            Err(anyhow!("store unreachable"))
        });

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(!handle.is_finished(), "job must survive failing passes");
        handle.abort();

        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("Error running test job: store unreachable"));
        assert!(content.lines().count() >= 2);
    }

    #[tokio::test]
    async fn test_job_can_be_aborted() {
        let dir = tempfile::tempdir().unwrap();
        let log = JobLog::compact(dir.path().join("job.txt"));

        let handle = spawn_job(spec(log), test_state(), |_state| async { Ok(Vec::new()) });

        handle.abort();
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(handle.is_finished(), "task should be finished after abort");
    }

    #[tokio::test]
    async fn test_first_pass_waits_one_interval() {
        let dir = tempfile::tempdir().unwrap();
        let log = JobLog::compact(dir.path().join("job.txt"));
        let path = log.path().to_path_buf();

        let mut spec = spec(log);
        spec.interval = Duration::from_secs(3600);
        let handle = spawn_job(spec, test_state(), |_state| async {
            Ok(vec!["too early".to_string()])
        });

        tokio::time::sleep(Duration::from_millis(50)).await;
        handle.abort();

        assert!(!path.exists(), "no pass should run before the interval");
    }
}
