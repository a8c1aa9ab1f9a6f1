use std::future::Future;
use std::io;

use tokio::task::{JoinError, JoinHandle};
use wordforge_generate::CancelToken;

/// How waiting on the generation worker ended.
#[derive(Debug, PartialEq, Eq)]
pub enum Supervised<T> {
    Finished(T),
    /// A second interrupt arrived before the worker stopped.
    Abandoned,
}

/// Wait for `worker`, turning the first interrupt into a cancellation.
///
/// A worker stuck in a blocking write never sees the token, so a second
/// interrupt stops waiting and returns [`Supervised::Abandoned`]. If the
/// interrupt source fails to install, the worker is awaited to completion.
pub async fn supervise<T, F, Fut>(
    mut worker: JoinHandle<T>,
    cancel: &CancelToken,
    mut interrupt: F,
) -> Result<Supervised<T>, JoinError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = io::Result<()>>,
{
    tokio::select! {
        joined = &mut worker => return joined.map(Supervised::Finished),
        signal = interrupt() => {
            if let Err(err) = signal {
                tracing::warn!(
                    event = "signal_unavailable",
                    error = %err,
                    "ctrl-c handler not installed"
                );
                return worker.await.map(Supervised::Finished);
            }
        }
    }

    tracing::warn!(event = "interrupt_received", "cancelling generation");
    cancel.cancel();

    tokio::select! {
        joined = &mut worker => joined.map(Supervised::Finished),
        Ok(()) = interrupt() => {
            tracing::warn!(event = "forced_exit", "second interrupt, abandoning worker");
            Ok(Supervised::Abandoned)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn spawn_until_cancelled(cancel: CancelToken) -> JoinHandle<u32> {
        tokio::task::spawn_blocking(move || {
            let mut polls = 0;
            while !cancel.is_cancelled() {
                polls += 1;
                std::thread::sleep(Duration::from_millis(1));
            }
            polls
        })
    }

    #[tokio::test]
    async fn finished_worker_needs_no_interrupt() {
        let cancel = CancelToken::new();
        let worker = tokio::task::spawn_blocking(|| 7);
        let outcome = supervise(worker, &cancel, std::future::pending::<io::Result<()>>)
            .await
            .expect("join");
        assert_eq!(outcome, Supervised::Finished(7));
        assert!(!cancel.is_cancelled());
    }

    #[tokio::test]
    async fn first_interrupt_cancels_and_waits() {
        let cancel = CancelToken::new();
        let worker = spawn_until_cancelled(cancel.clone());
        let mut fired = false;
        let interrupt = || {
            let first = !fired;
            fired = true;
            async move {
                if first {
                    Ok(())
                } else {
                    std::future::pending().await
                }
            }
        };

        let outcome = supervise(worker, &cancel, interrupt).await.expect("join");
        assert!(cancel.is_cancelled());
        assert!(matches!(outcome, Supervised::Finished(_)));
    }

    #[tokio::test]
    async fn second_interrupt_abandons_stuck_worker() {
        let cancel = CancelToken::new();
        // Ignores the token, like a writer blocked on a stalled pipe.
        let worker = tokio::task::spawn_blocking(|| {
            std::thread::sleep(Duration::from_millis(200));
        });
        let interrupt = || async { Ok(()) };

        let outcome = supervise(worker, &cancel, interrupt).await.expect("join");
        assert_eq!(outcome, Supervised::Abandoned);
        assert!(cancel.is_cancelled());
    }

    #[tokio::test]
    async fn failed_handler_waits_for_worker() {
        let cancel = CancelToken::new();
        let worker = tokio::task::spawn_blocking(|| {
            std::thread::sleep(Duration::from_millis(20));
            "done"
        });
        let interrupt = || async { Err(io::Error::other("no signal support")) };

        let outcome = supervise(worker, &cancel, interrupt).await.expect("join");
        assert_eq!(outcome, Supervised::Finished("done"));
        assert!(!cancel.is_cancelled());
    }
}
