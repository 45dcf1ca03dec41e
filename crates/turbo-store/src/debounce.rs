//! Debouncing of typed search queries.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};
use turbo_commerce::search::normalize_query;

/// Emits a query once input has been quiet for `window`, skipping a query
/// identical to the one emitted before it.
///
/// Queries are compared after normalisation (trimmed, inner whitespace
/// collapsed).
#[derive(Debug, Clone)]
pub struct QueryDebouncer {
    window: Duration,
    pending: Option<(String, Instant)>,
    last_emitted: Option<String>,
}

impl QueryDebouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
            last_emitted: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Record new input; restarts the quiet period.
    pub fn push(&mut self, raw: &str, now: Instant) {
        self.pending = Some((normalize_query(raw), now + self.window));
    }

    /// When the pending query settles, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    /// The settled query, once its quiet period has passed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match self.deadline() {
            Some(deadline) if now >= deadline => self.flush(),
            _ => None,
        }
    }

    /// Settle the pending query immediately (input closed).
    pub fn flush(&mut self) -> Option<String> {
        let (query, _) = self.pending.take()?;
        if self.last_emitted.as_deref() == Some(query.as_str()) {
            tracing::trace!(query = %query, "duplicate query suppressed");
            return None;
        }
        self.last_emitted = Some(query.clone());
        Some(query)
    }
}

/// Forward debounced queries from `input` to `output` until `input` closes
/// or `output` is dropped. Pending input is flushed when `input` closes.
pub async fn debounce_queries(
    mut input: mpsc::Receiver<String>,
    output: mpsc::Sender<String>,
    window: Duration,
) {
    let mut debouncer = QueryDebouncer::new(window);

    loop {
        let deadline = debouncer.deadline();
        tokio::select! {
            received = input.recv() => match received {
                Some(raw) => debouncer.push(&raw, Instant::now()),
                None => {
                    if let Some(query) = debouncer.flush() {
                        let _ = output.send(query).await;
                    }
                    break;
                }
            },
            _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                if let Some(query) = debouncer.poll(Instant::now()) {
                    if output.send(query).await.is_err() {
                        break;
                    }
                }
            }
        }
    }
    tracing::debug!("query debouncer stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    const WINDOW: Duration = Duration::from_millis(300);

    #[tokio::test(start_paused = true)]
    async fn test_emits_after_quiet_period() {
        let mut debouncer = QueryDebouncer::new(WINDOW);
        let start = Instant::now();

        debouncer.push("lap", start);
        debouncer.push("laptop", start + Duration::from_millis(100));

        assert_eq!(debouncer.poll(start + Duration::from_millis(300)), None);
        assert_eq!(
            debouncer.poll(start + Duration::from_millis(400)).as_deref(),
            Some("laptop")
        );
        assert_eq!(debouncer.deadline(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_suppresses_identical_normalised_query() {
        let mut debouncer = QueryDebouncer::new(WINDOW);
        let start = Instant::now();

        debouncer.push("gaming  laptop", start);
        assert_eq!(debouncer.flush().as_deref(), Some("gaming laptop"));

        debouncer.push(" gaming laptop ", start);
        assert_eq!(debouncer.poll(start + WINDOW), None);

        debouncer.push("phone", start);
        assert_eq!(debouncer.flush().as_deref(), Some("phone"));

        debouncer.push("gaming laptop", start);
        assert_eq!(debouncer.flush().as_deref(), Some("gaming laptop"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_task_forwards_settled_queries() {
        let (tx, rx) = mpsc::channel(8);
        let (out_tx, mut out_rx) = mpsc::channel(8);
        let task = tokio::spawn(debounce_queries(rx, out_tx, WINDOW));

        tx.send("l".to_string()).await.unwrap();
        sleep(Duration::from_millis(100)).await;
        tx.send("lap".to_string()).await.unwrap();
        sleep(Duration::from_millis(100)).await;
        tx.send("laptop".to_string()).await.unwrap();

        let typed_at = Instant::now();
        assert_eq!(out_rx.recv().await.as_deref(), Some("laptop"));
        assert!(typed_at.elapsed() >= WINDOW);

        tx.send(" laptop ".to_string()).await.unwrap();
        sleep(Duration::from_millis(400)).await;
        tx.send("phone".to_string()).await.unwrap();
        drop(tx);

        assert_eq!(out_rx.recv().await.as_deref(), Some("phone"));
        assert_eq!(out_rx.recv().await, None);
        task.await.unwrap();
    }
}
