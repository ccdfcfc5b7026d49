use std::{
    future::Future,
    path::PathBuf,
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;
use tracing::debug;

use super::{
    RequestKind,
    TaskResult,
};
use crate::{
    core::{
        FlashError,
        Flashcard,
    },
    transport::FlashcardClient,
};

type RepaintCallback = Arc<dyn Fn() + Send + Sync>;

/// Runs requests off the UI thread and queues their results for
/// [`TaskManager::poll_results`]. Requests are independent: nothing is
/// cancelled or serialised.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
    client: FlashcardClient,
    repaint: Option<RepaintCallback>,
    pending: usize,
}

impl TaskManager {
    pub fn new(client: FlashcardClient) -> Result<Self, FlashError> {
        let runtime = Arc::new(Runtime::new()?);

        let (sender, receiver) = mpsc::channel();

        Ok(Self { runtime, receiver, sender, client, repaint: None, pending: 0 })
    }

    /// Called after every result is queued, so an idle UI wakes up.
    pub fn set_repaint_callback(&mut self, callback: impl Fn() + Send + Sync + 'static) {
        self.repaint = Some(Arc::new(callback));
    }

    pub fn client(&self) -> &FlashcardClient {
        &self.client
    }

    /// Requests sent whose results have not been polled yet.
    pub fn pending(&self) -> usize {
        self.pending
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }
        self.pending = self.pending.saturating_sub(results.len());

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>, Option<RepaintCallback>) {
        (self.sender.clone(), self.runtime.clone(), self.repaint.clone())
    }

    fn spawn_request<F, Fut>(&mut self, kind: RequestKind, request: F)
    where
        F: FnOnce(FlashcardClient) -> Fut + Send + 'static,
        Fut: Future<Output = Result<Vec<Flashcard>, FlashError>>,
    {
        let (sender, runtime, repaint) = self.task_context();
        let client = self.client.clone();
        self.pending += 1;

        debug!(kind = kind.label(), "Spawning request");

        thread::spawn(move || {
            let result = runtime.block_on(request(client));

            let _ = sender.send(TaskResult::Flashcards { kind, result });
            if let Some(repaint) = repaint {
                repaint();
            }
        });
    }

    pub fn upload_file(&mut self, path: PathBuf) {
        self.spawn_request(RequestKind::Upload, move |client| async move {
            client.submit_file(&path).await
        });
    }

    pub fn submit_text(&mut self, text: String) {
        self.spawn_request(RequestKind::Text, move |client| async move {
            client.submit_text(&text).await
        });
    }

    pub fn load_saved(&mut self) {
        self.spawn_request(RequestKind::Saved, |client| async move { client.fetch_saved().await });
    }

    #[cfg(test)]
    fn wait_for_result(&mut self, timeout: std::time::Duration) -> Option<TaskResult> {
        let result = self.receiver.recv_timeout(timeout).ok()?;
        self.pending = self.pending.saturating_sub(1);
        Some(result)
    }
}
