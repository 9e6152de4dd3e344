//! Background job plumbing for the controller.
//!
//! Jobs run on plain threads and report back over one mpsc channel the
//! controller drains every frame.

use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};
use std::thread;

use crate::analysis::{AnalysisError, AnalysisGateway, AnalysisReport};

pub(crate) enum JobMessage {
    AnalysisFinished(AnalysisJobResult),
}

pub(crate) struct AnalysisJobResult {
    pub(crate) result: Result<AnalysisReport, AnalysisError>,
}

pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    pub(super) analysis_in_progress: bool,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = channel();
        Self {
            message_tx,
            message_rx,
            analysis_in_progress: false,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    /// Run one analysis on a worker thread. A second request while one is in
    /// flight is dropped; the UI disables the button as well.
    pub(super) fn spawn_analysis(
        &mut self,
        gateway: AnalysisGateway,
        api_key: String,
        document: String,
    ) {
        if self.analysis_in_progress {
            return;
        }
        self.analysis_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = gateway.analyze(&api_key, &document);
            let _ = tx.send(JobMessage::AnalysisFinished(AnalysisJobResult { result }));
        });
    }

    pub(super) fn clear_analysis(&mut self) {
        self.analysis_in_progress = false;
    }
}
