use super::DashboardController;
use super::jobs::JobMessage;

impl DashboardController {
    /// Drain finished background jobs. Called once per frame.
    pub fn poll_background_jobs(&mut self) {
        loop {
            let message = match self.jobs.try_recv_message() {
                Ok(message) => message,
                Err(
                    std::sync::mpsc::TryRecvError::Empty
                    | std::sync::mpsc::TryRecvError::Disconnected,
                ) => break,
            };

            match message {
                JobMessage::AnalysisFinished(message) => {
                    self.jobs.clear_analysis();
                    self.apply_analysis_result(message.result);
                }
            }
        }
    }
}
