use std::io::{IsTerminal, Write};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FRAME_INTERVAL_MS: u64 = 150;

pub struct AnimatedLogger {
    message: String,
    stop_sender: Option<oneshot::Sender<()>>,
    task_handle: Option<JoinHandle<()>>,
}

impl AnimatedLogger {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stop_sender: None,
            task_handle: None,
        }
    }

    pub fn start(&mut self) {
        // Piped stderr gets no animation.
        if !std::io::stderr().is_terminal() {
            return;
        }

        let (stop_tx, mut stop_rx) = oneshot::channel();
        let message = self.message.clone();

        let handle = tokio::spawn(async move {
            let mut frame = 0;
            let mut interval = tokio::time::interval(tokio::time::Duration::from_millis(FRAME_INTERVAL_MS));

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        eprint!("\r{} {} ", message, FRAMES[frame]);
                        let _ = std::io::stderr().flush();
                        frame = (frame + 1) % FRAMES.len();
                    }
                    _ = &mut stop_rx => break,
                }
            }
        });

        self.stop_sender = Some(stop_tx);
        self.task_handle = Some(handle);
    }

    pub async fn stop(&mut self, final_message: &str) {
        self.finish("✅", final_message).await;
    }

    pub async fn error(&mut self, error_message: &str) {
        self.finish("❌", error_message).await;
    }

    async fn finish(&mut self, marker: &str, message: &str) {
        let was_running = self.stop_sender.is_some();

        if let Some(sender) = self.stop_sender.take() {
            let _ = sender.send(());
        }
        if let Some(handle) = self.task_handle.take() {
            let _ = handle.await;
        }

        if was_running {
            eprint!("\r\x1b[K{} {}\n", marker, message);
            let _ = std::io::stderr().flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finishing_an_unstarted_spinner_is_a_no_op() {
        tokio_test::block_on(async {
            let mut logger = AnimatedLogger::new("🔍 Analyzing");
            logger.stop("done").await;
            logger.error("failed").await;
            assert!(logger.stop_sender.is_none());
            assert!(logger.task_handle.is_none());
        });
    }

    #[tokio::test]
    async fn started_spinner_stops_cleanly() {
        let mut logger = AnimatedLogger::new("🔍 Analyzing");
        logger.start();
        tokio::time::sleep(tokio::time::Duration::from_millis(20)).await;
        logger.stop("done").await;
        assert!(logger.task_handle.is_none());
    }
}
