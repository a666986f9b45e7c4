use std::io::{self, Write};

use notify_rust::Notification;
use segcam_core::platform::RecordingView;
use tracing::{debug, warn};

const APP_NAME: &str = "segcam";

/// Renders the button caption and elapsed time on one terminal status line
/// and raises notices as desktop notifications.
#[derive(Default)]
pub(crate) struct TerminalView {
    button_label: String,
    timer_text: String,
}

impl TerminalView {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// The status line as currently rendered.
    pub(crate) fn status_line(&self) -> String {
        format!("[{}]  {}", self.button_label, self.timer_text)
    }

    fn render(&self) {
        let mut stdout = io::stdout().lock();
        // Trailing spaces clear leftovers from a longer previous line.
        if let Err(e) = write!(stdout, "\r{:<48}", self.status_line()).and_then(|()| stdout.flush())
        {
            debug!(error = ?e, "Failed to render status line");
        }
    }
}

impl RecordingView for TerminalView {
    fn set_button_label(&mut self, label: &str) {
        self.button_label = label.to_string();
        self.render();
    }

    fn set_timer_text(&mut self, text: &str) {
        self.timer_text = text.to_string();
        self.render();
    }

    fn show_notice(&mut self, message: &str) {
        let shown = Notification::new()
            .appname(APP_NAME)
            .summary(APP_NAME)
            .body(message)
            .show();

        match shown {
            Ok(_) => debug!(message, "Notice shown"),
            Err(e) => warn!(message, error = ?e, "Notice could not be shown on the desktop"),
        }
    }
}
