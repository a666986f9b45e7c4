/// The recording screen widgets: one toggle button, one elapsed-time label
/// and a transient notice.
pub trait RecordingView: Send {
    /// Update the toggle button caption.
    fn set_button_label(&mut self, label: &str);

    /// Update the elapsed-time label.
    fn set_timer_text(&mut self, text: &str);

    /// Show a short-lived message to the user.
    fn show_notice(&mut self, message: &str);
}
