use crate::core::HostNotification;

/// Outbound channel from the widget shell to its embedding host.
///
/// The shell calls this synchronously with every state-affecting event, so
/// the engine stays testable in isolation from any concrete host message
/// channel. Intent mutation and its notification are emitted together;
/// best-effort native animation effects may lag behind but never reorder
/// relative to the notification.
pub trait HostPort {
    fn notify(&mut self, notification: HostNotification);

    /// Asks the host to size the embedding area to `height_px`.
    fn request_frame_height(&mut self, height_px: u32);
}

/// Host port for tests and headless embedding.
///
/// Records everything the shell emits without acting on it.
#[derive(Debug, Default)]
pub struct RecordingHostPort {
    pub notifications: Vec<HostNotification>,
    pub frame_height_requests: Vec<u32>,
}

impl HostPort for RecordingHostPort {
    fn notify(&mut self, notification: HostNotification) {
        self.notifications.push(notification);
    }

    fn request_frame_height(&mut self, height_px: u32) {
        self.frame_height_requests.push(height_px);
    }
}
