use tokio::sync::mpsc;

/// How a notice should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// A single user-facing message. Controllers publish exactly one per surfaced
/// success or failure; the presentation layer drains the receiving end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

/// Sending half handed to the controllers.
#[derive(Debug, Clone)]
pub struct NoticeSender {
    tx: mpsc::UnboundedSender<Notice>,
}

impl NoticeSender {
    pub fn info(&self, message: impl Into<String>) {
        self.send(Severity::Info, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.send(Severity::Error, message.into());
    }

    fn send(&self, severity: Severity, message: String) {
        // a dropped receiver just means nobody is listening anymore
        let _ = self.tx.send(Notice { severity, message });
    }
}

/// Create the notification channel shared by the controllers and the
/// presentation layer.
pub fn notice_channel() -> (NoticeSender, mpsc::UnboundedReceiver<Notice>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (NoticeSender { tx }, rx)
}
