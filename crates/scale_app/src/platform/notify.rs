use std::io::Write;

use scale_core::{CommitOutcome, OutcomeKind};
use scale_logging::{scale_error, scale_info, scale_warn};

/// Presents a commit outcome to the operator, once per commit action.
pub trait NotificationSink {
    fn present(&mut self, outcome: &CommitOutcome);
}

/// Rings the terminal bell on anything but success and records the outcome
/// in the log. The dashboard itself shows the message until dismissed.
pub struct TerminalNotifier<W: Write> {
    out: W,
}

impl<W: Write> TerminalNotifier<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> NotificationSink for TerminalNotifier<W> {
    fn present(&mut self, outcome: &CommitOutcome) {
        match outcome.kind() {
            OutcomeKind::Success => scale_info!("Commit succeeded: {}", outcome.message()),
            OutcomeKind::Warning => scale_warn!("Commit refused: {}", outcome.message()),
            OutcomeKind::Error => scale_error!("Commit failed: {}", outcome.message()),
        }
        if outcome.kind() != OutcomeKind::Success {
            let _ = self.out.write_all(b"\x07");
            let _ = self.out.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bell_only_for_non_success() {
        let mut notifier = TerminalNotifier::new(Vec::new());
        notifier.present(&CommitOutcome::Success("ok".into()));
        assert!(notifier.out.is_empty());

        notifier.present(&CommitOutcome::Warning("not ready".into()));
        notifier.present(&CommitOutcome::Error("down".into()));
        assert_eq!(notifier.into_inner(), b"\x07\x07".to_vec());
    }
}
