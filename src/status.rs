//! Status feedback for scenario commands.
//!
//! The control panel shows the outcome of a scenario parameter as a status
//! label. [`StatusSink`] is the seam between response dispatch and whatever
//! renders that label; [`StatusLine`] is the plain-text rendition used by
//! the CLI.

/// Receives scenario-parameter outcomes from response dispatch.
pub trait StatusSink {
    /// Called with the success flag of a scenario-parameter response.
    fn scenario_param_status(&mut self, success: bool);
}

/// Plain-text status label tracking the most recent outcome.
#[derive(Debug, Default)]
pub struct StatusLine {
    last: Option<bool>,
}

impl StatusLine {
    /// Creates a status line with no outcome recorded yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the most recently reported success flag, if any.
    #[must_use]
    pub fn last(&self) -> Option<bool> {
        self.last
    }

    /// Returns the current status label text.
    #[must_use]
    pub fn text(&self) -> &'static str {
        match self.last {
            None => "no scenario parameter sent",
            Some(true) => "scenario parameter accepted by server",
            Some(false) => "scenario parameter rejected by server",
        }
    }
}

impl StatusSink for StatusLine {
    fn scenario_param_status(&mut self, success: bool) {
        self.last = Some(success);
        tracing::info!(success, "scenario parameter status updated");
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn text_tracks_latest_outcome() {
        let mut status = StatusLine::new();
        assert_eq!(status.text(), "no scenario parameter sent");

        status.scenario_param_status(true);
        assert_eq!(status.text(), "scenario parameter accepted by server");

        status.scenario_param_status(false);
        assert_eq!(status.text(), "scenario parameter rejected by server");
    }
}
