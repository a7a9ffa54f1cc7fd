//! Progress indicators for grafana-backup.
//!
//! Responsibilities:
//! - Provide a counting progress bar for the dashboard fetch phase and a spinner
//!   for the search phase.
//! - Write ALL progress output to STDERR so stdout stays reserved for results.
//! - Allow global suppression via a caller-provided `enabled` flag (driven by `--quiet`).
//!
//! Does NOT handle:
//! - Deciding *when* progress should be shown; callers do.
//! - Printing command results.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// A counting progress bar over the resources returned by search.
///
/// No-op when disabled.
pub(crate) struct BackupProgress {
    pb: Option<ProgressBar>,
}

impl BackupProgress {
    /// Create a progress bar for `total` resources.
    ///
    /// `enabled` should be `!quiet`.
    pub(crate) fn new(enabled: bool, total: usize) -> Self {
        if !enabled || total == 0 {
            return Self { pb: None };
        }

        let pb = ProgressBar::new(total as u64);
        pb.set_draw_target(ProgressDrawTarget::stderr());
        pb.set_style(
            ProgressStyle::with_template("{spinner} {msg} [{bar:40.cyan/blue}] {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );
        pb.set_message("Backing up dashboards");
        pb.enable_steady_tick(Duration::from_millis(100));

        Self { pb: Some(pb) }
    }

    /// Advance by one completed resource, successful or not.
    pub(crate) fn inc(&self) {
        if let Some(pb) = &self.pb {
            pb.inc(1);
        }
    }

    pub(crate) fn finish(&self) {
        if let Some(pb) = &self.pb {
            pb.finish_with_message("Backup done");
        }
    }
}

impl Drop for BackupProgress {
    fn drop(&mut self) {
        // Clear the line on early exit so error output is not interleaved.
        if let Some(pb) = &self.pb
            && !pb.is_finished()
        {
            pb.finish_and_clear();
        }
    }
}

/// An indefinite spinner for operations of unknown duration.
///
/// Always draws to STDERR; no-op when disabled.
pub(crate) struct Spinner {
    label: String,
    pb: Option<ProgressBar>,
}

impl Spinner {
    pub(crate) fn new(enabled: bool, label: impl Into<String>) -> Self {
        let label = label.into();

        if !enabled {
            return Self { label, pb: None };
        }

        let pb = ProgressBar::new_spinner();
        pb.set_draw_target(ProgressDrawTarget::stderr());
        pb.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(label.clone());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self {
            label,
            pb: Some(pb),
        }
    }

    /// Finish the spinner with a stable message (on STDERR).
    pub(crate) fn finish(&self) {
        let Some(pb) = &self.pb else {
            return;
        };

        pb.finish_with_message(format!("{} done", self.label));
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if let Some(pb) = &self.pb
            && !pb.is_finished()
        {
            pb.finish_and_clear();
        }
    }
}
