//! Progress reporting for alert dispatch

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use sos_application::DispatchProgress;
use sos_domain::{DispatchOutcome, RecipientGroup};
use std::collections::HashMap;
use std::sync::Mutex;

/// Reports dispatch progress with one progress bar per recipient group
pub struct ProgressReporter {
    multi: MultiProgress,
    bars: Mutex<HashMap<RecipientGroup, ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            bars: Mutex::new(HashMap::new()),
        }
    }

    fn group_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn group_display_name(group: RecipientGroup) -> &'static str {
        match group {
            RecipientGroup::TrustedContacts => "Trusted contacts",
            RecipientGroup::Responders => "Nearby responders",
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatchProgress for ProgressReporter {
    fn on_batch_start(&self, group: RecipientGroup, total: usize) {
        let pb = self.multi.add(ProgressBar::new(total as u64));
        pb.set_style(Self::group_style());
        pb.set_prefix(Self::group_display_name(group));
        pb.set_message("Sending...");

        if let Ok(mut bars) = self.bars.lock() {
            bars.insert(group, pb);
        }
    }

    fn on_outcome(&self, group: RecipientGroup, outcome: &DispatchOutcome) {
        let Ok(bars) = self.bars.lock() else {
            return;
        };
        if let Some(pb) = bars.get(&group) {
            let status = if outcome.succeeded {
                format!("{} {}", "v".green(), outcome.address)
            } else {
                format!("{} {}", "x".red(), outcome.address)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_batch_complete(&self, group: RecipientGroup, outcomes: &[DispatchOutcome]) {
        let Ok(mut bars) = self.bars.lock() else {
            return;
        };
        if let Some(pb) = bars.remove(&group) {
            let failed = outcomes.iter().filter(|o| !o.succeeded).count();
            if failed == 0 {
                pb.finish_with_message(format!("{}", "done!".green()));
            } else {
                pb.finish_with_message(format!("{}", format!("{} failed", failed).red()));
            }
        }
    }
}
