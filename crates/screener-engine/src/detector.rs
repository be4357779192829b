//! Change detection: set difference, notification decision, persistence.

use chrono::{DateTime, Utc};
use screener_core::traits::{Messenger, StateStore};
use screener_core::types::{ChangeReport, QualifyingSet, ScreeningState};
use screener_notify::format_report;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Compute newcomers and dropouts between two qualifying sets. Pure.
pub fn diff(current: &QualifyingSet, previous: &QualifyingSet) -> ChangeReport {
    let previous_symbols = previous.symbols();
    let current_symbols = current.symbols();

    let newcomers = current
        .iter()
        .filter(|s| !previous_symbols.contains(&s.symbol))
        .cloned()
        .collect();
    let dropouts = previous
        .iter()
        .filter(|s| !current_symbols.contains(&s.symbol))
        .cloned()
        .collect();

    ChangeReport {
        current: current.clone(),
        newcomers,
        dropouts,
    }
}

/// Runs the per-cycle compare → notify → persist sequence.
pub struct ChangeDetector {
    store: Arc<dyn StateStore>,
    messenger: Arc<dyn Messenger>,
}

impl ChangeDetector {
    pub fn new(store: Arc<dyn StateStore>, messenger: Arc<dyn Messenger>) -> Self {
        Self { store, messenger }
    }

    /// Compare `current` against the persisted set, notify on changes,
    /// and persist the new state unconditionally.
    ///
    /// Nothing here is fatal: an unreadable previous state degrades to an
    /// empty set, and delivery or persistence failures are logged while
    /// the cycle completes.
    pub async fn run_cycle(&self, current: QualifyingSet, now: DateTime<Utc>) -> ChangeReport {
        let previous = match self.store.load().await {
            Ok(state) => state.qualifying,
            Err(e) => {
                warn!(error = %e, "cannot read previous state, treating as empty");
                QualifyingSet::new()
            }
        };

        let report = diff(&current, &previous);

        if report.has_changes() {
            info!(
                newcomers = report.newcomers.len(),
                dropouts = report.dropouts.len(),
                "changes detected, sending notification"
            );
            let text = format_report(&report, now);
            if let Err(e) = self.messenger.send(&text).await {
                warn!(messenger = self.messenger.name(), error = %e, "notification delivery failed");
            }
        } else {
            debug!("no changes, notification skipped");
        }

        // State always reflects the most recent cycle, changed or not.
        let state = ScreeningState::new(current, now);
        if let Err(e) = self.store.save(&state).await {
            warn!(error = %e, "failed to persist screening state");
        }

        report
    }
}
