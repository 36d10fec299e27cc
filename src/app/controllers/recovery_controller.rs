use super::super::*;
use crate::core::actions::Action;
use crate::core::boundary::RetryOutcome;

const RETRY_DISABLED_MESSAGE: &str = "Retry is disabled. Please reload the application.";

pub(in crate::app) fn execute(app: &mut App, action: Action) {
    match action {
        Action::Retry => retry(app),
        Action::ReloadFull => app.reload_full(),
        Action::SimulateFailure => app.inject_fault("triggered from keyboard (F12)"),
        _ => unreachable!("non-recovery action: {:?}", action),
    }
}

fn retry(app: &mut App) {
    match app.boundary.retry() {
        RetryOutcome::Recovered => {
            let record = app.boundary.record();
            tracing::info!(
                occurrences = record.occurrences,
                cause = ?record.cause,
                "boundary recovered"
            );
            app.set_toast("Retrying...");
        }
        RetryOutcome::Disabled => app.set_toast(RETRY_DISABLED_MESSAGE),
        RetryOutcome::NotFailed => {}
    }
}
