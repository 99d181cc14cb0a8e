//! Startup orchestration.

use std::path::Path;
use std::sync::Arc;

use crate::alerting::{Notifier, TelegramNotifier};
use crate::config::{load_config, Credentials, MonitorConfig};
use crate::error::MonitorError;
use crate::health::{Checker, FailureTracker};
use crate::probe::HttpProber;
use crate::registry::Registry;

/// Everything needed to start serving, loaded and validated.
pub struct Bootstrap {
    pub config: MonitorConfig,
    pub credentials: Credentials,
}

/// Load the config file and the notification credentials. Either one
/// missing aborts startup.
pub fn bootstrap(config_path: &Path) -> Result<Bootstrap, MonitorError> {
    let config = load_config(config_path)?;
    let credentials = Credentials::from_env()?;
    Ok(Bootstrap {
        config,
        credentials,
    })
}

/// Build the checker with the HTTP prober and the given notifier.
pub fn build_checker(
    config: &MonitorConfig,
    notifier: Arc<dyn Notifier>,
) -> Result<Arc<Checker>, MonitorError> {
    let registry = Registry::from_config(&config.groups);
    let tracker = FailureTracker::new(config.alerting.failure_threshold);
    let prober = HttpProber::new(&config.probe)?;

    Ok(Arc::new(Checker::new(
        Arc::new(registry),
        Arc::new(tracker),
        Arc::new(prober),
        notifier,
    )))
}

/// Build the Telegram notifier from config and credentials.
pub fn build_notifier(
    config: &MonitorConfig,
    credentials: &Credentials,
) -> Result<Arc<dyn Notifier>, MonitorError> {
    Ok(Arc::new(TelegramNotifier::new(&config.alerting, credentials)?))
}
