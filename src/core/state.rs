// Application state (AppState)

use crate::core::config::Config;
use crate::core::error::ReportError;
use crate::locale::strings::{Locale, Strings};
use crate::models::report::Report;
use crate::report::render::export_report;
use crate::stores::account_store::AccountStore;
use crate::stores::catalog::Catalog;
use crate::wizard::flow::Wizard;
use std::path::PathBuf;

/// Everything the front-end works against.
///
/// One store, one wizard and one catalog per process; the locale only
/// picks which string table presentation reads.
pub struct AppState {
    /// Registered users and the active session
    pub store: AccountStore,

    /// Current wizard step
    pub wizard: Wizard,

    /// Course and recommendation tables
    pub catalog: Catalog,

    pub locale: Locale,

    pub config: Config,
}

impl AppState {
    pub fn new(config: Config, store: AccountStore) -> Self {
        let locale = config.program.locale;
        let catalog = Catalog::builtin(locale).with_overrides(&config.catalog.recommendations);
        let wizard = Wizard::new(config.wizard.strict_personality);

        Self {
            store,
            wizard,
            catalog,
            locale,
            config,
        }
    }

    pub fn strings(&self) -> &'static Strings {
        self.locale.strings()
    }

    /// Report for the logged-in user's committed progress
    pub fn report(&self) -> Option<Report> {
        self.store
            .current_user()
            .map(|user| Report::from_user(user, &self.catalog))
    }

    /// Export the current report with the configured format and directory
    pub fn export_report(&self) -> Result<PathBuf, ReportError> {
        let report = self.report().ok_or(ReportError::NoActiveSession)?;
        export_report(
            &report,
            self.strings(),
            self.config.report.format,
            &self.config.report.output_dir,
        )
    }
}
