use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::core::config::Config;
use crate::core::state::AppState;
use crate::storage::kv::FileStorage;
use crate::stores::account_store::AccountStore;
use crate::utils::time::SystemClock;

// this runs at boot time
pub fn build_state(config: Config) -> Result<AppState> {
    let storage = FileStorage::open(&config.storage.data_dir).context(format!(
        "Failed to open data directory {}",
        config.storage.data_dir.display()
    ))?;

    info!(
        data_dir = %storage.dir().display(),
        users_key = %config.storage.users_key,
        "Storage opened"
    );

    let mut store = AccountStore::new(Box::new(storage), Box::new(SystemClock))
        .with_users_key(config.storage.users_key.clone())
        .with_program_start_year(config.program.start_year);

    store.load();

    let state = AppState::new(config, store);

    let missing = state.catalog.missing_recommendations();
    if !missing.is_empty() {
        warn!(
            locale = %state.locale,
            missing = ?missing,
            "Personality types without course recommendations; add them under [catalog.recommendations]"
        );
    }

    info!(
        users = state.store.len(),
        locale = %state.locale,
        department = %state.catalog.department(),
        "Startup complete"
    );

    Ok(state)
}
