//! File-based settings persistence.

mod settings_repository;

pub use settings_repository::{
    ENV_BASE_URL, ENV_DEBOUNCE_MS, ENV_PAGE_SIZE, ENV_TIMEOUT_MS, SettingsError,
    SettingsRepository, apply_overrides,
};
