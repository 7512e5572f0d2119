use contracts::shared::config::{load_config, ConsoleConfig};
use leptos::prelude::*;

pub fn provide_config() {
    provide_context(load_config(None));
}

/// Console configuration from context, embedded defaults outside the app tree.
pub fn use_config() -> ConsoleConfig {
    use_context::<ConsoleConfig>().unwrap_or_default()
}
