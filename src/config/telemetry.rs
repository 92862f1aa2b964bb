use tracing::{debug, info};

use super::{LauncherSettings, CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH};

pub fn log_env_source(path: &std::path::Path, from_env: bool) {
    if from_env {
        info!(
            target: "ore_launcher::config",
            path = %path.display(),
            "Loading settings using ORE_LAUNCHER_CONFIG environment variable"
        );
    } else {
        debug!(
            target: "ore_launcher::config",
            path = %path.display(),
            env = CONFIG_ENV_KEY,
            default = DEFAULT_CONFIG_PATH,
            "ORE_LAUNCHER_CONFIG not set; using default launcher.toml"
        );
    }
}

pub fn log_defaults(path: &std::path::Path) {
    debug!(
        target: "ore_launcher::config",
        path = %path.display(),
        "Settings file not found; using built-in defaults"
    );
}

pub fn log_loaded(settings: &LauncherSettings) {
    info!(
        target: "ore_launcher::config",
        path = %settings.source_path.as_deref().map(|p| p.display().to_string()).unwrap_or_default(),
        base_dir = %settings.launcher.base_dir.display(),
        primary_env = %settings.env.primary,
        secondary_env = %settings.env.secondary,
        claim_command = ?settings.commands.claim,
        mine_command = ?settings.commands.mine,
        "Settings file loaded successfully"
    );
}
