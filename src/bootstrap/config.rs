use autofilm_config::{Config, OutputPolicy};
use autofilm_events::{AppEvent, EventBus};
use autofilm_filesystem::FileSystem;
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;

pub async fn load(config_path: &Path, events: &Arc<EventBus>) -> Result<Config> {
    read(config_path, events).await.inspect_err(|e| report(events, e))
}

/// Builds the output policy, reporting failures like any other config error
pub fn output_policy(config: &Config, events: &Arc<EventBus>) -> Result<OutputPolicy> {
    let policy = config
        .output_policy()
        .context("Invalid [settings]")
        .inspect_err(|e| report(events, e))?;

    events.emit(AppEvent::OutputDirectory {
        path: policy.output_dir().display().to_string(),
    });

    Ok(policy)
}

async fn read(config_path: &Path, events: &Arc<EventBus>) -> Result<Config> {
    let abs_config_path = FileSystem::get_absolute_path(config_path)?;

    events.emit(AppEvent::ConfigLoading {
        path: abs_config_path.display().to_string(),
    });

    let config_exists = abs_config_path.exists();
    let config = Config::from_file_with_events(&abs_config_path, Some(events))
        .await
        .with_context(|| format!("Failed to load {}", abs_config_path.display()))?;

    if !config_exists {
        events.emit(AppEvent::ConfigCreated {
            path: abs_config_path.display().to_string(),
        });
    }

    events.emit(AppEvent::ConfigLoaded {
        servers_count: config.servers.len(),
    });

    Ok(config)
}

fn report(events: &Arc<EventBus>, error: &anyhow::Error) {
    events.emit(AppEvent::ConfigError { error: format!("{:#}", error) });
}
