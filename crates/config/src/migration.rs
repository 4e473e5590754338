use super::errors::ConfigError;
use std::path::Path;
use std::sync::Arc;
use toml_edit::{DocumentMut, Item, Table, Value};

/// Capitalized table names kept by configs ported by hand from the YAML
/// format; no TOML file written by this tool uses them
const LEGACY_TABLES: &[(&str, &str)] = &[("Settings", "settings"), ("AlistServerList", "servers")];

/// Migrates config file to latest format if needed
pub async fn migrate_config_if_needed<P: AsRef<Path>>(
    path: P,
    events: Option<&Arc<autofilm_events::EventBus>>,
) -> Result<(), ConfigError> {
    let content = tokio::fs::read_to_string(path.as_ref()).await?;
    let mut doc = content.parse::<DocumentMut>()?;

    let changes = migrate_document(&mut doc)?;

    // Only write if something changed
    if !changes.is_empty() {
        tokio::fs::write(path.as_ref(), doc.to_string()).await?;
        tracing::debug!("Migrated {}: {}", path.as_ref().display(), changes.join(", "));

        if let Some(event_bus) = events {
            event_bus.emit(autofilm_events::AppEvent::ConfigMigrated {
                added_fields: changes,
            });
        }
    }

    Ok(())
}

fn migrate_document(doc: &mut DocumentMut) -> Result<Vec<String>, ConfigError> {
    let mut changes = Vec::new();
    rename_legacy_tables(doc, &mut changes);
    migrate_settings_section(doc, &mut changes)?;
    Ok(changes)
}

fn rename_legacy_tables(doc: &mut DocumentMut, changes: &mut Vec<String>) {
    for (legacy, current) in LEGACY_TABLES {
        if doc.contains_key(current) {
            continue;
        }
        if let Some(item) = doc.remove(legacy) {
            doc.insert(current, item);
            changes.push(format!("renamed {} to {}", legacy, current));
        }
    }
}

fn migrate_settings_section(
    doc: &mut DocumentMut,
    changes: &mut Vec<String>,
) -> Result<(), ConfigError> {
    if !doc.contains_key("settings") {
        doc["settings"] = Item::Table(Table::new());
        changes.push("settings".to_string());
    }

    let settings = doc["settings"]
        .as_table_mut()
        .ok_or_else(|| ConfigError::InvalidConfig("Invalid [settings] section in config".to_string()))?;

    let output_dir = super::defaults::output_dir();
    ensure_field(settings, "output_dir", Value::from(output_dir.as_str()), changes);
    ensure_field(settings, "library_mode", Value::from(false), changes);
    ensure_field(settings, "subtitle", Value::from(false), changes);
    ensure_field(settings, "img", Value::from(false), changes);
    ensure_field(settings, "nfo", Value::from(false), changes);
    ensure_field(
        settings,
        "concurrency",
        Value::from(super::defaults::concurrency() as i64),
        changes,
    );

    Ok(())
}

fn ensure_field(
    table: &mut Table,
    key: &str,
    default_value: Value,
    changes: &mut Vec<String>,
) {
    if !table.contains_key(key) {
        table[key] = Item::Value(default_value);
        changes.push(format!("settings.{}", key));
    }
}
