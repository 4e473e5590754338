use super::models::{AppEvent, EventBus};
use std::sync::Arc;
use colored::Colorize;

impl EventBus {
    pub fn new(silent_mode: bool) -> Arc<Self> {
        Arc::new(Self { silent_mode })
    }

    pub fn emit(&self, event: AppEvent) {
        // Warnings and errors always go through tracing, even when silent
        match &event {
            AppEvent::ConfigCreated { path } => {
                tracing::warn!("Configuration file not found");
                tracing::info!("Created default configuration at: {}", path);
                return;
            }
            AppEvent::ConfigError { error } => {
                tracing::error!("Configuration error: {}", error);
                return;
            }
            AppEvent::ServerSkipped { server, reason } => {
                tracing::error!("Skipping server {}: {}", server, reason);
                return;
            }
            AppEvent::Error { context, error } => {
                tracing::error!("{}: {}", context, error);
                return;
            }
            _ => {}
        }

        if self.silent_mode {
            return;
        }

        match event {
            // Application lifecycle
            AppEvent::Starting => {
                println!("\n{}", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".bright_black());
                println!("  {}", "AutoFilm - AList strm generator".white().bold());
                println!("  {} {}", "Version".dimmed(), env!("CARGO_PKG_VERSION").cyan());
                println!("{}\n", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".bright_black());
            }
            AppEvent::Finished { servers, skipped_servers, duration } => {
                println!("{}", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".green());
                println!(
                    "  {} {} server(s) in {:.2}s",
                    "Done".white().bold(),
                    servers.to_string().cyan(),
                    duration.as_secs_f64()
                );
                if skipped_servers > 0 {
                    println!("  {} {} server(s) skipped", "⚠".yellow(), skipped_servers.to_string().yellow());
                }
                println!("{}\n", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".green());
            }

            // Configuration
            AppEvent::ConfigLoading { path } => {
                println!("  {} {}", "Loading config".dimmed(), path.cyan());
            }
            AppEvent::ConfigLoaded { servers_count } => {
                if servers_count == 0 {
                    println!("  {} No servers configured", "⚠".yellow());
                } else {
                    println!("  {} {} server(s)", "✓".green(), servers_count.to_string().cyan());
                }
            }
            AppEvent::ConfigMigrated { added_fields } => {
                if !added_fields.is_empty() {
                    println!("  {} Config updated: {}",
                        "↻".blue(),
                        added_fields.join(", ").dimmed()
                    );
                }
            }
            AppEvent::OutputDirectory { path } => {
                println!("  {} {}", "Output".dimmed(), path.cyan());
            }

            // Crawl
            AppEvent::ServerStarted { server, base_path } => {
                println!("  {} {} {}", "→".dimmed(), server.cyan(), base_path.dimmed());
            }
            AppEvent::ListingCompleted { .. } => {
                // Silent - reported on completion
            }
            AppEvent::ServerCompleted { server, pointers, downloads, skipped, failed, duration } => {
                println!(
                    "  {} {} ({} strm, {} downloaded, {} skipped, {:.2}s)",
                    "✓".green(),
                    server.cyan(),
                    pointers,
                    downloads,
                    skipped,
                    duration.as_secs_f64()
                );
                if failed > 0 {
                    println!("    {} {} failed", "✗".red(), failed.to_string().red());
                }
            }

            AppEvent::ConfigCreated { .. }
            | AppEvent::ConfigError { .. }
            | AppEvent::ServerSkipped { .. }
            | AppEvent::Error { .. } => {}
        }
    }
}
