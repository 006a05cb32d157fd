use clap::ArgMatches;
use colored::*;

use crate::config::{config_path, load_config, save_config, Config};
use crate::constants::MIN_REFRESH_SECS;
use crate::error::{ErrorContext, KalitaError, KalitaResult};

pub fn handle_config(matches: &ArgMatches) -> KalitaResult<()> {
    let mut config = load_config().context("Failed to load configuration")?;
    let changed = apply_config_args(&mut config, matches)?;

    if changed {
        save_config(&config)?;
        println!("{} Configuration saved to {}", "✓".green(), config_path()?.display());
    }

    if matches.get_flag("show") || !changed {
        print_config(&config);
    }

    Ok(())
}

/// Copy the values given on the command line into `config`.
/// Returns whether anything was set.
pub fn apply_config_args(config: &mut Config, matches: &ArgMatches) -> KalitaResult<bool> {
    let mut changed = false;

    if let Some(url) = matches.get_one::<String>("url") {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(KalitaError::InvalidInput(format!(
                "feed URL must start with http:// or https://, got '{}'",
                url
            )));
        }
        config.supabase_url = Some(url.trim_end_matches('/').to_string());
        changed = true;
    }

    if let Some(key) = matches.get_one::<String>("anon-key") {
        config.anon_key = Some(key.clone());
        changed = true;
    }

    if let Some(table) = matches.get_one::<String>("table") {
        config.table = table.clone();
        changed = true;
    }

    if let Some(refresh) = matches.get_one::<String>("refresh") {
        let secs = refresh
            .parse::<u64>()
            .map_err(|_| KalitaError::InvalidInput(format!("invalid refresh interval '{}'", refresh)))?;
        if secs < MIN_REFRESH_SECS {
            return Err(KalitaError::InvalidInput(format!(
                "refresh interval must be at least {} seconds",
                MIN_REFRESH_SECS
            )));
        }
        config.refresh_secs = secs;
        changed = true;
    }

    Ok(changed)
}

fn print_config(config: &Config) {
    let unset = || "(not set)".dimmed().to_string();
    println!("{}", "Kalita CLI configuration".bold());
    println!(
        "  URL:      {}",
        config.supabase_url.clone().unwrap_or_else(unset)
    );
    println!(
        "  Anon key: {}",
        config.anon_key.as_deref().map(mask_key).unwrap_or_else(unset)
    );
    println!("  Table:    {}", config.table);
    println!("  Refresh:  {}s", config.refresh_secs);
}

/// Show only the ends of a key, e.g. `eyJh...9xQk`.
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 12 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
