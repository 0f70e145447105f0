//! Institutions command implementation
//!
//! Normalizes a persisted education-facility export and serves repeated
//! invocations from the snapshot cache while it is fresh.

use colored::*;
use tracing::{info, warn};

use super::shared::{print_json, read_input, setup_logging};
use crate::app::models::EducationalInstitution;
use crate::app::services::institution::{InstitutionRow, normalize_records};
use crate::app::services::snapshot_cache::SnapshotCache;
use crate::cli::args::{InstitutionsArgs, OutputFormat};
use crate::config::ProcessorConfig;
use crate::constants::INSTITUTIONS_CACHE_KEY;
use crate::Result;

/// Institutions command runner
pub fn run_institutions(args: InstitutionsArgs) -> Result<()> {
    setup_logging(args.get_log_level())?;
    args.validate()?;

    let mut config = ProcessorConfig::default();
    if let Some(ttl) = args.cache_ttl {
        config = config.with_cache_ttl_secs(ttl);
    }
    if let Some(path) = &args.cache_path {
        config = config.with_cache_path(path.clone());
    }

    let cache = match &config.cache_path {
        Some(path) => SnapshotCache::new(path.clone(), config.cache_ttl()),
        None => SnapshotCache::with_default_location(config.cache_ttl())?,
    };

    if args.no_cache {
        cache.invalidate(INSTITUTIONS_CACHE_KEY);
    }

    let cached = if args.no_cache {
        None
    } else {
        cache.get::<Vec<EducationalInstitution>>(INSTITUTIONS_CACHE_KEY)
    };

    let records = match cached {
        Some((records, age)) => {
            info!(
                "serving {} cached institution records ({}s old)",
                records.len(),
                age.as_secs()
            );
            records
        }
        None => {
            let raw = read_input(&args.input)?;
            let rows: Vec<InstitutionRow> = serde_json::from_str(&raw)?;
            let records = normalize_records(rows);
            if let Err(error) = cache.put(INSTITUTIONS_CACHE_KEY, &records) {
                warn!("failed to cache institution records: {}", error);
            }
            records
        }
    };

    match args.format {
        OutputFormat::Json => print_json(&records)?,
        OutputFormat::Human => print_institution_report(&records),
    }

    Ok(())
}

/// Render the normalized facility list
fn print_institution_report(records: &[EducationalInstitution]) {
    println!("{} institutions", records.len());
    for record in records {
        let mut flags = String::new();
        if record.is_closed {
            flags.push_str(&format!(" {}", "[closed]".red()));
        }
        if record.is_online_class {
            flags.push_str(&format!(" {}", "[online]".cyan()));
        }
        println!(
            "  {:<10} {}  {} ({:.4}, {:.4}){}",
            record.kind.label(),
            record.name.as_str().bold(),
            record.address,
            record.latitude,
            record.longitude,
            flags
        );
    }
}
