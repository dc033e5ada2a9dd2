//! Lookup command implementation

use std::path::Path;

use console::Style;
use serde::Serialize;

use precedence::error::{Result, sources};

use crate::cli::LookupArgs;
use crate::commands::helpers;

#[derive(Serialize)]
struct LookupReport<'a> {
    key: &'a str,
    value: &'a str,
    source: &'a str,
}

/// Run lookup command
///
/// Reorders the live property sources first, so the reported value is the
/// one a lookup sees after precedence has been applied.
pub fn run(manifest_path: &Path, no_env: bool, args: LookupArgs) -> Result<()> {
    let manifest = helpers::load_manifest(manifest_path)?;
    let mut live = manifest.live_sources()?;
    helpers::post_processor(&manifest, no_env).process(&mut live)?;

    let (source, value) = live
        .get_property(&args.key)
        .ok_or_else(|| sources::property_not_found(args.key.as_str()))?;

    if args.json {
        let report = LookupReport {
            key: &args.key,
            value,
            source,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{value}");
        eprintln!(
            "{} {}",
            Style::new().dim().apply_to("from"),
            Style::new().cyan().apply_to(source)
        );
    }

    Ok(())
}
