//! Reorder command implementation
//!
//! Applies the computed resource order to the live property sources declared
//! in the manifest and prints the resulting collection.

use std::path::Path;

use console::Style;
use serde::Serialize;

use precedence::error::Result;
use precedence::precedence::PropertySources;

use crate::cli::ReorderArgs;
use crate::commands::helpers;

#[derive(Serialize)]
struct ReorderReport<'a> {
    reordered: bool,
    before: Vec<String>,
    after: Vec<&'a str>,
}

/// Run reorder command
pub fn run(manifest_path: &Path, no_env: bool, args: ReorderArgs) -> Result<()> {
    let manifest = helpers::load_manifest(manifest_path)?;
    let mut sources = manifest.live_sources()?;
    let before: Vec<String> = sources.names().into_iter().map(str::to_string).collect();

    let analysis = helpers::post_processor(&manifest, no_env).process(&mut sources)?;

    if args.json {
        let report = ReorderReport {
            reordered: analysis.is_some(),
            before,
            after: sources.names(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if analysis.is_none() {
        println!("No resource property sources loaded, nothing to reorder.");
    }
    display_sources(&sources, &before);
    Ok(())
}

fn display_sources(sources: &PropertySources, before: &[String]) {
    if sources.is_empty() {
        println!("No property sources declared.");
        return;
    }

    println!(
        "{} ({}):",
        Style::new().bold().apply_to("Property sources"),
        sources.len()
    );
    for (position, source) in sources.into_iter().enumerate() {
        let moved = before.get(position).is_none_or(|name| *name != source.name);
        let name = if moved {
            Style::new().bold().yellow().apply_to(source.name.as_str())
        } else {
            Style::new().apply_to(source.name.as_str())
        };
        println!(
            "  {:>3}. {} {}",
            position + 1,
            name,
            Style::new().dim().apply_to(format!("[{}]", source.kind))
        );
    }
}
