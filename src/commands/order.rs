//! Order command implementation
//!
//! Prints the computed unit order and the flattened resource order that the
//! reorder command would apply.

use std::path::Path;

use console::Style;
use serde::Serialize;

use precedence::analyzer::ConfigurationsAnalyzer;
use precedence::domain::{Resource, TypeName, Unit};
use precedence::error::Result;

use crate::cli::OrderArgs;
use crate::commands::helpers;

#[derive(Serialize)]
struct OrderReport<'a> {
    units: Vec<UnitEntry<'a>>,
    resources: &'a [Resource],
}

#[derive(Serialize)]
struct UnitEntry<'a> {
    identity: &'a TypeName,
    imports: Vec<&'a TypeName>,
    resources: Vec<&'a str>,
}

impl<'a> From<&'a Unit> for UnitEntry<'a> {
    fn from(unit: &'a Unit) -> Self {
        Self {
            identity: unit.identity(),
            imports: unit.direct_imports().iter().collect(),
            resources: unit.resources().iter().map(|r| r.name.as_str()).collect(),
        }
    }
}

/// Run order command
pub fn run(manifest_path: &Path, no_env: bool, args: OrderArgs) -> Result<()> {
    let manifest = helpers::load_manifest(manifest_path)?;
    let units = helpers::discovery(&manifest, no_env).discover()?;
    let analyzer = ConfigurationsAnalyzer::new(&units);
    let resources = analyzer.resource_order();

    if args.json {
        let report = OrderReport {
            units: analyzer.sorted_units().iter().map(UnitEntry::from).collect(),
            resources: &resources,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    display_order(analyzer.sorted_units(), &resources);
    Ok(())
}

fn display_order(units: &[Unit], resources: &[Resource]) {
    if units.is_empty() {
        println!("No configuration units declared.");
        return;
    }

    println!(
        "{} ({}):",
        Style::new().bold().apply_to("Unit order"),
        units.len()
    );
    for (position, unit) in units.iter().enumerate() {
        println!(
            "  {:>3}. {}",
            position + 1,
            Style::new().bold().yellow().apply_to(unit.identity())
        );
        if !unit.direct_imports().is_empty() {
            let imports: Vec<&str> = unit.direct_imports().iter().map(TypeName::as_str).collect();
            println!(
                "       {} {}",
                Style::new().bold().apply_to("imports:"),
                imports.join(", ")
            );
        }
    }

    println!();
    if resources.is_empty() {
        println!("No resources contributed.");
        return;
    }

    println!(
        "{} ({}):",
        Style::new().bold().apply_to("Resource order"),
        resources.len()
    );
    for (position, resource) in resources.iter().enumerate() {
        println!(
            "  {:>3}. {} {}",
            position + 1,
            Style::new().cyan().apply_to(&resource.name),
            Style::new().dim().apply_to(format!("({})", resource.origin))
        );
    }
}
