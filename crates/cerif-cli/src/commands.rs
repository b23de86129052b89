use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::{Local, SecondsFormat};
use comfy_table::Table;
use tracing::{info, info_span, warn};

use cerif_core::{ConversionOptions, convert};
use cerif_ingest::{InputTables, ReadOptions};
use cerif_model::{DocumentOptions, VerificationStatus};
use cerif_report::{OutputTarget, render_cerif, write_output};
use cerif_standards::Catalog;

use crate::cli::{ConvertArgs, SemanticsArgs};
use crate::summary::apply_table_style;
use crate::types::ConvertResult;

pub fn run_semantics(args: &SemanticsArgs) -> Result<()> {
    let catalog = load_catalog(args.semantics.as_deref())?;
    let mut table = Table::new();
    table.set_header(vec!["Concept", "Term", "Scheme", "Class"]);
    apply_table_style(&mut table);
    for (concept, classification) in catalog.iter() {
        table.add_row(vec![
            concept.as_str().to_string(),
            concept.term().to_string(),
            classification.scheme.clone(),
            classification.class.clone(),
        ]);
    }
    println!("{table}");
    for concept in catalog.missing() {
        eprintln!("warning: {concept} has no classification");
    }
    Ok(())
}

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertResult> {
    let source_database = args.ruct.trim();
    if source_database.is_empty() {
        bail!("--ruct must not be blank");
    }
    let output = OutputTarget::parse(&args.out)?;

    let span = info_span!("csv2cerif", input = %args.input_dir.display());
    let _guard = span.enter();

    let read_options = ReadOptions::default()
        .with_delimiter(&args.delimiter)?
        .with_encoding_label(&args.input_encoding)?;
    let tables = InputTables::load(&args.input_dir, &read_options)?;
    let catalog = load_catalog(args.semantics.as_deref())?;

    let options = ConversionOptions {
        seed: args.seed.clone(),
        researcher_status: if args.unchecked {
            VerificationStatus::Unchecked
        } else {
            VerificationStatus::Checked
        },
    };
    let conversion = convert(&tables, &catalog, &options)?;

    let date = Local::now().to_rfc3339_opts(SecondsFormat::Secs, false);
    let document = DocumentOptions::new(source_database, date)
        .with_charset(args.charset)
        .with_pretty(args.formatted);
    let bytes = render_cerif(&conversion.graph, &document).context("render CERIF document")?;

    let written = !args.dry_run;
    if written {
        write_output(&output, &bytes)?;
        info!(bytes = bytes.len(), charset = %args.charset, "document written");
    } else {
        info!(bytes = bytes.len(), "dry run, document not written");
    }

    Ok(ConvertResult {
        input_dir: args.input_dir.clone(),
        output,
        tables: tables.counts(),
        report: conversion.report,
        document_bytes: bytes.len(),
        written,
    })
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let catalog = Catalog::load(path)?;
    let missing = catalog.missing();
    if !missing.is_empty() {
        warn!(count = missing.len(), "catalog has unclassified concepts");
    }
    Ok(catalog)
}
