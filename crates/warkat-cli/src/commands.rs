// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command implementations, kept apart from argument parsing so they can be
// driven directly in tests.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};
use warkat_core::error::WarkatError;
use warkat_core::{EngineConfig, LossReportRecord, Parties, PermitRecord, Result};
use warkat_document::{PdfInspector, RenderedPdf, load_logo, render_pdf, write_pdf};
use warkat_layout::{LetterEngine, RenderAssets};
use warkat_letters::{LetterModel, LossReportFields, PermitFields, calendar};

/// Options shared by every letter command.
#[derive(Debug, Clone)]
pub struct Options {
    pub config: Option<PathBuf>,
    pub logo: Option<PathBuf>,
    pub out: PathBuf,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LetterArgs {
    /// Application record (JSON)
    #[arg(long)]
    pub record: PathBuf,

    /// Signing and receiving officials (JSON)
    #[arg(long)]
    pub parties: PathBuf,

    /// Date used when the record carries none, e.g. 2026-10-19 (defaults to today)
    #[arg(long)]
    pub date: Option<String>,
}

/// What a letter command produced.
#[derive(Debug)]
pub struct Written {
    pub path: PathBuf,
    pub pdf: RenderedPdf,
}

impl Written {
    pub fn print(&self) {
        println!("{}", self.path.display());
        println!(
            "  pages {}  scale {:.2}  sha256 {}{}",
            self.pdf.pages,
            self.pdf.scale,
            self.pdf.sha256,
            if self.pdf.fits { "" } else { "  (overflows)" }
        );
    }
}

pub fn permit(options: &Options, args: &LetterArgs) -> Result<Written> {
    let (config, parties, today) = prepare(options, args)?;
    let record: PermitRecord = read_json(&args.record)?;
    let fields = PermitFields::build(&record, &parties, &config.office, today);
    write_letter(options, &config, &fields)
}

pub fn loss_report(options: &Options, args: &LetterArgs) -> Result<Written> {
    let (config, parties, today) = prepare(options, args)?;
    let record: LossReportRecord = read_json(&args.record)?;
    let fields = LossReportFields::build(&record, &parties, &config.office, today);
    write_letter(options, &config, &fields)
}

/// One-line summary of an existing PDF.
pub fn inspect(path: &Path) -> Result<String> {
    let pdf = PdfInspector::open(path)?;
    let pages = pdf.page_count();
    let (w, h) = pdf.page_size_mm(1)?;
    Ok(format!("{}: {pages} page(s), {w:.0} x {h:.0} mm", path.display()))
}

pub fn init_config(path: &Path) -> Result<()> {
    EngineConfig::default().save(path)?;
    info!(path = %path.display(), "Default configuration written");
    Ok(())
}

fn prepare(options: &Options, args: &LetterArgs) -> Result<(EngineConfig, Parties, NaiveDate)> {
    let config = match &options.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    let parties: Parties = read_json(&args.parties)?;
    let today = match args.date.as_deref() {
        Some(raw) => calendar::parse_date(raw)
            .ok_or_else(|| WarkatError::InvalidRecord(format!("unrecognised date `{raw}`")))?,
        None => Local::now().date_naive(),
    };
    Ok((config, parties, today))
}

#[instrument(skip_all, fields(kind = fields.kind()))]
fn write_letter<M: LetterModel>(
    options: &Options,
    config: &EngineConfig,
    fields: &M,
) -> Result<Written> {
    let engine = LetterEngine::from_config(config)?;
    let assets = RenderAssets {
        logo: options.logo.as_deref().and_then(load_logo),
    };
    let pdf = render_pdf(&engine, fields, &assets)?;
    let path = write_pdf(&pdf, &options.out)?;
    Ok(Written { path, pdf })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = std::fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = data.len(), "Read input");
    serde_json::from_str(&data)
        .map_err(|err| WarkatError::InvalidRecord(format!("{}: {}", path.display(), err)))
}
