use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info_span;

use portal_cli::server::serve;
use portal_core::{BuildReport, RecordStore};
use portal_model::{LookupError, StudentRecord};
use portal_normalization::NormalizationTables;

use crate::cli::{LookupArgs, ServeArgs, SourceArgs};

pub struct CheckResult {
    pub records: usize,
    pub report: BuildReport,
}

/// Builds the store strictly: a sheet that cannot be loaded is an error here,
/// not an empty store.
pub fn run_check(args: &SourceArgs) -> Result<CheckResult> {
    let span = info_span!("check", source = %args.source.display());
    let _guard = span.enter();
    let (store, report) = RecordStore::build(&args.source, &NormalizationTables::default())
        .with_context(|| format!("load results sheet {}", args.source.display()))?;
    Ok(CheckResult {
        records: store.len(),
        report,
    })
}

/// Resolves one query against a freshly built store.
///
/// Loading follows the service: an unreadable sheet yields an empty store,
/// so the lookup reports not found after the critical log entry.
pub fn run_lookup(args: &LookupArgs) -> std::result::Result<StudentRecord, LookupError> {
    let store = RecordStore::load_or_empty(&args.source.source, &NormalizationTables::default());
    store.resolve(args.by.into(), &args.query).cloned()
}

pub fn run_serve(args: &ServeArgs) -> Result<()> {
    let store = Arc::new(RecordStore::load_or_empty(
        &args.source.source,
        &NormalizationTables::default(),
    ));
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("start async runtime")?;
    runtime
        .block_on(serve(args.bind, store))
        .with_context(|| format!("serve on {}", args.bind))
}
