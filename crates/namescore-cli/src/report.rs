//! Command handlers for rendering and storing reports.
//!
//! Handlers return their output instead of printing so `main` owns stdout.

use std::path::Path;

use anyhow::{bail, Context};
use namescore_core::PresentationProfile;
use namescore_report::{render_report, RawReport, RenderContext, ReportView, Viewer};
use namescore_store::{ReportSession, ReportStore, StoredReport};
use serde_json::Value;

fn read_json(path: &Path) -> anyhow::Result<Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", path.display()))
}

fn to_output(view: &ReportView, pretty: bool) -> anyhow::Result<String> {
    let out = if pretty {
        serde_json::to_string_pretty(view)?
    } else {
        serde_json::to_string(view)?
    };
    Ok(out)
}

fn render_value(
    value: Value,
    viewer: Viewer,
    context: RenderContext,
    profile: &PresentationProfile,
) -> anyhow::Result<ReportView> {
    let raw = RawReport::from_value(value)?;
    let view = render_report(&raw, viewer, context, profile);
    tracing::info!(
        report_id = %view.report_id,
        sections = view.sections.len(),
        ?context,
        "rendered report"
    );
    Ok(view)
}

pub(crate) fn run_render(
    file: &Path,
    viewer: Viewer,
    context: RenderContext,
    profile: &PresentationProfile,
    pretty: bool,
) -> anyhow::Result<String> {
    let view = render_value(read_json(file)?, viewer, context, profile)
        .with_context(|| format!("failed to render {}", file.display()))?;
    to_output(&view, pretty)
}

pub(crate) fn run_load(
    store: &ReportStore,
    file: &Path,
    query: Option<&Path>,
) -> anyhow::Result<StoredReport> {
    let report = read_json(file)?;
    RawReport::from_value(report.clone())
        .with_context(|| format!("{} is not a report payload", file.display()))?;
    let query = query.map(read_json).transpose()?;

    match ReportSession::resolve(Some(report), query, store)? {
        ReportSession::Navigation(stored) => Ok(stored),
        other => bail!("report was not stored (session resolved to {other:?})"),
    }
}

pub(crate) fn run_current(
    store: &ReportStore,
    viewer: Viewer,
    context: RenderContext,
    profile: &PresentationProfile,
    pretty: bool,
) -> anyhow::Result<String> {
    let Some(stored) = ReportSession::resolve(None, None, store)?.into_report() else {
        bail!("session expired: no current report; run `namescore-cli load <file>` first");
    };
    let view = render_value(stored.report, viewer, context, profile)
        .context("stored report could not be rendered")?;
    to_output(&view, pretty)
}
