//! Listing-to-matrix pipeline.

use std::path::Path;
use std::time::Instant;

use lh_core::Timer;
use lh_network::{Network, parse_listing};
use lh_results::{MatrixWriter, UnreachableMarker};
use lh_transfer::{ClosureStrategy, TransferEngine};
use tracing::info;

use crate::config::Settings;
use crate::error::{AppError, AppResult};

/// Request to compute a station matrix.
pub struct ComputeRequest<'a> {
    pub input: &'a Path,
    /// Write here; when `None` the rendered table is returned instead.
    pub output: Option<&'a Path>,
    pub delimiter: char,
    pub unreachable: UnreachableMarker,
    pub strategy: ClosureStrategy,
}

impl<'a> ComputeRequest<'a> {
    /// Build a request from loaded settings. Fails if no input is configured.
    pub fn from_settings(settings: &'a Settings) -> AppResult<Self> {
        let input = settings
            .input
            .as_deref()
            .ok_or_else(|| AppError::InvalidInput("no input listing configured".to_string()))?;
        Ok(Self {
            input,
            output: settings.output.as_deref(),
            delimiter: settings.delimiter,
            unreachable: settings.unreachable.clone(),
            strategy: settings.closure_strategy(),
        })
    }
}

/// Wall time per phase, in seconds.
#[derive(Debug, Clone, Default)]
pub struct RunTimingSummary {
    pub load_time_s: f64,
    pub adjacency_time_s: f64,
    pub closure_time_s: f64,
    pub projection_time_s: f64,
    pub write_time_s: f64,
    pub total_time_s: f64,
}

/// Counts describing a finished run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub line_count: usize,
    pub station_count: usize,
    pub membership_count: usize,
    pub direct_links: usize,
    /// Ordered station pairs with no connecting path.
    pub unreachable_pairs: usize,
    pub timing: RunTimingSummary,
}

#[derive(Debug, Clone)]
pub struct ComputeResponse {
    pub summary: RunSummary,
    /// The table text when the request had no output path.
    pub rendered: Option<String>,
}

/// Read and parse a listing file.
pub fn load_network(path: &Path) -> AppResult<Network> {
    let text = std::fs::read_to_string(path).map_err(|e| AppError::ListingRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(parse_listing(&text)?)
}

/// Run load, adjacency, closure, projection, and write. Any failure aborts
/// the run before anything is written.
pub fn compute(request: &ComputeRequest<'_>) -> AppResult<ComputeResponse> {
    let run_start = Instant::now();
    let mut timing = RunTimingSummary::default();

    // Validate output settings before doing any work
    let writer = MatrixWriter::new(request.delimiter, request.unreachable.clone())?;
    let engine = TransferEngine::new(request.strategy);

    let timer = Timer::start("load");
    let network = load_network(request.input)?;
    timing.load_time_s = timer.stop();
    info!(
        lines = network.line_count(),
        stations = network.station_count(),
        "network loaded"
    );

    let timer = Timer::start("adjacency");
    let mut lines = engine.adjacency(&network);
    let direct_links = lines.edge_count();
    timing.adjacency_time_s = timer.stop();

    let timer = Timer::start("closure");
    engine.close(&mut lines);
    timing.closure_time_s = timer.stop();

    let timer = Timer::start("projection");
    let stations = engine.project(&network, &lines)?;
    timing.projection_time_s = timer.stop();

    let timer = Timer::start("write");
    let rendered = match request.output {
        Some(path) => {
            writer
                .write_file(path, &network, &stations)
                .map_err(|e| AppError::MatrixWrite {
                    path: path.to_path_buf(),
                    source: e,
                })?;
            None
        }
        None => Some(writer.render(&network, &stations)?),
    };
    timing.write_time_s = timer.stop();
    timing.total_time_s = run_start.elapsed().as_secs_f64();

    let summary = RunSummary {
        line_count: network.line_count(),
        station_count: network.station_count(),
        membership_count: network.membership_count(),
        direct_links,
        unreachable_pairs: stations.unreachable_pairs(),
        timing,
    };
    info!(
        direct_links = summary.direct_links,
        unreachable_pairs = summary.unreachable_pairs,
        total_s = summary.timing.total_time_s,
        "transfer matrix computed"
    );

    Ok(ComputeResponse { summary, rendered })
}
