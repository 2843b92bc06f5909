use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use lh_app::{AppResult, ComputeRequest, RunSummary, Settings, compute, query, run_service};
use lh_core::Transfers;
use lh_results::UnreachableMarker;
use lh_transfer::ClosureStrategy;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lh-cli")]
#[command(about = "linehop CLI - minimum line changes between every pair of stations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the station-to-station minimum transfer matrix
    Compute {
        /// Path to the line/station listing (overrides the settings file)
        listing: Option<PathBuf>,
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Settings YAML file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Field delimiter
        #[arg(long)]
        delimiter: Option<char>,
        /// Marker printed for unreachable pairs (number or text)
        #[arg(long)]
        unreachable: Option<UnreachableMarker>,
        /// Relax the line matrix on all cores
        #[arg(long)]
        parallel: bool,
    },
    /// Print every line with its stations in order
    Lines {
        /// Path to the line/station listing
        listing: PathBuf,
    },
    /// Compute minimum transfers for a single pair of stations
    Query {
        /// Path to the line/station listing
        listing: PathBuf,
        from: String,
        to: String,
    },
    /// Look up a pair in a previously written matrix
    Lookup {
        /// Path to the matrix file
        matrix: PathBuf,
        from: String,
        to: String,
        /// Field delimiter used when the matrix was written
        #[arg(long, default_value_t = ',')]
        delimiter: char,
        /// Unreachable marker used when the matrix was written
        #[arg(long, default_value = "-")]
        unreachable: UnreachableMarker,
    },
}

fn main() -> AppResult<()> {
    // Logs go to stderr so stdout can carry the matrix
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compute {
            listing,
            output,
            config,
            delimiter,
            unreachable,
            parallel,
        } => {
            let mut settings = match &config {
                Some(path) => lh_app::load_settings(path)?,
                None => Settings::default(),
            };
            if listing.is_some() {
                settings.input = listing;
            }
            if output.is_some() {
                settings.output = output;
            }
            if let Some(d) = delimiter {
                settings.delimiter = d;
            }
            if let Some(m) = unreachable {
                settings.unreachable = m;
            }
            settings.parallel_closure |= parallel;
            cmd_compute(&settings)
        }
        Commands::Lines { listing } => cmd_lines(&listing),
        Commands::Query { listing, from, to } => cmd_query(&listing, &from, &to),
        Commands::Lookup {
            matrix,
            from,
            to,
            delimiter,
            unreachable,
        } => cmd_lookup(&matrix, &from, &to, delimiter, &unreachable),
    }
}

fn cmd_compute(settings: &Settings) -> AppResult<()> {
    let request = ComputeRequest::from_settings(settings)?;
    let response = compute(&request)?;

    if let Some(table) = &response.rendered {
        emit_table(table, io::stdout().lock())?;
        info!(
            stations = response.summary.station_count,
            "station matrix written to stdout"
        );
    } else if let Some(path) = request.output {
        info!(
            path = %path.display(),
            stations = response.summary.station_count,
            unreachable = response.summary.unreachable_pairs,
            "compute finished"
        );
        eprintln!("✓ Matrix written to {}", path.display());
    }

    print_summary(&response.summary);
    Ok(())
}

fn emit_table<W: Write>(table: &str, mut out: W) -> AppResult<()> {
    out.write_all(table.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn print_summary(summary: &RunSummary) {
    let timing = &summary.timing;
    eprintln!("\nNetwork:");
    eprintln!("  Lines:        {}", summary.line_count);
    eprintln!("  Stations:     {}", summary.station_count);
    eprintln!("  Memberships:  {}", summary.membership_count);
    eprintln!("  Direct links: {}", summary.direct_links);
    if summary.unreachable_pairs > 0 {
        eprintln!("  Unreachable station pairs: {}", summary.unreachable_pairs);
    }

    eprintln!("\nTiming summary:");
    eprintln!("  Load:       {:.3}s", timing.load_time_s);
    eprintln!("  Adjacency:  {:.3}s", timing.adjacency_time_s);
    eprintln!("  Closure:    {:.3}s", timing.closure_time_s);
    eprintln!("  Projection: {:.3}s", timing.projection_time_s);
    eprintln!("  Write:      {:.3}s", timing.write_time_s);
    eprintln!("  Total:      {:.3}s", timing.total_time_s);
}

fn cmd_lines(listing: &Path) -> AppResult<()> {
    let network = run_service::load_network(listing)?;
    print!("{}", network.describe_lines());
    eprintln!(
        "{} lines, {} stations",
        network.line_count(),
        network.station_count()
    );
    Ok(())
}

fn cmd_query(listing: &Path, from: &str, to: &str) -> AppResult<()> {
    let network = run_service::load_network(listing)?;
    let transfers = query::min_transfers(&network, from, to, ClosureStrategy::Sequential)?;
    print_pair(from, to, transfers);
    Ok(())
}

fn cmd_lookup(
    matrix: &Path,
    from: &str,
    to: &str,
    delimiter: char,
    unreachable: &UnreachableMarker,
) -> AppResult<()> {
    let transfers = query::lookup_table(matrix, from, to, delimiter, unreachable)?;
    print_pair(from, to, transfers);
    Ok(())
}

fn print_pair(from: &str, to: &str, transfers: Transfers) {
    match transfers {
        Transfers::Reachable(d) => println!("{} -> {}: {} transfer(s)", from, to, d),
        Transfers::Unreachable => println!("{} -> {}: unreachable", from, to),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lh_app::AppError;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn emit_table_writes_everything() {
        let mut buf = Vec::new();
        emit_table(",a\na,0\n", &mut buf).unwrap();
        assert_eq!(buf, b",a\na,0\n");
    }

    #[test]
    fn emit_table_reports_write_failure() {
        let err = emit_table(",a\na,0\n", ClosedPipe).unwrap_err();
        assert!(matches!(err, AppError::Io(e) if e.kind() == io::ErrorKind::BrokenPipe));
    }
}
