use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use pathgram_cli::commands::{query::handle_query, route::handle_route, stats::handle_stats};
use pathgram_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Shortest paths over weighted edge lists")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a route locally from an edge-list file.
    Route {
        /// Edge-list file (`source target weight` per line).
        #[arg(long, env = "GRAPH_FILE", default_value = "graph.txt")]
        graph: PathBuf,
        /// Origin node.
        #[arg(long = "from")]
        from: String,
        /// Destination node.
        #[arg(long = "to")]
        to: String,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Ask a running pathgram server for a route.
    Query {
        /// Server address, e.g. 127.0.0.1:9000.
        #[arg(long)]
        server: SocketAddr,
        /// Origin node.
        #[arg(long = "from")]
        from: String,
        /// Destination node.
        #[arg(long = "to")]
        to: String,
        /// How long to wait for the reply.
        #[arg(long, default_value_t = 2000)]
        timeout_ms: u64,
    },
    /// Validate an edge-list file and print its size.
    Stats {
        /// Edge-list file.
        #[arg(long, env = "GRAPH_FILE", default_value = "graph.txt")]
        graph: PathBuf,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Route {
            graph,
            from,
            to,
            format,
        } => handle_route(&graph, &from, &to, format),
        Command::Query {
            server,
            from,
            to,
            timeout_ms,
        } => handle_query(server, &from, &to, Duration::from_millis(timeout_ms)),
        Command::Stats { graph } => handle_stats(&graph),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
