//! relgraph CLI: offline tooling around the graph store client.
//!
//! Usage:
//!   relgraph load <csv> [--limit N] [--seed S] [--out script.ngql]
//!   relgraph subgraph <seed> [--response result.json] [--format json|graphml]
//!   relgraph repair <graphml>

use clap::{Parser, Subcommand, ValueEnum};
use relgraph::load::{read_rows, BulkLoader, RowLimit};
use relgraph::storage::{ResultSet, Session};
use relgraph::{graphml, ClientConfig, ClientError, Reply, ScriptSession, SubgraphQuery, SubgraphView};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "relgraph",
    version,
    about = "Graph store client: nGQL load scripts, subgraph queries, GraphML export"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Path to a YAML config file (default: ~/.config/relgraph/config.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log filter, overridden by RUST_LOG
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Turn a CSV of (event_id, person_a, person_b) rows into an nGQL load script
    Load {
        /// CSV input file
        csv: PathBuf,
        /// Load a random sample of this many rows
        #[arg(long)]
        limit: Option<usize>,
        /// Seed for the sample (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,
        /// Write the script here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        /// The CSV has no header row
        #[arg(long)]
        no_header: bool,
    },
    /// Print a subgraph query, or render a captured response to it
    Subgraph {
        /// Seed vertex id
        seed: String,
        /// JSON result set captured from the store
        #[arg(long)]
        response: Option<PathBuf>,
        #[arg(long, value_enum, default_value = "json")]
        format: Format,
    },
    /// Decode numeric character references in a GraphML document
    Repair {
        /// GraphML file
        file: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Graphml,
}

impl From<Format> for SubgraphView {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => SubgraphView::Structured,
            Format::Graphml => SubgraphView::Graphml,
        }
    }
}

fn print_reply(reply: &Reply) {
    match reply.to_json() {
        Ok(json) => eprintln!("{}", json),
        Err(e) => eprintln!("Error: cannot serialize reply: {}", e),
    }
}

async fn cmd_load(
    config: ClientConfig,
    csv: &Path,
    limit: Option<usize>,
    out: Option<&Path>,
    has_headers: bool,
) -> i32 {
    let rows = match File::open(csv) {
        Ok(file) => match read_rows(BufReader::new(file), has_headers) {
            Ok(rows) => rows,
            Err(e) => {
                print_reply(&Reply::from(&ClientError::from(e)));
                return 1;
            }
        },
        Err(e) => {
            eprintln!("Error: cannot open '{}': {}", csv.display(), e);
            return 1;
        }
    };

    let session: Arc<dyn Session> = match out {
        Some(path) => match File::create(path) {
            Ok(file) => Arc::new(ScriptSession::new(file)),
            Err(e) => {
                eprintln!("Error: cannot create '{}': {}", path.display(), e);
                return 1;
            }
        },
        None => Arc::new(ScriptSession::stdout()),
    };

    let loader = BulkLoader::new(session.clone(), config);
    let result = loader
        .load(rows, RowLimit::from_option(limit))
        .await
        .map_err(ClientError::from);
    let flushed = session.release().await;

    let reply = match (&result, flushed) {
        (Ok(_), Err(e)) => Reply::from(&ClientError::from(e)),
        _ => Reply::from_load(&result),
    };
    print_reply(&reply);
    if reply.is_success() {
        0
    } else {
        1
    }
}

fn read_response(path: &Path) -> Result<ResultSet, String> {
    let file = File::open(path).map_err(|e| format!("cannot open '{}': {}", path.display(), e))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| format!("'{}' is not a result set: {}", path.display(), e))
}

fn cmd_subgraph(config: &ClientConfig, seed: &str, response: Option<&Path>, view: SubgraphView) -> i32 {
    let query = SubgraphQuery::from(seed)
        .in_space(&config.space)
        .label_key(&config.label_key);

    let Some(path) = response else {
        println!("{}", query.to_ngql());
        return 0;
    };

    let result = match read_response(path) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let rendered = query
        .parse(&result)
        .map_err(ClientError::from)
        .and_then(|subgraph| subgraph.render(view).map_err(ClientError::from));

    match rendered.map(|output| output.to_text()) {
        Ok(Ok(text)) => {
            println!("{}", text);
            0
        }
        Ok(Err(e)) => {
            eprintln!("Error: {}", e);
            1
        }
        Err(e) => {
            print_reply(&Reply::from(&e));
            1
        }
    }
}

fn cmd_repair(file: &Path) -> i32 {
    match std::fs::read_to_string(file) {
        Ok(text) => {
            print!("{}", graphml::repair_numeric_references(&text));
            0
        }
        Err(e) => {
            eprintln!("Error: cannot read '{}': {}", file.display(), e);
            1
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = relgraph::logging::init_logging(&cli.log_level) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let mut config = match ClientConfig::resolve(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let code = match cli.command {
        Commands::Load {
            csv,
            limit,
            seed,
            out,
            no_header,
        } => {
            if seed.is_some() {
                config.sample_seed = seed;
            }
            cmd_load(config, &csv, limit, out.as_deref(), !no_header).await
        }
        Commands::Subgraph {
            seed,
            response,
            format,
        } => cmd_subgraph(&config, &seed, response.as_deref(), format.into()),
        Commands::Repair { file } => cmd_repair(&file),
    };
    std::process::exit(code);
}
