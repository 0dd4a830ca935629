//! hpograph CLI
//!
//! Loads an OBO file into SQLite and answers ancestor queries against it.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hpograph::db_query::load_obo_into_db;
use hpograph::{RustHpo, TermID};

#[derive(Parser)]
#[command(name = "hpograph")]
#[command(version)]
#[command(about = "Ancestor chains and minimised ancestor graphs for is-a ontologies", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an OBO file into the sqlite term table
    Load {
        /// The obo file to be converted
        #[arg(long, default_value = "data/hp.obo")]
        obo: PathBuf,
        /// Sqlite database name
        #[arg(long, default_value = "data/hpo.db")]
        db: PathBuf,
    },
    /// Print the first-parent ancestor chain of a term
    Ancestors {
        #[arg(long, default_value = "data/hpo.db")]
        db: PathBuf,
        /// Follow every parent instead of only the first
        #[arg(long)]
        all: bool,
        term: TermID,
    },
    /// Print the minimised ancestor graph of a list of terms
    MinGraph {
        #[arg(long, default_value = "data/hpo.db")]
        db: PathBuf,
        #[arg(required = true)]
        terms: Vec<TermID>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Load { obo, db } => {
            load_obo_into_db(&obo, &db)
                .with_context(|| format!("failed to load {} into {}", obo.display(), db.display()))?;
            println!("===done===");
        }
        Commands::Ancestors { db, all, term } => {
            let hpo = RustHpo::open(&db)?;
            let ancestors = if all {
                hpo.get_ancestor_closure(&term)?
            } else {
                hpo.get_ancestors(&term)?
            };
            println!("{}", serde_json::to_string_pretty(&ancestors)?);
        }
        Commands::MinGraph { db, terms } => {
            let hpo = RustHpo::open(&db)?;
            let graph = hpo.get_min_graph(&terms)?;
            println!("{}", serde_json::to_string_pretty(&graph)?);
        }
    }
    Ok(())
}
