use std::path::PathBuf;

use clap::Parser;

/// Sigflow connection mapper - report bounded-hop connectivity between
/// clusters of circuit nodes
#[derive(Parser, Debug)]
#[command(name = "sigflow")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the linked design description (JSON)
    #[arg(short = 'f', long)]
    pub design_path: PathBuf,

    /// Path to the cluster specification: a JSON array of arrays of node or
    /// instance names, cluster id = array position
    #[arg(short = 'c', long)]
    pub clusters_path: PathBuf,

    /// Maximum hop distance to search
    #[arg(long, default_value_t = 2)]
    pub max_hop: i64,
}
