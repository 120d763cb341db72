//! Contains CLI argument parsing structs.
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name of the example sketch to install as the firmware entry point
    #[arg(value_name = "ExampleName", required_unless_present = "list")]
    pub example: Option<String>,

    /// List the installable example sketches instead of installing one
    #[arg(short, long, conflicts_with = "example")]
    pub list: bool,

    /// Root of the firmware tree
    #[arg(long, value_name = "DIR", default_value = "firmware")]
    pub base_dir: PathBuf,
}
