use clap::Parser;
use dhp::model::Encoding;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dhp", version)]
#[command(about = "Interactive patient registry kept in a CSV or JSON file", long_about = None)]
pub struct Cli {
    /// Storage encoding to use without asking at startup
    #[arg(long, value_enum)]
    pub storage: Option<Encoding>,

    /// Directory holding the patient file and dhp.json (default: current directory)
    #[arg(long, env = "DHP_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
