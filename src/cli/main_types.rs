use clap::Parser;

#[derive(Parser)]
#[command(name = "corp-report")]
#[command(about = "Interactive reporting over delimited corporate summary files")]
#[command(version)]
pub struct Cli {
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to the employee data file; prompted for interactively when omitted
    #[arg(short, long, env = "CORP_REPORT_DATA")]
    pub data: Option<String>,

    /// Directory holding config.toml (defaults to the platform config dir)
    #[arg(long)]
    pub config_dir: Option<String>,
}
