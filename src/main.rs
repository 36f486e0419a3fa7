use clap::Parser;
use corp_report::cli::main_types::Cli;
use corp_report::cli::session::{Session, prompt_with_default};
use corp_report::storage::config::Config;
use corp_report::storage::delimited::load_records;
use corp_report::utils::logging::{log_error, print_verbose};
use std::io;
use std::path::{Path, PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load Config
    let config_path = cli
        .config_dir
        .as_ref()
        .map(|dir| PathBuf::from(dir).join("config.toml"));

    let config = match Config::load(config_path.clone()) {
        Ok(config) => config,
        Err(err) => {
            log_error(&format!("loading config: {}", err));
            std::process::exit(1);
        }
    };

    // Seed a config file on first run when an explicit directory was given
    if let Some(path) = &config_path {
        if !path.exists() {
            if let Err(err) = config.save(Some(path.clone())) {
                print_verbose(cli.verbose, &format!("Failed to save default config: {}", err));
            }
        }
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    // Resolve the data file: flag/env first, interactive prompt otherwise
    let data_path = match cli.data {
        Some(path) => path,
        None => {
            match prompt_with_default(&mut input, &mut output, "Data file name", config.data_file())?
            {
                Some(path) => path,
                None => return Ok(()),
            }
        }
    };

    let records = match load_records(Path::new(&data_path), config.delimiter()) {
        Ok(records) => records,
        Err(err) => {
            log_error(&err.to_string());
            std::process::exit(1);
        }
    };
    print_verbose(
        cli.verbose,
        &format!("Loaded {} records from {}", records.len(), data_path),
    );

    let mut session = Session::new(records, &config, cli.verbose);
    session.run(input, output)?;

    Ok(())
}
