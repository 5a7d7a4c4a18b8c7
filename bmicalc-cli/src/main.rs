use std::error::Error;
use std::io::{self, IsTerminal};
use std::path::Path;
use std::process::ExitCode;

use bmicalc_cli::config::Config;
use bmicalc_cli::form::StdinInput;
use bmicalc_cli::{Args, Calculator};
use clap::Parser;
use log::{debug, info, LevelFilter};
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};

const LOG_CONFIG: &str = "log4rs.yml";

fn init_logging() -> Result<(), Box<dyn Error>> {
    if Path::new(LOG_CONFIG).exists() {
        log4rs::init_file(LOG_CONFIG, Default::default())?;
    } else {
        let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
        let config = log4rs::config::Config::builder()
            .appender(Appender::builder().build("stderr", Box::new(stderr)))
            .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
        log4rs::init_config(config)?;
    }
    Ok(())
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    init_logging()?;
    let args = Args::parse();

    let config = Config::load(args.config.as_deref())?;
    let mut calculator = Calculator::new(config, Box::new(StdinInput::new()));

    match calculator.run(&args) {
        Ok(report) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else if io::stdout().is_terminal() {
                print!("{}", report.render(true));
            } else {
                print!("{}", report);
            }
            info!("Done");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            debug!("Calculation failed: {:?}", e);
            eprintln!("{}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
