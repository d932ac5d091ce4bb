use base58_address::command::{self, Command};
use base58_address::{Configuration, Error, Logger};
use std::{env, io, process};

fn execute() -> Result<(), Error> {
    let configuration = Configuration::new()?;
    let logger = Logger::new(!configuration.quiet());
    let args: Vec<String> = env::args().skip(1).collect();
    match Command::parse(&args, &configuration)? {
        Command::ValidateStream { max_version } => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            command::validate_stream(stdin.lock(), stdout.lock(), max_version, configuration.log_interval(), &logger)?;
        }
        other => {
            let result = command::run(&other, &logger)?;
            println!("{}", result);
        }
    }
    Ok(())
}

fn main() {
    if let Err(error) = execute() {
        eprintln!("{}", error);
        process::exit(1);
    }
}
