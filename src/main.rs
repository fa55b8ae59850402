use clap::Parser;
use kana_util::command::Cli;
use kana_util::options::Options;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command.execute(&Options::load()) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
