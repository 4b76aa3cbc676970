use clap::Parser;
use count_text_cli::args::Args;
use count_text_cli::config::Config;
use count_text_cli::presentation;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    let json = args.json;
    let config = Config::from(args);

    match count_text_engine::run(&config) {
        Ok(outcome) => {
            if json {
                presentation::print_json(&outcome);
            } else {
                presentation::print_results(&outcome, &config);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}: {e}", presentation::PROGRAM);
            ExitCode::FAILURE
        }
    }
}
