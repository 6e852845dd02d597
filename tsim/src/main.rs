#[macro_use]
extern crate clap;

use clap::Arg;
use std::process;
use tinker::ExitCode;

fn main() {
    let matches = app_from_crate!()
        .arg(
            Arg::with_name("PROGRAM")
                .help("Tinker object file (.tko) to run")
                .required(true)
                .index(1),
        )
        .get_matches();

    let program = matches.value_of("PROGRAM").unwrap();

    match tsim::run_file(program) {
        Ok(ExitCode::Halted) => {}
        Ok(exit_code) => {
            eprintln!("Simulation error: {}", exit_code);
            process::exit(1);
        }
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}
