use std::process;

use clap::Parser;

use gridshell_devices::cli::Args;

fn main() {
    let args = Args::parse();
    match gridshell_devices::run(args) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e:#}");
            process::exit(2);
        }
    }
}
