// src/main.rs

use rundag::{cli, logging};

fn main() {
    let args = cli::parse();

    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("rundag error: {err:?}");
        std::process::exit(1);
    }

    if let Err(err) = rundag::run(args) {
        eprintln!("rundag error: {err:#}");
        std::process::exit(err.exit_code());
    }
}
