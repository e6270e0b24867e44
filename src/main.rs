// src/main.rs

use repeat::config::RawConfig;
use repeat::{cli, logging, run};

#[tokio::main]
async fn main() {
    let args = match cli::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            std::process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("repeat: {err:?}");
        std::process::exit(1);
    }

    match run(RawConfig::from(&args)).await {
        Ok(report) => std::process::exit(report.exit_code()),
        Err(err) => {
            eprintln!("repeat: {err}");
            std::process::exit(err.exit_code());
        }
    }
}
