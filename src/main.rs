use std::{
    env,
    process::{ExitCode, exit},
};

use doubling_rota::{VerbosityLevel, audit::AuditOptions, print_recipient, run_audit};
use log::LevelFilter;

/// Print usage and exit
fn usage() -> ! {
    eprintln!("Expects `doubling-rota [-v] <n> <name>...` or `doubling-rota [-v] --audit [samples]`.");
    exit(1);
}

/// Main
fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    // Check CLI args
    let mut args: Vec<String> = env::args().skip(1).collect();
    let logging_level = if args.first().is_some_and(|a| a == "-v") {
        args.remove(0);
        VerbosityLevel::All
    } else {
        VerbosityLevel::OnlyResult
    };

    match args.first().map(String::as_str) {
        // Strategy audit
        Some("--audit") => {
            if args.len() > 2 {
                usage();
            }
            let mut opts = AuditOptions::default();
            if let Some(samples) = args.get(1) {
                opts.random_samples = samples.parse().unwrap_or_else(|_| usage());
            }
            let exit_code = run_audit(&opts, logging_level);
            ExitCode::from(exit_code as u8)
        }
        // Single lookup
        Some(n) if args.len() >= 2 => {
            let n: i64 = n.parse().unwrap_or_else(|_| usage());
            match print_recipient(n, &args[1..], logging_level) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    log::error!("Lookup failed: {e}");
                    eprintln!("{e}.");
                    ExitCode::from(1)
                }
            }
        }
        _ => usage(),
    }
}
