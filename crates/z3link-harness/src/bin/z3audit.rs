//! Loads a Z3 shared library and audits it against the binding's symbol
//! catalogue.
//!
//! Exit code 1 means no usable library was found (a required entry point
//! is missing, or discovery exhausted every candidate).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use z3link_ffi::Z3Lib;
use z3link_harness::report;

const LOG_ENV: &str = "Z3LINK_LOG";

#[derive(Debug, Parser)]
#[command(
    name = "z3audit",
    about = "Audit a Z3 shared library against the z3link symbol catalogue"
)]
struct Args {
    /// Explicit library path; platform discovery is used when omitted.
    #[arg(long)]
    library: Option<PathBuf>,

    /// Emit the report as JSON.
    #[arg(long)]
    json: bool,
}

fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
    let env_filter = EnvFilter::builder()
        .with_env_var(LOG_ENV.to_string())
        .from_env_lossy();
    let fmt_layer = fmt::layer().with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    let loaded = match &args.library {
        Some(path) => Z3Lib::load(path),
        None => Z3Lib::load_auto(),
    };
    let lib = match loaded {
        Ok(lib) => lib,
        Err(err) => {
            eprintln!("z3audit: {err}");
            return ExitCode::FAILURE;
        }
    };

    let audit = report::audit(&lib);
    if args.json {
        match serde_json::to_string_pretty(&audit) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("z3audit: serializing report: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", report::render_text(&audit));
    }
    ExitCode::SUCCESS
}
