mod args;
mod report;

use clap::Parser;
use log::{debug, LevelFilter};
use snafu::ErrorCompat;

use crate::args::Args;
use crate::report::ReportOptions;

fn main() {
    let args = Args::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if args.verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
    debug!("args: {:?}", args);

    let options = match ReportOptions::from_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Invalid arguments: {}", e);
            std::process::exit(2);
        }
    };

    if let Err(e) = report::run_report(&options) {
        eprintln!("An error occured: {}", e);
        for cause in e.iter_chain().skip(1) {
            eprintln!("  caused by: {}", cause);
        }
        if let Some(bt) = ErrorCompat::backtrace(&e) {
            eprintln!("trace: {}", bt);
        }
        std::process::exit(1);
    }
}
