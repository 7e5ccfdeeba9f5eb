use anyhow::Result;
use clap::Parser;
use squidsift::{report, scan, utils, Args, Config, ScanReport};
use tracing::error;

fn run(args: &Args) -> Result<ScanReport> {
    let config = Config::from_args(args)?;

    if args.reads_stdin() {
        scan::scan_stdin(&config)
    } else {
        scan::scan_file(&args.log_file, &config)
    }
}

fn print_report(report: &ScanReport, args: &Args) -> Result<()> {
    if args.json {
        println!("{}", report::render_json(report)?);
        return Ok(());
    }

    print!("{}", report::render_text(report, args.top));
    if args.summary {
        print!("{}", report::render_summary(report));
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    utils::setup_logging(args.verbose);

    utils::validate_args(&args)?;

    match run(&args) {
        Ok(report) => print_report(&report, &args),
        Err(e) => {
            error!(action = "abort", component = "main", error = %e, "Scan failed");
            eprintln!("{:#}", e);
            std::process::exit(1);
        }
    }
}
