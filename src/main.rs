mod load;
mod predict;

use anyhow::Result;
use bpaf::{Args, Bpaf, ParseFailure};
use guess_stats::Summary;
use log::*;
use std::path::PathBuf;

const USAGE: &str = "Usage: guess [-v] FILE";

/// Predict a range for the next number in a series
#[derive(Debug, Clone, Bpaf)]
#[bpaf(options, version)]
struct Options {
    /// Log what's going on to stderr
    #[bpaf(short, long)]
    verbose: bool,
    /// A .txt file with one number per line
    #[bpaf(positional("FILE"))]
    file: PathBuf,
}

fn main() {
    let opts = match options().run_inner(Args::current_args()) {
        Ok(opts) => opts,
        Err(ParseFailure::Stdout(doc, _)) => {
            println!("{}", doc);
            std::process::exit(0)
        }
        Err(ParseFailure::Completion(x)) => {
            print!("{}", x);
            std::process::exit(0)
        }
        // Wrong number of arguments isn't considered a failure
        Err(ParseFailure::Stderr(_)) => {
            println!("{}", USAGE);
            std::process::exit(0)
        }
    };
    let level = if opts.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new().filter_level(level).init();

    match run(opts) {
        Ok(()) => (),
        Err(e) => {
            // Ignore EPIPE
            if let Some(e) = e.downcast_ref::<std::io::Error>() {
                if e.kind() == std::io::ErrorKind::BrokenPipe {
                    return;
                }
            }
            eprintln!("Error: {:#}", e);
            std::process::exit(1)
        }
    }
}

fn run(opts: Options) -> Result<()> {
    load::check_suffix(&opts.file)?;
    let loaded = load::load(&opts.file)?;
    for bad in &loaded.bad_lines {
        debug!("{}: skipping line {}", opts.file.display(), bad.line);
        println!("{}", bad);
    }
    let mut predictor = predict::Predictor::new(loaded.values)
        .ok_or_else(|| load::Error::Empty(opts.file.clone()))?;
    info!(
        "Loaded {} ({} lines skipped): {}",
        opts.file.display(),
        loaded.bad_lines.len(),
        Summary::of(predictor.data())
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    predictor.run(stdin.lock(), stdout.lock())?;
    info!("End of input; final dataset: {}", Summary::of(predictor.data()));
    Ok(())
}
