use std::{io, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use navmenu_jekyllify::{convert_site, Options};
use tracing::Level;

/// Move legacy pages under `pt/` and `en/` onto the shared Jekyll layout
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The site root
    #[arg(default_value = ".")]
    root: PathBuf,
    /// Title for pages without a `<title>`
    #[arg(long, default_value = "Untitled")]
    default_title: String,
    /// Report which pages would change without writing them
    #[arg(long)]
    dry_run: bool,
    /// Log each page. Repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let options = Options {
        default_title: args.default_title,
        dry_run: args.dry_run,
    };
    let changed = convert_site(&args.root, &options)?;

    if options.dry_run {
        println!("Would convert {changed} files.");
    } else {
        println!("Converted {changed} files.");
    }

    Ok(())
}
