// src/cli.rs
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::{consts::*, options::GenOptions};
use crate::error::Result;
use crate::runner::{self, Outcome};

/// Regenerate the armor/weapon dropdowns of the armory page from Armory.hpp.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// C++ header holding the item tables.
    #[arg(long, default_value = DEFAULT_HEADER_PATH)]
    pub header: PathBuf,

    /// Page to rewrite in place.
    #[arg(long, default_value = DEFAULT_HTML_PATH)]
    pub html: PathBuf,

    /// Print the regenerated page to stdout instead of writing it.
    #[arg(long)]
    pub dry_run: bool,

    /// Also write the normalized catalog as JSON to this path.
    #[arg(long, value_name = "PATH")]
    pub dump_catalog: Option<PathBuf>,

    /// Debug logging (RUST_LOG overrides).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn options(&self) -> GenOptions {
        GenOptions {
            header_path: self.header.clone(),
            html_path: self.html.clone(),
            dry_run: self.dry_run,
            catalog_out: self.dump_catalog.clone(),
        }
    }
}

/// Parse `std::env::args` and run.
pub fn run() -> Result<()> {
    let args = Args::parse();
    crate::log::init(args.verbose);
    run_with(&args.options())
}

pub fn run_with(opts: &GenOptions) -> Result<()> {
    let outcome = runner::run(opts)?;
    print!("{}", report(&outcome, &opts.html_path));
    Ok(())
}

/// Stdout text for a finished run.
fn report(outcome: &Outcome, html_path: &Path) -> String {
    match outcome {
        Outcome::Written { path, armor_categories, weapon_categories } => format!(
            "Wrote {} ({armor_categories} armor, {weapon_categories} weapon categories)\n",
            path.display()
        ),
        Outcome::DryRun(page) => page.clone(),
        Outcome::MarkersMissing(e) => {
            format!("WARNING: {e}; {} left untouched\n", html_path.display())
        }
    }
}
