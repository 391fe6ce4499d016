use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "imgcull",
    version,
    about = "Finds and removes near-identical pictures in a folder"
)]
pub struct Config {
    /// The folder in which to remove identical pictures
    #[arg(value_name = "DIR")]
    pub folder: PathBuf,

    /// Only print which files would be removed
    #[arg(long, overrides_with = "no_dry_run")]
    dry_run: bool,

    /// Delete the worse copy of each duplicate pair (default)
    #[arg(long, overrides_with = "dry_run")]
    no_dry_run: bool,
}

impl Config {
    pub fn new(folder: impl Into<PathBuf>, dry_run: bool) -> Self {
        Self {
            folder: folder.into(),
            dry_run,
            no_dry_run: !dry_run,
        }
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run && !self.no_dry_run
    }
}
