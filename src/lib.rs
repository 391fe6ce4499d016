pub mod compare;
pub mod config;
pub mod error;
pub mod loader;
pub mod resolve;

use std::io::Write;
use std::time::{Duration, Instant};

pub use config::Config;
pub use error::{CullError, Result};
pub use resolve::Resolution;

/// Load `config.folder`, report and remove duplicates, writing the timing
/// line and one `<kept> <removed>` line per pair to `out`.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<Vec<Resolution>> {
    let (images, elapsed) = timed(|| loader::load_directory(&config.folder));
    let images = images?;
    writeln!(
        out,
        "Loaded {} images in {:.2} seconds",
        images.len(),
        elapsed.as_secs_f64()
    )
    .map_err(CullError::Report)?;

    let resolutions = resolve::plan(&images);
    log::info!(
        "Found {} duplicate pair(s) among {} images",
        resolutions.len(),
        images.len()
    );

    resolve::apply(&resolutions, config.dry_run(), out)?;
    Ok(resolutions)
}

/// Run `f()` and return its result with how long it took.
fn timed<T, F: FnOnce() -> T>(f: F) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}
