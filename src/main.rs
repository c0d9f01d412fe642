/*!
 * Quick Fit Simulator - Main Entry Point
 *
 * Seeds the allocator and hands the session to the interactive shell:
 * - Seed layout from a JSON file (argument or QUICKFIT_SEED_PATH), else the
 *   built-in default layout
 * - Line-oriented shell over stdin/stdout
 */

use log::info;
use quickfit::{QuickFitManager, SeedLayout, Shell};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let layout = match seed_source() {
        Some(path) => {
            info!("Loading seed layout from {path}");
            SeedLayout::from_path(&path)?
        }
        None => SeedLayout::default_layout(),
    };

    let manager = QuickFitManager::with_seed(layout);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Shell::new(manager).run(stdin.lock(), stdout.lock())?;

    Ok(())
}

fn seed_source() -> Option<String> {
    std::env::args()
        .nth(1)
        .or_else(|| std::env::var("QUICKFIT_SEED_PATH").ok())
}
