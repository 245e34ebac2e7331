//! Engines command implementation
//!
//! Lists the registered engine kinds.

use prng_quality::EngineRegistry;

use crate::Result;

/// Run the engines command
pub fn run() -> Result<()> {
    println!("{:<14} {:>22} {:>22}  description", "kind", "min", "max");
    for kind in EngineRegistry::kinds() {
        let range = kind.range();
        println!(
            "{:<14} {:>22} {:>22}  {}",
            kind.name(),
            range.min,
            range.max,
            kind.description()
        );
    }
    Ok(())
}
