//! Summary command implementation
//!
//! Prints moments and tail mass of both normal samplers.

use prng_quality::density::{norm_two_sided_tail, SeriesSummary};
use prng_quality::{DistributionSampler, EngineKind, SamplingStrategy};
use tracing::info;

use crate::config::SummaryConfig;
use crate::Result;

/// Applies command line overrides to the configured summary parameters.
pub fn resolve(
    config: &SummaryConfig,
    engine: Option<&str>,
    count: Option<usize>,
    seed: Option<u64>,
) -> Result<SummaryConfig> {
    let mut resolved = config.clone();
    if let Some(name) = engine {
        resolved.engine = name.parse::<EngineKind>()?;
    }
    if let Some(count) = count {
        resolved.count = count;
    }
    if let Some(seed) = seed {
        resolved.seed = seed;
    }
    Ok(resolved)
}

/// Summarises both strategies, exact first.
pub fn summarise(params: &SummaryConfig) -> Result<Vec<(SamplingStrategy, SeriesSummary)>> {
    SamplingStrategy::ALL
        .iter()
        .map(|&strategy| {
            let series = DistributionSampler::new(params.engine, strategy)
                .seed(params.seed)
                .generate(params.count)?;
            let summary = SeriesSummary::from_series(&series, params.tail_threshold)?;
            Ok((strategy, summary))
        })
        .collect()
}

/// Run the summary command
pub fn run(
    config: &SummaryConfig,
    engine: Option<&str>,
    count: Option<usize>,
    seed: Option<u64>,
) -> Result<()> {
    let params = resolve(config, engine, count, seed)?;
    info!("Summarising normal samplers...");
    info!("  Engine: {}", params.engine);
    info!("  Samples: {}", params.count);
    info!("  Seed: {}", params.seed);

    let expected = norm_two_sided_tail(params.tail_threshold);
    println!(
        "{:<12} {:>10} {:>10} {:>12} {:>12}",
        "strategy",
        "mean",
        "variance",
        format!("|z|>{}", params.tail_threshold),
        "deviation"
    );
    for (strategy, summary) in summarise(&params)? {
        println!(
            "{:<12} {:>10.5} {:>10.5} {:>12.7} {:>12.7}",
            strategy.name(),
            summary.mean,
            summary.variance,
            summary.tail_fraction,
            summary.tail_deviation()
        );
    }
    println!("{:<12} {:>10.5} {:>10.5} {:>12.7}", "theoretical", 0.0, 1.0, expected);
    Ok(())
}
