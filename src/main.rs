use anyhow::Context;
use cohort_synth::RunConfig;
use log::info;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = RunConfig::default();
    info!(
        "Generating {} synthetic dataset(s) from {}",
        config.variants.len(),
        config.districts_path.display()
    );

    let start = Instant::now();
    let outputs = cohort_synth::run(&config).with_context(|| {
        format!(
            "Could not generate datasets from '{}'",
            config.districts_path.display()
        )
    })?;

    for output in &outputs {
        println!("\n--- Synthetic {} Data Generation Complete ---", output.variant);
        println!("{}", output.summary);
        println!("Dataset saved to '{}'", output.path.display());
    }

    info!(
        "Generated {} dataset(s) in {:?}",
        outputs.len(),
        start.elapsed()
    );
    Ok(())
}
