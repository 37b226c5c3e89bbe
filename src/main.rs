use log::info;
use rand::rngs::{SmallRng, StdRng};
use rand::{RngCore, SeedableRng};
use std::io::Write;
use std::process::exit;

use seed_randomly::config::{demo_config_path, load_config, DemoConfig};
use seed_randomly::{seed_randomly, EntropySeedSequence, SeedEngine, SeedSequence};

fn main() {
    dotenv::dotenv().ok();
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(log::LevelFilter::Info);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();

    let config: DemoConfig = load_config(demo_config_path()).unwrap_or_else(|e| {
        info!("Will use default DemoConfig because = {:?}", e);
        DemoConfig::default()
    });

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = demo_seed_randomly(&mut out, &config) {
        eprintln!("Error = {}", e);
        exit(1);
    }
}

/// First outputs of a copy of the engine. The `rand` engines keep their state
/// private, so this is what gets shown instead.
fn state_view<R: RngCore + Clone>(engine: &R, words: usize) -> Vec<u32> {
    let mut probe = engine.clone();
    (0..words).map(|_| probe.next_u32()).collect()
}

fn log_engine<W: Write, R: RngCore + Clone>(
    out: &mut W,
    title: &str,
    engine: &R,
    config: &DemoConfig,
) -> Result<(), anyhow::Error> {
    writeln!(out, "{}:", title)?;
    writeln!(out, "{:?}\n", state_view(engine, config.preview_words))?;
    Ok(())
}

fn demo_engine<W: Write, R: RngCore + SeedableRng + Clone>(
    out: &mut W,
    name: &str,
    config: &DemoConfig,
) -> Result<(), anyhow::Error> {
    let mut engine = R::seed_from_u64(config.default_seed);
    info!("{} takes {} seed words", name, engine.seed_words());
    log_engine(out, &format!("{} - Default seeding", name), &engine, config)?;

    seed_randomly(&mut engine);
    log_engine(out, &format!("{} - Random seeding", name), &engine, config)?;

    seed_randomly(&mut engine);
    log_engine(
        out,
        &format!("{} - A different random seeding", name),
        &engine,
        config,
    )?;
    Ok(())
}

fn log_sequence<W: Write>(
    out: &mut W,
    title: &str,
    seq: &EntropySeedSequence,
) -> Result<(), anyhow::Error> {
    let mut params: Vec<u32> = Vec::new();
    seq.param(&mut params);
    writeln!(out, "{}:", title)?;
    writeln!(out, "sseq.size(): {}", seq.size())?;
    writeln!(out, "sseq.param(): {:?}\n", params)?;
    Ok(())
}

fn demo_seed_randomly<W: Write>(out: &mut W, config: &DemoConfig) -> Result<(), anyhow::Error> {
    demo_engine::<_, StdRng>(out, "StdRng", config)?;
    demo_engine::<_, SmallRng>(out, "SmallRng", config)?;

    // Other constructors work too, but the values passed in are thrown away.
    let primes = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29];
    let seq = EntropySeedSequence::from_range(primes.iter());
    log_sequence(out, "EntropySeedSequence - Construct from a range", &seq)?;

    let seq = EntropySeedSequence::from_list([-1i64, 0, 1]);
    log_sequence(out, "EntropySeedSequence - Construct from a list of i64", &seq)?;

    out.flush()?;
    Ok(())
}
