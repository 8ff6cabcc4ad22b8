use anyhow::Context as _;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use macsim::Sweep;
use macsim_core::{RateSweep, SimConfiguration, defaults};

/// Compare CSMA and MACA medium access under the hidden-node problem.
///
/// Runs both engines over a range of frame-arrival rates on the same
/// seeded randomness and prints the delivered/lost counts per rate.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Sweep expression: start rate, end rate and step count.
    #[arg(long, default_value = "5%..50%x10")]
    sweep: RateSweep,

    /// Simulation horizon, in slots.
    #[arg(long, default_value_t = defaults::DEFAULT_SIM_TIME)]
    sim_time: u64,

    /// Number of nodes on the medium.
    #[arg(long, default_value_t = defaults::DEFAULT_NUM_NODES)]
    nodes: usize,

    /// Index distance within which nodes sense each other.
    #[arg(long, default_value_t = defaults::DEFAULT_VISIBILITY_RANGE)]
    visibility_range: usize,

    /// Slots a transmission occupies the medium for.
    #[arg(long, default_value_t = defaults::DEFAULT_FRAME_DURATION)]
    frame_duration: u64,

    /// Upper bound (inclusive) of the random backoff window, in slots.
    #[arg(long, default_value_t = defaults::DEFAULT_BACKOFF_MAX)]
    backoff_max: u64,

    /// Seed of the generator shared by every run of the sweep.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Print machine-readable CSV instead of the aligned table.
    #[arg(long)]
    csv: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = SimConfiguration {
        sim_time: args.sim_time,
        num_nodes: args.nodes,
        visibility_range: args.visibility_range,
        frame_duration: args.frame_duration,
        backoff_max: args.backoff_max,
    };

    let bar = ProgressBar::new(2 * args.sweep.steps() as u64).with_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} runs {elapsed}")
            .context("invalid progress bar template")?,
    );

    let points = Sweep::new(config)
        .set_seed(args.seed)
        .run_with(&args.sweep, |_| bar.inc(1))
        .context("sweep rejected the configuration")?;
    bar.finish_and_clear();

    if args.csv {
        println!("rate,csma_successes,csma_collisions,maca_successes,maca_collisions");
        for point in &points {
            println!(
                "{rate},{cs},{cc},{ms},{mc}",
                rate = point.rate.value(),
                cs = point.csma.successes,
                cc = point.csma.collisions,
                ms = point.maca.successes,
                mc = point.maca.collisions,
            );
        }
        return Ok(());
    }

    println!("{:>8}  {:>24}  {:>24}", "rate", "CSMA (delivered/lost)", "MACA (delivered/lost)");
    for point in &points {
        println!(
            "{rate:>8}  {cs:>15} / {cc:<6}  {ms:>15} / {mc:<6}",
            rate = point.rate.to_string(),
            cs = point.csma.successes,
            cc = point.csma.collisions,
            ms = point.maca.successes,
            mc = point.maca.collisions,
        );
    }

    Ok(())
}
