use anyhow::Context;
use clap::Parser;
use generator::profile::{
    build_synthetic_from_args, sample_beams, SAMPLE_HEADING_DEG, SAMPLE_TIMESTAMP,
};
use log::info;
use report::console;
use sonarcore::SonarPing;
use std::path::PathBuf;
use std::process::ExitCode;
use workflow::config::{DemoConfig, DemoVariant};
use workflow::runner::{ReadBack, Runner};

mod generator;
mod report;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Writes a sonar ping to disk and reads it back")]
struct Args {
    /// Load the demo config from YAML (overrides the options below)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Binary file to write and read back
    #[arg(long, default_value = "data.bin")]
    output: PathBuf,
    #[arg(long, value_enum, default_value_t = DemoVariant::Verify)]
    variant: DemoVariant,
    /// Depth threshold in meters for the filtered listing
    #[arg(long, default_value_t = 100.0)]
    min_depth: f64,
    /// Replace the sample beams with N generated ones
    #[arg(long)]
    synthetic_beams: Option<usize>,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Also print the decoded ping as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    let args = Args::parse();

    let config = if let Some(path) = args.config {
        DemoConfig::load(path)?
    } else {
        DemoConfig::from_args(
            args.output,
            args.variant,
            args.min_depth,
            args.synthetic_beams,
            args.seed,
        )
    };

    println!("{}", console::step_banner(1, "Creating Data in Memory"));
    let ping = create_ping(&config)?;

    let runner = Runner::new(config.clone());
    println!();
    println!(
        "{}",
        console::step_banner(2, "Writing to Binary File (Serialization)")
    );
    let result = match runner.execute(&ping) {
        Ok(result) => result,
        Err(err) => {
            println!("Error: Could not open file for writing.");
            eprintln!("{:#}", err);
            return Ok(ExitCode::FAILURE);
        }
    };
    println!(
        "Success: Data saved to '{}' ({} bytes).",
        config.output.display(),
        result.bytes_written
    );

    println!();
    println!(
        "{}",
        console::step_banner(3, "Reading Back from File (Verification)")
    );
    match result.readback {
        ReadBack::Decoded(decoded) => {
            println!("{}", console::header_line(&decoded));
            report_decoded(&config, &ping, &decoded);
            if args.json {
                let json = serde_json::to_string_pretty(&decoded)
                    .context("serializing decoded ping")?;
                println!("{}", json);
            }
        }
        ReadBack::Failed(reason) => {
            println!("Error: Could not open file for reading.");
            eprintln!("{}", reason);
        }
    }

    info!(
        "store metrics: saved {}, loaded {}, bytes {}, errors {}",
        result.metrics.saved,
        result.metrics.loaded,
        result.metrics.bytes_written,
        result.metrics.errors
    );
    Ok(ExitCode::SUCCESS)
}

fn create_ping(config: &DemoConfig) -> anyhow::Result<SonarPing> {
    if let Some(count) = config.synthetic_beams {
        let ping = build_synthetic_from_args(count, config.seed)?;
        println!("Generated a ping with {} beams.", ping.beam_count());
        return Ok(ping);
    }

    let beams = sample_beams();
    match config.variant {
        DemoVariant::Verify => {
            let ping = SonarPing::with_beams(SAMPLE_TIMESTAMP, SAMPLE_HEADING_DEG, beams);
            println!("Created a ping with {} beams.", ping.beam_count());
            Ok(ping)
        }
        DemoVariant::Filter => {
            let mut ping = SonarPing::new(SAMPLE_TIMESTAMP, SAMPLE_HEADING_DEG);
            let mut beams = beams.into_iter();
            for beam in beams.by_ref().take(3) {
                ping.push_beam(beam);
            }
            println!("Created a ping with {} beams.", ping.beam_count());
            for beam in beams {
                ping.push_beam(beam);
                println!(
                    "Added beam {}; ping now has {} beams.",
                    beam.id,
                    ping.beam_count()
                );
            }
            Ok(ping)
        }
    }
}

fn report_decoded(config: &DemoConfig, original: &SonarPing, decoded: &SonarPing) {
    match config.variant {
        DemoVariant::Verify => {
            println!();
            println!("--- Verifying Beam Data ---");
            for line in console::verify_lines(decoded) {
                println!("{}", line);
            }
            if decoded == original {
                println!("Round trip matches the in-memory ping.");
            } else {
                println!("Warning: decoded ping differs from the in-memory ping.");
            }
        }
        DemoVariant::Filter => {
            let filter = config.depth_filter();
            println!();
            println!("--- Beams deeper than {}m ---", filter.min_depth_m());
            for line in console::filtered_lines(decoded, &filter) {
                println!("{}", line);
            }
        }
    }
}
