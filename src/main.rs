extern crate eisats_view;

use std::path::PathBuf;
use clap::Parser;
use color_eyre::eyre::Result;
use log::info;

use eisats_view::config::ViewerConfig;
use eisats_view::driver::run;
use eisats_view::io::sequence::FrameSequence;
use eisats_view::visualize::window::WindowSink;

/// Plays back left image, optical flow, disparity and ego-motion of a stereo sequence.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Root directory of the sequence
    data_path: Option<PathBuf>,

    /// YAML file with loading and display settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// First frame to show
    #[arg(long)]
    start: Option<usize>,

    /// Maximum number of frames to show
    #[arg(long)]
    count: Option<usize>,

    /// Wait per frame in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ViewerConfig::load(path)?,
        None => ViewerConfig::default()
    };
    if let Some(start) = args.start {
        config.loading.starting_index = start;
    }
    if args.count.is_some() {
        config.loading.count = args.count;
    }
    if let Some(delay_ms) = args.delay_ms {
        config.display.frame_budget_ms = delay_ms;
    }

    if args.print_config {
        print!("{}", config.to_yaml_string()?);
        return Ok(());
    }

    let data_path = match args.data_path {
        Some(path) => path,
        None => {
            let program = std::env::args().next().unwrap_or_else(|| "eisats_view".to_string());
            eprintln!("Usage: {} [data path]", program);
            std::process::exit(-1);
        }
    };

    let sequence = FrameSequence::new(&data_path, config.loading.clone());
    let mut sink = WindowSink::new(config.display.quit_on_q);
    let termination = run(sequence, &mut sink, &config.display)?;
    info!("{:?}", termination);

    Ok(())
}
