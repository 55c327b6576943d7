use clap::Parser;
use log::{error, info};

use std::path::PathBuf;

use du15surf::PlotConfig;

/// Plot the DU15 networks on the fsaverage5 surface: lateral, medial, anterior, posterior, dorsal and ventral
/// views of both hemispheres, cropped to the brain.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory with the <hemi>.DU15Net<n>_fsaverage5.mgz masks.
    #[arg(long = "roi-dir")]
    roi_dir: Option<PathBuf>,
    /// The fsaverage5 subject directory.
    #[arg(long = "fsaverage-dir")]
    fsaverage_dir: Option<PathBuf>,
    /// Output directory for the PNG files.
    #[arg(long = "out-dir", short)]
    out_dir: Option<PathBuf>,
    /// Verbosity, repeat for more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    let mut config = PlotConfig::default();
    if let Some(dir) = args.roi_dir {
        config.roi_dir = dir;
    }
    if let Some(dir) = args.fsaverage_dir {
        config.fsaverage_dir = dir;
    }
    if let Some(dir) = args.out_dir {
        config.out_dir = dir;
    }

    info!("Reading masks from {}.", config.roi_dir.display());
    match du15surf::run(&config) {
        Ok(written) => {
            println!("Wrote {} images to {}.", written.len(), config.out_dir.display());
        }
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
