use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;
use raw_frame_viewer::logger;
use raw_frame_viewer::raw_viewer::session::{DEFAULT_CAMERA_CONFIG_FILE, DEFAULT_FPS};
use raw_frame_viewer::raw_viewer::{MinifbDisplay, PlaybackController, Session, ViewerConfig};

use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(author, version, about = "Frame-by-frame viewer for raw color/depth/motion captures")]
struct Args {
    /// Folder holding camera_config.csv and the .raw captures
    data_dir: PathBuf,

    /// Camera name as listed in the camera config (spaces allowed)
    camera: String,

    /// Playback rate; also bounds how long each key poll waits
    #[arg(long, default_value_t = DEFAULT_FPS)]
    fps: u32,

    /// Camera config file name inside the data folder
    #[arg(long, default_value = DEFAULT_CAMERA_CONFIG_FILE)]
    config: String,

    /// Frame index to show first
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Caption font magnification
    #[arg(long, default_value_t = 2)]
    caption_scale: usize,

    /// Log decode statistics
    #[arg(short, long)]
    verbose: bool,
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = ViewerConfig::builder()
        .fps(args.fps)
        .camera_config_file(args.config)
        .start_index(args.start)
        .caption_scale(args.caption_scale)
        .build();

    let session = Session::open(&args.data_dir, &args.camera, config)
        .with_context(|| format!("cannot start session for camera {:?}", args.camera))?;
    let mut display = MinifbDisplay::new(session.window_title());
    let mut controller = PlaybackController::new(session);

    let end = controller.run(&mut display)?;
    info!(
        "Stopped at frame {} after {} renders",
        end.final_index, end.frames_rendered
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    logger::init(args.verbose);

    info!("Starting raw frame viewer...");
    info!("Data folder: {}", args.data_dir.display());
    info!("Camera: {}", args.camera);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
