use clap::Parser;
use cli::Cli;
use frame_classification::main::FrameClassification;
use library::logger::{impl_console::LoggerConsole, interface::Logger};
use std::sync::{Arc, Mutex};
use text_overlay::impl_imageproc::TextOverlayImageproc;

mod cli;
mod config;
mod frame_classification;
mod frame_sink;
mod frame_source;
mod image_classifier;
mod library;
mod text_overlay;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Cli::parse().into_config()?;

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let image_classifier = image_classifier::open(config.model.clone(), logger.clone())?;

    let frame_source = frame_source::open(&config, logger.clone())?;

    let (frame_sink, display_window) = frame_sink::open(&config, logger.clone())?;

    let text_overlay = Arc::new(TextOverlayImageproc::new(
        &config.font_path,
        config.font_size,
    )?);

    let frame_classification = FrameClassification::new(
        config,
        logger.clone(),
        image_classifier,
        frame_source,
        frame_sink,
        text_overlay,
        Arc::new(Mutex::new(std::io::stdout())),
    );

    let result = match display_window {
        Some(display_window) => {
            let pipeline = std::thread::spawn(move || frame_classification.run());
            display_window.run()?;
            pipeline
                .join()
                .map_err(|_| "frame classification thread panicked")?
        }
        None => frame_classification.run(),
    };

    if let Err(e) = result {
        logger.error(&format!("Frame classification failed: {}", e))?;
        return Err(e);
    }

    logger.info("Shutting down")?;

    Ok(())
}
