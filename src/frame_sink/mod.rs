#[cfg(test)]
pub mod impl_fake;
pub mod impl_gui;
pub mod impl_image_file;
pub mod impl_null;
pub mod interface;

use crate::config::Config;
use crate::library::logger::interface::Logger;
use crate::library::resource_uri::ResourceUri;
use impl_gui::DisplayWindow;
use impl_image_file::FrameSinkImageFile;
use impl_null::FrameSinkNull;
use interface::FrameSink;
use std::sync::{Arc, Mutex};

/// Opens the configured output. A display output also returns the window that
/// has to be run on the main thread.
pub fn open(
    config: &Config,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Result<
    (Arc<Mutex<dyn FrameSink>>, Option<DisplayWindow>),
    Box<dyn std::error::Error + Send + Sync>,
> {
    let output = match &config.output {
        Some(output) => output,
        None => {
            let sink: Arc<Mutex<dyn FrameSink>> = Arc::new(Mutex::new(FrameSinkNull::new(logger)));
            return Ok((sink, None));
        }
    };

    let mut window = None;
    let sink: Arc<Mutex<dyn FrameSink>> = match ResourceUri::parse(output)? {
        ResourceUri::File(path) => Arc::new(Mutex::new(FrameSinkImageFile::new(&path, logger)?)),
        ResourceUri::Display(_) if config.headless => {
            Arc::new(Mutex::new(FrameSinkNull::new(logger)))
        }
        ResourceUri::Display(index) => {
            let (sink, display_window) = impl_gui::new_display(index);
            window = Some(display_window);
            Arc::new(Mutex::new(sink))
        }
        uri @ ResourceUri::V4l2(_) => {
            return Err(format!("{} cannot be used as an output", uri).into())
        }
    };

    Ok((sink, window))
}
