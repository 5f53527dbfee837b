#[cfg(test)]
pub mod impl_fake;
pub mod impl_image_file;
#[cfg(feature = "v4l2")]
pub mod impl_v4l2;
pub mod interface;

use crate::config::Config;
use crate::library::logger::interface::Logger;
use crate::library::resource_uri::ResourceUri;
use impl_image_file::FrameSourceImageFile;
use interface::FrameSource;
use std::sync::{Arc, Mutex};

pub fn open(
    config: &Config,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Result<Arc<Mutex<dyn FrameSource>>, Box<dyn std::error::Error + Send + Sync>> {
    let source: Arc<Mutex<dyn FrameSource>> = match ResourceUri::parse(&config.input)? {
        ResourceUri::File(path) => Arc::new(Mutex::new(FrameSourceImageFile::new(
            &path,
            config.input_loop,
            logger,
        )?)),
        #[cfg(feature = "v4l2")]
        ResourceUri::V4l2(path) => Arc::new(Mutex::new(impl_v4l2::FrameSourceV4l2::new(
            &path,
            config.capture_timeout,
            logger,
        )?)),
        #[cfg(not(feature = "v4l2"))]
        ResourceUri::V4l2(path) => {
            return Err(format!(
                "cannot open {}: built without the v4l2 feature",
                path.display()
            )
            .into())
        }
        uri @ ResourceUri::Display(_) => {
            return Err(format!("{} cannot be used as an input", uri).into())
        }
    };

    Ok(source)
}
