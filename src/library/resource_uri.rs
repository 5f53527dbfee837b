use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceUri {
    File(PathBuf),
    V4l2(PathBuf),
    Display(u32),
}

impl ResourceUri {
    /// Resolves a video resource descriptor such as `/dev/video0`, `0`,
    /// `v4l2:///dev/video1`, `display://0`, `file://images/` or a plain path.
    pub fn parse(descriptor: &str) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let descriptor = descriptor.trim();

        if descriptor.is_empty() {
            return Err("empty resource descriptor".into());
        }

        if let Some((protocol, location)) = descriptor.split_once("://") {
            return match protocol.to_lowercase().as_str() {
                "file" => Ok(ResourceUri::File(PathBuf::from(location))),
                "v4l2" => Ok(ResourceUri::V4l2(PathBuf::from(location))),
                "display" => {
                    let index = if location.is_empty() {
                        0
                    } else {
                        location.parse::<u32>().map_err(|_| {
                            format!("invalid display index '{}' in '{}'", location, descriptor)
                        })?
                    };
                    Ok(ResourceUri::Display(index))
                }
                other => Err(format!(
                    "unsupported protocol '{}' in resource descriptor '{}'",
                    other, descriptor
                )
                .into()),
            };
        }

        if let Ok(index) = descriptor.parse::<u32>() {
            return Ok(ResourceUri::V4l2(PathBuf::from(format!("/dev/video{}", index))));
        }

        if descriptor.starts_with("/dev/video") {
            return Ok(ResourceUri::V4l2(PathBuf::from(descriptor)));
        }

        Ok(ResourceUri::File(PathBuf::from(descriptor)))
    }
}

impl fmt::Display for ResourceUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceUri::File(path) => write!(f, "file://{}", path.display()),
            ResourceUri::V4l2(path) => write!(f, "v4l2://{}", path.display()),
            ResourceUri::Display(index) => write!(f, "display://{}", index),
        }
    }
}
