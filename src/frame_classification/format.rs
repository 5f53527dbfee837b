/// Confidence in [0,1] as a zero-padded percentage, e.g. `0.05` -> `05.00`.
pub fn format_confidence(confidence: f32) -> String {
    format!("{:05.2}", confidence * 100.0)
}

pub fn diagnostic_line(prefix: &str, confidence: f32, class_id: usize, label: &str) -> String {
    format!(
        "{}:  {}% class #{} ({})",
        prefix,
        format_confidence(confidence),
        class_id,
        label
    )
}

pub fn overlay_line(confidence: f32, label: &str) -> String {
    format!("{}% {}", format_confidence(confidence), label)
}

pub fn status_line(network_name: &str, network_fps: f32) -> String {
    format!("{} | Network {:.0} FPS", network_name, network_fps)
}

pub const OVERLAY_X: i32 = 5;
pub const OVERLAY_MARGIN: i32 = 5;

/// Vertical position of the `n`th overlay line.
pub fn overlay_y(n: usize, line_height: u32) -> i32 {
    OVERLAY_MARGIN + n as i32 * (line_height as i32 + OVERLAY_MARGIN)
}
