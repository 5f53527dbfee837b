use super::format::{diagnostic_line, overlay_line, overlay_y, status_line, OVERLAY_X};
use super::main::{FrameClassification, FrameOutcome};
use crate::library::sync::lock;
use crate::text_overlay::interface::{GRAY40, WHITE};

impl FrameClassification {
    /// Runs one cycle. Returns `Ok(None)` without classifying or rendering when no frame
    /// is available.
    pub fn process_frame(
        &self,
    ) -> Result<Option<FrameOutcome>, Box<dyn std::error::Error + Send + Sync>> {
        let mut frame = match lock(&self.frame_source).capture()? {
            Some(frame) => frame,
            None => return Ok(None),
        };

        let classifications = self
            .image_classifier
            .classify(&frame, self.config.top_k)?;

        let line_height = self.text_overlay.size();
        let mut labels = Vec::with_capacity(classifications.len());
        let mut confidence = None;

        {
            let mut diagnostics = lock(&self.diagnostics);

            for (n, classification) in classifications.iter().enumerate() {
                let label = self.image_classifier.class_label(classification.class_id);

                writeln!(
                    diagnostics,
                    "{}",
                    diagnostic_line(
                        &self.config.diagnostic_prefix,
                        classification.confidence,
                        classification.class_id,
                        label
                    )
                )?;

                self.text_overlay.overlay_text(
                    &mut frame,
                    &overlay_line(classification.confidence, label),
                    OVERLAY_X,
                    overlay_y(n, line_height),
                    WHITE,
                    Some(GRAY40),
                )?;

                labels.push(label.to_string());
                confidence = Some(classification.confidence * 100.0);
            }

            diagnostics.flush()?;
        }

        let network_name = self.image_classifier.network_name();
        {
            let mut frame_sink = lock(&self.frame_sink);
            frame_sink.render(&frame)?;
            frame_sink.set_status(&status_line(
                network_name,
                self.image_classifier.network_fps(),
            ))?;
        }

        for line in self.image_classifier.profiler_times().report(network_name) {
            self.logger.info(&line)?;
        }

        Ok(Some(FrameOutcome {
            classifications,
            labels,
            confidence,
        }))
    }
}
