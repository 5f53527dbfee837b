use crate::image_classifier::interface::Classification;

pub fn softmax(scores: &[f32]) -> Vec<f32> {
    let max = scores.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = scores.iter().map(|&s| (s - max).exp()).collect();
    let sum: f32 = exps.iter().sum();

    if sum > 0.0 && sum.is_finite() {
        exps.into_iter().map(|e| e / sum).collect()
    } else {
        exps
    }
}

/// Picks the `top_k` highest confidences, highest first. Ties keep the lower class id first.
pub fn select_top_k(confidences: &[f32], top_k: usize) -> Vec<Classification> {
    let mut classifications: Vec<Classification> = confidences
        .iter()
        .enumerate()
        .filter(|(_, confidence)| !confidence.is_nan())
        .map(|(class_id, &confidence)| Classification {
            class_id,
            confidence,
        })
        .collect();

    classifications.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    classifications.truncate(top_k);

    classifications
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_softmax_sums_to_one() {
        let probabilities = softmax(&[1.0, 2.0, 3.0]);

        let sum: f32 = probabilities.iter().sum();
        assert!((sum - 1.0).abs() < 1e-5);
        assert!(probabilities[2] > probabilities[1]);
        assert!(probabilities[1] > probabilities[0]);
    }

    #[test]
    fn test_softmax_handles_large_logits() {
        let probabilities = softmax(&[1000.0, 1000.0]);

        assert!((probabilities[0] - 0.5).abs() < 1e-5);
        assert!((probabilities[1] - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_select_top_k_sorts_and_truncates() {
        let top = select_top_k(&[0.1, 0.6, 0.05, 0.25], 2);

        assert_eq!(
            top,
            vec![
                Classification {
                    class_id: 1,
                    confidence: 0.6
                },
                Classification {
                    class_id: 3,
                    confidence: 0.25
                },
            ]
        );
    }

    #[test]
    fn test_select_top_k_larger_than_classes() {
        let top = select_top_k(&[0.2, 0.8], 5);

        assert_eq!(top.len(), 2);
        assert_eq!(top[0].class_id, 1);
    }

    #[test]
    fn test_select_top_k_ties_keep_class_order() {
        let top = select_top_k(&[0.3, 0.3, 0.4], 3);

        let ids: Vec<usize> = top.iter().map(|c| c.class_id).collect();
        assert_eq!(ids, vec![2, 0, 1]);
    }

    #[test]
    fn test_select_top_k_skips_nan() {
        let top = select_top_k(&[f32::NAN, 0.1], 2);

        assert_eq!(top.len(), 1);
        assert_eq!(top[0].class_id, 1);
    }
}
