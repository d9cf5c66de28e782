use crate::models::Tier;

/// Score cut-offs splitting a population into thirds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierThresholds {
    pub top: f64,
    pub mid: f64,
}

impl TierThresholds {
    #[inline]
    pub fn tier_for(&self, score: f64) -> Tier {
        if score >= self.top {
            Tier::Dark
        } else if score >= self.mid {
            Tier::Medium
        } else {
            Tier::Faint
        }
    }
}

/// Compute the dark/medium thresholds for a set of scores
///
/// Scores are stable-sorted descending; the thresholds are the scores at
/// `floor(n/3)` and `floor(2n/3)`. Both indices are in range for any
/// non-empty set (`n = 1` makes the single score both thresholds, so it is
/// dark), so only an empty set has no thresholds.
pub fn tier_thresholds(scores: &[f64]) -> Option<TierThresholds> {
    let mut sorted = scores.to_vec();
    sorted.sort_by(|a, b| b.total_cmp(a));

    let n = sorted.len();
    let top = *sorted.get(n / 3)?;
    let mid = *sorted.get(2 * n / 3)?;

    Some(TierThresholds { top, mid })
}

/// Assign a tier to every score, preserving input order
pub fn classify(scores: &[f64]) -> Vec<Tier> {
    match tier_thresholds(scores) {
        Some(thresholds) => scores.iter().map(|&score| thresholds.tier_for(score)).collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nine_candidate_example() {
        let scores = [4.8, 4.0, 3.5, 3.0, 2.8, 2.0, 1.5, 1.0, 0.2];

        let thresholds = tier_thresholds(&scores).unwrap();
        assert_eq!(thresholds, TierThresholds { top: 3.0, mid: 1.5 });

        let tiers = classify(&scores);
        assert_eq!(
            tiers,
            vec![
                Tier::Dark,
                Tier::Dark,
                Tier::Dark,
                Tier::Dark,
                Tier::Medium,
                Tier::Medium,
                Tier::Medium,
                Tier::Faint,
                Tier::Faint,
            ]
        );
    }

    #[test]
    fn test_classify_preserves_input_order() {
        let tiers = classify(&[0.2, 4.8, 2.0, 1.0]);
        assert_eq!(tiers, vec![Tier::Faint, Tier::Dark, Tier::Dark, Tier::Medium]);
    }

    #[test]
    fn test_small_populations() {
        assert!(tier_thresholds(&[]).is_none());
        assert!(classify(&[]).is_empty());

        assert_eq!(classify(&[1.0]), vec![Tier::Dark]);
        assert_eq!(classify(&[1.0, 3.0]), vec![Tier::Medium, Tier::Dark]);
        assert_eq!(classify(&[2.0, 2.0]), vec![Tier::Dark, Tier::Dark]);
    }

    #[test]
    fn test_all_equal_scores_are_dark() {
        let tiers = classify(&[2.0; 6]);
        assert!(tiers.iter().all(|tier| *tier == Tier::Dark));
    }
}
