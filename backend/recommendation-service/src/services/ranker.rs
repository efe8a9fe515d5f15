use crate::models::Recommendation;

/// Sort by predicted rating, highest first, and keep the first `top_n`.
///
/// Equal ratings are ordered by ascending item id so results are deterministic.
pub fn rank(mut candidates: Vec<Recommendation>, top_n: usize) -> Vec<Recommendation> {
    candidates.sort_by(|a, b| {
        b.predicted_rating
            .total_cmp(&a.predicted_rating)
            .then_with(|| a.product_id.cmp(&b.product_id))
    });
    candidates.truncate(top_n);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(product_id: i64, predicted_rating: f64) -> Recommendation {
        Recommendation {
            product_id,
            predicted_rating,
        }
    }

    #[test]
    fn test_descending_order() {
        let ranked = rank(vec![rec(1, 4.1), rec(2, 5.0), rec(3, 4.6)], 10);
        assert_eq!(ranked, vec![rec(2, 5.0), rec(3, 4.6), rec(1, 4.1)]);
    }

    #[test]
    fn test_truncates_to_top_n() {
        let ranked = rank(vec![rec(1, 4.1), rec(2, 5.0), rec(3, 4.6)], 2);
        assert_eq!(ranked, vec![rec(2, 5.0), rec(3, 4.6)]);
    }

    #[test]
    fn test_top_n_zero_is_empty() {
        assert!(rank(vec![rec(1, 4.1), rec(2, 5.0)], 0).is_empty());
    }

    #[test]
    fn test_ties_broken_by_ascending_item_id() {
        let ranked = rank(vec![rec(30, 4.5), rec(10, 4.5), rec(20, 4.5), rec(5, 4.0)], 3);
        assert_eq!(ranked, vec![rec(10, 4.5), rec(20, 4.5), rec(30, 4.5)]);
    }
}
