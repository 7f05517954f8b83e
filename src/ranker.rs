use crate::model::{Alert, Listing, ScoreResult};

/// Reduces the run's candidate pool to the alerts worth sending: keep
/// scores at or above `threshold`, order by score descending (stable, so
/// ties keep their encounter order and reruns are reproducible), keep the
/// first `top_k`.
pub fn select_alerts(
    pool: Vec<(Listing, ScoreResult)>,
    threshold: i32,
    top_k: usize,
) -> Vec<Alert> {
    let mut alerts: Vec<Alert> = pool
        .into_iter()
        .filter(|(_, result)| result.score >= threshold)
        .map(|(listing, result)| Alert {
            score: result.score,
            quantity: result.quantity,
            listing,
        })
        .collect();

    alerts.sort_by(|a, b| b.score.cmp(&a.score));
    alerts.truncate(top_k);
    alerts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(n: usize, score: i32) -> (Listing, ScoreResult) {
        (
            Listing {
                id: format!("https://x.test/itm/{n}"),
                title: format!("listing {n}"),
                price: "£10".into(),
                link: format!("https://x.test/itm/{n}"),
            },
            ScoreResult { score, quantity: None },
        )
    }

    #[test]
    fn filters_sorts_and_truncates() {
        let scores = [9, 7, 7, 5, 4, 3, 2, 1];
        let pool: Vec<_> = scores
            .iter()
            .enumerate()
            .map(|(n, &s)| candidate(n, s))
            .collect();

        let alerts = select_alerts(pool, 5, 5);
        let got: Vec<i32> = alerts.iter().map(|a| a.score).collect();
        assert_eq!(got, vec![9, 7, 7, 5]);
        // stable sort: the two 7s keep their encounter order
        assert_eq!(alerts[1].listing.id, "https://x.test/itm/1");
        assert_eq!(alerts[2].listing.id, "https://x.test/itm/2");
    }

    #[test]
    fn threshold_is_inclusive() {
        let pool = vec![candidate(0, 4), candidate(1, 3)];
        let alerts = select_alerts(pool, 4, 5);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].score, 4);
    }

    #[test]
    fn truncates_to_top_k() {
        let pool: Vec<_> = (0..8).map(|n| candidate(n, 10 - n as i32)).collect();
        let alerts = select_alerts(pool, 1, 5);
        assert_eq!(alerts.len(), 5);
        assert_eq!(alerts[0].score, 10);
    }

    #[test]
    fn empty_pool_yields_no_alerts() {
        assert!(select_alerts(Vec::new(), 3, 5).is_empty());
    }
}
