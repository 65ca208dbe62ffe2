//! Scoreline of an open match, derived from the captured statistics.

use crate::data_fetcher::models::PlayerStat;

/// Total goals scored by one roster, saturating at `u32::MAX`
pub fn roster_goals(stats: &[PlayerStat]) -> u32 {
    stats
        .iter()
        .fold(0u32, |total, stat| total.saturating_add(stat.goals))
}

/// Returns `(local, visitor)`.
///
/// Own goals by one side count for the other: `own_goals_visitor` is added to
/// the local score and `own_goals_local` to the visitor score.
pub fn derive_scoreline(
    local: &[PlayerStat],
    visitor: &[PlayerStat],
    own_goals_local: u32,
    own_goals_visitor: u32,
) -> (u32, u32) {
    (
        roster_goals(local).saturating_add(own_goals_visitor),
        roster_goals(visitor).saturating_add(own_goals_local),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer(goals: u32) -> PlayerStat {
        PlayerStat {
            goals,
            ..PlayerStat::default()
        }
    }

    #[test]
    fn test_own_goals_count_for_the_opponent() {
        let local = [scorer(2), scorer(0)];
        let visitor = [scorer(1)];
        assert_eq!(derive_scoreline(&local, &visitor, 0, 1), (3, 1));
        assert_eq!(derive_scoreline(&local, &visitor, 2, 0), (2, 3));
    }

    #[test]
    fn test_empty_rosters() {
        assert_eq!(derive_scoreline(&[], &[], 0, 0), (0, 0));
    }

    #[test]
    fn test_saturates_instead_of_overflowing() {
        let local = [scorer(u32::MAX), scorer(5)];
        assert_eq!(derive_scoreline(&local, &[], 0, 3).0, u32::MAX);
    }
}
