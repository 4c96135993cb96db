//! Party-level majority vote.

use crate::domain::parliament::VoteValue;

/// Tally of cast votes, indexed by [`VoteValue::CAST_PRECEDENCE`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoteTally {
    counts: [u32; 3],
}

impl VoteTally {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one vote. Absences are ignored.
    pub fn record(&mut self, value: VoteValue) {
        if let Some(slot) = VoteValue::CAST_PRECEDENCE
            .iter()
            .position(|candidate| *candidate == value)
        {
            self.counts[slot] += 1;
        }
    }

    /// The most common cast value.
    ///
    /// Ties resolve `for > against > abstain`. Returns `None` when nobody
    /// cast a vote.
    pub fn majority(&self) -> Option<VoteValue> {
        let mut best: Option<(VoteValue, u32)> = None;
        for (value, count) in VoteValue::CAST_PRECEDENCE.iter().zip(self.counts) {
            if count == 0 {
                continue;
            }
            match best {
                Some((_, best_count)) if best_count >= count => {}
                _ => best = Some((*value, count)),
            }
        }
        best.map(|(value, _)| value)
    }
}

impl FromIterator<VoteValue> for VoteTally {
    fn from_iter<I: IntoIterator<Item = VoteValue>>(iter: I) -> Self {
        let mut tally = VoteTally::new();
        for value in iter {
            tally.record(value);
        }
        tally
    }
}

/// Majority cast value of a set of votes.
pub fn majority_vote<I>(values: I) -> Option<VoteValue>
where
    I: IntoIterator<Item = VoteValue>,
{
    values.into_iter().collect::<VoteTally>().majority()
}

#[cfg(test)]
mod tests {
    use super::*;
    use VoteValue::*;

    #[test]
    fn clear_majority_wins() {
        assert_eq!(majority_vote([For, Against, Against]), Some(Against));
    }

    #[test]
    fn absences_do_not_count() {
        assert_eq!(majority_vote([Absent, Absent, Abstain]), Some(Abstain));
        assert_eq!(VoteTally::from_iter([Absent, For]), VoteTally::from_iter([For]));
    }

    #[test]
    fn nobody_voting_has_no_majority() {
        assert_eq!(majority_vote([Absent, Absent]), None);
        assert_eq!(majority_vote(std::iter::empty()), None);
    }

    #[test]
    fn for_beats_against_on_tie() {
        assert_eq!(majority_vote([Against, For]), Some(For));
    }

    #[test]
    fn against_beats_abstain_on_tie() {
        assert_eq!(majority_vote([Abstain, Against, Abstain, Against]), Some(Against));
    }

    #[test]
    fn three_way_tie_resolves_to_for() {
        assert_eq!(majority_vote([Abstain, Against, For]), Some(For));
    }
}
