use crate::error::PracticeError;

/// the most common letters in order of frequency as listed at
/// https://pi.math.cornell.edu/~mec/2003-2004/cryptography/subs/frequencies.html
pub const COMMON_LETTERS: &str = "etaoinsrhdlucmfywgpbvkxqjz";

/// How many letters each run drills by default
pub const DEFAULT_LETTERS_PER_RUN: usize = 4;

/// Letters ordered from most to least frequent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterRanking {
    letters: Vec<char>,
}

impl Default for LetterRanking {
    fn default() -> Self {
        Self {
            letters: COMMON_LETTERS.chars().collect(),
        }
    }
}

impl LetterRanking {
    pub fn new(ranking: &str) -> Result<Self, PracticeError> {
        let letters: Vec<char> = ranking.chars().collect();
        if letters.is_empty() {
            return Err(PracticeError::EmptyRanking);
        }
        Ok(Self { letters })
    }

    /// Check `length` leaves room for `letters_per_run` practice letters
    pub fn validate(&self, length: usize, letters_per_run: usize) -> Result<(), PracticeError> {
        let min = letters_per_run.max(1);
        let max = self.letters.len();
        if length < min || length > max {
            return Err(PracticeError::InvalidLength { length, min, max });
        }
        Ok(())
    }

    /// The `length` most common letters
    pub fn subset(&self, length: usize) -> String {
        self.letters.iter().take(length).collect()
    }

    /// The newest letters of the subset, least common first:
    /// ranks `length - 1` down to `length - count`
    pub fn letters_to_practice(&self, length: usize, count: usize) -> Vec<char> {
        self.letters[..length.min(self.letters.len())]
            .iter()
            .rev()
            .take(count)
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_default_ranking() {
        let ranking = LetterRanking::default();
        assert_eq!(ranking.subset(26), COMMON_LETTERS);
        assert_eq!(ranking.subset(5), "etaoi");
        assert_eq!(ranking.subset(15), "etaoinsrhdlucmf");
    }

    #[test]
    fn test_letters_to_practice() {
        let ranking = LetterRanking::default();
        assert_eq!(ranking.letters_to_practice(15, 4), vec!['f', 'm', 'c', 'u']);
        assert_eq!(ranking.letters_to_practice(4, 4), vec!['o', 'a', 't', 'e']);
        assert_eq!(ranking.letters_to_practice(26, 2), vec!['z', 'j']);
    }

    #[test]
    fn test_validate_bounds() {
        let ranking = LetterRanking::default();
        assert!(ranking.validate(4, 4).is_ok());
        assert!(ranking.validate(26, 4).is_ok());
        assert_matches!(
            ranking.validate(3, 4),
            Err(PracticeError::InvalidLength {
                length: 3,
                min: 4,
                max: 26
            })
        );
        assert_matches!(
            ranking.validate(27, 4),
            Err(PracticeError::InvalidLength { length: 27, .. })
        );
        assert_matches!(ranking.validate(0, 0), Err(PracticeError::InvalidLength { .. }));
    }

    #[test]
    fn test_custom_ranking() {
        let ranking = LetterRanking::new("asrhdl").unwrap();
        assert_eq!(ranking.subset(3), "asr");
        assert_eq!(ranking.letters_to_practice(6, 4), vec!['l', 'd', 'h', 'r']);
    }

    #[test]
    fn test_empty_ranking_rejected() {
        assert_matches!(LetterRanking::new(""), Err(PracticeError::EmptyRanking));
    }
}
