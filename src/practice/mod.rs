pub mod filter;
pub mod letters;
pub mod sampler;
pub mod word_list;

pub use filter::{candidates, valid};
pub use letters::{LetterRanking, COMMON_LETTERS, DEFAULT_LETTERS_PER_RUN};
pub use sampler::{RandomSampler, DEFAULT_SAMPLE_COUNT};
pub use word_list::WordList;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

pub const DEFAULT_PRACTICE_LENGTH: usize = 15;

/// Settings for one `practice` run
#[derive(Debug, Clone)]
pub struct PracticeOptions {
    pub word_list: PathBuf,
    pub length: usize,
    pub count: usize,
    pub letters_per_run: usize,
    pub ranking: String,
    pub seed: Option<u64>,
}

/// Sampled drill words for one letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeSet {
    pub letter: char,
    pub words: Vec<String>,
}

/// Builds the drills for one run; settings are validated on construction
#[derive(Debug, Clone)]
pub struct PracticeGenerator {
    ranking: LetterRanking,
    length: usize,
    letters_per_run: usize,
    sampler: RandomSampler,
}

impl PracticeGenerator {
    pub fn new(
        ranking: LetterRanking,
        length: usize,
        letters_per_run: usize,
        sampler: RandomSampler,
    ) -> Result<Self, crate::error::PracticeError> {
        ranking.validate(length, letters_per_run)?;
        Ok(Self {
            ranking,
            length,
            letters_per_run,
            sampler,
        })
    }

    pub fn subset(&self) -> String {
        self.ranking.subset(self.length)
    }

    pub fn generate<R: Rng + ?Sized>(&self, words: &WordList, rng: &mut R) -> Vec<PracticeSet> {
        let subset = self.subset();

        self.ranking
            .letters_to_practice(self.length, self.letters_per_run)
            .into_iter()
            .map(|letter| {
                let pool = candidates(words, &subset, letter);
                let words = self.sampler.sample(&pool, rng);
                debug!(%letter, candidates = pool.len(), sampled = words.len());
                PracticeSet {
                    letter,
                    words: words.into_iter().map(str::to_string).collect(),
                }
            })
            .collect()
    }
}

/// Entry point for the `practice` subcommand
pub fn run<W: Write>(options: &PracticeOptions, out: &mut W) -> Result<(), Box<dyn std::error::Error>> {
    // settings are checked before the word list is read
    let generator = PracticeGenerator::new(
        LetterRanking::new(&options.ranking)?,
        options.length,
        options.letters_per_run,
        RandomSampler::new(options.count),
    )?;
    let words = WordList::load(&options.word_list)?;

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    writeln!(out, "only letters from: {}", generator.subset())?;
    for set in generator.generate(&words, &mut rng) {
        writeln!(out, "Practicing letter {}", set.letter)?;
        writeln!(out, "{}", set.words.join(" "))?;
        writeln!(out)?;
    }
    Ok(())
}
