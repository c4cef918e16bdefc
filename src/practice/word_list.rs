use crate::error::PracticeError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Words in file order, one per line. Duplicates are kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordList {
    pub words: Vec<String>,
}

impl WordList {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PracticeError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| PracticeError::word_list(path, e))?;
        let list = Self::from_reader(BufReader::new(file))
            .map_err(|e| PracticeError::word_list(path, e))?;
        debug!(path = %path.display(), words = list.len(), "loaded word list");
        Ok(list)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let words = reader
            .lines()
            .map(|line| line.map(|l| l.trim().to_string()))
            .collect::<std::io::Result<Vec<_>>>()?;
        Ok(Self { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Cursor;

    #[test]
    fn test_from_reader_trims_and_keeps_order() {
        let list = WordList::from_reader(Cursor::new("the\n of \r\nand\nthe\n")).unwrap();
        assert_eq!(list.words, vec!["the", "of", "and", "the"]);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("common-words.txt");
        std::fs::write(&path, "cat\ntea\n").unwrap();

        let list = WordList::load(&path).unwrap();
        assert_eq!(list.len(), 2);
        assert!(!list.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = WordList::load(dir.path().join("nope.txt"));
        assert_matches!(result, Err(PracticeError::WordList { .. }));
    }

    #[test]
    fn test_collect() {
        let list: WordList = ["a", "b"].into_iter().collect();
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
