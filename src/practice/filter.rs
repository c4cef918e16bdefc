use super::word_list::WordList;

/// A word qualifies when it only uses `subset` letters and contains `required`
pub fn valid(word: &str, subset: &str, required: char) -> bool {
    word.contains(required) && word.chars().all(|c| subset.contains(c))
}

/// Qualifying words in list order
pub fn candidates<'a>(words: &'a WordList, subset: &str, required: char) -> Vec<&'a str> {
    words.iter().filter(|w| valid(w, subset, required)).collect()
}
