//! Reading time estimation
//!
//! Word counts split on single spaces, matching the site's historical
//! behavior: splitting an empty string yields one (empty) word, so an
//! empty heading or paragraph still counts as 1. Changing this would
//! shift every published estimate.

use super::entities::Section;

/// Average adult reading speed assumed by the estimate
const WORDS_PER_MINUTE: usize = 200;

/// Estimate whole minutes needed to read the given sections.
///
/// Pure and total: empty content yields 0.
pub fn estimate_minutes(sections: &[Section]) -> u32 {
    let total_words: usize = sections
        .iter()
        .map(|section| {
            word_count(&section.heading)
                + section
                    .paragraphs
                    .iter()
                    .map(|p| word_count(p))
                    .sum::<usize>()
        })
        .sum();

    total_words.div_ceil(WORDS_PER_MINUTE) as u32
}

fn word_count(text: &str) -> usize {
    text.split(' ').count()
}
