use std::mem;

use crate::word::{Language, Word};

/// Presents `word` in the requested direction.
///
/// A word stored in the mirrored direction comes back with its two surface
/// forms swapped and its languages set to the request; the stored record is
/// never touched. Reorienting twice round-trips.
pub fn reorient(mut word: Word, source: Language, target: Language) -> Word {
	if word.source_language == source {
		return word;
	}

	mem::swap(&mut word.source_word, &mut word.translation_word);

	word.source_language = source;
	word.target_language = target;

	word
}
