use ahash::AHashSet;

use crate::word::{Language, PublicWord, VisibleWord, Word};

/// Identifies "same meaning" across the personal/public union. Word casing
/// is folded so entries differing only in capitalization collapse.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct MergeKey {
	source_language: Language,
	target_language: Language,
	normalized_word: String,
	translation_word: String,
}
impl MergeKey {
	pub fn of(word: &Word) -> Self {
		Self {
			source_language: word.source_language,
			target_language: word.target_language,
			normalized_word: word.normalized_word.to_lowercase(),
			translation_word: word.translation_word.to_lowercase(),
		}
	}
}

/// Merges personal and public entries into one deduplicated collection.
///
/// Own entries are inserted first and always win key collisions, even
/// against a public entry that was created earlier. Keys present only in
/// `public` follow the own block. Callers wanting a display order sort the
/// result themselves.
pub fn merge(own: Vec<Word>, public: Vec<PublicWord>) -> Vec<VisibleWord> {
	let mut seen = AHashSet::with_capacity(own.len() + public.len());
	let mut merged = Vec::with_capacity(own.len() + public.len());

	for word in own {
		if seen.insert(MergeKey::of(&word)) {
			merged.push(VisibleWord::Own(word));
		}
	}
	for public_word in public {
		if seen.insert(MergeKey::of(&public_word.word)) {
			merged.push(VisibleWord::Public(public_word));
		}
	}

	merged
}
