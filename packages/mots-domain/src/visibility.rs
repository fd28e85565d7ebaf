use ahash::{AHashMap, AHashSet};
use uuid::Uuid;

use crate::word::{Language, PublicWord, VisibilityFlags, WordType};

/// The viewer-side half of the visibility gate, decided once per call.
///
/// An anonymous caller has no opt-in flag to check, so only the owner-side
/// publish flag (already applied when fetching candidates) gates them.
pub fn public_visible_to(viewer: Option<&VisibilityFlags>) -> bool {
	viewer.map(|flags| flags.show_others_words).unwrap_or(true)
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
struct GroupKey {
	normalized_word: String,
	source_language: Language,
	target_language: Language,
	word_type: WordType,
	owner_id: Uuid,
}
impl GroupKey {
	fn of(candidate: &PublicWord) -> Self {
		Self {
			normalized_word: candidate.word.normalized_word.clone(),
			source_language: candidate.word.source_language,
			target_language: candidate.word.target_language,
			word_type: candidate.word.word_type,
			owner_id: candidate.word.owner_id,
		}
	}
}

/// Collapses near-duplicate public candidates so one user's vocalization
/// variants of the same word surface as a single suggestion.
///
/// Each (normalized_word, source, target, type, owner) group keeps its
/// earliest-created representative, surface forms included. Input order is
/// otherwise preserved and does not affect which representative wins.
pub fn dedup_public(candidates: Vec<PublicWord>) -> Vec<PublicWord> {
	let mut slots: AHashMap<GroupKey, usize> = AHashMap::with_capacity(candidates.len());
	let mut kept: Vec<PublicWord> = Vec::with_capacity(candidates.len());

	for candidate in candidates {
		match slots.get(&GroupKey::of(&candidate)) {
			Some(&slot) =>
				if candidate.word.created_at < kept[slot].word.created_at {
					kept[slot] = candidate;
				},
			None => {
				slots.insert(GroupKey::of(&candidate), kept.len());
				kept.push(candidate);
			},
		}
	}

	kept
}

/// Collapses duplicate language pairs, keeping first-occurrence order.
pub fn dedup_pairs(pairs: Vec<(Language, Language)>) -> Vec<(Language, Language)> {
	let mut seen = AHashSet::with_capacity(pairs.len());
	let mut kept = Vec::with_capacity(pairs.len());

	for pair in pairs {
		if seen.insert(pair) {
			kept.push(pair);
		}
	}

	kept
}
