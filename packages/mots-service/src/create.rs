use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result, WordItem, WordService, resolve};
use mots_domain::{Language, WordType, normalize};
use mots_storage::queries::{self, NewWord};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct WordInput {
	pub source_language: Language,
	pub target_language: Language,
	pub word_type: WordType,
	pub source_word: String,
	pub translation_word: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CreateWordRequest {
	pub owner_id: Uuid,
	#[serde(flatten)]
	pub word: WordInput,
}

/// A validated input: surface forms trimmed, normalized form derived.
pub(crate) struct PreparedWord {
	pub(crate) source_word: String,
	pub(crate) translation_word: String,
	pub(crate) normalized_word: String,
}

pub(crate) fn prepare_input(cfg: &mots_config::Config, input: &WordInput) -> Result<PreparedWord> {
	let source_word = input.source_word.trim();
	let translation_word = input.translation_word.trim();

	if source_word.is_empty() || translation_word.is_empty() {
		return Err(Error::InvalidRequest {
			message: "source_word and translation_word are required.".to_string(),
		});
	}

	let max_chars = cfg.words.max_word_chars as usize;

	if source_word.chars().count() > max_chars || translation_word.chars().count() > max_chars {
		return Err(Error::InvalidRequest {
			message: format!("Words are limited to {max_chars} characters."),
		});
	}

	Ok(PreparedWord {
		source_word: source_word.to_string(),
		translation_word: translation_word.to_string(),
		normalized_word: normalize::strip_harakat(translation_word),
	})
}

impl WordService {
	/// Creates one entry. A second entry with the same normalized form and
	/// target language for the same owner is rejected with Conflict by the
	/// store's uniqueness constraint.
	pub async fn create_word(&self, req: CreateWordRequest) -> Result<WordItem> {
		let prepared = prepare_input(&self.cfg, &req.word)?;
		let new_word = NewWord {
			uuid: Uuid::new_v4(),
			owner_id: req.owner_id,
			source_language: req.word.source_language.as_str(),
			target_language: req.word.target_language.as_str(),
			word_type: req.word.word_type.as_str(),
			source_word: &prepared.source_word,
			translation_word: &prepared.translation_word,
			normalized_word: &prepared.normalized_word,
		};
		let row = queries::insert_word(&self.db, &new_word).await?;
		let word = resolve::word_from_row(row).ok_or_else(|| Error::Storage {
			message: "Stored word carries an unknown language or type label.".to_string(),
		})?;

		Ok(WordItem::from_word(word, None))
	}
}
