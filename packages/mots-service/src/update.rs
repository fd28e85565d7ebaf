use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result, WordItem, WordService, resolve};
use mots_domain::{Language, WordType, normalize};
use mots_storage::queries::{self, WordChanges};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UpdateWordRequest {
	pub owner_id: Uuid,
	pub uuid: Uuid,
	pub source_language: Option<Language>,
	pub target_language: Option<Language>,
	pub word_type: Option<WordType>,
	pub source_word: Option<String>,
	pub translation_word: Option<String>,
}

impl WordService {
	/// Partial update of an owned entry. A changed translation re-derives
	/// the normalized form; collisions with the uniqueness invariant surface
	/// as Conflict, an entry that is absent or owned by someone else as
	/// NotFound.
	pub async fn update_word(&self, req: UpdateWordRequest) -> Result<WordItem> {
		let source_word = trimmed_field(req.source_word.as_deref(), "source_word")?;
		let translation_word = trimmed_field(req.translation_word.as_deref(), "translation_word")?;
		let max_chars = self.cfg.words.max_word_chars as usize;

		for field in [source_word, translation_word].into_iter().flatten() {
			if field.chars().count() > max_chars {
				return Err(Error::InvalidRequest {
					message: format!("Words are limited to {max_chars} characters."),
				});
			}
		}

		let normalized_word = translation_word.map(normalize::strip_harakat);
		let changes = WordChanges {
			source_language: req.source_language.map(|language| language.as_str()),
			target_language: req.target_language.map(|language| language.as_str()),
			word_type: req.word_type.map(|word_type| word_type.as_str()),
			source_word,
			translation_word,
			normalized_word: normalized_word.as_deref(),
		};
		let row = queries::update_word(&self.db, req.owner_id, req.uuid, &changes).await?;
		let word = resolve::word_from_row(row).ok_or_else(|| Error::Storage {
			message: "Stored word carries an unknown language or type label.".to_string(),
		})?;

		Ok(WordItem::from_word(word, None))
	}
}

fn trimmed_field<'a>(value: Option<&'a str>, name: &str) -> Result<Option<&'a str>> {
	match value {
		None => Ok(None),
		Some(raw) => {
			let trimmed = raw.trim();

			if trimmed.is_empty() {
				return Err(Error::InvalidRequest {
					message: format!("{name} must not be empty when provided."),
				});
			}

			Ok(Some(trimmed))
		},
	}
}
