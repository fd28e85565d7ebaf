use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
	Error, Result, WordService,
	create::{PreparedWord, WordInput, prepare_input},
};
use mots_domain::Language;
use mots_storage::queries::{self, NewWord};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ImportRequest {
	pub owner_id: Uuid,
	pub words: Vec<WordInput>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ImportResponse {
	pub created: u64,
	pub skipped: u64,
}

impl WordService {
	/// Bulk import. Entries colliding on (normalized form, target language)
	/// with each other or with existing rows are skipped, not failed; the
	/// response reports how many landed.
	pub async fn import_words(&self, req: ImportRequest) -> Result<ImportResponse> {
		if req.words.is_empty() {
			return Err(Error::InvalidRequest {
				message: "Import payload must contain at least one word.".to_string(),
			});
		}

		let max_entries = self.cfg.words.import_max_entries as usize;

		if req.words.len() > max_entries {
			return Err(Error::InvalidRequest {
				message: format!("Imports are limited to {max_entries} words per request."),
			});
		}

		let total = req.words.len() as u64;
		let mut prepared: Vec<(&WordInput, PreparedWord)> = Vec::with_capacity(req.words.len());
		let mut in_batch: HashSet<(String, Language)> = HashSet::with_capacity(req.words.len());

		for input in &req.words {
			let word = prepare_input(&self.cfg, input)?;

			// First occurrence wins inside the batch, mirroring the store's
			// uniqueness key.
			if in_batch.insert((word.normalized_word.clone(), input.target_language)) {
				prepared.push((input, word));
			}
		}

		let uuids: Vec<Uuid> = prepared.iter().map(|_| Uuid::new_v4()).collect();
		let rows: Vec<NewWord<'_>> = prepared
			.iter()
			.zip(&uuids)
			.map(|((input, word), uuid)| NewWord {
				uuid: *uuid,
				owner_id: req.owner_id,
				source_language: input.source_language.as_str(),
				target_language: input.target_language.as_str(),
				word_type: input.word_type.as_str(),
				source_word: &word.source_word,
				translation_word: &word.translation_word,
				normalized_word: &word.normalized_word,
			})
			.collect();
		let created = queries::insert_words_skip_conflicts(&self.db, &rows).await?;
		let skipped = total - created;

		tracing::info!(created, skipped, "Imported words.");

		Ok(ImportResponse { created, skipped })
	}
}
