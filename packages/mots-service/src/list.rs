use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result, WordItem, WordService, WordsResponse, resolve};
use mots_storage::queries::{self, WordFilter};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MyWordsRequest {
	pub owner_id: Uuid,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct WordFetchRequest {
	pub owner_id: Uuid,
	pub uuid: Uuid,
}

impl WordService {
	/// The owner's own entries, newest first. No visibility rules apply.
	pub async fn my_words(&self, req: MyWordsRequest) -> Result<WordsResponse> {
		let rows =
			queries::find_words_by_owner(&self.db, req.owner_id, &WordFilter::default()).await?;
		let words = rows
			.into_iter()
			.filter_map(resolve::word_from_row)
			.map(|word| WordItem::from_word(word, None))
			.collect();

		Ok(WordsResponse { words })
	}

	/// Owner-scoped single fetch. Another user's entry reports NotFound, the
	/// same as a missing one.
	pub async fn word_by_uuid(&self, req: WordFetchRequest) -> Result<WordItem> {
		let row = queries::find_word_by_uuid(&self.db, req.owner_id, req.uuid)
			.await?
			.ok_or_else(|| Error::NotFound { message: "Word not found.".to_string() })?;
		let word = resolve::word_from_row(row).ok_or_else(|| Error::Storage {
			message: "Stored word carries an unknown language or type label.".to_string(),
		})?;

		Ok(WordItem::from_word(word, None))
	}
}
