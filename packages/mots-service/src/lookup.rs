use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Result, Viewer, WordItem, WordService, WordsResponse};
use mots_domain::{Language, WordType, merge};
use mots_storage::queries::WordFilter;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ByLanguagesRequest {
	pub viewer: Option<Uuid>,
	pub source_language: Language,
	pub target_language: Language,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ByTypeRequest {
	pub viewer: Option<Uuid>,
	pub word_type: WordType,
	pub source_language: Language,
	pub target_language: Language,
}

impl WordService {
	/// All visible entries for a language pair, in either stored direction,
	/// presented under the requested one.
	pub async fn get_by_languages(&self, req: ByLanguagesRequest) -> Result<WordsResponse> {
		self.lookup(
			Viewer::from_user_id(req.viewer),
			req.source_language,
			req.target_language,
			None,
		)
		.await
	}

	pub async fn get_by_type(&self, req: ByTypeRequest) -> Result<WordsResponse> {
		self.lookup(
			Viewer::from_user_id(req.viewer),
			req.source_language,
			req.target_language,
			Some(req.word_type),
		)
		.await
	}

	async fn lookup(
		&self,
		viewer: Viewer,
		source: Language,
		target: Language,
		word_type: Option<WordType>,
	) -> Result<WordsResponse> {
		let filter = WordFilter {
			pair: Some((source.as_str().to_string(), target.as_str().to_string())),
			word_type: word_type.map(|word_type| word_type.as_str().to_string()),
			text: None,
		};
		let sets = self.resolve_visible(viewer, &filter).await?;
		let merged = merge::merge(sets.own, sets.public);
		let words = merged
			.into_iter()
			.map(|visible| WordItem::reoriented(visible, source, target))
			.collect();

		Ok(WordsResponse { words })
	}
}
