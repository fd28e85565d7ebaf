use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Result, Viewer, WordItem, WordService, WordsResponse};
use mots_domain::{merge, normalize};
use mots_storage::queries::WordFilter;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SearchRequest {
	pub viewer: Option<Uuid>,
	pub query: String,
}

impl WordService {
	/// Free-text search across personal and visible public entries. The
	/// query is harakat-stripped so vocalized and bare spellings match the
	/// same entries; an empty query matches everything.
	pub async fn search_words(&self, req: SearchRequest) -> Result<WordsResponse> {
		let viewer = Viewer::from_user_id(req.viewer);
		let cleaned = normalize::strip_harakat(req.query.trim());
		let filter =
			WordFilter { text: (!cleaned.is_empty()).then_some(cleaned), ..WordFilter::default() };
		let sets = self.resolve_visible(viewer, &filter).await?;
		let merged = merge::merge(sets.own, sets.public);

		Ok(WordsResponse { words: merged.into_iter().map(WordItem::from_visible).collect() })
	}
}
