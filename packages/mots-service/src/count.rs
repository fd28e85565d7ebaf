use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Result, Viewer, WordService};
use mots_domain::Language;
use mots_storage::queries::{self, WordFilter};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CountRequest {
	pub viewer: Option<Uuid>,
	pub source_language: Language,
	pub target_language: Language,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CountResponse {
	pub count: i64,
}

impl WordService {
	/// Total visible entries for a language pair, counted store-side. A
	/// signed-in viewer gets own rows plus, when opted in, everyone else's
	/// published rows; an anonymous caller counts published rows only.
	pub async fn count_by_languages(&self, req: CountRequest) -> Result<CountResponse> {
		let filter = WordFilter {
			pair: Some((
				req.source_language.as_str().to_string(),
				req.target_language.as_str().to_string(),
			)),
			..WordFilter::default()
		};
		let count = match Viewer::from_user_id(req.viewer) {
			Viewer::Anonymous => queries::count_public_words(&self.db, None, &filter).await?,
			Viewer::User(user_id) => {
				let own = queries::count_words_by_owner(&self.db, user_id, &filter).await?;
				let flags = self.visibility_flags(user_id).await?;
				let public = if flags.show_others_words {
					queries::count_public_words(&self.db, Some(user_id), &filter).await?
				} else {
					0
				};

				own + public
			},
		};

		Ok(CountResponse { count })
	}
}
