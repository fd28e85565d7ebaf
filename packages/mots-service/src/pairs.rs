use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Result, WordService};
use mots_domain::{Language, visibility};
use mots_storage::queries;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PairsRequest {
	pub viewer: Uuid,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct LanguagePair {
	pub source: Language,
	pub target: Language,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PairsResponse {
	pub pairs: Vec<LanguagePair>,
}

impl WordService {
	/// Distinct language pairs across the viewer's own entries and, when the
	/// viewer has opted in, everyone else's published entries.
	pub async fn language_pairs(&self, req: PairsRequest) -> Result<PairsResponse> {
		let flags = self.visibility_flags(req.viewer).await?;
		let mut raw = queries::distinct_pairs_by_owner(&self.db, req.viewer).await?;

		if flags.show_others_words {
			raw.extend(queries::distinct_public_pairs(&self.db, req.viewer).await?);
		}

		let parsed = raw
			.into_iter()
			.filter_map(|(source, target)| {
				Some((Language::parse(&source)?, Language::parse(&target)?))
			})
			.collect();
		let pairs = visibility::dedup_pairs(parsed)
			.into_iter()
			.map(|(source, target)| LanguagePair { source, target })
			.collect();

		Ok(PairsResponse { pairs })
	}
}
