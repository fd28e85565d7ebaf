use uuid::Uuid;

use crate::{Result, Viewer, WordService};
use mots_domain::{Author, Language, PublicWord, VisibilityFlags, Word, WordType, visibility};
use mots_storage::{
	models::{PublicWordRow, WordRow},
	queries::{self, WordFilter},
};

/// The two halves of a visibility resolution: the viewer's own rows and the
/// deduplicated public rows the viewer is entitled to see.
pub(crate) struct ResolvedSets {
	pub(crate) own: Vec<Word>,
	pub(crate) public: Vec<PublicWord>,
}

impl WordService {
	/// Resolves the entries `viewer` may see under `filter`.
	///
	/// The viewer-side opt-in is a policy decision made once per call, not a
	/// per-row predicate: an opted-out viewer skips the public fetch
	/// entirely. Anonymous viewers have no opt-in flag, so only the
	/// owner-side publish flag (applied by the candidate query) gates them.
	pub(crate) async fn resolve_visible(
		&self,
		viewer: Viewer,
		filter: &WordFilter,
	) -> Result<ResolvedSets> {
		let own: Vec<Word> = match viewer {
			Viewer::User(user_id) => queries::find_words_by_owner(&self.db, user_id, filter)
				.await?
				.into_iter()
				.filter_map(word_from_row)
				.collect(),
			Viewer::Anonymous => Vec::new(),
		};

		if let Viewer::User(user_id) = viewer {
			let flags = self.visibility_flags(user_id).await?;

			if !visibility::public_visible_to(Some(&flags)) {
				return Ok(ResolvedSets { own, public: Vec::new() });
			}
		}

		let candidates =
			queries::find_public_candidates(&self.db, viewer.user_id(), filter).await?;
		let public = visibility::dedup_public(
			candidates.into_iter().filter_map(public_from_row).collect(),
		);

		tracing::debug!(own = own.len(), public = public.len(), "Visibility resolved.");

		Ok(ResolvedSets { own, public })
	}

	pub(crate) async fn visibility_flags(&self, user_id: Uuid) -> Result<VisibilityFlags> {
		let row = queries::get_or_create_visibility(&self.db, user_id).await?;

		Ok(VisibilityFlags {
			is_public_words: row.is_public_words,
			show_others_words: row.show_others_words,
		})
	}
}

// Rows carrying an unknown language or type label are skipped rather than
// failing the whole read; the write paths only ever store known labels.
pub(crate) fn word_from_row(row: WordRow) -> Option<Word> {
	Some(Word {
		uuid: row.uuid,
		owner_id: row.owner_id,
		source_language: Language::parse(&row.source_language)?,
		target_language: Language::parse(&row.target_language)?,
		word_type: WordType::parse(&row.word_type)?,
		source_word: row.source_word,
		translation_word: row.translation_word,
		normalized_word: row.normalized_word,
		created_at: row.created_at,
	})
}

pub(crate) fn public_from_row(row: PublicWordRow) -> Option<PublicWord> {
	Some(PublicWord {
		word: Word {
			uuid: row.uuid,
			owner_id: row.owner_id,
			source_language: Language::parse(&row.source_language)?,
			target_language: Language::parse(&row.target_language)?,
			word_type: WordType::parse(&row.word_type)?,
			source_word: row.source_word,
			translation_word: row.translation_word,
			normalized_word: row.normalized_word,
			created_at: row.created_at,
		},
		author: Author {
			id: row.owner_id,
			display_name: row.owner_display_name,
			avatar: row.owner_avatar,
		},
	})
}
