pub mod count;
pub mod create;
pub mod delete;
pub mod import;
pub mod list;
pub mod lookup;
pub mod pairs;
pub mod resolve;
pub mod search;
pub mod settings;
pub mod time_serde;
pub mod update;

mod error;

pub use error::{Error, Result};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use count::{CountRequest, CountResponse};
pub use create::{CreateWordRequest, WordInput};
pub use delete::{ClearWordsRequest, ClearWordsResponse, DeleteWordRequest, DeleteWordResponse};
pub use import::{ImportRequest, ImportResponse};
pub use list::{MyWordsRequest, WordFetchRequest};
pub use lookup::{ByLanguagesRequest, ByTypeRequest};
pub use pairs::{LanguagePair, PairsRequest, PairsResponse};
pub use search::SearchRequest;
pub use settings::{SettingsRequest, SettingsResponse};
pub use update::UpdateWordRequest;

use mots_config::Config;
use mots_domain::{Author, Language, VisibleWord, Word, WordType, direction};
use mots_storage::db::Db;

pub struct WordService {
	pub cfg: Config,
	pub db: Db,
}
impl WordService {
	pub fn new(cfg: Config, db: Db) -> Self {
		Self { cfg, db }
	}
}

/// The caller identity. Anonymous callers are a first-class case with their
/// own rules (no own rows, no viewer-side opt-in to check), so the variant
/// is explicit instead of a nullable user object.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Viewer {
	Anonymous,
	User(Uuid),
}
impl Viewer {
	pub fn from_user_id(user_id: Option<Uuid>) -> Self {
		user_id.map(Self::User).unwrap_or(Self::Anonymous)
	}

	pub fn user_id(&self) -> Option<Uuid> {
		match self {
			Self::Anonymous => None,
			Self::User(user_id) => Some(*user_id),
		}
	}
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct WordItem {
	pub uuid: Uuid,
	pub owner_id: Uuid,
	pub source_language: Language,
	pub target_language: Language,
	pub word_type: WordType,
	pub source_word: String,
	pub translation_word: String,
	pub normalized_word: String,
	#[serde(with = "crate::time_serde")]
	pub created_at: time::OffsetDateTime,
	pub author: Option<Author>,
}
impl WordItem {
	pub(crate) fn from_word(word: Word, author: Option<Author>) -> Self {
		Self {
			uuid: word.uuid,
			owner_id: word.owner_id,
			source_language: word.source_language,
			target_language: word.target_language,
			word_type: word.word_type,
			source_word: word.source_word,
			translation_word: word.translation_word,
			normalized_word: word.normalized_word,
			created_at: word.created_at,
			author,
		}
	}

	pub(crate) fn from_visible(visible: VisibleWord) -> Self {
		let (word, author) = visible.into_parts();

		Self::from_word(word, author)
	}

	pub(crate) fn reoriented(visible: VisibleWord, source: Language, target: Language) -> Self {
		let (word, author) = visible.into_parts();

		Self::from_word(direction::reorient(word, source, target), author)
	}
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct WordsResponse {
	pub words: Vec<WordItem>,
}
