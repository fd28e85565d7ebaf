use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Language {
	#[serde(rename = "FR")]
	Fr,
	#[serde(rename = "AR")]
	Ar,
}
impl Language {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Fr => "FR",
			Self::Ar => "AR",
		}
	}

	pub fn parse(raw: &str) -> Option<Self> {
		match raw {
			"FR" => Some(Self::Fr),
			"AR" => Some(Self::Ar),
			_ => None,
		}
	}
}

impl Display for Language {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		self.as_str().fmt(f)
	}
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WordType {
	Noun,
	Verb,
	Adjective,
	Adverb,
	Preposition,
	Pronoun,
	Suffix,
	Other,
}
impl WordType {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Noun => "noun",
			Self::Verb => "verb",
			Self::Adjective => "adjective",
			Self::Adverb => "adverb",
			Self::Preposition => "preposition",
			Self::Pronoun => "pronoun",
			Self::Suffix => "suffix",
			Self::Other => "other",
		}
	}

	pub fn parse(raw: &str) -> Option<Self> {
		match raw {
			"noun" => Some(Self::Noun),
			"verb" => Some(Self::Verb),
			"adjective" => Some(Self::Adjective),
			"adverb" => Some(Self::Adverb),
			"preposition" => Some(Self::Preposition),
			"pronoun" => Some(Self::Pronoun),
			"suffix" => Some(Self::Suffix),
			"other" => Some(Self::Other),
			_ => None,
		}
	}
}

impl Display for WordType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		self.as_str().fmt(f)
	}
}

/// One stored source-word/translation pair, in its stored direction.
///
/// `normalized_word` is derived from `translation_word` at write time and is
/// never set independently.
#[derive(Clone, Debug, PartialEq)]
pub struct Word {
	pub uuid: Uuid,
	pub owner_id: Uuid,
	pub source_language: Language,
	pub target_language: Language,
	pub word_type: WordType,
	pub source_word: String,
	pub translation_word: String,
	pub normalized_word: String,
	pub created_at: OffsetDateTime,
}

/// Public descriptor of the user a shared entry belongs to.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Author {
	pub id: Uuid,
	pub display_name: String,
	pub avatar: Option<String>,
}

/// An entry surfaced from another user's published vocabulary.
#[derive(Clone, Debug, PartialEq)]
pub struct PublicWord {
	pub word: Word,
	pub author: Author,
}

/// Per-user visibility toggles. Both default to off: nothing is shared and
/// nothing foreign is shown until the user opts in.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct VisibilityFlags {
	pub is_public_words: bool,
	pub show_others_words: bool,
}

/// A merged result entry. Own entries carry no author; public entries always
/// do, so callers match on the variant instead of probing optional fields.
#[derive(Clone, Debug, PartialEq)]
pub enum VisibleWord {
	Own(Word),
	Public(PublicWord),
}
impl VisibleWord {
	pub fn word(&self) -> &Word {
		match self {
			Self::Own(word) => word,
			Self::Public(public) => &public.word,
		}
	}

	pub fn into_parts(self) -> (Word, Option<Author>) {
		match self {
			Self::Own(word) => (word, None),
			Self::Public(public) => (public.word, Some(public.author)),
		}
	}
}
