pub mod direction;
pub mod merge;
pub mod normalize;
pub mod visibility;
pub mod word;

pub use word::{Author, Language, PublicWord, VisibilityFlags, VisibleWord, Word, WordType};
