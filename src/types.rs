//! Domain codes the API uses as parameter and response values.
//!
//! Numeric codes travel as integers on the wire, size variants as lowercase strings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SubjectType {
    Book,
    Anime,
    Music,
    Game,
    Real,
}

impl From<SubjectType> for u8 {
    fn from(value: SubjectType) -> Self {
        match value {
            SubjectType::Book => 1,
            SubjectType::Anime => 2,
            SubjectType::Music => 3,
            SubjectType::Game => 4,
            SubjectType::Real => 6,
        }
    }
}

impl TryFrom<u8> for SubjectType {
    type Error = UnknownCode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(SubjectType::Book),
            2 => Ok(SubjectType::Anime),
            3 => Ok(SubjectType::Music),
            4 => Ok(SubjectType::Game),
            6 => Ok(SubjectType::Real),
            other => Err(UnknownCode::new("subject type", other)),
        }
    }
}

/// Status of a user's subject collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CollectionType {
    Wish,
    Done,
    Doing,
    OnHold,
    Dropped,
}

impl From<CollectionType> for u8 {
    fn from(value: CollectionType) -> Self {
        match value {
            CollectionType::Wish => 1,
            CollectionType::Done => 2,
            CollectionType::Doing => 3,
            CollectionType::OnHold => 4,
            CollectionType::Dropped => 5,
        }
    }
}

impl TryFrom<u8> for CollectionType {
    type Error = UnknownCode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(CollectionType::Wish),
            2 => Ok(CollectionType::Done),
            3 => Ok(CollectionType::Doing),
            4 => Ok(CollectionType::OnHold),
            5 => Ok(CollectionType::Dropped),
            other => Err(UnknownCode::new("collection type", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum EpisodeType {
    Main,
    Special,
    Opening,
    Ending,
    /// Trailers, promos and ads.
    Promo,
    /// Fan-made works.
    Mad,
    Other,
}

impl From<EpisodeType> for u8 {
    fn from(value: EpisodeType) -> Self {
        match value {
            EpisodeType::Main => 0,
            EpisodeType::Special => 1,
            EpisodeType::Opening => 2,
            EpisodeType::Ending => 3,
            EpisodeType::Promo => 4,
            EpisodeType::Mad => 5,
            EpisodeType::Other => 6,
        }
    }
}

impl TryFrom<u8> for EpisodeType {
    type Error = UnknownCode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(EpisodeType::Main),
            1 => Ok(EpisodeType::Special),
            2 => Ok(EpisodeType::Opening),
            3 => Ok(EpisodeType::Ending),
            4 => Ok(EpisodeType::Promo),
            5 => Ok(EpisodeType::Mad),
            6 => Ok(EpisodeType::Other),
            other => Err(UnknownCode::new("episode type", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum EpisodeCollectionType {
    #[default]
    None,
    Wish,
    Done,
    Dropped,
}

impl From<EpisodeCollectionType> for u8 {
    fn from(value: EpisodeCollectionType) -> Self {
        match value {
            EpisodeCollectionType::None => 0,
            EpisodeCollectionType::Wish => 1,
            EpisodeCollectionType::Done => 2,
            EpisodeCollectionType::Dropped => 3,
        }
    }
}

impl TryFrom<u8> for EpisodeCollectionType {
    type Error = UnknownCode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(EpisodeCollectionType::None),
            1 => Ok(EpisodeCollectionType::Wish),
            2 => Ok(EpisodeCollectionType::Done),
            3 => Ok(EpisodeCollectionType::Dropped),
            other => Err(UnknownCode::new("episode collection type", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown {kind} code {code}")]
pub struct UnknownCode {
    kind: &'static str,
    code: u8,
}

impl UnknownCode {
    fn new(kind: &'static str, code: u8) -> Self {
        Self { kind, code }
    }
}

/// Character and person image sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageType {
    #[default]
    Small,
    Grid,
    Large,
    Medium,
}

impl ImageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageType::Small => "small",
            ImageType::Grid => "grid",
            ImageType::Large => "large",
            ImageType::Medium => "medium",
        }
    }
}

/// Subject image sizes; subjects additionally offer `common`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectImageType {
    #[default]
    Small,
    Grid,
    Large,
    Medium,
    Common,
}

impl SubjectImageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubjectImageType::Small => "small",
            SubjectImageType::Grid => "grid",
            SubjectImageType::Large => "large",
            SubjectImageType::Medium => "medium",
            SubjectImageType::Common => "common",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvatarType {
    #[default]
    Small,
    Large,
    Medium,
}

impl AvatarType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AvatarType::Small => "small",
            AvatarType::Large => "large",
            AvatarType::Medium => "medium",
        }
    }
}

/// Ordering for the structured subject search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchSort {
    /// Relevance, the search engine's default.
    Match,
    /// Number of collections.
    Heat,
    Rank,
    Score,
}

/// Payload size of the legacy keyword search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseGroup {
    Small,
    Medium,
    Large,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_codes_use_documented_values() {
        assert_eq!(serde_json::to_value(SubjectType::Real).unwrap(), json!(6));
        assert_eq!(serde_json::to_value(CollectionType::OnHold).unwrap(), json!(4));
        assert_eq!(serde_json::to_value(EpisodeType::Main).unwrap(), json!(0));
        assert_eq!(
            serde_json::to_value(EpisodeCollectionType::Dropped).unwrap(),
            json!(3)
        );
    }

    #[test]
    fn numeric_codes_parse_back_and_reject_gaps() {
        let parsed: SubjectType = serde_json::from_value(json!(2)).unwrap();
        assert_eq!(parsed, SubjectType::Anime);
        assert!(serde_json::from_value::<SubjectType>(json!(5)).is_err());
        assert!(serde_json::from_value::<EpisodeType>(json!(7)).is_err());
        assert_eq!(
            SubjectType::try_from(5).unwrap_err().to_string(),
            "unknown subject type code 5"
        );
    }

    #[test]
    fn image_sizes_default_to_small() {
        assert_eq!(ImageType::default().as_str(), "small");
        assert_eq!(SubjectImageType::default().as_str(), "small");
        assert_eq!(AvatarType::default().as_str(), "small");
        assert_eq!(
            serde_json::to_value(SubjectImageType::Common).unwrap(),
            json!("common")
        );
    }

    #[test]
    fn search_sort_is_lowercase() {
        assert_eq!(serde_json::to_value(SearchSort::Heat).unwrap(), json!("heat"));
        assert_eq!(serde_json::to_value(ResponseGroup::Large).unwrap(), json!("large"));
    }
}
