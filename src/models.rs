//! Response shapes, one struct per payload the API returns.
//!
//! Fields the API may omit or send as `null` default rather than fail the decode.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::types::{CollectionType, EpisodeCollectionType, EpisodeType, SubjectType};

/// `null` decodes like a missing field.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Offset-paginated listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Paged<T> {
    #[serde(default, deserialize_with = "null_default")]
    pub total: u32,
    #[serde(default, deserialize_with = "null_default")]
    pub limit: u32,
    #[serde(default, deserialize_with = "null_default")]
    pub offset: u32,
    #[serde(
        default,
        deserialize_with = "null_default",
        bound(deserialize = "T: Deserialize<'de>")
    )]
    pub data: Vec<T>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Images {
    #[serde(default, deserialize_with = "null_default")]
    pub large: String,
    #[serde(default, deserialize_with = "null_default")]
    pub common: String,
    #[serde(default, deserialize_with = "null_default")]
    pub medium: String,
    #[serde(default, deserialize_with = "null_default")]
    pub small: String,
    #[serde(default, deserialize_with = "null_default")]
    pub grid: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Avatar {
    #[serde(default, deserialize_with = "null_default")]
    pub large: String,
    #[serde(default, deserialize_with = "null_default")]
    pub medium: String,
    #[serde(default, deserialize_with = "null_default")]
    pub small: String,
}

/// One `key: value` row of a wiki infobox. Values are a string or a list of `{k?, v}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoboxItem {
    pub key: String,
    #[serde(default)]
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    #[serde(default, deserialize_with = "null_default")]
    pub rank: u32,
    #[serde(default, deserialize_with = "null_default")]
    pub total: u32,
    #[serde(default, deserialize_with = "null_default")]
    pub count: HashMap<String, u32>,
    #[serde(default, deserialize_with = "null_default")]
    pub score: f64,
}

/// How many users hold a subject in each collection state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionStats {
    #[serde(default, deserialize_with = "null_default")]
    pub wish: u32,
    #[serde(default, deserialize_with = "null_default")]
    pub collect: u32,
    #[serde(default, deserialize_with = "null_default")]
    pub doing: u32,
    #[serde(default, deserialize_with = "null_default")]
    pub on_hold: u32,
    #[serde(default, deserialize_with = "null_default")]
    pub dropped: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    #[serde(default, deserialize_with = "null_default")]
    pub comments: u32,
    #[serde(default, deserialize_with = "null_default")]
    pub collects: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub id: u32,
    #[serde(rename = "type")]
    pub subject_type: SubjectType,
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub name_cn: String,
    #[serde(default, deserialize_with = "null_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "null_default")]
    pub nsfw: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub locked: bool,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub platform: String,
    #[serde(default)]
    pub images: Option<Images>,
    #[serde(default, deserialize_with = "null_default")]
    pub infobox: Vec<InfoboxItem>,
    #[serde(default, deserialize_with = "null_default")]
    pub volumes: u32,
    #[serde(default, deserialize_with = "null_default")]
    pub eps: u32,
    #[serde(default, deserialize_with = "null_default")]
    pub total_episodes: u32,
    #[serde(default, deserialize_with = "null_default")]
    pub rating: Rating,
    #[serde(default, deserialize_with = "null_default")]
    pub collection: CollectionStats,
    #[serde(default, deserialize_with = "null_default")]
    pub tags: Vec<Tag>,
}

/// Compact subject embedded in collection records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlimSubject {
    pub id: u32,
    #[serde(rename = "type")]
    pub subject_type: SubjectType,
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub name_cn: String,
    #[serde(default, deserialize_with = "null_default")]
    pub short_summary: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub images: Option<Images>,
    #[serde(default, deserialize_with = "null_default")]
    pub volumes: u32,
    #[serde(default, deserialize_with = "null_default")]
    pub eps: u32,
    #[serde(default, deserialize_with = "null_default")]
    pub collection_total: u32,
    #[serde(default, deserialize_with = "null_default")]
    pub score: f64,
    #[serde(default, deserialize_with = "null_default")]
    pub rank: u32,
    #[serde(default, deserialize_with = "null_default")]
    pub tags: Vec<Tag>,
}

/// Hit of the structured subject search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchedSubject {
    pub id: u32,
    #[serde(rename = "type", default)]
    pub subject_type: Option<SubjectType>,
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub name_cn: String,
    #[serde(default, deserialize_with = "null_default")]
    pub summary: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub image: String,
    #[serde(default, deserialize_with = "null_default")]
    pub nsfw: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub score: f64,
    #[serde(default, deserialize_with = "null_default")]
    pub rank: u32,
    #[serde(default, deserialize_with = "null_default")]
    pub tags: Vec<Tag>,
}

/// Subject as returned by the pre-v0 endpoints (calendar, keyword search).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacySubject {
    pub id: u32,
    #[serde(default, deserialize_with = "null_default")]
    pub url: String,
    #[serde(rename = "type", default)]
    pub subject_type: Option<SubjectType>,
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub name_cn: String,
    #[serde(default, deserialize_with = "null_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "null_default")]
    pub air_date: String,
    #[serde(default, deserialize_with = "null_default")]
    pub air_weekday: u8,
    #[serde(default)]
    pub images: Option<Images>,
    #[serde(default)]
    pub eps: Option<u32>,
    #[serde(default)]
    pub eps_count: Option<u32>,
    #[serde(default)]
    pub rating: Option<Rating>,
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default)]
    pub collection: Option<CollectionStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacySearchResult {
    #[serde(default, deserialize_with = "null_default")]
    pub results: u32,
    #[serde(default, deserialize_with = "null_default")]
    pub list: Vec<LegacySubject>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weekday {
    pub id: u8,
    #[serde(default, deserialize_with = "null_default")]
    pub en: String,
    #[serde(default, deserialize_with = "null_default")]
    pub cn: String,
    #[serde(default, deserialize_with = "null_default")]
    pub ja: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub weekday: Weekday,
    #[serde(default, deserialize_with = "null_default")]
    pub items: Vec<LegacySubject>,
}

/// Person credited on a subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedPerson {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "null_default")]
    pub person_type: u8,
    #[serde(default, deserialize_with = "null_default")]
    pub career: Vec<String>,
    #[serde(default)]
    pub images: Option<Images>,
    #[serde(default, deserialize_with = "null_default")]
    pub relation: String,
}

/// Person as embedded in other records, e.g. a character's voice actors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonSummary {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "null_default")]
    pub person_type: u8,
    #[serde(default, deserialize_with = "null_default")]
    pub career: Vec<String>,
    #[serde(default)]
    pub images: Option<Images>,
    #[serde(default, deserialize_with = "null_default")]
    pub short_summary: String,
    #[serde(default, deserialize_with = "null_default")]
    pub locked: bool,
}

/// Character appearing in a subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedCharacter {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "null_default")]
    pub character_type: u8,
    #[serde(default)]
    pub images: Option<Images>,
    #[serde(default, deserialize_with = "null_default")]
    pub relation: String,
    #[serde(default, deserialize_with = "null_default")]
    pub actors: Vec<PersonSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectRelation {
    pub id: u32,
    #[serde(rename = "type")]
    pub subject_type: SubjectType,
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub name_cn: String,
    #[serde(default)]
    pub images: Option<Images>,
    #[serde(default, deserialize_with = "null_default")]
    pub relation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub id: u32,
    #[serde(rename = "type")]
    pub episode_type: EpisodeType,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub name_cn: String,
    /// Position within all episodes of the subject, including specials.
    #[serde(default, deserialize_with = "null_default")]
    pub sort: f64,
    /// Position within episodes of the same type.
    #[serde(default)]
    pub ep: Option<f64>,
    #[serde(default, deserialize_with = "null_default")]
    pub airdate: String,
    #[serde(default, deserialize_with = "null_default")]
    pub comment: u32,
    #[serde(default, deserialize_with = "null_default")]
    pub duration: String,
    #[serde(default, deserialize_with = "null_default")]
    pub desc: String,
    #[serde(default, deserialize_with = "null_default")]
    pub disc: u32,
    #[serde(default)]
    pub duration_seconds: Option<u32>,
    #[serde(default)]
    pub subject_id: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "null_default")]
    pub character_type: u8,
    #[serde(default)]
    pub images: Option<Images>,
    #[serde(default, deserialize_with = "null_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "null_default")]
    pub locked: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub nsfw: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub infobox: Vec<InfoboxItem>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub blood_type: Option<u8>,
    #[serde(default)]
    pub birth_year: Option<u32>,
    #[serde(default)]
    pub birth_mon: Option<u8>,
    #[serde(default)]
    pub birth_day: Option<u8>,
    #[serde(default, deserialize_with = "null_default")]
    pub stat: Stat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "null_default")]
    pub person_type: u8,
    #[serde(default, deserialize_with = "null_default")]
    pub career: Vec<String>,
    #[serde(default)]
    pub images: Option<Images>,
    #[serde(default, deserialize_with = "null_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "null_default")]
    pub locked: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub last_modified: String,
    #[serde(default, deserialize_with = "null_default")]
    pub infobox: Vec<InfoboxItem>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub blood_type: Option<u8>,
    #[serde(default)]
    pub birth_year: Option<u32>,
    #[serde(default)]
    pub birth_mon: Option<u8>,
    #[serde(default)]
    pub birth_day: Option<u8>,
    #[serde(default, deserialize_with = "null_default")]
    pub stat: Stat,
}

/// Subject linked from a character or person page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedSubject {
    pub id: u32,
    #[serde(rename = "type", default)]
    pub subject_type: Option<SubjectType>,
    #[serde(default, deserialize_with = "null_default")]
    pub staff: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub name_cn: String,
    #[serde(default, deserialize_with = "null_default")]
    pub image: String,
}

/// Character/person pairing within one subject. Returned both by a
/// character's persons and by a person's characters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastEntry {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "null_default")]
    pub entry_type: u8,
    #[serde(default)]
    pub images: Option<Images>,
    pub subject_id: u32,
    #[serde(default)]
    pub subject_type: Option<SubjectType>,
    #[serde(default, deserialize_with = "null_default")]
    pub subject_name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub subject_name_cn: String,
    #[serde(default)]
    pub staff: Option<String>,
}

/// Public profile; `me` additionally fills in the private fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub username: String,
    #[serde(default, deserialize_with = "null_default")]
    pub nickname: String,
    #[serde(default, deserialize_with = "null_default")]
    pub user_group: u32,
    #[serde(default, deserialize_with = "null_default")]
    pub avatar: Avatar,
    #[serde(default, deserialize_with = "null_default")]
    pub sign: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub reg_time: Option<String>,
    #[serde(default)]
    pub time_offset: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSubjectCollection {
    pub subject_id: u32,
    pub subject_type: SubjectType,
    /// 0 means unrated.
    #[serde(default, deserialize_with = "null_default")]
    pub rate: u8,
    #[serde(rename = "type")]
    pub collection_type: CollectionType,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub ep_status: u32,
    #[serde(default, deserialize_with = "null_default")]
    pub vol_status: u32,
    #[serde(default, deserialize_with = "null_default")]
    pub updated_at: String,
    #[serde(default, deserialize_with = "null_default")]
    pub private: bool,
    #[serde(default)]
    pub subject: Option<SlimSubject>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserEpisodeCollection {
    pub episode: Episode,
    #[serde(rename = "type")]
    pub collection_type: EpisodeCollectionType,
    #[serde(default)]
    pub updated_at: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    #[serde(default, deserialize_with = "null_default")]
    pub username: String,
    #[serde(default, deserialize_with = "null_default")]
    pub nickname: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Revision {
    pub id: u32,
    #[serde(rename = "type", default, deserialize_with = "null_default")]
    pub revision_type: u8,
    #[serde(default)]
    pub creator: Option<Creator>,
    #[serde(default, deserialize_with = "null_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "null_default")]
    pub created_at: String,
}

/// One revision with its snapshot. The snapshot layout depends on the entity kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevisionDetail {
    #[serde(flatten)]
    pub revision: Revision,
    #[serde(default)]
    pub data: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Index {
    pub id: u32,
    #[serde(default, deserialize_with = "null_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_default")]
    pub desc: String,
    #[serde(default, deserialize_with = "null_default")]
    pub total: u32,
    #[serde(default, deserialize_with = "null_default")]
    pub stat: Stat,
    #[serde(default, deserialize_with = "null_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_default")]
    pub updated_at: String,
    #[serde(default, deserialize_with = "null_default")]
    pub creator: Creator,
    #[serde(default, deserialize_with = "null_default")]
    pub ban: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub nsfw: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexSubject {
    pub id: u32,
    #[serde(rename = "type")]
    pub subject_type: SubjectType,
    pub name: String,
    #[serde(default)]
    pub images: Option<Images>,
    #[serde(default, deserialize_with = "null_default")]
    pub infobox: Vec<InfoboxItem>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub comment: String,
    #[serde(default, deserialize_with = "null_default")]
    pub added_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn subject_tolerates_missing_optional_fields() {
        let subject: Subject = serde_json::from_value(json!({
            "id": 8,
            "type": 2,
            "name": "コードギアス 反逆のルルーシュR2",
            "images": null,
            "rating": { "rank": 20, "total": 100, "count": { "10": 40 }, "score": 8.8 },
            "infobox": [
                { "key": "中文名", "value": "Code Geass R2" },
                { "key": "别名", "value": [{ "v": "叛逆的鲁路修R2" }] }
            ]
        }))
        .expect("subject deserialize");

        assert_eq!(subject.subject_type, SubjectType::Anime);
        assert!(subject.images.is_none());
        assert_eq!(subject.rating.count.get("10"), Some(&40));
        assert_eq!(subject.infobox[1].value[0]["v"], "叛逆的鲁路修R2");
        assert!(subject.tags.is_empty());
        assert_eq!(subject.collection, CollectionStats::default());
    }

    #[test]
    fn revision_detail_flattens_common_fields() {
        let detail: RevisionDetail = serde_json::from_value(json!({
            "id": 348475,
            "type": 1,
            "creator": { "username": "sai", "nickname": "Sai" },
            "summary": "fix infobox",
            "created_at": "2022-01-01T00:00:00+08:00",
            "data": { "name": "x" }
        }))
        .expect("revision deserialize");

        assert_eq!(detail.revision.id, 348475);
        assert_eq!(detail.revision.creator.unwrap().username, "sai");
        assert_eq!(detail.data["name"], "x");
    }

    #[test]
    fn null_fields_fall_back_to_defaults() {
        let subject: Subject = serde_json::from_value(json!({
            "id": 8,
            "type": 2,
            "name": "x",
            "name_cn": null,
            "summary": null,
            "tags": null,
            "rating": null,
            "eps": null
        }))
        .expect("subject deserialize");
        assert_eq!(subject.name_cn, "");
        assert!(subject.tags.is_empty());
        assert_eq!(subject.rating, Rating::default());
        assert_eq!(subject.eps, 0);

        let person: Person = serde_json::from_value(json!({
            "id": 5,
            "name": "p",
            "type": null,
            "summary": null,
            "career": null
        }))
        .expect("person deserialize");
        assert_eq!(person.summary, "");
        assert_eq!(person.person_type, 0);
        assert!(person.career.is_empty());

        let page: Paged<Index> =
            serde_json::from_value(json!({ "total": null, "data": null })).unwrap();
        assert_eq!(page.total, 0);
        assert!(page.data.is_empty());
    }

    #[test]
    fn paged_defaults_to_empty_data() {
        let page: Paged<Episode> = serde_json::from_value(json!({ "total": 0 })).unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.limit, 0);
    }

    #[test]
    fn user_episode_collection_decodes_codes() {
        let item: UserEpisodeCollection = serde_json::from_value(json!({
            "episode": { "id": 1075445, "type": 0, "sort": 1, "ep": 1, "name": "first" },
            "type": 2
        }))
        .unwrap();
        assert_eq!(item.collection_type, EpisodeCollectionType::Done);
        assert_eq!(item.episode.episode_type, EpisodeType::Main);
        assert_eq!(item.episode.sort, 1.0);
    }
}
