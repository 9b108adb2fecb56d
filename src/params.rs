//! Query parameters and request bodies.
//!
//! Every optional field is left out of the request when unset, so the API's own
//! defaults apply.

use serde::Serialize;

use crate::types::{
    CollectionType, EpisodeCollectionType, EpisodeType, ResponseGroup, SearchSort, SubjectType,
};

/// `limit`/`offset` pair shared by listing endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Paging {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl Paging {
    pub fn new(limit: u32, offset: u32) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
        }
    }
}

/// Query of the legacy keyword search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LegacySearchParams {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub subject_type: Option<SubjectType>,
    #[serde(rename = "responseGroup", skip_serializing_if = "Option::is_none")]
    pub response_group: Option<ResponseGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u32>,
    /// At most 25.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
}

/// Filters for the structured subject search. Values within one list are
/// OR-ed for `subject_type` and AND-ed for everything else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchFilter {
    #[serde(rename = "type", skip_serializing_if = "Vec::is_empty", default)]
    pub subject_type: Vec<SubjectType>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tag: Vec<String>,
    /// Comparisons such as `>=2020-07-01`; dates are `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub air_date: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub rating: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub rank: Vec<String>,
    /// Ignored for users without permission; unset returns R18 results too.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsfw: Option<bool>,
}

/// Body of the structured subject search, minus the keyword.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchSubjectsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SearchSort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<SearchFilter>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SearchSubjectsBody<'a> {
    pub(crate) keyword: &'a str,
    #[serde(flatten)]
    pub(crate) params: &'a SearchSubjectsParams,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EpisodesQuery {
    pub subject_id: u32,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub episode_type: Option<EpisodeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl EpisodesQuery {
    pub fn for_subject(subject_id: u32) -> Self {
        Self {
            subject_id,
            episode_type: None,
            limit: None,
            offset: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UserCollectionsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_type: Option<SubjectType>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub collection_type: Option<CollectionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Partial update of a subject collection. Progress fields only apply to books.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PatchSubjectCollection {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub collection_type: Option<CollectionType>,
    /// 0 removes the rating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ep_status: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vol_status: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    /// `Some(vec![])` clears every tag; `None` leaves them untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CollectionEpisodesQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode_type: Option<EpisodeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Marks several episodes of one subject at once; the subject's progress is recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchEpisodesCollection {
    pub episode_id: Vec<u32>,
    #[serde(rename = "type")]
    pub collection_type: EpisodeCollectionType,
}

#[derive(Debug, Serialize)]
pub(crate) struct PutEpisodeCollection {
    #[serde(rename = "type")]
    pub(crate) collection_type: EpisodeCollectionType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EditIndex {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IndexSubjectsQuery {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub subject_type: Option<SubjectType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddIndexSubject {
    pub subject_id: u32,
    /// Lower sorts first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl AddIndexSubject {
    pub fn new(subject_id: u32) -> Self {
        Self {
            subject_id,
            sort: None,
            comment: None,
        }
    }
}

/// Creates the entry when the subject is not in the index yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EditIndexSubject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn search_body_merges_keyword_with_params() {
        let params = SearchSubjectsParams {
            sort: Some(SearchSort::Rank),
            filter: Some(SearchFilter {
                subject_type: vec![SubjectType::Anime, SubjectType::Real],
                tag: vec!["童年".to_string()],
                nsfw: Some(false),
                ..Default::default()
            }),
        };
        let body = serde_json::to_value(SearchSubjectsBody {
            keyword: "fate",
            params: &params,
        })
        .unwrap();

        assert_eq!(
            body,
            json!({
                "keyword": "fate",
                "sort": "rank",
                "filter": { "type": [2, 6], "tag": ["童年"], "nsfw": false }
            })
        );
    }

    #[test]
    fn patch_collection_omits_unset_fields_but_keeps_empty_tags() {
        let body = serde_json::to_value(PatchSubjectCollection {
            collection_type: Some(CollectionType::Done),
            rate: Some(0),
            tags: Some(Vec::new()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(body, json!({ "type": 2, "rate": 0, "tags": [] }));
    }

    #[test]
    fn legacy_search_uses_api_field_names() {
        let query = serde_json::to_value(LegacySearchParams {
            subject_type: Some(SubjectType::Book),
            response_group: Some(ResponseGroup::Medium),
            start: None,
            max_results: Some(25),
        })
        .unwrap();
        assert_eq!(
            query,
            json!({ "type": 1, "responseGroup": "medium", "max_results": 25 })
        );
    }
}
