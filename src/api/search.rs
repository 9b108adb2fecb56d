use crate::client::BangumiClient;
use crate::error::Result;
use crate::models::{LegacySearchResult, Paged, SearchedSubject};
use crate::params::{LegacySearchParams, Paging, SearchSubjectsBody, SearchSubjectsParams};

#[derive(Debug, Clone, Copy)]
pub struct SearchApi<'a> {
    client: &'a BangumiClient,
    keyword: &'a str,
}

impl<'a> SearchApi<'a> {
    pub(crate) fn new(client: &'a BangumiClient, keyword: &'a str) -> Self {
        Self { client, keyword }
    }

    /// Legacy keyword search. The keyword is percent-encoded into the path.
    pub async fn get(&self, params: &LegacySearchParams) -> Result<LegacySearchResult> {
        self.client
            .get(format!(
                "/search/subject/{}",
                urlencoding::encode(self.keyword)
            ))
            .query(params)?
            .send()
            .await
    }

    /// Structured search. Sort and filter travel in the body with the keyword;
    /// paging goes in the query string.
    pub async fn subjects(
        &self,
        params: &SearchSubjectsParams,
        paging: &Paging,
    ) -> Result<Paged<SearchedSubject>> {
        let body = SearchSubjectsBody {
            keyword: self.keyword,
            params,
        };
        self.client
            .post("/v0/search/subjects")
            .query(paging)?
            .json(&body)?
            .send()
            .await
    }
}
