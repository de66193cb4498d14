use shared_types::{Candidate, SearchTransportError, TitleSearchResponse};
use std::future::Future;

use super::Lookup;

/// Backend the client talks to when nothing is set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Base URL of the REST backend, fixed at compile time via `API_BASE_URL`.
pub fn api_base_url() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL)
}

/// The external title-search service.
pub trait TitleSearch {
    fn search(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<TitleSearchResponse, SearchTransportError>>;
}

/// `GET {base}/api/search-movies?s=...` over reqwest.
#[derive(Clone, Debug)]
pub struct HttpTitleSearch {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTitleSearch {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(api_base_url())
    }

    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}/api/search-movies?s={}",
            self.base_url,
            urlencoding::encode(query)
        )
    }
}

impl TitleSearch for HttpTitleSearch {
    /// The body is read whatever the status: the proxy answers 400 and 500
    /// with the same envelope, and a negative flag is a normal outcome.
    async fn search(&self, query: &str) -> Result<TitleSearchResponse, SearchTransportError> {
        let response = self
            .http
            .get(self.search_url(query))
            .send()
            .await
            .map_err(|e| SearchTransportError::Http(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| SearchTransportError::Http(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| SearchTransportError::Decode(e.to_string()))
    }
}

/// How a lookup ended, as far as the result surface is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(Vec<Candidate>),
    NoResults,
    Failed(SearchTransportError),
}

impl LookupOutcome {
    pub fn from_response(result: Result<TitleSearchResponse, SearchTransportError>) -> Self {
        match result {
            Ok(response) => {
                let candidates = response.into_candidates();
                if candidates.is_empty() {
                    LookupOutcome::NoResults
                } else {
                    LookupOutcome::Found(candidates)
                }
            }
            Err(e) => LookupOutcome::Failed(e),
        }
    }
}

/// Perform the network half of a lookup issued by the controller.
#[tracing::instrument(skip(client), fields(session = %lookup.session, seq = lookup.seq))]
pub async fn run_lookup<C: TitleSearch>(client: &C, lookup: &Lookup) -> LookupOutcome {
    let outcome = LookupOutcome::from_response(client.search(&lookup.query).await);
    if let LookupOutcome::Failed(e) = &outcome {
        tracing::warn!(error = %e, query = %lookup.query, "Title lookup failed");
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search_select::SessionId;
    use shared_types::TitleRecord;

    struct CannedSearch(Result<TitleSearchResponse, SearchTransportError>);

    impl TitleSearch for CannedSearch {
        async fn search(&self, _query: &str) -> Result<TitleSearchResponse, SearchTransportError> {
            self.0.clone()
        }
    }

    fn record(title: &str) -> TitleRecord {
        TitleRecord {
            title: title.into(),
            year: Some("2021".into()),
            kind: Some("movie".into()),
            external_id: "1".into(),
            poster: String::new(),
        }
    }

    fn lookup(query: &str) -> Lookup {
        Lookup {
            session: SessionId::Dashboard,
            seq: 1,
            query: query.into(),
        }
    }

    #[test]
    fn search_url_escapes_query() {
        let client = HttpTitleSearch::new("http://localhost:8080/");
        assert_eq!(
            client.search_url("tom & jerry"),
            "http://localhost:8080/api/search-movies?s=tom%20%26%20jerry"
        );
    }

    #[test]
    fn positive_payload_with_hits_is_found() {
        let outcome =
            LookupOutcome::from_response(Ok(TitleSearchResponse::found(vec![record("Dune")])));
        assert_eq!(
            outcome,
            LookupOutcome::Found(vec![Candidate::new("Dune").with_year("2021").with_kind("movie")])
        );
    }

    #[test]
    fn empty_or_negative_payload_is_no_results() {
        assert_eq!(
            LookupOutcome::from_response(Ok(TitleSearchResponse::found(vec![]))),
            LookupOutcome::NoResults
        );
        assert_eq!(
            LookupOutcome::from_response(Ok(TitleSearchResponse::failed("Error searching movies"))),
            LookupOutcome::NoResults
        );
    }

    #[tokio::test]
    async fn transport_failure_is_failed() {
        let client = CannedSearch(Err(SearchTransportError::Http("connection refused".into())));
        let outcome = run_lookup(&client, &lookup("dune")).await;
        assert_eq!(
            outcome,
            LookupOutcome::Failed(SearchTransportError::Http("connection refused".into()))
        );
    }

    #[tokio::test]
    async fn run_lookup_maps_hits() {
        let client = CannedSearch(Ok(TitleSearchResponse::found(vec![record("Dune"), record("Dune")])));
        match run_lookup(&client, &lookup("dune")).await {
            LookupOutcome::Found(items) => assert_eq!(items.len(), 2),
            other => panic!("expected hits, got {other:?}"),
        }
    }
}
