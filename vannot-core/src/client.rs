//! MyVariant.info batch annotation client.

use std::io::Read;

use crate::annotation::{AnnotationEntry, GenomeBuild};
use crate::errors::AnnotateError;

/// Default MyVariant.info batch variant endpoint.
pub const DEFAULT_MYVARIANT_API: &str = "http://myvariant.info/v1/variant";

/// Most identifiers the service accepts in one batched POST.
pub const MAX_BATCH_IDS: usize = 900;

/// Builder for constructing a [`MyVariantClient`] with custom configuration.
///
/// Use this builder to point the client at a different endpoint (the tests
/// run against a local mock server) or select the genome build before
/// creating a client instance.
#[derive(Default)]
pub struct MyVariantClientBuilder {
    api_url: Option<String>,
    build: Option<GenomeBuild>,
}

impl MyVariantClientBuilder {
    /// Creates a new, empty MyVariantClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the annotation endpoint URL for the client.
    pub fn with_api_url(mut self, api_url: String) -> Self {
        self.api_url = Some(api_url);
        self
    }

    /// Sets the genome build flag sent with the query.
    pub fn with_build(mut self, build: GenomeBuild) -> Self {
        self.build = Some(build);
        self
    }

    /// Consumes the builder and creates a MyVariantClient.
    pub fn finish(self) -> MyVariantClient {
        MyVariantClient {
            api_url: self
                .api_url
                .unwrap_or_else(|| DEFAULT_MYVARIANT_API.to_string()),
            build: self.build.unwrap_or_default(),
        }
    }
}

/// Client for the MyVariant.info batch annotation endpoint.
///
/// One call to [`annotate`](MyVariantClient::annotate) performs exactly one
/// synchronous POST; there is no retry and no timeout, so an unresponsive
/// remote blocks the caller.
pub struct MyVariantClient {
    /// Annotation endpoint URL
    pub api_url: String,
    /// Genome build flag sent with the query
    pub build: GenomeBuild,
}

impl MyVariantClient {
    /// Creates a new builder for constructing a [`MyVariantClient`].
    pub fn builder() -> MyVariantClientBuilder {
        MyVariantClientBuilder::default()
    }

    /// Annotate a batch of genomic-HGVS identifiers.
    ///
    /// The identifiers are comma-joined into one urlencoded POST body
    /// (`ids=...`, plus `&hg38=true` when the hg38 build is selected). The
    /// response is decoded as UTF-8 text, then as a JSON array with one
    /// [`AnnotationEntry`] per submitted identifier. Entries come back in
    /// request order; that correspondence is the service's documented batch
    /// behavior and is not re-verified here.
    pub fn annotate(&self, ids: &[String]) -> Result<Vec<AnnotationEntry>, AnnotateError> {
        if ids.is_empty() {
            return Err(AnnotateError::EmptyBatch);
        }
        if ids.len() > MAX_BATCH_IDS {
            return Err(AnnotateError::BatchTooLarge(ids.len(), MAX_BATCH_IDS));
        }

        let mut body = format!("ids={}", ids.join(","));
        if self.build == GenomeBuild::Hg38 {
            body.push_str("&hg38=true");
        }

        let response = ureq::post(&self.api_url)
            .set("content-type", "application/x-www-form-urlencoded")
            .send_string(&body)
            .map_err(|e| AnnotateError::Network(format!("POST {}: {}", self.api_url, e)))?;

        let mut bytes = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut bytes)
            .map_err(|e| AnnotateError::Network(format!("Failed to read response body: {}", e)))?;

        let text = String::from_utf8(bytes)
            .map_err(|e| AnnotateError::Decode(format!("Response is not valid UTF-8: {}", e)))?;

        serde_json::from_str(&text)
            .map_err(|e| AnnotateError::Decode(format!("Response is not a JSON annotation list: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_batch_is_rejected_before_any_network_io() {
        let client = MyVariantClient::builder()
            .with_api_url("http://127.0.0.1:1/v1/variant".to_string())
            .finish();
        let err = client.annotate(&[]).unwrap_err();
        assert!(matches!(err, AnnotateError::EmptyBatch));
    }

    #[test]
    fn oversized_batch_is_rejected_before_any_network_io() {
        let client = MyVariantClient::builder()
            .with_api_url("http://127.0.0.1:1/v1/variant".to_string())
            .finish();
        let ids: Vec<String> = (0..MAX_BATCH_IDS + 1)
            .map(|i| format!("chr16:g.{}A>G", 100 + i))
            .collect();
        let err = client.annotate(&ids).unwrap_err();
        assert!(matches!(err, AnnotateError::BatchTooLarge(n, cap) if n == 901 && cap == 900));
    }

    #[test]
    fn defaults_point_at_myvariant_hg38() {
        let client = MyVariantClient::builder().finish();
        assert_eq!(client.api_url, DEFAULT_MYVARIANT_API);
        assert_eq!(client.build, crate::annotation::GenomeBuild::Hg38);
    }
}
