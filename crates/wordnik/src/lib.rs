//! Client for the Wordnik dictionary web service.
//!
//! Builds request URLs, performs the HTTP round trip with the `api_key`
//! header (and `auth_token` for privileged calls), and decodes the XML
//! responses into plain data records.
//!
//! ```no_run
//! use wordnik::{Config, DefinitionsOptions, Wordnik};
//!
//! # async fn run() -> wordnik::Result<()> {
//! let client = Wordnik::new(Config::new("YOUR_API_KEY"));
//! let definitions = client
//!     .definitions("pangram", &DefinitionsOptions::default())
//!     .await?;
//! for definition in &definitions {
//!     println!("{}: {}", definition.part_of_speech, definition.text);
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

mod account;
mod decode;
mod dto;
mod error;
mod logger;
mod params;
mod transport;
mod word;
mod word_list;
mod words;
mod xml;

pub use account::WordListsOptions;
pub use dto::{
    AudioFileMetadata, AuthenticationToken, ContentProvider, Definition, DefinitionSearchResult,
    DefinitionSearchResults, Example, ExpandTerms, Frequency, FrequencySummary, ListType,
    PartOfSpeech, Phrase, Pronunciation, Provider, Related, RelationshipType, SearchResult,
    SearchResults, SortBy, SortDirection, SourceDictionary, Syllable, TokenStatus, TypeFormat,
    User, Word, WordList, WordListWord, WordOfTheDay,
};
pub use error::{Result, WordnikError};
pub use logger::{NoOpLogger, RequestLogger, TracingLogger};
pub use transport::{ApiRequest, HttpTransport, Method, Transport};
pub use word::{
    AudioOptions, DefinitionsOptions, ExamplesOptions, FrequencyOptions, HyphenationOptions,
    LookupOptions, PhrasesOptions, PronunciationsOptions, RelatedOptions, TopExampleOptions,
};
pub use word_list::WordsFromListOptions;
pub use words::{RandomWordOptions, RandomWordsOptions, ReverseDictionaryOptions, SearchOptions};

use crate::xml::XmlDocument;

const API_ROOT: &str = "https://api.wordnik.com/v4";

/// Client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Sent as the `api_key` header on every request.
    pub api_key: String,
    /// Base URL of the service (e.g. `https://api.wordnik.com/v4`).
    pub api_root: String,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_root: API_ROOT.to_string(),
        }
    }
}

/// The Wordnik client.
///
/// Every operation is one stateless request/response round trip; the client
/// holds only read-only configuration and can be shared freely across tasks.
pub struct Wordnik {
    config: Config,
    transport: Arc<dyn Transport>,
    logger: Arc<dyn RequestLogger>,
}

impl Wordnik {
    /// Client over the real HTTP transport, logging nothing.
    pub fn new(config: Config) -> Self {
        Self::with_transport(config, Arc::new(HttpTransport::new()), Arc::new(NoOpLogger))
    }

    /// Client over a caller-supplied transport and logger. This is the seam
    /// tests use to substitute a capturing double.
    pub fn with_transport(
        config: Config,
        transport: Arc<dyn Transport>,
        logger: Arc<dyn RequestLogger>,
    ) -> Self {
        Self {
            config,
            transport,
            logger,
        }
    }

    pub(crate) fn account_endpoint(&self) -> String {
        format!("{}/account.xml", self.config.api_root)
    }

    pub(crate) fn word_endpoint(&self) -> String {
        format!("{}/word.xml", self.config.api_root)
    }

    pub(crate) fn word_list_endpoint(&self) -> String {
        format!("{}/wordList.xml", self.config.api_root)
    }

    pub(crate) fn word_lists_endpoint(&self) -> String {
        format!("{}/wordLists.xml", self.config.api_root)
    }

    pub(crate) fn words_endpoint(&self) -> String {
        format!("{}/words.xml", self.config.api_root)
    }

    /// Validates the URL, assembles the headers, logs the exchange, and runs
    /// the request through the transport.
    pub(crate) async fn request(
        &self,
        method: Method,
        url: String,
        body: Option<String>,
        token: Option<&AuthenticationToken>,
    ) -> Result<Option<String>> {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return Err(WordnikError::InvalidArgument(
                "parameter url cannot be empty".into(),
            ));
        }
        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            return Err(WordnikError::InvalidArgument(
                "parameter url must start with http:// or https://".into(),
            ));
        }

        let mut headers = vec![("api_key".to_string(), self.config.api_key.clone())];
        if let Some(token) = token {
            headers.push(("auth_token".to_string(), token.token.clone()));
        }
        if body.is_some() {
            headers.push(("Content-Type".to_string(), "text/xml".to_string()));
        }

        self.logger
            .log(&format!("{} URL: '{}'", method.as_str(), url));
        if let Some(body) = &body {
            self.logger.log("----------REQUEST BODY START----------");
            self.logger.log(body);
            self.logger.log("----------REQUEST BODY END----------");
        }

        let request = ApiRequest {
            method,
            url,
            headers,
            body,
        };
        let response = self.transport.execute(&request).await;
        match &response {
            Ok(Some(text)) => {
                self.logger.log("----------RESPONSE START----------");
                self.logger.log(text);
                self.logger.log("----------RESPONSE END----------");
            }
            Ok(None) => {}
            Err(e) => self.logger.log_error("request failed", e),
        }
        response
    }

    pub(crate) async fn get_document(
        &self,
        url: String,
        token: Option<&AuthenticationToken>,
    ) -> Result<Option<XmlDocument>> {
        let body = self.request(Method::Get, url, None, token).await?;
        xml::parse(body.as_deref().unwrap_or(""))
    }

    pub(crate) async fn post_document(
        &self,
        url: String,
        data: String,
        token: Option<&AuthenticationToken>,
    ) -> Result<Option<XmlDocument>> {
        let body = self.request(Method::Post, url, Some(data), token).await?;
        xml::parse(body.as_deref().unwrap_or(""))
    }

    /// PUT whose response body nobody reads.
    pub(crate) async fn put(
        &self,
        url: String,
        data: String,
        token: Option<&AuthenticationToken>,
    ) -> Result<()> {
        self.request(Method::Put, url, Some(data), token)
            .await
            .map(|_| ())
    }

    /// DELETE; the server returns no body and none is decoded.
    pub(crate) async fn delete(
        &self,
        url: String,
        token: Option<&AuthenticationToken>,
    ) -> Result<()> {
        self.request(Method::Delete, url, None, token)
            .await
            .map(|_| ())
    }
}

/// Fails with an argument error unless the value has non-blank content.
/// Returns the trimmed value.
pub(crate) fn require_nonempty<'a>(value: &'a str, message: &str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(WordnikError::InvalidArgument(message.to_string()));
    }
    Ok(value)
}
