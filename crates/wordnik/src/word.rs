//! Operations scoped to a single word.

use crate::dto::{
    AudioFileMetadata, Definition, Example, FrequencySummary, PartOfSpeech, Phrase, Pronunciation,
    Related, RelationshipType, SearchResults, SourceDictionary, Syllable, TypeFormat, Word,
};
use crate::error::{Result, WordnikError};
use crate::params::ParamList;
use crate::{decode, require_nonempty, Wordnik};

/// Optional arguments for [`Wordnik::lookup`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LookupOptions {
    /// Resolve to the word root (`cats` -> `cat`) instead of the exact form.
    pub use_canonical: bool,
    /// Ask for spelling and case-variant suggestions.
    pub include_suggestions: bool,
}

/// Optional arguments for [`Wordnik::definitions`].
#[derive(Debug, Clone, Default)]
pub struct DefinitionsOptions {
    /// Maximum number of results; ignored unless positive.
    pub limit: i32,
    /// Restrict to these parts of speech.
    pub part_of_speech: Vec<PartOfSpeech>,
    /// Dictionaries to consult, tried in the given order.
    pub source_dictionaries: Vec<SourceDictionary>,
    pub use_canonical: bool,
}

/// Optional arguments for [`Wordnik::examples`].
#[derive(Debug, Clone, Default)]
pub struct ExamplesOptions {
    /// Show duplicate examples from different sources.
    pub include_duplicates: bool,
    /// Only return results from this content provider.
    pub content_provider: Option<String>,
    pub use_canonical: bool,
    /// Results to skip; ignored unless positive.
    pub skip: i32,
    /// Maximum number of results; ignored unless positive.
    pub limit: i32,
}

/// Optional arguments for [`Wordnik::top_example`].
#[derive(Debug, Clone, Default)]
pub struct TopExampleOptions {
    pub content_provider: Option<String>,
    pub use_canonical: bool,
}

/// Optional arguments for [`Wordnik::related`].
#[derive(Debug, Clone, Default)]
pub struct RelatedOptions {
    pub use_canonical: bool,
    /// Restrict to these relationship types.
    pub relationship_types: Vec<RelationshipType>,
    /// Limits the results per relationship type; ignored unless positive.
    pub limit_per_relationship_type: i32,
}

/// Optional arguments for [`Wordnik::frequency`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyOptions {
    pub use_canonical: bool,
    /// Starting year; ignored unless positive.
    pub start_year: i32,
    /// Ending year; ignored unless positive.
    pub end_year: i32,
}

/// Optional arguments for [`Wordnik::phrases`].
#[derive(Debug, Clone, Default)]
pub struct PhrasesOptions {
    pub limit: i32,
    /// Minimum weighted mutual information for the phrase.
    pub wlmi: Option<String>,
    pub use_canonical: bool,
}

/// Optional arguments for [`Wordnik::hyphenation`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HyphenationOptions {
    pub use_canonical: bool,
    pub source_dictionary: Option<SourceDictionary>,
    pub limit: i32,
}

/// Optional arguments for [`Wordnik::pronunciations`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PronunciationsOptions {
    pub use_canonical: bool,
    pub source_dictionary: Option<SourceDictionary>,
    pub type_format: Option<TypeFormat>,
    pub limit: i32,
}

/// Optional arguments for [`Wordnik::audio`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AudioOptions {
    pub use_canonical: bool,
    pub limit: i32,
}

impl Wordnik {
    /// Fetch the word you requested, along with its canonical form and any
    /// spelling suggestions, assuming it is found in the corpus.
    pub async fn lookup(&self, word: &str, options: &LookupOptions) -> Result<Word> {
        let word = require_word(word)?;

        let mut params = ParamList::new();
        if options.use_canonical {
            params.put("useCanonical", "true");
        }
        if options.include_suggestions {
            params.put("useSuggestions", "true");
        }

        let url = format!("{}/{}{}", self.word_endpoint(), word, params.query_suffix());
        let doc = self.get_document(url, None).await?;
        decode::word(doc.as_ref())
    }

    /// Look up definitions for a word.
    ///
    /// Definitions from more than one dictionary at a time can be flaky on
    /// the service side; use [`SourceDictionary::All`] or aggregate several
    /// single-dictionary calls if that bites.
    pub async fn definitions(&self, word: &str, options: &DefinitionsOptions) -> Result<Vec<Definition>> {
        let word = require_word(word)?;

        let mut params = ParamList::new();
        params.put_positive("limit", options.limit);
        if options.use_canonical {
            params.put("useCanonical", "true");
        }
        params.put_set("partOfSpeech", &options.part_of_speech);
        params.put_set("sourceDictionaries", &options.source_dictionaries);

        let url = format!(
            "{}/{}/definitions{}",
            self.word_endpoint(),
            word,
            params.query_suffix()
        );
        let doc = self.get_document(url, None).await?;
        decode::definitions(doc.as_ref())
    }

    /// Retrieve example sentences for a word in the corpus.
    pub async fn examples(&self, word: &str, options: &ExamplesOptions) -> Result<SearchResults> {
        let word = require_word(word)?;

        let mut params = ParamList::new();
        params.put_bool("includeDuplicates", options.include_duplicates);
        params.put_nonempty("contentProvider", options.content_provider.as_deref());
        params.put_bool("useCanonical", options.use_canonical);
        params.put_positive("skip", options.skip);
        params.put_positive("limit", options.limit);

        let url = format!(
            "{}/{}/examples{}",
            self.word_endpoint(),
            word,
            params.query_suffix()
        );
        let doc = self.get_document(url, None).await?;
        decode::examples(doc.as_ref())
    }

    /// Return the top-rated example for a word.
    pub async fn top_example(&self, word: &str, options: &TopExampleOptions) -> Result<Example> {
        let word = require_word(word)?;

        let mut params = ParamList::new();
        params.put_bool("useCanonical", options.use_canonical);
        params.put_nonempty("contentProvider", options.content_provider.as_deref());

        let url = format!(
            "{}/{}/topExample{}",
            self.word_endpoint(),
            word,
            params.query_suffix()
        );
        let doc = self.get_document(url, None).await?;
        decode::top_example(doc.as_ref())
    }

    /// Retrieve related words for a particular word.
    pub async fn related(&self, word: &str, options: &RelatedOptions) -> Result<Vec<Related>> {
        let word = require_word(word)?;

        let mut params = ParamList::new();
        params.put_positive(
            "limitPerRelationshipType",
            options.limit_per_relationship_type,
        );
        if options.use_canonical {
            params.put("useCanonical", "true");
        }
        params.put_set("relationshipTypes", &options.relationship_types);

        let url = format!(
            "{}/{}/relatedWords{}",
            self.word_endpoint(),
            word,
            params.query_suffix()
        );
        let doc = self.get_document(url, None).await?;
        decode::related_list(doc.as_ref())
    }

    /// See how often the word occurs in the corpus, bucketed by year.
    pub async fn frequency(&self, word: &str, options: &FrequencyOptions) -> Result<FrequencySummary> {
        let word = require_word(word)?;

        let mut params = ParamList::new();
        if options.use_canonical {
            params.put("useCanonical", "true");
        }
        params.put_positive("startYear", options.start_year);
        params.put_positive("endYear", options.end_year);

        let url = format!(
            "{}/{}/frequency{}",
            self.word_endpoint(),
            word,
            params.query_suffix()
        );
        let doc = self.get_document(url, None).await?;
        decode::frequency_summary(doc.as_ref())
    }

    /// Fetch bi-gram phrases containing the word.
    pub async fn phrases(&self, word: &str, options: &PhrasesOptions) -> Result<Vec<Phrase>> {
        let word = require_word(word)?;

        let mut params = ParamList::new();
        params.put_positive("limit", options.limit);
        params.put_nonempty("wlmi", options.wlmi.as_deref());
        if options.use_canonical {
            params.put("useCanonical", "true");
        }

        let url = format!(
            "{}/{}/phrases{}",
            self.word_endpoint(),
            word,
            params.query_suffix()
        );
        let doc = self.get_document(url, None).await?;
        decode::phrases(doc.as_ref())
    }

    /// Returns syllable information for a word.
    pub async fn hyphenation(&self, word: &str, options: &HyphenationOptions) -> Result<Vec<Syllable>> {
        let word = require_word(word)?;

        let mut params = ParamList::new();
        params.put_positive("limit", options.limit);
        if options.use_canonical {
            params.put("useCanonical", "true");
        }
        if let Some(dictionary) = options.source_dictionary {
            params.put("sourceDictionary", dictionary.to_string());
        }

        let url = format!(
            "{}/{}/hyphenation{}",
            self.word_endpoint(),
            word,
            params.query_suffix()
        );
        let doc = self.get_document(url, None).await?;
        decode::hyphenation(doc.as_ref())
    }

    /// Returns text pronunciations for a word.
    pub async fn pronunciations(
        &self,
        word: &str,
        options: &PronunciationsOptions,
    ) -> Result<Vec<Pronunciation>> {
        let word = require_word(word)?;

        let mut params = ParamList::new();
        params.put_positive("limit", options.limit);
        if options.use_canonical {
            params.put("useCanonical", "true");
        }
        if let Some(dictionary) = options.source_dictionary {
            params.put("sourceDictionary", dictionary.to_string());
        }
        if let Some(format) = options.type_format {
            params.put("typeFormat", format.to_string());
        }

        let url = format!(
            "{}/{}/pronunciations{}",
            self.word_endpoint(),
            word,
            params.query_suffix()
        );
        let doc = self.get_document(url, None).await?;
        decode::pronunciations(doc.as_ref())
    }

    /// Fetches audio pronunciation metadata for a word.
    pub async fn audio(&self, word: &str, options: &AudioOptions) -> Result<Vec<AudioFileMetadata>> {
        let word = require_word(word)?;

        let mut params = ParamList::new();
        params.put_positive("limit", options.limit);
        if options.use_canonical {
            params.put("useCanonical", "true");
        }

        let url = format!(
            "{}/{}/audio{}",
            self.word_endpoint(),
            word,
            params.query_suffix()
        );
        let doc = self.get_document(url, None).await?;
        decode::audio(doc.as_ref())
    }

    /// Fetch the audio data behind an [`AudioFileMetadata`].
    ///
    /// The `file_url` expires, so call this soon after fetching the
    /// metadata.
    pub async fn audio_data(&self, metadata: &AudioFileMetadata) -> Result<Vec<u8>> {
        if metadata.file_url.trim().is_empty() {
            return Err(WordnikError::InvalidArgument(
                "audio file URL required".into(),
            ));
        }
        self.transport.download(&metadata.file_url).await
    }
}

fn require_word(word: &str) -> Result<&str> {
    require_nonempty(word, "cannot look up an empty word")
}
