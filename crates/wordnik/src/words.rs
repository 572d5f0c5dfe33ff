//! Corpus-wide operations: random words, search, word of the day, and
//! reverse-dictionary search.

use crate::dto::{
    DefinitionSearchResults, ExpandTerms, PartOfSpeech, SearchResults, SortBy, SortDirection,
    SourceDictionary, Word, WordOfTheDay,
};
use crate::error::Result;
use crate::params::ParamList;
use crate::{decode, require_nonempty, Wordnik};

/// Optional arguments for [`Wordnik::random_word`].
#[derive(Debug, Clone)]
pub struct RandomWordOptions {
    /// Only return words with dictionary definitions. Always transmitted.
    pub has_dictionary_def: bool,
    pub include_part_of_speech: Vec<PartOfSpeech>,
    pub exclude_part_of_speech: Vec<PartOfSpeech>,
    /// Minimum corpus frequency; transmitted unless negative.
    pub min_corpus_count: i32,
    /// Maximum corpus frequency; transmitted as `-1` when not positive.
    pub max_corpus_count: i32,
    /// Minimum dictionary count; transmitted when positive.
    pub min_dictionary_count: i32,
    /// Maximum dictionary count; transmitted as `-1` when not positive.
    pub max_dictionary_count: i32,
    /// Minimum word length; transmitted when positive.
    pub min_length: i32,
    /// Maximum word length; transmitted as `-1` when not positive.
    pub max_length: i32,
}

impl Default for RandomWordOptions {
    fn default() -> Self {
        Self {
            has_dictionary_def: true,
            include_part_of_speech: Vec::new(),
            exclude_part_of_speech: Vec::new(),
            min_corpus_count: 0,
            max_corpus_count: 0,
            min_dictionary_count: 0,
            max_dictionary_count: 0,
            min_length: 0,
            max_length: 0,
        }
    }
}

/// Optional arguments for [`Wordnik::random_words`]. Unlike the single-word
/// form, only positive bounds are transmitted.
#[derive(Debug, Clone)]
pub struct RandomWordsOptions {
    pub has_dictionary_def: bool,
    pub include_part_of_speech: Vec<PartOfSpeech>,
    pub exclude_part_of_speech: Vec<PartOfSpeech>,
    pub min_corpus_count: i32,
    pub max_corpus_count: i32,
    pub min_dictionary_count: i32,
    pub max_dictionary_count: i32,
    pub min_length: i32,
    pub max_length: i32,
    pub sort_by: Option<SortBy>,
    pub sort_direction: Option<SortDirection>,
    /// Maximum number of words to return.
    pub limit: i32,
}

impl Default for RandomWordsOptions {
    fn default() -> Self {
        Self {
            has_dictionary_def: true,
            include_part_of_speech: Vec::new(),
            exclude_part_of_speech: Vec::new(),
            min_corpus_count: 0,
            max_corpus_count: 0,
            min_dictionary_count: 0,
            max_dictionary_count: 0,
            min_length: 0,
            max_length: 0,
            sort_by: None,
            sort_direction: None,
            limit: 10,
        }
    }
}

/// Optional arguments for [`Wordnik::search`].
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Case-sensitive matching. Always transmitted.
    pub case_sensitive: bool,
    pub include_part_of_speech: Vec<PartOfSpeech>,
    pub exclude_part_of_speech: Vec<PartOfSpeech>,
    pub min_corpus_count: i32,
    pub max_corpus_count: i32,
    pub min_dictionary_count: i32,
    pub max_dictionary_count: i32,
    pub min_length: i32,
    pub max_length: i32,
    pub skip: i32,
    pub limit: i32,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            include_part_of_speech: Vec::new(),
            exclude_part_of_speech: Vec::new(),
            min_corpus_count: 0,
            max_corpus_count: 0,
            min_dictionary_count: 0,
            max_dictionary_count: 0,
            min_length: 0,
            max_length: 0,
            skip: 0,
            limit: 0,
        }
    }
}

/// Optional arguments for [`Wordnik::reverse_dictionary`].
#[derive(Debug, Clone)]
pub struct ReverseDictionaryOptions {
    /// Restrict words and find the closest sense.
    pub find_sense_for_word: Option<String>,
    pub include_source_dictionaries: Vec<SourceDictionary>,
    pub exclude_source_dictionaries: Vec<SourceDictionary>,
    pub include_part_of_speech: Vec<PartOfSpeech>,
    pub exclude_part_of_speech: Vec<PartOfSpeech>,
    pub min_corpus_count: i32,
    pub max_corpus_count: i32,
    pub min_length: i32,
    pub max_length: i32,
    pub expand_terms: Option<ExpandTerms>,
    /// Ask for a closed set of XML tags in the response. Always transmitted.
    pub include_tags: bool,
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortDirection>,
    /// Results to skip; negative values are transmitted as `0`.
    pub skip: i32,
    /// Maximum number of results; values below one are transmitted as `10`.
    pub limit: i32,
}

impl Default for ReverseDictionaryOptions {
    fn default() -> Self {
        Self {
            find_sense_for_word: None,
            include_source_dictionaries: Vec::new(),
            exclude_source_dictionaries: Vec::new(),
            include_part_of_speech: Vec::new(),
            exclude_part_of_speech: Vec::new(),
            min_corpus_count: 0,
            max_corpus_count: 0,
            min_length: 0,
            max_length: 0,
            expand_terms: None,
            include_tags: false,
            sort_by: None,
            sort_order: None,
            skip: 0,
            limit: 10,
        }
    }
}

impl Wordnik {
    /// Fetch a random word from the corpus.
    pub async fn random_word(&self, options: &RandomWordOptions) -> Result<Word> {
        let mut params = ParamList::new();
        params.put_bool("hasDictionaryDef", options.has_dictionary_def);
        params.put_set("includePartOfSpeech", &options.include_part_of_speech);
        params.put_set("excludePartOfSpeech", &options.exclude_part_of_speech);
        if options.min_corpus_count >= 0 {
            params.put("minCorpusCount", options.min_corpus_count.to_string());
        }
        put_or_minus_one(&mut params, "maxCorpusCount", options.max_corpus_count);
        params.put_positive("minDictionaryCount", options.min_dictionary_count);
        put_or_minus_one(
            &mut params,
            "maxDictionaryCount",
            options.max_dictionary_count,
        );
        params.put_positive("minLength", options.min_length);
        put_or_minus_one(&mut params, "maxLength", options.max_length);

        let url = format!(
            "{}/randomWord{}",
            self.words_endpoint(),
            params.query_suffix()
        );
        let doc = self.get_document(url, None).await?;
        decode::word(doc.as_ref())
    }

    /// Return a list of random words from the corpus.
    pub async fn random_words(&self, options: &RandomWordsOptions) -> Result<Vec<Word>> {
        let mut params = ParamList::new();
        params.put_bool("hasDictionaryDef", options.has_dictionary_def);
        params.put_set("includePartOfSpeech", &options.include_part_of_speech);
        params.put_set("excludePartOfSpeech", &options.exclude_part_of_speech);
        params.put_positive("minCorpusCount", options.min_corpus_count);
        params.put_positive("maxCorpusCount", options.max_corpus_count);
        params.put_positive("minDictionaryCount", options.min_dictionary_count);
        params.put_positive("maxDictionaryCount", options.max_dictionary_count);
        params.put_positive("minLength", options.min_length);
        params.put_positive("maxLength", options.max_length);
        if let Some(sort_by) = options.sort_by {
            params.put("sortBy", sort_by.to_string());
        }
        if let Some(direction) = options.sort_direction {
            params.put("sortDirection", direction.to_string());
        }
        params.put_positive("limit", options.limit);

        let url = format!(
            "{}/randomWords{}",
            self.words_endpoint(),
            params.query_suffix()
        );
        let doc = self.get_document(url, None).await?;
        decode::words(doc.as_ref())
    }

    /// Fetch the word of the day, with definitions and example sentences.
    pub async fn word_of_the_day(&self) -> Result<WordOfTheDay> {
        let url = format!("{}/wordOfTheDay", self.words_endpoint());
        let doc = self.get_document(url, None).await?;
        decode::word_of_the_day(doc.as_ref())
    }

    /// Search for words matching a query.
    pub async fn search(&self, query: &str, options: &SearchOptions) -> Result<SearchResults> {
        let query = require_nonempty(query, "query cannot be empty")?;

        let mut params = ParamList::new();
        params.put_bool("caseSensitive", options.case_sensitive);
        params.put_set("includePartOfSpeech", &options.include_part_of_speech);
        params.put_set("excludePartOfSpeech", &options.exclude_part_of_speech);
        params.put_positive("minCorpusCount", options.min_corpus_count);
        params.put_positive("maxCorpusCount", options.max_corpus_count);
        params.put_positive("minDictionaryCount", options.min_dictionary_count);
        params.put_positive("maxDictionaryCount", options.max_dictionary_count);
        params.put_positive("minLength", options.min_length);
        params.put_positive("maxLength", options.max_length);
        params.put_positive("skip", options.skip);
        params.put_positive("limit", options.limit);

        let url = format!(
            "{}/search/{}{}",
            self.words_endpoint(),
            query,
            params.query_suffix()
        );
        let doc = self.get_document(url, None).await?;
        decode::search_results(doc.as_ref())
    }

    /// Reverse-dictionary search: find words whose definitions match the
    /// query.
    pub async fn reverse_dictionary(
        &self,
        query: &str,
        options: &ReverseDictionaryOptions,
    ) -> Result<DefinitionSearchResults> {
        let query = require_nonempty(query, "query cannot be empty")?;

        let mut params = ParamList::new();
        params.put("query", query);
        params.put_nonempty("findSenseForWord", options.find_sense_for_word.as_deref());
        params.put_set(
            "includeSourceDictionaries",
            &options.include_source_dictionaries,
        );
        params.put_set(
            "excludeSourceDictionaries",
            &options.exclude_source_dictionaries,
        );
        params.put_set("includePartOfSpeech", &options.include_part_of_speech);
        params.put_set("excludePartOfSpeech", &options.exclude_part_of_speech);
        params.put_positive("minCorpusCount", options.min_corpus_count);
        params.put_positive("maxCorpusCount", options.max_corpus_count);
        params.put_positive("minLength", options.min_length);
        params.put_positive("maxLength", options.max_length);
        if let Some(expand) = options.expand_terms {
            params.put("expandTerms", expand.to_string());
        }
        params.put_bool("includeTags", options.include_tags);
        if let Some(sort_by) = options.sort_by {
            params.put("sortBy", sort_by.to_string());
        }
        if let Some(order) = options.sort_order {
            params.put("sortOrder", order.to_string());
        }
        params.put("skip", options.skip.max(0).to_string());
        let limit = if options.limit < 1 { 10 } else { options.limit };
        params.put("limit", limit.to_string());

        let url = format!(
            "{}/reverseDictionary{}",
            self.words_endpoint(),
            params.query_suffix()
        );
        let doc = self.get_document(url, None).await?;
        decode::definition_search_results(doc.as_ref())
    }
}

/// The service expects `-1` rather than omission for these bounds.
fn put_or_minus_one(params: &mut ParamList, key: &'static str, value: i32) {
    if value > 0 {
        params.put(key, value.to_string());
    } else {
        params.put(key, "-1");
    }
}
