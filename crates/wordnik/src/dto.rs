//! Data-transfer records returned by the API, and the request-side
//! vocabulary enums.
//!
//! Every field the server omits decodes to its zero value: strings to `""`,
//! numbers to `0`, booleans to `false`, lists to an empty `Vec`. Callers can
//! iterate list fields unconditionally.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Credential returned by a login call; attach it to privileged calls.
///
/// Opaque once issued. Expiry and call-count limits are enforced server
/// side; query them with the token-status operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationToken {
    pub token: String,
    pub user_id: String,
}

/// API-key usage information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenStatus {
    pub valid: bool,
    pub token: String,
    pub expires_in_millis: i64,
    pub resets_in_millis: i64,
    pub remaining_calls: i32,
    pub total_requests: i32,
}

/// Profile of the authenticated user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub user_name: String,
    pub email: String,
    pub status: String,
}

/// A word in the corpus, with its canonical form and any spelling
/// suggestions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub word: String,
    pub canonical_form: String,
    pub original_word: String,
    pub suggestions: Vec<String>,
}

/// One dictionary definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    pub sequence: i32,
    pub text: String,
    pub part_of_speech: String,
    pub score: String,
    pub source_dictionary: String,
    pub word: String,
    pub attribution_text: String,
}

/// An example sentence from the corpus.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Example {
    pub text: String,
    pub document_id: String,
    pub example_id: String,
    pub rating: String,
    pub title: String,
    pub url: String,
    pub word: String,
    pub year: String,
    pub provider: Provider,
}

/// Source of an example sentence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    pub id: String,
    pub name: String,
}

/// Word-search results; also carries example sentences for the example
/// operations, which share this envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub total: i32,
    pub search_results: Vec<SearchResult>,
    pub examples: Vec<Example>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub count: i32,
    pub lexicality: String,
    pub word: String,
}

/// Per-year corpus frequency counts for one word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencySummary {
    pub word: String,
    pub total_count: i32,
    pub unknown_year_count: i32,
    pub frequencies: Vec<Frequency>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frequency {
    pub count: i32,
    pub year: String,
}

/// Words related to a word by one relationship type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Related {
    pub relationship_type: String,
    pub words: Vec<String>,
}

/// A bi-gram phrase containing the word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phrase {
    pub count: i32,
    pub mi: String,
    pub wlmi: String,
    pub gram1: String,
    pub gram2: String,
}

/// One syllable of a hyphenation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Syllable {
    pub syllable_type: String,
    pub seq: i32,
    pub text: String,
}

/// A text pronunciation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pronunciation {
    pub id: String,
    pub raw: String,
    pub raw_type: String,
}

/// Metadata for an audio pronunciation. The `file_url` expires; fetch the
/// data shortly after obtaining the metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioFileMetadata {
    pub id: String,
    pub word: String,
    pub file_url: String,
    pub created_at: String,
    pub created_by: String,
    pub comment_count: i32,
}

/// The word of the day, with its definitions and example sentences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordOfTheDay {
    pub id: String,
    pub word: String,
    pub note: String,
    pub publish_date: String,
    pub content_provider: ContentProvider,
    pub definitions: Vec<Definition>,
    pub examples: Vec<Example>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentProvider {
    pub id: String,
    pub name: String,
}

/// A user-owned named collection of words.
///
/// The `permalink`, not the numeric `id`, keys every subsequent operation
/// on the list. Timestamps are opaque strings, passed through as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordList {
    pub id: String,
    pub permalink: String,
    pub name: String,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
    pub user_id: String,
    pub username: String,
    pub number_words_in_list: i32,
    pub list_type: Option<ListType>,
}

/// One word held by a word list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordListWord {
    pub word: String,
    pub created_at: String,
    pub user_id: String,
    pub username: String,
    pub number_comments_on_word: i32,
    pub number_lists: i32,
}

/// Results of a reverse-dictionary search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefinitionSearchResults {
    pub total_results: i32,
    pub results: Vec<DefinitionSearchResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefinitionSearchResult {
    pub sequence: i32,
    pub word: String,
    pub text: String,
    pub part_of_speech: String,
    pub score: f64,
    pub source_dictionary: String,
    pub attribution_text: String,
    pub text_prons: String,
    pub example_uses: String,
    pub labels: String,
    pub citations: String,
    pub related_words: Vec<Related>,
}

/// Visibility of a word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListType {
    Public,
    Private,
}

impl fmt::Display for ListType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ListType::Public => "PUBLIC",
            ListType::Private => "PRIVATE",
        })
    }
}

impl ListType {
    /// Maps the server's `type` value, case-insensitively. Anything else is
    /// an absent visibility.
    pub(crate) fn from_wire(value: &str) -> Option<ListType> {
        if value.eq_ignore_ascii_case("PUBLIC") {
            Some(ListType::Public)
        } else if value.eq_ignore_ascii_case("PRIVATE") {
            Some(ListType::Private)
        } else {
            None
        }
    }
}

/// Source dictionaries supported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceDictionary {
    All,
    Ahd,
    Century,
    Cmu,
    Macmillan,
    Wiktionary,
    Webster,
    Wordnet,
}

impl fmt::Display for SourceDictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SourceDictionary::All => "all",
            SourceDictionary::Ahd => "ahd",
            SourceDictionary::Century => "century",
            SourceDictionary::Cmu => "cmu",
            SourceDictionary::Macmillan => "macmillan",
            SourceDictionary::Wiktionary => "wiktionary",
            SourceDictionary::Webster => "webster",
            SourceDictionary::Wordnet => "wordnet",
        })
    }
}

/// Parts of speech supported by the service.
///
/// Multi-word values travel hyphenated on the wire (`past-participle`);
/// sending an underscore silently changes the server-side filtering, so the
/// `Display` form is the only one ever serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Idiom,
    Article,
    Abbreviation,
    Preposition,
    Prefix,
    Interjection,
    Suffix,
    Conjunction,
    PastParticiple,
    Imperative,
    NounPlural,
    ProperNounPlural,
    VerbIntransitive,
    ProperNoun,
    Pronoun,
    VerbTransitive,
    ProperNounPosessive,
    NounPosessive,
    Affix,
    AuxiliaryVerb,
    DefiniteArticle,
    FamilyName,
    GivenName,
    PhrasalPrefix,
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Idiom => "idiom",
            PartOfSpeech::Article => "article",
            PartOfSpeech::Abbreviation => "abbreviation",
            PartOfSpeech::Preposition => "preposition",
            PartOfSpeech::Prefix => "prefix",
            PartOfSpeech::Interjection => "interjection",
            PartOfSpeech::Suffix => "suffix",
            PartOfSpeech::Conjunction => "conjunction",
            PartOfSpeech::PastParticiple => "past-participle",
            PartOfSpeech::Imperative => "imperative",
            PartOfSpeech::NounPlural => "noun-plural",
            PartOfSpeech::ProperNounPlural => "proper-noun-plural",
            PartOfSpeech::VerbIntransitive => "verb-intransitive",
            PartOfSpeech::ProperNoun => "proper-noun",
            PartOfSpeech::Pronoun => "pronoun",
            PartOfSpeech::VerbTransitive => "verb-transitive",
            // the service spells it this way
            PartOfSpeech::ProperNounPosessive => "proper-noun-posessive",
            PartOfSpeech::NounPosessive => "noun-posessive",
            PartOfSpeech::Affix => "affix",
            PartOfSpeech::AuxiliaryVerb => "auxiliary-verb",
            PartOfSpeech::DefiniteArticle => "definite-article",
            PartOfSpeech::FamilyName => "family-name",
            PartOfSpeech::GivenName => "given-name",
            PartOfSpeech::PhrasalPrefix => "phrasal-prefix",
        })
    }
}

/// Relationship types for the related-words operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationshipType {
    Synonym,
    Antonym,
    Equivalent,
    RelatedWord,
    Rhyme,
    EtymologicallyRelatedTerm,
    Form,
    Hypernym,
    InflectedForm,
    Primary,
    Hyponym,
    Variant,
    VerbStem,
    VerbForm,
    CrossReference,
    SameContext,
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RelationshipType::Synonym => "synonym",
            RelationshipType::Antonym => "antonym",
            RelationshipType::Equivalent => "equivalent",
            RelationshipType::RelatedWord => "related-word",
            RelationshipType::Rhyme => "rhyme",
            RelationshipType::EtymologicallyRelatedTerm => "etymologically-related-term",
            RelationshipType::Form => "form",
            RelationshipType::Hypernym => "hypernym",
            RelationshipType::InflectedForm => "inflected-form",
            RelationshipType::Primary => "primary",
            RelationshipType::Hyponym => "hyponym",
            RelationshipType::Variant => "variant",
            RelationshipType::VerbStem => "verb-stem",
            RelationshipType::VerbForm => "verb-form",
            RelationshipType::CrossReference => "cross-reference",
            RelationshipType::SameContext => "same-context",
        })
    }
}

/// Text pronunciation formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeFormat {
    Ahd,
    Arpabet,
    GcideDiacritical,
    Ipa,
}

impl fmt::Display for TypeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TypeFormat::Ahd => "ahd",
            TypeFormat::Arpabet => "arpabet",
            TypeFormat::GcideDiacritical => "gcide-diacritical",
            TypeFormat::Ipa => "IPA",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortBy {
    Alpha,
    Count,
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortBy::Alpha => "alpha",
            SortBy::Count => "count",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        })
    }
}

/// Term expansion for reverse-dictionary queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpandTerms {
    Synonym,
    Hypernym,
}

impl fmt::Display for ExpandTerms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExpandTerms::Synonym => "synonym",
            ExpandTerms::Hypernym => "hypernym",
        })
    }
}
