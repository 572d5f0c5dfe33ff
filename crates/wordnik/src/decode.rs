//! Response decoding: one routine per record type.
//!
//! Each routine is a flat enumeration of field extractions in document
//! order. Absent fields decode to zero values; list-valued fields are always
//! present, possibly empty. A routine that cannot proceed at all fails with
//! an error naming the routine and whether a document was present, never
//! which field was at fault.

use crate::dto::{
    AudioFileMetadata, AuthenticationToken, ContentProvider, Definition, DefinitionSearchResult,
    DefinitionSearchResults, Example, Frequency, FrequencySummary, ListType, Phrase, Pronunciation,
    Provider, Related, SearchResult, SearchResults, Syllable, TokenStatus, User, Word, WordList,
    WordListWord, WordOfTheDay,
};
use crate::error::{Result, WordnikError};
use crate::xml::{XmlDocument, XmlNode};

fn require<'a>(doc: Option<&'a XmlDocument>, routine: &str) -> Result<&'a XmlDocument> {
    doc.ok_or_else(|| WordnikError::decode_routine(routine, false))
}

// Routines addressing the document purely by path tolerate an absent
// document and zero-fill the record; routines that scan the tree for
// repeated groups need a document and fail without one.

pub(crate) fn authentication_token(doc: Option<&XmlDocument>) -> Result<AuthenticationToken> {
    let Some(doc) = doc else {
        return Ok(AuthenticationToken::default());
    };
    Ok(AuthenticationToken {
        token: doc.value_at("/authenticationToken/token"),
        user_id: doc.value_at("/authenticationToken/userId"),
    })
}

pub(crate) fn token_status(doc: Option<&XmlDocument>) -> Result<TokenStatus> {
    let Some(doc) = doc else {
        return Ok(TokenStatus::default());
    };
    Ok(TokenStatus {
        valid: doc.value_at_bool("/apiTokenStatus/valid"),
        token: doc.value_at("/apiTokenStatus/token"),
        expires_in_millis: doc.value_at_i64("/apiTokenStatus/expiresInMillis"),
        resets_in_millis: doc.value_at_i64("/apiTokenStatus/resetsInMillis"),
        remaining_calls: doc.value_at_i32("/apiTokenStatus/remainingCalls"),
        total_requests: doc.value_at_i32("/apiTokenStatus/totalRequests"),
    })
}

pub(crate) fn user(doc: Option<&XmlDocument>) -> Result<User> {
    let Some(doc) = doc else {
        return Ok(User::default());
    };
    Ok(User {
        id: doc.value_at("/user/id"),
        user_name: doc.value_at("/user/userName"),
        email: doc.value_at("/user/email"),
        status: doc.value_at("/user/status"),
    })
}

pub(crate) fn word(doc: Option<&XmlDocument>) -> Result<Word> {
    let doc = require(doc, "word")?;
    let mut word = Word {
        word: doc.value_at("/wordObject/word"),
        canonical_form: doc.value_at("/wordObject/canonicalForm"),
        original_word: doc.value_at("/wordObject/originalWord"),
        suggestions: Vec::new(),
    };
    for node in doc.elements_by_tag("suggestions") {
        word.suggestions.push(node.child_text("suggestion"));
    }
    Ok(word)
}

pub(crate) fn words(doc: Option<&XmlDocument>) -> Result<Vec<Word>> {
    let doc = require(doc, "words")?;
    Ok(doc
        .elements_by_tag("wordObject")
        .into_iter()
        .map(|node| Word {
            word: node.child_text("word"),
            ..Word::default()
        })
        .collect())
}

pub(crate) fn definitions(doc: Option<&XmlDocument>) -> Result<Vec<Definition>> {
    let doc = require(doc, "definitions")?;
    Ok(doc
        .elements_by_tag("definition")
        .into_iter()
        .map(|node| Definition {
            sequence: node.attr_as_i32("sequence"),
            text: node.child_text("text"),
            part_of_speech: node.child_text("partOfSpeech"),
            score: node.child_text("score"),
            source_dictionary: node.child_text("sourceDictionary"),
            word: node.child_text("word"),
            attribution_text: node.child_text("attributionText"),
        })
        .collect())
}

pub(crate) fn frequency_summary(doc: Option<&XmlDocument>) -> Result<FrequencySummary> {
    let doc = require(doc, "frequency_summary")?;
    let frequencies = doc
        .elements_by_tag("frequency")
        .into_iter()
        .map(|node| Frequency {
            count: node.child_text_as_i32("count"),
            year: node.child_text("year"),
        })
        .collect();
    Ok(FrequencySummary {
        word: doc.value_at("/frequencySummary/word"),
        total_count: doc.value_at_i32("/frequencySummary/totalCount"),
        unknown_year_count: doc.value_at_i32("/frequencySummary/unknownYearCount"),
        frequencies,
    })
}

pub(crate) fn related_list(doc: Option<&XmlDocument>) -> Result<Vec<Related>> {
    let doc = require(doc, "related_list")?;
    let mut relateds = Vec::new();
    for node in doc.elements_by_tag("related") {
        let words = node
            .child("words")
            .ok_or_else(|| WordnikError::decode_routine("related_list", true))?;
        relateds.push(Related {
            relationship_type: node.attr("relationshipType"),
            words: named_word_texts(words),
        });
    }
    Ok(relateds)
}

/// Text of every `word` child, untrimmed, in document order.
fn named_word_texts(words: &XmlNode) -> Vec<String> {
    words
        .children()
        .filter(|child| child.name() == "word")
        .map(|child| child.text_content())
        .collect()
}

pub(crate) fn phrases(doc: Option<&XmlDocument>) -> Result<Vec<Phrase>> {
    let doc = require(doc, "phrases")?;
    Ok(doc
        .elements_by_tag("bigram")
        .into_iter()
        .map(|node| Phrase {
            count: node.child_text_as_i32("count"),
            mi: node.child_text("mi"),
            wlmi: node.child_text("wlmi"),
            gram1: node.child_text("gram1"),
            gram2: node.child_text("gram2"),
        })
        .collect())
}

pub(crate) fn hyphenation(doc: Option<&XmlDocument>) -> Result<Vec<Syllable>> {
    let doc = require(doc, "hyphenation")?;
    Ok(doc
        .elements_by_tag("syllable")
        .into_iter()
        .map(|node| Syllable {
            syllable_type: node.attr("type"),
            seq: node.attr_as_i32("seq"),
            text: node.child_text("text"),
        })
        .collect())
}

pub(crate) fn pronunciations(doc: Option<&XmlDocument>) -> Result<Vec<Pronunciation>> {
    let doc = require(doc, "pronunciations")?;
    Ok(doc
        .elements_by_tag("textPron")
        .into_iter()
        .map(|node| Pronunciation {
            id: node.child_text("id"),
            raw: node.child_text("raw"),
            raw_type: node.child_text("rawType"),
        })
        .collect())
}

pub(crate) fn audio(doc: Option<&XmlDocument>) -> Result<Vec<AudioFileMetadata>> {
    let doc = require(doc, "audio")?;
    Ok(doc
        .elements_by_tag("audioFile")
        .into_iter()
        .map(|node| AudioFileMetadata {
            id: node.child_text("id"),
            word: node.child_text("word"),
            file_url: node.child_text("fileUrl"),
            created_at: node.child_text("createdAt"),
            created_by: node.child_text("createdBy"),
            comment_count: node.child_text_as_i32("commentCount"),
        })
        .collect())
}

pub(crate) fn word_of_the_day(doc: Option<&XmlDocument>) -> Result<WordOfTheDay> {
    let doc = require(doc, "word_of_the_day")?;
    let mut wotd = WordOfTheDay {
        id: doc.value_at("/WordOfTheDay/id"),
        word: doc.value_at("/WordOfTheDay/word"),
        note: doc.value_at("/WordOfTheDay/note"),
        publish_date: doc.value_at("/WordOfTheDay/publishDate"),
        ..WordOfTheDay::default()
    };

    if let Some(node) = doc.elements_by_tag("contentProvider").first() {
        wotd.content_provider = ContentProvider {
            id: node.child_text("id"),
            name: node.child_text("name"),
        };
    }

    if let Some(container) = doc.elements_by_tag("definitions").first() {
        for node in container.children().filter(|n| n.name() == "definition") {
            wotd.definitions.push(Definition {
                source_dictionary: node.child_text("source"),
                text: node.child_text("text"),
                ..Definition::default()
            });
        }
    }

    if let Some(container) = doc.elements_by_tag("examples").first() {
        for node in container.children().filter(|n| n.name() == "example") {
            wotd.examples.push(Example {
                example_id: node.child_text("id"),
                text: node.child_text("text"),
                title: node.child_text("title"),
                url: node.child_text("url"),
                ..Example::default()
            });
        }
    }

    Ok(wotd)
}

pub(crate) fn search_results(doc: Option<&XmlDocument>) -> Result<SearchResults> {
    let doc = require(doc, "search_results")?;
    let mut results = SearchResults {
        total: doc.value_at_i32("/wordSearchResults/totalResults"),
        ..SearchResults::default()
    };
    if let Some(container) = doc.elements_by_tag("searchResults").first() {
        for node in container.children().filter(|n| n.name() == "searchResult") {
            results.search_results.push(SearchResult {
                count: node.child_text_as_i32("count"),
                lexicality: node.child_text("lexicality"),
                word: node.child_text("word"),
            });
        }
    }
    Ok(results)
}

pub(crate) fn examples(doc: Option<&XmlDocument>) -> Result<SearchResults> {
    let doc = require(doc, "examples")?;
    let mut results = SearchResults::default();
    if let Some(container) = doc.elements_by_tag("examples").first() {
        for node in container.children().filter(|n| n.name() == "example") {
            results.examples.push(example_from(node));
        }
    }
    Ok(results)
}

fn example_from(node: &XmlNode) -> Example {
    Example {
        text: node.child_text("text"),
        document_id: node.child_text("documentId"),
        example_id: node.child_text("exampleId"),
        rating: node.child_text("rating"),
        title: node.child_text("title"),
        url: node.child_text("url"),
        word: node.child_text("word"),
        year: node.child_text("year"),
        provider: provider_from(node.child("provider")),
    }
}

/// An absent provider element yields a provider with empty fields, not an
/// absent provider.
fn provider_from(node: Option<&XmlNode>) -> Provider {
    match node {
        Some(node) => Provider {
            id: node.child_text("id"),
            name: node.child_text("name"),
        },
        None => Provider::default(),
    }
}

pub(crate) fn top_example(doc: Option<&XmlDocument>) -> Result<Example> {
    let Some(doc) = doc else {
        return Ok(Example::default());
    };
    Ok(Example {
        text: doc.value_at("/example/text"),
        document_id: doc.value_at("/example/documentId"),
        example_id: doc.value_at("/example/exampleId"),
        rating: doc.value_at("/example/rating"),
        title: doc.value_at("/example/title"),
        url: doc.value_at("/example/url"),
        word: doc.value_at("/example/word"),
        year: doc.value_at("/example/year"),
        provider: provider_from(doc.root().child("provider")),
    })
}

pub(crate) fn definition_search_results(
    doc: Option<&XmlDocument>,
) -> Result<DefinitionSearchResults> {
    let routine = "definition_search_results";
    let doc = require(doc, routine)?;
    let mut results = DefinitionSearchResults {
        total_results: doc.value_at_i32("/definitionSearchResults/totalResults"),
        ..DefinitionSearchResults::default()
    };

    if let Some(container) = doc.elements_by_tag("results").first() {
        for node in container.children().filter(|n| n.name() == "result") {
            let related_container = node
                .child("relatedWords")
                .ok_or_else(|| WordnikError::decode_routine(routine, true))?;
            let mut related_words = Vec::new();
            for rel_node in related_container
                .children()
                .filter(|n| n.name() == "relWord")
            {
                let words = rel_node
                    .child("words")
                    .ok_or_else(|| WordnikError::decode_routine(routine, true))?;
                related_words.push(Related {
                    relationship_type: rel_node.attr("relationshipType"),
                    words: named_word_texts(words),
                });
            }

            results.results.push(DefinitionSearchResult {
                sequence: node.attr_as_i32("sequence"),
                word: node.child_text("word"),
                text: node.child_text("text"),
                part_of_speech: node.child_text("partOfSpeech"),
                score: node.child_text_as_f64("score"),
                source_dictionary: node.child_text("sourceDictionary"),
                attribution_text: node.child_text("attributionText"),
                text_prons: node.child_text("textProns"),
                example_uses: node.child_text("exampleUses"),
                labels: node.child_text("labels"),
                citations: node.child_text("citations"),
                related_words,
            });
        }
    }

    Ok(results)
}

pub(crate) fn word_list(doc: Option<&XmlDocument>) -> Result<WordList> {
    let Some(doc) = doc else {
        return Ok(WordList::default());
    };
    Ok(WordList {
        id: doc.value_at("/wordList/id"),
        permalink: doc.value_at("/wordList/permalink"),
        name: doc.value_at("/wordList/name"),
        description: doc.value_at("/wordList/description"),
        created_at: doc.value_at("/wordList/createdAt"),
        updated_at: doc.value_at("/wordList/updatedAt"),
        user_id: doc.value_at("/wordList/userId"),
        username: doc.value_at("/wordList/username"),
        number_words_in_list: doc.value_at_i32("/wordList/numberWordsInList"),
        list_type: ListType::from_wire(&doc.value_at("/wordList/type")),
    })
}

pub(crate) fn word_lists(doc: Option<&XmlDocument>) -> Result<Vec<WordList>> {
    let routine = "word_lists";
    let doc = require(doc, routine)?;
    let container = doc
        .named_child("wordLists")
        .ok_or_else(|| WordnikError::decode_routine(routine, true))?;
    Ok(container
        .children()
        .filter(|n| n.name() == "wordList")
        .map(|node| WordList {
            id: node.child_text("id"),
            permalink: node.child_text("permalink"),
            name: node.child_text("name"),
            description: node.child_text("description"),
            created_at: node.child_text("createdAt"),
            updated_at: node.child_text("updatedAt"),
            user_id: node.child_text("userId"),
            username: node.child_text("username"),
            number_words_in_list: node.child_text_as_i32("numberWordsInList"),
            list_type: ListType::from_wire(&node.child_text("type")),
        })
        .collect())
}

pub(crate) fn word_list_words(doc: Option<&XmlDocument>) -> Result<Vec<WordListWord>> {
    // a response without the container decodes to no words, not an error
    let Some(container) = doc.and_then(|d| d.named_child("listedWords")) else {
        return Ok(Vec::new());
    };
    Ok(container
        .children()
        .filter(|n| n.name() == "wordListWord")
        .map(|node| WordListWord {
            word: node.child_text("word"),
            created_at: node.child_text("createdAt"),
            user_id: node.child_text("userId"),
            username: node.child_text("username"),
            number_comments_on_word: node.child_text_as_i32("numberCommentsOnWord"),
            number_lists: node.child_text_as_i32("numberLists"),
        })
        .collect())
}
