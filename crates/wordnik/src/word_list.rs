//! Word-list CRUD and word-membership operations. Everything here requires
//! a credential from [`Wordnik::authenticate`](crate::Wordnik::authenticate).

use quick_xml::escape::escape;

use crate::dto::{AuthenticationToken, ListType, SortBy, SortDirection, WordList, WordListWord};
use crate::error::{Result, WordnikError};
use crate::params::ParamList;
use crate::{decode, require_nonempty, Wordnik};

const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n";

/// Optional arguments for [`Wordnik::words_from_list`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WordsFromListOptions {
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortDirection>,
    /// Results to skip; ignored unless positive.
    pub skip: i32,
    /// Maximum number of results; ignored unless positive.
    pub limit: i32,
}

impl Wordnik {
    /// Create a new list on behalf of the authenticated user. The returned
    /// record carries the server-assigned id and permalink; the permalink
    /// keys every later operation on the list.
    pub async fn create_list(
        &self,
        token: &AuthenticationToken,
        name: &str,
        description: &str,
        list_type: ListType,
    ) -> Result<WordList> {
        let name = require_nonempty(name, "list name required")?;
        let description = require_nonempty(description, "description required")?;

        let data = format!(
            "{XML_HEADER}<wordList>\n\
             <description>{}</description>\n\
             <name>{}</name>\n\
             <type>{}</type>\n\
             </wordList>",
            escape(description),
            escape(name),
            list_type
        );

        let doc = self
            .post_document(self.word_lists_endpoint(), data, Some(token))
            .await?;
        decode::word_list(doc.as_ref())
    }

    /// Get a word list by permalink.
    pub async fn word_list(
        &self,
        token: &AuthenticationToken,
        permalink: &str,
    ) -> Result<WordList> {
        let permalink = require_permalink(permalink)?;
        let url = format!("{}/{}", self.word_list_endpoint(), permalink);
        let doc = self.get_document(url, Some(token)).await?;
        decode::word_list(doc.as_ref())
    }

    /// Add words to the given list. The response body is not decoded.
    pub async fn add_words_to_list(
        &self,
        token: &AuthenticationToken,
        permalink: &str,
        words: &[&str],
    ) -> Result<()> {
        let permalink = require_permalink(permalink)?;
        let data = string_values_body(words)?;
        let url = format!("{}/{}/words", self.word_list_endpoint(), permalink);
        self.post_document(url, data, Some(token)).await?;
        Ok(())
    }

    /// Delete words from the given list.
    pub async fn delete_words_from_list(
        &self,
        token: &AuthenticationToken,
        permalink: &str,
        words: &[&str],
    ) -> Result<()> {
        let permalink = require_permalink(permalink)?;
        let data = string_values_body(words)?;
        let url = format!("{}/{}/deleteWords", self.word_list_endpoint(), permalink);
        self.post_document(url, data, Some(token)).await?;
        Ok(())
    }

    /// Update the word list metadata. The full record is transmitted.
    pub async fn update_word_list(
        &self,
        token: &AuthenticationToken,
        word_list: &WordList,
    ) -> Result<()> {
        let permalink = require_permalink(&word_list.permalink)?;
        let Some(list_type) = word_list.list_type else {
            return Err(WordnikError::InvalidArgument("list type required".into()));
        };

        let data = format!(
            "{XML_HEADER}<wordList>\
             <createdAt>{}</createdAt>\
             <description>{}</description>\
             <id>{}</id>\
             <name>{}</name>\
             <numberWordsInList>{}</numberWordsInList>\
             <permalink>{}</permalink>\
             <type>{}</type>\
             <updatedAt>{}</updatedAt>\
             <userId>{}</userId>\
             <username>{}</username>\
             </wordList>",
            escape(&word_list.created_at),
            escape(&word_list.description),
            escape(&word_list.id),
            escape(&word_list.name),
            word_list.number_words_in_list,
            escape(permalink),
            list_type,
            escape(&word_list.updated_at),
            escape(&word_list.user_id),
            escape(&word_list.username),
        );

        let url = format!("{}/{}", self.word_list_endpoint(), permalink);
        self.put(url, data, Some(token)).await
    }

    /// Return the words on the given list.
    pub async fn words_from_list(
        &self,
        token: &AuthenticationToken,
        permalink: &str,
        options: &WordsFromListOptions,
    ) -> Result<Vec<WordListWord>> {
        let permalink = require_permalink(permalink)?;

        let mut params = ParamList::new();
        if let Some(sort_by) = options.sort_by {
            params.put("sortBy", sort_by.to_string());
        }
        if let Some(order) = options.sort_order {
            params.put("sortOrder", order.to_string());
        }
        params.put_positive("skip", options.skip);
        params.put_positive("limit", options.limit);

        let url = format!(
            "{}/{}/words{}",
            self.word_list_endpoint(),
            permalink,
            params.query_suffix()
        );
        let doc = self.get_document(url, Some(token)).await?;
        decode::word_list_words(doc.as_ref())
    }

    /// Delete the given word list. The server returns no body.
    pub async fn delete_list(&self, token: &AuthenticationToken, permalink: &str) -> Result<()> {
        let permalink = require_permalink(permalink)?;
        let url = format!("{}/{}", self.word_list_endpoint(), permalink);
        self.delete(url, Some(token)).await
    }
}

fn require_permalink(permalink: &str) -> Result<&str> {
    require_nonempty(permalink, "parameter permalink required")
}

fn string_values_body(words: &[&str]) -> Result<String> {
    if words.is_empty() {
        return Err(WordnikError::InvalidArgument("parameter words required".into()));
    }
    let mut data = format!("{XML_HEADER}<stringValues>\n");
    for word in words {
        data.push_str("<stringValue>\n<word>");
        data.push_str(&escape(*word));
        data.push_str("</word>\n</stringValue>\n");
    }
    data.push_str("</stringValues>\n");
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_values_body_has_one_entry_per_word() {
        let body = string_values_body(&["hello", "hi"]).unwrap();
        assert_eq!(body.matches("<stringValue>").count(), 2);
        assert!(body.contains("<word>hello</word>"));
        assert!(body.contains("<word>hi</word>"));
        assert!(body.starts_with("<?xml version=\"1.0\""));
    }

    #[test]
    fn string_values_body_escapes_markup() {
        let body = string_values_body(&["a&b"]).unwrap();
        assert!(body.contains("<word>a&amp;b</word>"));
    }

    #[test]
    fn string_values_body_rejects_empty_input() {
        let err = string_values_body(&[]).unwrap_err();
        assert!(matches!(err, WordnikError::InvalidArgument(_)));
    }
}
