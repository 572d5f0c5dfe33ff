//! Authentication and account operations.

use crate::dto::{AuthenticationToken, TokenStatus, User, WordList};
use crate::error::Result;
use crate::params::ParamList;
use crate::{decode, require_nonempty, Wordnik};

/// Optional arguments for [`Wordnik::word_lists`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WordListsOptions {
    /// Lists to skip; ignored unless positive.
    pub skip: i32,
    /// Maximum number of lists to return; ignored unless positive.
    pub limit: i32,
}

impl Wordnik {
    /// Log in and obtain the credential required by the account and
    /// word-list operations.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthenticationToken> {
        let username = require_nonempty(username, "you must specify a username")?;
        let password = require_nonempty(password, "you must specify a password")?;

        let mut params = ParamList::new();
        params.put("password", password);

        let url = format!(
            "{}/authenticate/{}?{}",
            self.account_endpoint(),
            username,
            params.encode()
        );
        let doc = self.get_document(url, None).await?;
        decode::authentication_token(doc.as_ref())
    }

    /// Check API-key usage. This call does not count against the quota.
    pub async fn api_token_status(&self) -> Result<TokenStatus> {
        let url = format!("{}/apiTokenStatus", self.account_endpoint());
        let doc = self.get_document(url, None).await?;
        decode::token_status(doc.as_ref())
    }

    /// Get the profile of the authenticated user.
    pub async fn user(&self, token: &AuthenticationToken) -> Result<User> {
        let url = format!("{}/user", self.account_endpoint());
        let doc = self.get_document(url, Some(token)).await?;
        decode::user(doc.as_ref())
    }

    /// Fetch the authenticated user's word lists.
    pub async fn word_lists(
        &self,
        token: &AuthenticationToken,
        options: &WordListsOptions,
    ) -> Result<Vec<WordList>> {
        let mut params = ParamList::new();
        params.put_positive("skip", options.skip);
        params.put_positive("limit", options.limit);

        let url = format!(
            "{}/wordLists{}",
            self.account_endpoint(),
            params.query_suffix()
        );
        let doc = self.get_document(url, Some(token)).await?;
        decode::word_lists(doc.as_ref())
    }
}
