//! Behavioral tests over a capturing transport double: header assembly,
//! URL construction, body shapes, and the validate-before-network rule.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use wordnik::{
    ApiRequest, AuthenticationToken, Config, DefinitionsOptions, ListType, LookupOptions, Method,
    NoOpLogger, PartOfSpeech, RandomWordOptions, Result, ReverseDictionaryOptions, SearchOptions,
    SortBy, SortDirection, SourceDictionary, Transport, WordList, WordnikError,
    WordsFromListOptions, Wordnik,
};

const API_ROOT: &str = "https://api.example.com/v4";

/// Captures every request and replays canned responses in order.
#[derive(Default)]
struct RecordingTransport {
    requests: Mutex<Vec<ApiRequest>>,
    responses: Mutex<VecDeque<Option<String>>>,
    downloads: Mutex<Vec<String>>,
    download_body: Vec<u8>,
}

impl RecordingTransport {
    fn with_responses(responses: &[Option<&str>]) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(
                responses
                    .iter()
                    .map(|r| r.map(str::to_string))
                    .collect(),
            ),
            ..Self::default()
        })
    }

    fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn execute(&self, request: &ApiRequest) -> Result<Option<String>> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Some(String::new())))
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>> {
        self.downloads.lock().unwrap().push(url.to_string());
        Ok(self.download_body.clone())
    }
}

fn client(transport: &Arc<RecordingTransport>) -> Wordnik {
    let config = Config {
        api_key: "TEST_KEY".to_string(),
        api_root: API_ROOT.to_string(),
    };
    Wordnik::with_transport(config, transport.clone(), Arc::new(NoOpLogger))
}

fn header<'a>(request: &'a ApiRequest, name: &str) -> Option<&'a str> {
    request
        .headers
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

#[tokio::test]
async fn authenticate_decodes_credential_and_later_calls_carry_it() {
    let transport = RecordingTransport::with_responses(&[
        Some("<authenticationToken><token>T</token><userId>42</userId></authenticationToken>"),
        Some("<user><id>42</id><userName>jeremy</userName></user>"),
    ]);
    let client = client(&transport);

    let token = client.authenticate("jeremy", "secret").await.unwrap();
    assert_eq!(token.token, "T");
    assert_eq!(token.user_id, "42");

    let user = client.user(&token).await.unwrap();
    assert_eq!(user.user_name, "jeremy");

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);

    // the login call itself is not token-authenticated
    assert_eq!(
        requests[0].url,
        format!("{API_ROOT}/account.xml/authenticate/jeremy?password=secret")
    );
    assert_eq!(header(&requests[0], "api_key"), Some("TEST_KEY"));
    assert_eq!(header(&requests[0], "auth_token"), None);

    // the follow-up call carries the decoded token as the auth header
    assert_eq!(requests[1].url, format!("{API_ROOT}/account.xml/user"));
    assert_eq!(header(&requests[1], "api_key"), Some("TEST_KEY"));
    assert_eq!(header(&requests[1], "auth_token"), Some("T"));
}

#[tokio::test]
async fn delete_list_issues_one_bodyless_delete_and_decodes_nothing() {
    let transport = RecordingTransport::with_responses(&[None]);
    let client = client(&transport);
    let token = AuthenticationToken {
        token: "T".to_string(),
        user_id: "42".to_string(),
    };

    client.delete_list(&token, "my-list--1").await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Delete);
    assert_eq!(
        requests[0].url,
        format!("{API_ROOT}/wordList.xml/my-list--1")
    );
    assert!(requests[0].body.is_none());
    assert_eq!(header(&requests[0], "auth_token"), Some("T"));
}

#[tokio::test]
async fn empty_required_arguments_never_reach_the_transport() {
    let transport = RecordingTransport::with_responses(&[]);
    let client = client(&transport);
    let token = AuthenticationToken::default();

    let err = client.lookup("", &LookupOptions::default()).await.unwrap_err();
    assert!(matches!(err, WordnikError::InvalidArgument(_)));

    let err = client
        .lookup("   ", &LookupOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, WordnikError::InvalidArgument(_)));

    let err = client.authenticate("jeremy", "").await.unwrap_err();
    assert!(matches!(err, WordnikError::InvalidArgument(_)));

    let err = client.search("", &SearchOptions::default()).await.unwrap_err();
    assert!(matches!(err, WordnikError::InvalidArgument(_)));

    let err = client
        .create_list(&token, "", "a description", ListType::Public)
        .await
        .unwrap_err();
    assert!(matches!(err, WordnikError::InvalidArgument(_)));

    let err = client
        .add_words_to_list(&token, "my-list--1", &[])
        .await
        .unwrap_err();
    assert!(matches!(err, WordnikError::InvalidArgument(_)));

    let err = client.word_list(&token, "").await.unwrap_err();
    assert!(matches!(err, WordnikError::InvalidArgument(_)));

    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn enum_sets_travel_hyphenated_and_comma_joined() {
    let transport = RecordingTransport::with_responses(&[Some("<definitions></definitions>")]);
    let client = client(&transport);

    let options = DefinitionsOptions {
        part_of_speech: vec![PartOfSpeech::PastParticiple, PartOfSpeech::Noun],
        source_dictionaries: vec![SourceDictionary::Ahd, SourceDictionary::Wiktionary],
        ..DefinitionsOptions::default()
    };
    let definitions = client.definitions("cat", &options).await.unwrap();
    assert!(definitions.is_empty());

    let requests = transport.requests();
    assert_eq!(requests[0].method, Method::Get);
    let url = &requests[0].url;
    assert!(url.starts_with(&format!("{API_ROOT}/word.xml/cat/definitions?")));
    assert!(url.contains("partOfSpeech=past-participle%2Cnoun"));
    assert!(url.contains("sourceDictionaries=ahd%2Cwiktionary"));
}

#[tokio::test]
async fn create_list_posts_the_word_list_body() {
    let transport = RecordingTransport::with_responses(&[Some(
        "<wordList><id>29774</id><permalink>test-list--2</permalink>\
         <name>TEST_LIST</name><type>PUBLIC</type></wordList>",
    )]);
    let client = client(&transport);
    let token = AuthenticationToken {
        token: "T".to_string(),
        user_id: "42".to_string(),
    };

    let list = client
        .create_list(&token, "TEST_LIST", "created by tests", ListType::Public)
        .await
        .unwrap();
    assert_eq!(list.permalink, "test-list--2");
    assert_eq!(list.list_type, Some(ListType::Public));

    let requests = transport.requests();
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[0].url, format!("{API_ROOT}/wordLists.xml"));
    assert_eq!(header(&requests[0], "Content-Type"), Some("text/xml"));
    assert_eq!(header(&requests[0], "auth_token"), Some("T"));

    let body = requests[0].body.as_deref().unwrap();
    assert!(body.starts_with("<?xml version=\"1.0\""));
    assert!(body.contains("<name>TEST_LIST</name>"));
    assert!(body.contains("<description>created by tests</description>"));
    assert!(body.contains("<type>PUBLIC</type>"));
}

#[tokio::test]
async fn add_words_posts_string_values_with_escaping() {
    let transport = RecordingTransport::with_responses(&[Some("")]);
    let client = client(&transport);
    let token = AuthenticationToken {
        token: "T".to_string(),
        user_id: "42".to_string(),
    };

    client
        .add_words_to_list(&token, "my-list--1", &["hello", "salt & pepper"])
        .await
        .unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(
        requests[0].url,
        format!("{API_ROOT}/wordList.xml/my-list--1/words")
    );
    let body = requests[0].body.as_deref().unwrap();
    assert!(body.contains("<stringValues>"));
    assert!(body.contains("<word>hello</word>"));
    assert!(body.contains("<word>salt &amp; pepper</word>"));
}

#[tokio::test]
async fn delete_words_posts_to_the_delete_words_resource() {
    let transport = RecordingTransport::with_responses(&[Some("")]);
    let client = client(&transport);
    let token = AuthenticationToken {
        token: "T".to_string(),
        user_id: "42".to_string(),
    };

    client
        .delete_words_from_list(&token, "my-list--1", &["hello"])
        .await
        .unwrap();

    let requests = transport.requests();
    assert_eq!(
        requests[0].url,
        format!("{API_ROOT}/wordList.xml/my-list--1/deleteWords")
    );
    assert_eq!(requests[0].method, Method::Post);
}

#[tokio::test]
async fn update_word_list_puts_the_full_record() {
    let transport = RecordingTransport::with_responses(&[Some("")]);
    let client = client(&transport);
    let token = AuthenticationToken {
        token: "T".to_string(),
        user_id: "42".to_string(),
    };

    let list = WordList {
        id: "29774".to_string(),
        permalink: "test-list--2".to_string(),
        name: "TEST_LIST".to_string(),
        description: "updated".to_string(),
        created_at: "2011-03-23T20:51:03.753Z".to_string(),
        updated_at: "2011-03-23T20:51:03.753Z".to_string(),
        user_id: "1055256".to_string(),
        username: "jeremybrooks".to_string(),
        number_words_in_list: 0,
        list_type: Some(ListType::Private),
    };
    client.update_word_list(&token, &list).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].method, Method::Put);
    assert_eq!(
        requests[0].url,
        format!("{API_ROOT}/wordList.xml/test-list--2")
    );
    let body = requests[0].body.as_deref().unwrap();
    assert!(body.contains("<permalink>test-list--2</permalink>"));
    assert!(body.contains("<type>PRIVATE</type>"));
    assert!(body.contains("<numberWordsInList>0</numberWordsInList>"));
}

#[tokio::test]
async fn update_word_list_without_visibility_is_an_argument_error() {
    let transport = RecordingTransport::with_responses(&[]);
    let client = client(&transport);
    let token = AuthenticationToken::default();

    let list = WordList {
        permalink: "test-list--2".to_string(),
        list_type: None,
        ..WordList::default()
    };
    let err = client.update_word_list(&token, &list).await.unwrap_err();
    assert!(matches!(err, WordnikError::InvalidArgument(_)));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn random_word_reproduces_the_bound_defaults() {
    let transport =
        RecordingTransport::with_responses(&[Some("<wordObject><word>cat</word></wordObject>")]);
    let client = client(&transport);

    let word = client
        .random_word(&RandomWordOptions::default())
        .await
        .unwrap();
    assert_eq!(word.word, "cat");

    let url = &transport.requests()[0].url;
    assert!(url.starts_with(&format!("{API_ROOT}/words.xml/randomWord?")));
    assert!(url.contains("hasDictionaryDef=true"));
    assert!(url.contains("minCorpusCount=0"));
    assert!(url.contains("maxCorpusCount=-1"));
    assert!(url.contains("maxDictionaryCount=-1"));
    assert!(url.contains("maxLength=-1"));
    // bounds that are only sent when positive
    assert!(!url.contains("minDictionaryCount"));
    assert!(!url.contains("minLength"));
}

#[tokio::test]
async fn reverse_dictionary_always_sends_skip_limit_and_tags() {
    let transport = RecordingTransport::with_responses(&[Some(
        "<definitionSearchResults><totalResults>0</totalResults></definitionSearchResults>",
    )]);
    let client = client(&transport);

    let options = ReverseDictionaryOptions {
        skip: -5,
        limit: 0,
        ..ReverseDictionaryOptions::default()
    };
    let results = client
        .reverse_dictionary("secret word", &options)
        .await
        .unwrap();
    assert_eq!(results.total_results, 0);
    assert!(results.results.is_empty());

    let url = &transport.requests()[0].url;
    assert!(url.starts_with(&format!("{API_ROOT}/words.xml/reverseDictionary?")));
    assert!(url.contains("query=secret%20word"));
    assert!(url.contains("includeTags=false"));
    assert!(url.contains("skip=0"));
    assert!(url.contains("limit=10"));
}

#[tokio::test]
async fn words_from_list_serializes_sort_options() {
    let transport = RecordingTransport::with_responses(&[Some("<listedWords></listedWords>")]);
    let client = client(&transport);
    let token = AuthenticationToken {
        token: "T".to_string(),
        user_id: "42".to_string(),
    };

    let options = WordsFromListOptions {
        sort_by: Some(SortBy::Alpha),
        sort_order: Some(SortDirection::Desc),
        skip: 0,
        limit: 25,
    };
    let words = client
        .words_from_list(&token, "my-list--1", &options)
        .await
        .unwrap();
    assert!(words.is_empty());

    let url = &transport.requests()[0].url;
    assert!(url.starts_with(&format!("{API_ROOT}/wordList.xml/my-list--1/words?")));
    assert!(url.contains("sortBy=alpha"));
    assert!(url.contains("sortOrder=desc"));
    assert!(url.contains("limit=25"));
    assert!(!url.contains("skip="));
}

#[tokio::test]
async fn blank_response_surfaces_as_the_routines_decode_error() {
    let transport = RecordingTransport::with_responses(&[Some("")]);
    let client = client(&transport);

    let err = client
        .lookup("cat", &LookupOptions::default())
        .await
        .unwrap_err();
    match err {
        WordnikError::Decode(message) => {
            assert!(message.contains("'word'"));
            assert!(message.contains("missing"));
        }
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn audio_data_downloads_the_file_url() {
    let transport = Arc::new(RecordingTransport {
        download_body: vec![1, 2, 3],
        ..RecordingTransport::default()
    });
    let client = client(&transport);

    let metadata = wordnik::AudioFileMetadata {
        file_url: "https://media.example.com/f.mp3".to_string(),
        ..wordnik::AudioFileMetadata::default()
    };
    let data = client.audio_data(&metadata).await.unwrap();
    assert_eq!(data, vec![1, 2, 3]);

    assert_eq!(transport.request_count(), 0);
    assert_eq!(
        *transport.downloads.lock().unwrap(),
        vec!["https://media.example.com/f.mp3".to_string()]
    );

    let err = client
        .audio_data(&wordnik::AudioFileMetadata::default())
        .await
        .unwrap_err();
    assert!(matches!(err, WordnikError::InvalidArgument(_)));
}

#[tokio::test]
async fn trimmed_word_lands_in_the_path() {
    let transport =
        RecordingTransport::with_responses(&[Some("<wordObject><word>cat</word></wordObject>")]);
    let client = client(&transport);

    client
        .lookup("  cat  ", &LookupOptions::default())
        .await
        .unwrap();
    assert_eq!(
        transport.requests()[0].url,
        format!("{API_ROOT}/word.xml/cat")
    );
}
