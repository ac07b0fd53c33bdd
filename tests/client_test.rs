// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <j.d.a.jewell@open.ac.uk>

//! Integration tests against a mock TalkBankDB server.
//!
//! Each test stands up a `wiremock` server, points a client at it, and
//! asserts on the exact outbound request body and the decoded response.

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use talkbankdb_client::client::TalkBankClient;
use talkbankdb_client::error::TalkBankError;
use talkbankdb_client::query::QueryParams;
use talkbankdb_client::types::{CqlComponent, CqlFreq, CqlType, NgramSpec, NgramType};

fn client_for(server: &MockServer) -> TalkBankClient {
    TalkBankClient::with_base_url(&server.uri()).unwrap()
}

fn childes_params() -> QueryParams {
    QueryParams {
        corpus_name: Some("childes".to_owned()),
        ..QueryParams::default()
    }
}

/// The full envelope a minimal query normalizes to: every omitted filter is
/// an empty container and respType is fixed.
fn minimal_envelope() -> serde_json::Value {
    json!({
        "corpusName": "childes",
        "corpora": [],
        "lang": [],
        "media": [],
        "age": [],
        "gender": [],
        "designType": [],
        "activityType": [],
        "groupType": [],
        "cqlArr": [],
        "nGram": {},
        "respType": "JSON"
    })
}

#[tokio::test]
async fn transcripts_query_sends_normalized_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/getTranscriptSummary"))
        .and(body_json(json!({ "queryVals": minimal_envelope() })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "colHeadings": ["Path", "Languages"],
            "data": [["childes/Eng-NA/MacWhinney/010411a", "eng"]]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let table = client_for(&server)
        .get_transcripts(&childes_params(), None)
        .await
        .unwrap();

    assert_eq!(table.col_headings, vec!["Path", "Languages"]);
    assert_eq!(table.data.len(), 1);
    assert_eq!(table.data[0][1], json!("eng"));
}

#[tokio::test]
async fn cql_components_pass_through_unchanged() {
    let server = MockServer::start().await;

    let mut expected = minimal_envelope();
    expected["cqlArr"] = json!([
        {"type": "lemma", "item": "go", "freq": "once"},
        {"type": "word", "item": "home", "freq": "once"}
    ]);

    Mock::given(method("POST"))
        .and(path("/cql"))
        .and(body_json(json!({ "queryVals": expected })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "colHeadings": ["Utterance"],
            "data": [["they went back home"]]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = QueryParams {
        cql_arr: Some(vec![
            CqlComponent {
                kind: CqlType::Lemma,
                item: "go".to_owned(),
                freq: CqlFreq::Once,
            },
            CqlComponent {
                kind: CqlType::Word,
                item: "home".to_owned(),
                freq: CqlFreq::Once,
            },
        ]),
        ..childes_params()
    };

    let table = client_for(&server).get_cql(&params, None).await.unwrap();
    assert_eq!(table.data[0][0], json!("they went back home"));
}

#[tokio::test]
async fn ngram_spec_passes_through_unchanged() {
    let server = MockServer::start().await;

    let mut expected = minimal_envelope();
    expected["nGram"] = json!({"size": 3, "type": "word"});

    Mock::given(method("POST"))
        .and(path("/getNgrams"))
        .and(body_json(json!({ "queryVals": expected })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "colHeadings": ["Role", "N-gram", "Count"],
            "data": [["CHI", "go back home", 4]]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = QueryParams {
        n_gram: Some(NgramSpec {
            size: 3,
            kind: NgramType::Word,
        }),
        ..childes_params()
    };

    let table = client_for(&server).get_ngrams(&params, None).await.unwrap();
    assert_eq!(table.data[0][2], json!(4));
}

#[tokio::test]
async fn path_trees_request_body_is_empty_object() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/getPathTrees"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "respMsg": {
                "childes": {
                    "childes": { "Clinical": {} }
                }
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let trees = client.get_path_trees().await.unwrap();
    assert!(trees.get("respMsg").is_some());

    assert!(client
        .valid_path(&["childes", "childes", "Clinical"])
        .await
        .unwrap());
    assert!(!client
        .valid_path(&["childes", "childes", "doesNotExist"])
        .await
        .unwrap());
}

#[tokio::test]
async fn server_error_status_surfaces_as_transport() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/getTokenSummary"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_tokens(&childes_params(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, TalkBankError::Transport(_)));
}

#[tokio::test]
async fn malformed_body_surfaces_as_decode() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/getUtteranceSummary"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_utterances(&childes_params(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, TalkBankError::Decode(_)));
}

#[tokio::test]
async fn missing_corpus_name_fails_before_any_request() {
    let server = MockServer::start().await;
    // No mocks mounted: a request would 404 into a Transport error instead.

    let err = client_for(&server)
        .get_participants(&QueryParams::default(), None)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        TalkBankError::MissingRequiredField("corpusName")
    ));
}
