// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::time::Duration;

use motarjem_translate::{
	ExtractorChain, Language, LanguagePair, MyMemoryClient, TranslateError, TranslationRequest,
	TranslationService,
};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> MyMemoryClient {
	MyMemoryClient::new(Duration::from_secs(5))
		.unwrap()
		.with_base_url(format!("{}/get", server.uri()))
}

fn en_to_fa(text: &str) -> TranslationRequest {
	TranslationRequest::new(text, LanguagePair::new(Language::En, Language::Fa))
}

#[tokio::test]
async fn sends_text_and_language_pair_as_query() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/get"))
		.and(query_param("q", "good morning & more"))
		.and(query_param("langpair", "en|fa"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({
			"responseData": { "translatedText": "صبح بخیر" },
			"responseStatus": 200
		})))
		.expect(1)
		.mount(&server)
		.await;

	let payload = client_for(&server)
		.translate(&en_to_fa("good morning & more"))
		.await
		.unwrap();

	assert_eq!(
		ExtractorChain::default().extract(&payload),
		Some("صبح بخیر".to_string())
	);
}

#[tokio::test]
async fn fallback_payload_is_returned_untouched() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/get"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({
			"responseData": { "translatedText": "" },
			"matches": [{ "translation": "Y" }]
		})))
		.mount(&server)
		.await;

	let payload = client_for(&server).translate(&en_to_fa("x")).await.unwrap();

	assert_eq!(ExtractorChain::default().extract(&payload), Some("Y".to_string()));
}

#[tokio::test]
async fn quota_message_inside_success_body_is_still_a_payload() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({
			"responseData": { "translatedText": "MYMEMORY WARNING: YOU USED ALL AVAILABLE FREE TRANSLATIONS FOR TODAY" },
			"responseStatus": 429,
			"responseDetails": "quota"
		})))
		.mount(&server)
		.await;

	let result = client_for(&server).translate(&en_to_fa("x")).await;

	assert!(result.is_ok());
}

#[tokio::test]
async fn sends_contact_email_when_configured() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(query_param("de", "user@example.com"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
		.expect(1)
		.mount(&server)
		.await;

	let client = client_for(&server).with_email(Some("user@example.com".to_string()));
	client.translate(&en_to_fa("x")).await.unwrap();
}

#[tokio::test]
async fn server_error_is_api_error() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.respond_with(ResponseTemplate::new(503).set_body_string("down"))
		.mount(&server)
		.await;

	let err = client_for(&server).translate(&en_to_fa("x")).await.unwrap_err();

	match err {
		TranslateError::ApiError { status, message } => {
			assert_eq!(status, 503);
			assert_eq!(message, "down");
		}
		other => panic!("unexpected error: {other:?}"),
	}
}

#[tokio::test]
async fn client_error_is_api_error() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.respond_with(ResponseTemplate::new(404))
		.mount(&server)
		.await;

	let err = client_for(&server).translate(&en_to_fa("x")).await.unwrap_err();

	assert!(matches!(err, TranslateError::ApiError { status: 404, .. }));
}

#[tokio::test]
async fn malformed_json_is_invalid_response() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
		.mount(&server)
		.await;

	let err = client_for(&server).translate(&en_to_fa("x")).await.unwrap_err();

	assert!(matches!(err, TranslateError::InvalidResponse(_)));
}

#[tokio::test]
async fn slow_service_times_out() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.respond_with(
			ResponseTemplate::new(200)
				.set_body_json(json!({}))
				.set_delay(Duration::from_secs(2)),
		)
		.mount(&server)
		.await;

	let client = MyMemoryClient::new(Duration::from_millis(100))
		.unwrap()
		.with_base_url(format!("{}/get", server.uri()));
	let err = client.translate(&en_to_fa("x")).await.unwrap_err();

	assert!(matches!(err, TranslateError::Timeout));
}

#[tokio::test]
async fn unreachable_host_is_network_error() {
	let client = MyMemoryClient::new(Duration::from_secs(2))
		.unwrap()
		.with_base_url("http://127.0.0.1:1/get");

	let err = client.translate(&en_to_fa("x")).await.unwrap_err();

	assert!(matches!(err, TranslateError::Network(_)));
}
