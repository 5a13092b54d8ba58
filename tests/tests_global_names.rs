mod support;

use crate::support::{Result, client_for_mock, init_tracing, seed_items};
use biodiv_connect::engine::ItemFields;
use biodiv_connect::{ConnectorKind, Error, FieldValues, webc};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// region:    --- Compile

#[test]
fn test_global_names_parse_request_url() -> Result<()> {
	let client = biodiv_connect::Client::default();
	let fields = FieldValues::new().with("name", "Aedes aegypti").with("withDetails", true);

	let request = client.compile(ConnectorKind::GlobalNames, "parse", "get", &fields)?;

	assert_eq!(
		request.to_url()?.as_str(),
		"https://parser.globalnames.org/api/v1/Aedes%20aegypti?with_details=true"
	);
	Ok(())
}

// endregion: --- Compile

// region:    --- Batch

#[tokio::test]
async fn test_global_names_parse_batch_ok() -> Result<()> {
	init_tracing();
	let server = MockServer::start().await;
	for name in ["Aedes aegypti", "Culex pipiens"] {
		let encoded = urlencoding::encode(name);
		Mock::given(method("GET"))
			.and(path(format!("/api/v1/{encoded}")))
			.and(query_param("with_details", "true"))
			.and(header("accept", "application/json"))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "name": name, "parsed": true }])))
			.expect(1)
			.mount(&server)
			.await;
	}
	let client = client_for_mock(&server, ConnectorKind::GlobalNames, &["parse"]);
	let items = seed_items(vec![json!({"name": "Aedes aegypti"}), json!({"name": "Culex pipiens"})]);
	let lookup = ItemFields::new(&items).with_defaults(FieldValues::new().with("withDetails", true));

	let output = client
		.exec_batch(ConnectorKind::GlobalNames, "parse", "get", &items, &lookup)
		.await?;

	assert_eq!(output.len(), 2);
	assert_eq!(output[0].json, json!({"name": "Aedes aegypti", "parsed": true}));
	assert_eq!(output[1].json, json!({"name": "Culex pipiens", "parsed": true}));
	Ok(())
}

#[tokio::test]
async fn test_global_names_batch_aborts_on_500() -> Result<()> {
	init_tracing();
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/api/v1/Aedes"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "name": "Aedes" }])))
		.mount(&server)
		.await;
	Mock::given(method("GET"))
		.and(path("/api/v1/Culex"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "name": "Culex" }])))
		.mount(&server)
		.await;
	Mock::given(method("GET"))
		.and(path("/api/v1/Broken"))
		.respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
		.expect(1)
		.mount(&server)
		.await;
	let client = client_for_mock(&server, ConnectorKind::GlobalNames, &["parse"]);
	let items = seed_items(vec![json!({"name": "Aedes"}), json!({"name": "Culex"}), json!({"name": "Broken"})]);

	let res = client
		.exec_batch(ConnectorKind::GlobalNames, "parse", "get", &items, &ItemFields::new(&items))
		.await;

	match res {
		Err(Error::WebCall {
			webc_error: webc::Error::ResponseFailedStatus { status, body },
			..
		}) => {
			assert_eq!(status.as_u16(), 500);
			assert_eq!(body, "internal error");
		}
		other => return Err(format!("expected a status error, got {other:?}").into()),
	}
	Ok(())
}

#[tokio::test]
async fn test_global_names_verify_identity() -> Result<()> {
	let server = MockServer::start().await;
	let body = json!({"metadata": {"namesNumber": 1}, "names": [{"name": "Aedes aegypti", "matchType": "Exact"}]});
	Mock::given(method("GET"))
		.and(path("/api/v0/verifications/Aedes%20aegypti"))
		.respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
		.mount(&server)
		.await;
	let client = client_for_mock(&server, ConnectorKind::GlobalNames, &["verify"]);

	let value = client
		.exec_get(
			ConnectorKind::GlobalNames,
			"verify",
			"get",
			&FieldValues::new().with("name", "Aedes aegypti"),
		)
		.await?;

	assert_eq!(value, body);
	Ok(())
}

#[tokio::test]
async fn test_global_names_parse_empty_array_is_shape_error() -> Result<()> {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
		.mount(&server)
		.await;
	let client = client_for_mock(&server, ConnectorKind::GlobalNames, &["parse"]);

	let res = client
		.exec_get(ConnectorKind::GlobalNames, "parse", "get", &FieldValues::new().with("name", "X"))
		.await;

	assert!(matches!(res, Err(Error::UnexpectedResponseShape { .. })));
	Ok(())
}

// endregion: --- Batch
