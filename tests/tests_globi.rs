mod support;

use crate::support::{Result, client_for_mock};
use biodiv_connect::{ClientConfig, ConnectorKind, FieldValues};
use biodiv_connect::resolver::Endpoint;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_globi_taxon_path_request() -> Result<()> {
	let server = MockServer::start().await;
	let body = json!({"columns": ["source_taxon_name", "interaction_type", "target_taxon_name"], "data": []});
	Mock::given(method("GET"))
		.and(path("/taxon/Homo%20sapiens/eats/Rattus%20rattus"))
		.and(query_param("type", "json"))
		.respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
		.expect(1)
		.mount(&server)
		.await;
	let client = client_for_mock(&server, ConnectorKind::Globi, &["taxon"]);
	let fields = FieldValues::new()
		.with("sourceTaxon", "Homo sapiens")
		.with("interactionType", "eats")
		.with("targetTaxon", "Rattus rattus")
		.with("type", "json");

	let value = client.exec_get(ConnectorKind::Globi, "taxon", "get", &fields).await?;

	assert_eq!(value, body);
	Ok(())
}

#[tokio::test]
async fn test_globi_interaction_query_and_config_header() -> Result<()> {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/interaction"))
		.and(query_param("sourceTaxon", "Homo sapiens"))
		.and(query_param("includeObservations", "false"))
		.and(header("user-agent", "biodiv-connect-tests"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [["Homo sapiens", "eats", "Bos taurus"]]})))
		.expect(1)
		.mount(&server)
		.await;
	let config = ClientConfig::default()
		.with_endpoint(ConnectorKind::Globi, "interaction", Endpoint::from_owned(server.uri()))
		.with_header("User-Agent", "biodiv-connect-tests");
	let client = biodiv_connect::Client::builder().with_config(config).build();
	let fields = FieldValues::new()
		.with("sourceTaxon", "Homo sapiens")
		.with("targetTaxon", "")
		.with("includeObservations", false);

	let value = client.exec_get(ConnectorKind::Globi, "interaction", "get", &fields).await?;

	assert_eq!(value["data"][0][2], json!("Bos taurus"));
	Ok(())
}
