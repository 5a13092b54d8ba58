use crate::Result;
use crate::client::ServiceTarget;
use crate::engine::{FieldValues, HttpExecutor, Item, compile, unwrap_response};
use serde_json::Value;

/// Run one GET per item, in input order, and return the unwrapped results in the same order.
///
/// Items are processed sequentially: each request is awaited before the next one is compiled.
/// The first error (compile, HTTP, or unwrap) aborts the whole batch, and the results
/// already collected are dropped.
pub async fn run_batch<E, F>(
	executor: &E,
	target: &ServiceTarget,
	operation: &str,
	items: &[Item],
	mut fields_per_item: F,
) -> Result<Vec<Value>>
where
	E: HttpExecutor,
	F: FnMut(usize, &Item) -> FieldValues,
{
	// Resource and operation errors are configuration errors, so fail even on an empty batch.
	let config = target.connector.service_config();
	config.resource(&target.resource)?;
	config.check_operation(operation)?;

	let mut results = Vec::with_capacity(items.len());

	for (item_index, item) in items.iter().enumerate() {
		let fields = fields_per_item(item_index, item);
		let request = compile(target, operation, &fields)?;

		tracing::debug!(
			connector = %target.connector,
			resource = %target.resource,
			item_index,
			url = %request.url,
			"connector request"
		);

		let body = executor.get_json(&request).await?;
		let value = unwrap_response(target.connector, &target.resource, body)?;

		tracing::trace!(item_index, "unwrapped: {value}");

		results.push(value);
	}

	Ok(results)
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>; // For tests.

	use super::*;
	use crate::Error;
	use crate::connector::ConnectorKind;
	use crate::engine::RequestSpec;
	use crate::webc;
	use reqwest::StatusCode;
	use serde_json::json;
	use std::sync::Mutex;

	/// Answers each request with the GlobalNames parse envelope of the requested name,
	/// or a 500 for the name "boom".
	#[derive(Default)]
	struct EchoExecutor {
		urls: Mutex<Vec<String>>,
	}

	impl HttpExecutor for EchoExecutor {
		async fn get_json(&self, request: &RequestSpec) -> crate::Result<Value> {
			if let Ok(mut urls) = self.urls.lock() {
				urls.push(request.url.clone());
			}
			let name = request.url.rsplit('/').next().unwrap_or_default().replace("%20", " ");
			if name == "boom" {
				return Err(Error::WebCall {
					url: request.url.clone(),
					webc_error: webc::Error::ResponseFailedStatus {
						status: StatusCode::INTERNAL_SERVER_ERROR,
						body: "oops".to_string(),
					},
				});
			}
			Ok(json!([{ "name": name }]))
		}
	}

	fn name_items(names: &[&str]) -> Vec<Item> {
		names.iter().map(|n| Item::new(json!({ "name": n }))).collect()
	}

	fn name_fields(_idx: usize, item: &Item) -> FieldValues {
		FieldValues::new().with("name", item.json["name"].clone())
	}

	#[tokio::test]
	async fn test_run_batch_preserves_order() -> Result<()> {
		let executor = EchoExecutor::default();
		let target = ServiceTarget::new(ConnectorKind::GlobalNames, "parse")?;
		let items = name_items(&["Aedes aegypti", "Homo sapiens", "Culex pipiens"]);

		let results = run_batch(&executor, &target, "get", &items, name_fields).await?;

		assert_eq!(
			results,
			vec![
				json!({"name": "Aedes aegypti"}),
				json!({"name": "Homo sapiens"}),
				json!({"name": "Culex pipiens"}),
			]
		);
		Ok(())
	}

	#[tokio::test]
	async fn test_run_batch_aborts_on_http_error() -> Result<()> {
		let executor = EchoExecutor::default();
		let target = ServiceTarget::new(ConnectorKind::GlobalNames, "parse")?;
		let items = name_items(&["Aedes aegypti", "Homo sapiens", "boom"]);

		let res = run_batch(&executor, &target, "get", &items, name_fields).await;

		match res {
			Err(Error::WebCall {
				webc_error: webc::Error::ResponseFailedStatus { status, body },
				..
			}) => {
				assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
				assert_eq!(body, "oops");
			}
			other => return Err(format!("expected a 500 web call error, got {other:?}").into()),
		}
		Ok(())
	}

	#[tokio::test]
	async fn test_run_batch_stops_at_first_failure() -> Result<()> {
		let executor = EchoExecutor::default();
		let target = ServiceTarget::new(ConnectorKind::GlobalNames, "parse")?;
		let items = name_items(&["Aedes aegypti", "boom", "Homo sapiens"]);

		let res = run_batch(&executor, &target, "get", &items, name_fields).await;

		assert!(res.is_err());
		let urls = executor.urls.lock().map_err(|e| e.to_string())?;
		assert_eq!(urls.len(), 2, "no request after the failing item");
		Ok(())
	}

	#[tokio::test]
	async fn test_run_batch_empty_items_still_checks_operation() -> Result<()> {
		let executor = EchoExecutor::default();
		let target = ServiceTarget::new(ConnectorKind::Bold, "stats")?;

		let res = run_batch(&executor, &target, "delete", &[], |_, _| FieldValues::new()).await;

		assert!(matches!(res, Err(Error::UnsupportedOperation { .. })));
		Ok(())
	}
}

// endregion: --- Tests
