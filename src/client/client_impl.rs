use crate::client::{Client, ServiceTarget};
use crate::connector::{ConnectorKind, FormSchema};
use crate::engine::{self, FieldValues, HttpExecutor, Item, ParameterLookup, RequestSpec};
use crate::Result;
use serde_json::Value;

/// Public api
impl Client {
	/// The form schema a host renders for `connector`.
	#[must_use]
	pub fn form_schema(&self, connector: ConnectorKind) -> FormSchema {
		connector.service_config().form_schema()
	}

	/// Resolve the target of a resource, applying the endpoint overrides of the client config.
	pub fn resolve_service_target(&self, connector: ConnectorKind, resource: &str) -> Result<ServiceTarget> {
		let target = ServiceTarget::new(connector, resource)?;
		let target = match self.config().endpoint(connector, resource) {
			Some(endpoint) => target.with_endpoint(endpoint.clone()),
			None => target,
		};
		Ok(target)
	}

	/// Compile the request one item would send, without sending it.
	pub fn compile(
		&self,
		connector: ConnectorKind,
		resource: &str,
		operation: &str,
		fields: &FieldValues,
	) -> Result<RequestSpec> {
		let target = self.resolve_service_target(connector, resource)?;
		engine::compile(&target, operation, fields)
	}

	/// Execute a single GET and return the unwrapped value.
	pub async fn exec_get(
		&self,
		connector: ConnectorKind,
		resource: &str,
		operation: &str,
		fields: &FieldValues,
	) -> Result<Value> {
		let request = self.compile(connector, resource, operation, fields)?;
		let body = self.web_client().get_json(&request).await?;
		engine::unwrap_response(connector, resource, body)
	}

	/// Execute one GET per input item, reading fields through the host's `lookup`,
	/// and wrap each unwrapped value as one output item (same order as `items`).
	///
	/// The first failure aborts the batch; no partial output is returned.
	pub async fn exec_batch<L>(
		&self,
		connector: ConnectorKind,
		resource: &str,
		operation: &str,
		items: &[Item],
		lookup: &L,
	) -> Result<Vec<Item>>
	where
		L: ParameterLookup + ?Sized,
	{
		self.exec_batch_with(self.web_client(), connector, resource, operation, items, lookup)
			.await
	}

	/// Same as `exec_batch`, with a host-supplied `HttpExecutor`.
	pub async fn exec_batch_with<E, L>(
		&self,
		executor: &E,
		connector: ConnectorKind,
		resource: &str,
		operation: &str,
		items: &[Item],
		lookup: &L,
	) -> Result<Vec<Item>>
	where
		E: HttpExecutor,
		L: ParameterLookup + ?Sized,
	{
		let target = self.resolve_service_target(connector, resource)?;
		let resource_config = target.resource_config()?;

		let values = engine::run_batch(executor, &target, operation, items, |item_index, _item| {
			lookup.field_values(resource_config, item_index)
		})
		.await?;

		Ok(Item::from_values(values))
	}
}
