use crate::Result;
use crate::engine::RequestSpec;
use serde_json::Value;
use std::future::Future;

/// Performs the GET of a `RequestSpec` and returns the decoded JSON body.
///
/// Implementations must surface HTTP status and transport failures as errors, unchanged.
/// Timeouts, pooling and retries, if any, are theirs to decide.
pub trait HttpExecutor {
	fn get_json(&self, request: &RequestSpec) -> impl Future<Output = Result<Value>> + Send;
}
