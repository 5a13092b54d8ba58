use crate::engine::{HttpExecutor, RequestSpec};
use crate::webc::{Error, Result};
use reqwest::{Response, StatusCode, Url};
use serde_json::Value;

/// Simple reqwest client wrapper for the connector GET calls.
#[derive(Debug, Clone, Default)]
pub struct WebClient {
	reqwest_client: reqwest::Client,
	/// Sent with every request, before the request's own headers.
	default_headers: Vec<(String, String)>,
}

/// Constructors
impl WebClient {
	#[must_use]
	pub fn from_reqwest_client(reqwest_client: reqwest::Client) -> Self {
		Self {
			reqwest_client,
			default_headers: Vec::new(),
		}
	}

	#[must_use]
	pub fn with_default_headers(mut self, headers: Vec<(String, String)>) -> Self {
		self.default_headers = headers;
		self
	}
}

/// Web method implementations
impl WebClient {
	pub async fn do_get(&self, url: Url, headers: &[(String, String)]) -> Result<WebResponse> {
		let mut reqwest_builder = self.reqwest_client.get(url);
		for (k, v) in self.default_headers.iter().chain(headers) {
			reqwest_builder = reqwest_builder.header(k.as_str(), v.as_str());
		}

		let reqwest_res = reqwest_builder.send().await?;

		WebResponse::from_reqwest_response(reqwest_res).await
	}
}

/// The connectors only ever GET and parse JSON, so `WebClient` is the default executor.
impl HttpExecutor for WebClient {
	async fn get_json(&self, request: &RequestSpec) -> crate::Result<Value> {
		let url = request.to_url()?;
		let url_string = url.to_string();

		let web_response = self
			.do_get(url, &request.headers)
			.await
			.map_err(|webc_error| crate::Error::WebCall {
				url: url_string,
				webc_error,
			})?;

		Ok(web_response.body)
	}
}

// region:    --- WebResponse

#[derive(Debug)]
pub struct WebResponse {
	pub status: StatusCode,
	pub body: Value,
}

impl WebResponse {
	/// Note 1: A non-success status is an error, with the response text as body.
	/// Note 2: The body is parsed as JSON whatever the content type says.
	///         Some services answer JSON as `text/html`.
	pub(crate) async fn from_reqwest_response(res: Response) -> Result<WebResponse> {
		let status = res.status();
		let text = res.text().await?;

		if !status.is_success() {
			tracing::warn!("WebClient: request failed with status {status}");
			return Err(Error::ResponseFailedStatus { status, body: text });
		}

		match serde_json::from_str::<Value>(&text) {
			Ok(body) => Ok(WebResponse { status, body }),
			Err(err) => Err(Error::ResponseFailedNotJson {
				body: text,
				cause: err.to_string(),
			}),
		}
	}
}

// endregion: --- WebResponse
