use derive_more::{Display, From};
use reqwest::StatusCode;

pub(crate) type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Display, From)]
#[allow(missing_docs)]
pub enum Error {
	#[display("Request failed with status code '{status}'. Response body:\n{body}")]
	ResponseFailedStatus { status: StatusCode, body: String },

	#[display("Response body is not valid JSON ({cause}). Response body:\n{body}")]
	ResponseFailedNotJson { body: String, cause: String },

	// -- Externals
	#[display("Reqwest error: {_0}")]
	#[from]
	Reqwest(reqwest::Error),
}

// region:    --- Error Boilerplate

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate
