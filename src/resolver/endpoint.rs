use std::sync::Arc;

/// A construct to store the base URL of a service resource.
/// It is designed to be efficiently clonable.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Endpoint {
	inner: Arc<str>,
}

/// Constructors
impl Endpoint {
	#[must_use]
	pub fn from_static(url: &'static str) -> Self {
		Self { inner: Arc::from(url) }
	}

	pub fn from_owned(url: impl Into<Arc<str>>) -> Self {
		Self { inner: url.into() }
	}
}

/// Getters
impl Endpoint {
	#[must_use]
	pub fn base_url(&self) -> &str {
		&self.inner
	}

	/// Join already-encoded path segments to the base URL with exactly one `/` between each.
	/// With no segments, the base URL is returned as-is.
	#[must_use]
	pub fn join_segments<S: AsRef<str>>(&self, segments: &[S]) -> String {
		if segments.is_empty() {
			return self.inner.to_string();
		}
		let mut url = self.inner.trim_end_matches('/').to_string();
		for segment in segments {
			url.push('/');
			url.push_str(segment.as_ref());
		}
		url
	}
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_endpoint_join_segments_slashes() {
		let with_slash = Endpoint::from_static("https://parser.globalnames.org/");
		let without_slash = Endpoint::from_owned("https://parser.globalnames.org".to_string());

		assert_eq!(
			with_slash.join_segments(&["api", "v1", "Homo%20sapiens"]),
			"https://parser.globalnames.org/api/v1/Homo%20sapiens"
		);
		assert_eq!(without_slash.join_segments(&["api"]), "https://parser.globalnames.org/api");
		assert_eq!(without_slash.join_segments::<&str>(&[]), "https://parser.globalnames.org");
	}
}

// endregion: --- Tests
