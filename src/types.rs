//! Types returned by the Data API client

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Largest magnitude at which every integral `f64` is exactly representable
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Revision of the Data API selected by the URL path segment (e.g. "v4")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EndpointVersion(String);

impl EndpointVersion {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EndpointVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EndpointVersion {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for EndpointVersion {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// Version number reported by the server software itself
///
/// Integral values are written back to JSON as integers, so a server value
/// of `4` is re-encoded as `4` rather than `4.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApiVersion(f64);

impl ApiVersion {
    pub fn new(raw: f64) -> Self {
        Self(raw)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<f64> for ApiVersion {
    fn from(raw: f64) -> Self {
        Self(raw)
    }
}

impl Serialize for ApiVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let raw = self.0;
        if raw.is_finite() && raw.fract() == 0.0 && raw.abs() <= MAX_EXACT_INTEGER {
            serializer.serialize_i64(raw as i64)
        } else {
            serializer.serialize_f64(raw)
        }
    }
}

impl<'de> Deserialize<'de> for ApiVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Self)
    }
}

/// Response of the `version` endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Version {
    #[serde(rename = "endpointVersion")]
    endpoint_version: EndpointVersion,

    #[serde(rename = "apiVersion")]
    api_version: ApiVersion,
}

impl Version {
    pub fn new(endpoint_version: EndpointVersion, api_version: ApiVersion) -> Self {
        Self {
            endpoint_version,
            api_version,
        }
    }

    /// Endpoint version the server answered on
    pub fn endpoint_version(&self) -> &EndpointVersion {
        &self.endpoint_version
    }

    /// Version of the server software
    pub fn api_version(&self) -> ApiVersion {
        self.api_version
    }
}
