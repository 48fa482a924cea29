//! The open-notify "iss-now" API.
//!
//! The body looks like
//! `{"message": "success", "timestamp": 1700000000,
//!   "iss_position": {"latitude": "51.2", "longitude": "3.4"}}`.
//! The coordinates arrive as strings but numbers are accepted too.

use crate::{
    core::{config::TrackerConfig, geo::LatLng},
    traits::PositionSource,
    GlobeError, Result,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const USER_AGENT: &str = concat!("iss-globe/", env!("CARGO_PKG_VERSION"));

/// A coordinate as sent by the API: a JSON number or a numeric string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CoordinateValue {
    Number(f64),
    Text(String),
}

impl CoordinateValue {
    pub fn to_f64(&self) -> Option<f64> {
        let value = match self {
            CoordinateValue::Number(n) => *n,
            CoordinateValue::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for CoordinateValue {
    fn from(value: f64) -> Self {
        CoordinateValue::Number(value)
    }
}

impl From<&str> for CoordinateValue {
    fn from(value: &str) -> Self {
        CoordinateValue::Text(value.to_string())
    }
}

/// Station position payload, unparsed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssPosition {
    pub latitude: CoordinateValue,
    pub longitude: CoordinateValue,
}

impl IssPosition {
    pub fn new(latitude: impl Into<CoordinateValue>, longitude: impl Into<CoordinateValue>) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }

    pub fn to_lat_lng(&self) -> Result<LatLng> {
        match (self.latitude.to_f64(), self.longitude.to_f64()) {
            (Some(lat), Some(lng)) if LatLng::new(lat, lng).is_valid() => {
                Ok(LatLng::new(lat, lng))
            }
            _ => Err(GlobeError::InvalidCoordinates(format!(
                "latitude {:?}, longitude {:?}",
                self.latitude, self.longitude
            ))),
        }
    }
}

/// Response body of the position endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssNow {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub iss_position: Option<IssPosition>,
}

impl IssNow {
    pub fn from_json(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }
}

/// Fetches the station position over HTTP
pub struct OpenNotifyClient {
    client: reqwest::Client,
    endpoint: String,
}

impl OpenNotifyClient {
    pub fn new(config: &TrackerConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PositionSource for OpenNotifyClient {
    async fn fetch(&self) -> Result<IssNow> {
        log::debug!("GET {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?;
        let body = response.bytes().await?;
        IssNow::from_json(&body)
    }
}
