//! Response envelope shared by every API endpoint.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, RequestError};

/// `{ "ok": bool, "status": int, "response": ... }`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Envelope<T = Value> {
    pub ok: bool,

    #[serde(default)]
    pub status: u16,

    #[serde(default)]
    pub response: T,
}

impl Envelope<Value> {
    /// Unwrap the payload, turning `ok = false` into an API error.
    pub fn into_response<T: DeserializeOwned>(self) -> Result<T, Error> {
        if !self.ok {
            return Err(Error::Api {
                status: self.status,
            });
        }
        serde_json::from_value(self.response)
            .map_err(|e| Error::Request(RequestError::Decode(e)))
    }
}
