//! Zimbra "js" format SOAP encoding: JSON envelopes with `_jsns` namespace
//! markers and `_content` element text, posted to the admin endpoint.

use crate::{AuthToken, Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

pub(crate) const SOAP_NS: &str = "urn:zimbra";
pub(crate) const ADMIN_NS: &str = "urn:zimbraAdmin";

/// Element text in the wire encoding, e.g. `{"_content": "user@example.net"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(rename = "_content")]
    pub content: String,
}

/// Borrowing counterpart of [`Content`] for request bodies.
#[derive(Debug, Serialize)]
pub(crate) struct ContentRef<'a> {
    #[serde(rename = "_content")]
    pub content: &'a str,
}

/// A single `<a n="...">...</a>` attribute element.
#[derive(Debug, Clone, Deserialize)]
pub struct Attr {
    pub n: String,
    #[serde(rename = "_content", default)]
    pub content: String,
}

/// Wrap a request body into a full envelope under the given element name,
/// tagging it with the admin namespace and attaching the auth token when
/// one is present.
pub(crate) fn request_envelope<T>(
    name: &str,
    body: &T,
    token: Option<&AuthToken>,
) -> Result<Value>
where
    T: Serialize + ?Sized,
{
    let mut request = serde_json::to_value(body)?;
    match request.as_object_mut() {
        Some(map) => {
            map.insert("_jsns".to_string(), Value::from(ADMIN_NS));
        }
        None => return Err(Error::unexpected("request body must be a json object")),
    }

    let mut context = json!({
        "_jsns": SOAP_NS,
        "format": { "type": "js" },
    });
    if let Some(token) = token {
        context["authToken"] = Value::from(token.as_str());
    }

    let mut body = Map::new();
    body.insert(name.to_string(), request);

    Ok(json!({
        "Header": { "context": context },
        "Body": body,
    }))
}

/// Response element name for a request element name, e.g. `AuthRequest`
/// becomes `AuthResponse`.
pub(crate) fn response_name(request_name: &str) -> String {
    let stem = request_name.strip_suffix("Request").unwrap_or(request_name);
    format!("{stem}Response")
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseEnvelope {
    #[serde(rename = "Body")]
    body: Map<String, Value>,
}

impl ResponseEnvelope {
    /// Unwrap the named response element, turning a `Fault` body into an
    /// error.
    pub(crate) fn into_response(mut self, name: &str) -> Result<Value> {
        if let Some(fault) = self.body.remove("Fault") {
            let fault: Fault = serde_json::from_value(fault)?;
            return Err(Error::fault(fault));
        }
        self.body
            .remove(name)
            .ok_or_else(|| Error::unexpected(format!("missing {name} element")))
    }
}

/// A server-reported fault, distinct from a transport-level failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fault {
    #[serde(rename = "Code")]
    pub code: FaultCode,
    #[serde(rename = "Reason")]
    pub reason: FaultReason,
    #[serde(rename = "Detail", default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<FaultDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaultCode {
    #[serde(rename = "Value", default)]
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaultReason {
    #[serde(rename = "Text", default)]
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaultDetail {
    #[serde(rename = "Error", default, skip_serializing_if = "Option::is_none")]
    pub error: Option<FaultError>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaultError {
    #[serde(rename = "Code", default)]
    pub code: String,
    #[serde(rename = "Trace", default, skip_serializing_if = "String::is_empty")]
    pub trace: String,
}

impl Fault {
    /// The service error code, e.g. `account.AUTH_FAILED`, falling back to
    /// the generic soap code when no detail is present.
    pub fn code(&self) -> &str {
        self.detail
            .as_ref()
            .and_then(|detail| detail.error.as_ref())
            .map(|error| error.code.as_str())
            .filter(|code| !code.is_empty())
            .unwrap_or(&self.code.value)
    }

    /// The human readable fault message.
    pub fn message(&self) -> &str {
        &self.reason.text
    }
}
