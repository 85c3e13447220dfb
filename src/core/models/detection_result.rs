use serde_json::Value;

/// Payload returned by the detection service, kept exactly as received.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionResult {
    payload: Value,
}

impl DetectionResult {
    pub fn from_payload(payload: Value) -> Self {
        Self { payload }
    }

    #[cfg(test)]
    pub fn payload(&self) -> &Value {
        &self.payload
    }

    pub fn to_indented_text(&self) -> String {
        serde_json::to_string_pretty(&self.payload).unwrap_or_else(|_| self.payload.to_string())
    }
}
