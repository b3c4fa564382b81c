use serde::Serialize;

/// Uniform success body: `{"status":"success", ...payload}`.
///
/// The task payload is flattened next to the status marker, so the envelope
/// invariant holds by construction for every success response. Error bodies
/// are built in [`crate::errors`] and carry a `message` instead.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    status: &'static str,
    #[serde(flatten)]
    payload: T,
}

impl<T> Envelope<T> {
    /// Wraps a task payload in a success envelope.
    pub fn success(payload: T) -> Self {
        Self {
            status: "success",
            payload,
        }
    }
}
