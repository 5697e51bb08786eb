//! The `{success, data}` wrapper around every backend response.

use serde::{Deserialize, Serialize};

/// Errors produced when unwrapping an [`Envelope`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvelopeError {
    /// The backend answered with `success: false`.
    #[error("request rejected: {0}")]
    Rejected(String),
    /// `success: true` but no `data` field.
    #[error("response contained no data")]
    MissingData,
}

/// Response envelope returned by every endpoint.
///
/// ```
/// use stockdesk_core::models::Envelope;
///
/// let ok: Envelope<Vec<u32>> = serde_json::from_str(r#"{"success":true,"data":[1,2]}"#).unwrap();
/// assert_eq!(ok.into_result().unwrap(), vec![1, 2]);
///
/// let failed: Envelope<Vec<u32>> =
///     serde_json::from_str(r#"{"success":false,"message":"Category exists"}"#).unwrap();
/// assert!(failed.into_result().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Wrap a successful payload.
    pub const fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// Build a failed envelope carrying the backend's message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Return `data` when the request succeeded.
    ///
    /// # Errors
    ///
    /// [`EnvelopeError::Rejected`] when `success` is false, carrying the
    /// backend's message; [`EnvelopeError::MissingData`] when `data` is absent.
    pub fn into_result(self) -> Result<T, EnvelopeError> {
        if !self.success {
            return Err(self.rejection());
        }
        self.data.ok_or(EnvelopeError::MissingData)
    }

    /// Like [`Self::into_result`] but tolerates a missing `data` field.
    ///
    /// Used for deletes, where the backend often answers `{"success": true}`.
    ///
    /// # Errors
    ///
    /// [`EnvelopeError::Rejected`] when `success` is false.
    pub fn into_ack(self) -> Result<Option<T>, EnvelopeError> {
        if self.success {
            Ok(self.data)
        } else {
            Err(self.rejection())
        }
    }

    fn rejection(self) -> EnvelopeError {
        EnvelopeError::Rejected(
            self.message
                .unwrap_or_else(|| "request failed".to_string()),
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_carries_message() {
        let env: Envelope<u32> =
            serde_json::from_str(r#"{"success":false,"message":"Out of stock"}"#).unwrap();
        assert_eq!(
            env.into_result(),
            Err(EnvelopeError::Rejected("Out of stock".to_string()))
        );
    }

    #[test]
    fn test_rejected_without_message() {
        let env: Envelope<u32> = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert_eq!(
            env.into_result(),
            Err(EnvelopeError::Rejected("request failed".to_string()))
        );
    }

    #[test]
    fn test_missing_data() {
        let env: Envelope<u32> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert_eq!(env.clone().into_result(), Err(EnvelopeError::MissingData));
        assert_eq!(env.into_ack(), Ok(None));
    }

    #[test]
    fn test_constructors() {
        assert_eq!(Envelope::ok(7).into_result(), Ok(7));
        assert!(Envelope::<u32>::failed("nope").into_ack().is_err());
    }
}
