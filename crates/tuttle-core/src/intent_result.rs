//! Uniform success/failure envelope for facade operations
//!
//! Every operation the domain query facades expose returns an `IntentResult`
//! so presentation code can branch on success without inspecting error types.
//! The two-variant shape makes the pairing invariant structural: a success
//! can never carry an error message, a failure can never carry a payload.

use serde::ser::SerializeStruct;
use serde::Serialize;

/// Outcome of a facade operation: a payload on success, a user-presentable
/// message on failure.
#[derive(Debug, Clone, PartialEq)]
pub enum IntentResult<T> {
    /// Operation succeeded; `data` is the payload
    Success { data: T },
    /// Operation failed; `error_message` is safe to surface to the user
    Failure { error_message: String },
}

impl<T: Serialize> Serialize for IntentResult<T> {
    /// Serialize as `{success, data}` or `{success, error_message}` with a
    /// boolean flag, the shape presentation code branches on.
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            IntentResult::Success { data } => {
                let mut state = serializer.serialize_struct("IntentResult", 2)?;
                state.serialize_field("success", &true)?;
                state.serialize_field("data", data)?;
                state.end()
            }
            IntentResult::Failure { error_message } => {
                let mut state = serializer.serialize_struct("IntentResult", 2)?;
                state.serialize_field("success", &false)?;
                state.serialize_field("error_message", error_message)?;
                state.end()
            }
        }
    }
}

impl<T> IntentResult<T> {
    /// Construct a success carrying `data`
    pub fn ok(data: T) -> Self {
        IntentResult::Success { data }
    }

    /// Construct a failure carrying a user-presentable message
    pub fn fail(error_message: impl Into<String>) -> Self {
        IntentResult::Failure {
            error_message: error_message.into(),
        }
    }

    /// True when the operation succeeded
    pub fn was_successful(&self) -> bool {
        matches!(self, IntentResult::Success { .. })
    }

    /// Borrow the payload, if this is a success
    pub fn data(&self) -> Option<&T> {
        match self {
            IntentResult::Success { data } => Some(data),
            IntentResult::Failure { .. } => None,
        }
    }

    /// Consume the envelope, yielding the payload if this is a success
    pub fn into_data(self) -> Option<T> {
        match self {
            IntentResult::Success { data } => Some(data),
            IntentResult::Failure { .. } => None,
        }
    }

    /// The failure message, if this is a failure
    pub fn error_message(&self) -> Option<&str> {
        match self {
            IntentResult::Success { .. } => None,
            IntentResult::Failure { error_message } => Some(error_message),
        }
    }

    /// Map the payload of a success, leaving failures untouched
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> IntentResult<U> {
        match self {
            IntentResult::Success { data } => IntentResult::Success { data: f(data) },
            IntentResult::Failure { error_message } => IntentResult::Failure { error_message },
        }
    }

    /// Replace the failure message, leaving successes untouched
    ///
    /// Facades use this to swap a store-level message for a screen-level one.
    pub fn with_error_message(self, message: impl Into<String>) -> Self {
        match self {
            IntentResult::Success { data } => IntentResult::Success { data },
            IntentResult::Failure { .. } => IntentResult::Failure {
                error_message: message.into(),
            },
        }
    }
}

impl<T> From<crate::errors::Result<T>> for IntentResult<T> {
    /// Convert a core result into an envelope, rendering the error for display
    fn from(result: crate::errors::Result<T>) -> Self {
        match result {
            Ok(data) => IntentResult::ok(data),
            Err(err) => IntentResult::fail(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{TuttleError, TuttleErrorKind};

    #[test]
    fn test_success_has_data_and_no_message() {
        let result = IntentResult::ok(7);
        assert!(result.was_successful());
        assert_eq!(result.data(), Some(&7));
        assert_eq!(result.error_message(), None);
    }

    #[test]
    fn test_failure_has_message_and_no_data() {
        let result: IntentResult<i64> = IntentResult::fail("storage offline");
        assert!(!result.was_successful());
        assert_eq!(result.data(), None);
        assert_eq!(result.error_message(), Some("storage offline"));
    }

    #[test]
    fn test_map_preserves_failure() {
        let result: IntentResult<i64> = IntentResult::fail("nope");
        let mapped = result.map(|n| n * 2);
        assert_eq!(mapped.error_message(), Some("nope"));
    }

    #[test]
    fn test_from_core_result() {
        let ok: IntentResult<u8> = Ok(3).into();
        assert!(ok.was_successful());

        let err: IntentResult<u8> =
            Err(TuttleError::new(TuttleErrorKind::NotFound).with_message("gone")).into();
        assert!(!err.was_successful());
        assert!(err.error_message().unwrap().contains("ERR_NOT_FOUND"));
    }

    #[test]
    fn test_envelope_json_shape() {
        let ok = IntentResult::ok(vec![1, 2]);
        let json = serde_json::to_value(&ok).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"][0], 1);
        assert!(json.get("error_message").is_none());

        let fail: IntentResult<Vec<i64>> = IntentResult::fail("boom");
        let json = serde_json::to_value(&fail).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error_message"], "boom");
        assert!(json.get("data").is_none());
    }
}
