use serde::{Deserialize, Serialize};

/// The response envelope used by the Bracket API.
///
/// Every successful response wraps its value in a `data` field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload<T> {
    pub data: T,
}

impl<T> Payload<T> {
    /// Consumes the `Payload`, returning the wrapped value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.data
    }
}

impl<T> From<T> for Payload<T> {
    #[inline]
    fn from(data: T) -> Self {
        Self { data }
    }
}

#[cfg(test)]
mod tests {
    use super::Payload;

    #[test]
    fn test_payload_envelope() {
        let payload: Payload<Vec<u64>> = serde_json::from_str(r#"{"data":[1,2]}"#).unwrap();
        assert_eq!(payload.into_inner(), vec![1, 2]);
    }
}
