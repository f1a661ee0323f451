//! Typed payload access shared by builders and verified tokens

use crate::error::{JwtError, JwtResult};
use crate::types::Payload;
use serde_json::Value;

/// Read-only typed access to a payload object
///
/// Implementors only provide [`payload`](Self::payload); the typed getters
/// are derived from it.
pub trait PayloadAccess {
    /// The payload object
    fn payload(&self) -> &Payload;

    /// Raw value for `key`
    ///
    /// # Errors
    ///
    /// Returns [`JwtError::KeyNotFound`] if the key is absent.
    fn get(&self, key: &str) -> JwtResult<&Value> {
        self.payload()
            .get(key)
            .ok_or_else(|| JwtError::key_not_found(key))
    }

    /// String value for `key`
    ///
    /// # Errors
    ///
    /// Returns [`JwtError::KeyNotFound`] if the key is absent, or
    /// [`JwtError::WrongType`] if the value is not a string.
    fn get_string(&self, key: &str) -> JwtResult<&str> {
        match self.get(key)? {
            Value::String(text) => Ok(text),
            _ => Err(JwtError::wrong_type(key, "string")),
        }
    }

    /// Numeric value for `key`, widened to `f64`
    ///
    /// A string value is accepted if it parses as a number.
    ///
    /// # Errors
    ///
    /// Returns [`JwtError::KeyNotFound`] if the key is absent, or
    /// [`JwtError::WrongType`] if the value is neither a number nor a numeric
    /// string.
    fn get_number(&self, key: &str) -> JwtResult<f64> {
        let number = match self.get(key)? {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.parse::<f64>().ok(),
            _ => None,
        };
        number.ok_or_else(|| JwtError::wrong_type(key, "number"))
    }

    /// Boolean value for `key`
    ///
    /// # Errors
    ///
    /// Returns [`JwtError::KeyNotFound`] if the key is absent, or
    /// [`JwtError::WrongType`] if the value is not a boolean.
    fn get_bool(&self, key: &str) -> JwtResult<bool> {
        match self.get(key)? {
            Value::Bool(flag) => Ok(*flag),
            _ => Err(JwtError::wrong_type(key, "boolean")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Claims(Payload);

    impl PayloadAccess for Claims {
        fn payload(&self) -> &Payload {
            &self.0
        }
    }

    fn payload() -> Claims {
        let Value::Object(map) = json!({
            "name": "alice",
            "count": 7,
            "ratio": 0.25,
            "numeric_text": "123.45",
            "text": "abc",
            "flag": true,
            "nothing": null,
        }) else {
            unreachable!()
        };
        Claims(map)
    }

    #[test]
    fn test_get_missing_key() {
        assert_eq!(
            payload().get("absent"),
            Err(JwtError::KeyNotFound("absent".to_string()))
        );
        assert_eq!(payload().get("nothing").unwrap(), &Value::Null);
    }

    #[test]
    fn test_get_string() {
        let payload = payload();
        assert_eq!(payload.get_string("name").unwrap(), "alice");
        assert_eq!(
            payload.get_string("count"),
            Err(JwtError::wrong_type("count", "string"))
        );
    }

    #[test]
    fn test_get_number() {
        let payload = payload();
        assert_eq!(payload.get_number("count").unwrap(), 7.0);
        assert_eq!(payload.get_number("ratio").unwrap(), 0.25);
        assert_eq!(payload.get_number("numeric_text").unwrap(), 123.45);
        assert_eq!(
            payload.get_number("text"),
            Err(JwtError::wrong_type("text", "number"))
        );
        assert_eq!(
            payload.get_number("flag"),
            Err(JwtError::wrong_type("flag", "number"))
        );
        assert_eq!(
            payload.get_number("absent"),
            Err(JwtError::KeyNotFound("absent".to_string()))
        );
    }

    #[test]
    fn test_get_bool() {
        let payload = payload();
        assert!(payload.get_bool("flag").unwrap());
        assert_eq!(
            payload.get_bool("nothing"),
            Err(JwtError::wrong_type("nothing", "boolean"))
        );
    }
}
