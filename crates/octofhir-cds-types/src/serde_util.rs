//! Serde helpers for the stringly wire encodings used by hook payloads

/// Day-count fields ("timeframe") arrive either as JSON numbers or as
/// numeric strings ("180"). Serialized form is always a number.
pub mod days {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Raw::deserialize(deserializer)? {
            Raw::Number(days) => Ok(days),
            Raw::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| D::Error::custom(format!("invalid day count: {text:?}"))),
        }
    }

    pub fn serialize<S>(days: &i64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(*days)
    }
}
