//! Amounts travel as decimal strings so that values above 2^53 survive JSON clients.
//! Plain JSON integers up to `u64::MAX` are accepted on input as well; larger values
//! must be strings.
use serde::{
    Deserializer, Serializer,
    de::{self, Visitor},
};
use std::fmt;

pub fn serialize<S>(value: &u128, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(value)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<u128, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(AmountVisitor)
}

struct AmountVisitor;

impl Visitor<'_> for AmountVisitor {
    type Value = u128;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative integer or a decimal string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        v.trim()
            .parse::<u128>()
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(u128::from(v))
    }

    fn visit_u128<E>(self, v: u128) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(v)
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        u128::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    // JSON integers past u64::MAX arrive here as floats with the low digits lost.
    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        if v.is_finite() && v.fract() == 0.0 && v >= u64::MAX as f64 {
            return Err(E::custom(format!(
                "amount {v} exceeds {} and must be sent as a decimal string",
                u64::MAX
            )));
        }
        Err(E::invalid_value(de::Unexpected::Float(v), &self))
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Wrapper {
        #[serde(with = "super")]
        amount: u128,
    }

    #[test]
    fn serializes_as_string() {
        let json = serde_json::to_string(&Wrapper {
            amount: 10_000_000_000_000_000_000,
        })
        .unwrap();
        assert_eq!(json, r#"{"amount":"10000000000000000000"}"#);
    }

    #[test]
    fn accepts_strings_and_integers() {
        let from_str: Wrapper = serde_json::from_str(r#"{"amount":"42"}"#).unwrap();
        let from_int: Wrapper = serde_json::from_str(r#"{"amount":42}"#).unwrap();
        assert_eq!(from_str, from_int);
    }

    #[test]
    fn rejects_negative_and_garbage() {
        assert!(serde_json::from_str::<Wrapper>(r#"{"amount":-1}"#).is_err());
        assert!(serde_json::from_str::<Wrapper>(r#"{"amount":"ten"}"#).is_err());
        assert!(serde_json::from_str::<Wrapper>(r#"{"amount":1.5}"#).is_err());
    }

    #[test]
    fn integers_beyond_u64_must_be_strings() {
        let err = serde_json::from_str::<Wrapper>(r#"{"amount":18446744073709551616}"#)
            .unwrap_err();
        assert!(err.to_string().contains("decimal string"), "{err}");

        let ok: Wrapper = serde_json::from_str(r#"{"amount":"18446744073709551616"}"#).unwrap();
        assert_eq!(ok.amount, u128::from(u64::MAX) + 1);
    }
}
