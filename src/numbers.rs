// src/numbers.rs
//! Integer fields that also accept whole-valued floats such as `4096.0`.
//!
//! Use with `#[serde(deserialize_with = "...")]`. Fractional, non-finite or
//! out-of-range numbers are rejected.
use serde::de::Error;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
}

impl RawNumber {
    fn whole<E: Error>(self) -> Result<i128, E> {
        match self {
            RawNumber::Unsigned(n) => Ok(n as i128),
            RawNumber::Signed(n) => Ok(n as i128),
            RawNumber::Float(f) if f.is_finite() && f.fract() == 0.0 => Ok(f as i128),
            RawNumber::Float(f) => Err(E::custom(format!("{f} is not a whole number"))),
        }
    }
}

fn narrow<T: TryFrom<i128>, E: Error>(n: i128) -> Result<T, E> {
    T::try_from(n).map_err(|_| E::custom(format!("{n} is out of range")))
}

pub fn whole<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i128>,
{
    let n = RawNumber::deserialize(deserializer)?.whole::<D::Error>()?;
    narrow(n)
}

pub fn optional_whole<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i128>,
{
    match Option::<RawNumber>::deserialize(deserializer)? {
        Some(raw) => narrow(raw.whole::<D::Error>()?).map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Steps {
        #[serde(deserialize_with = "whole")]
        count: u32,
        #[serde(default, deserialize_with = "optional_whole")]
        seed: Option<i64>,
    }

    fn steps(value: serde_json::Value) -> Result<Steps, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn integer_and_whole_float_agree() {
        let int = steps(json!({ "count": 30 })).expect("integer");
        let float = steps(json!({ "count": 30.0 })).expect("whole float");
        assert_eq!(int.count, 30);
        assert_eq!(float.count, 30);
    }

    #[test]
    fn fractional_value_is_rejected() {
        let err = steps(json!({ "count": 30.5 })).expect_err("fractional");
        assert!(err.to_string().contains("not a whole number"));
    }

    #[test]
    fn out_of_range_value_is_rejected() {
        assert!(steps(json!({ "count": -1 })).is_err());
        assert!(steps(json!({ "count": 5_000_000_000u64 })).is_err());
    }

    #[test]
    fn optional_accepts_null_missing_and_negative() {
        assert_eq!(steps(json!({ "count": 1 })).expect("missing").seed, None);
        assert_eq!(steps(json!({ "count": 1, "seed": null })).expect("null").seed, None);
        assert_eq!(
            steps(json!({ "count": 1, "seed": -42.0 })).expect("negative").seed,
            Some(-42)
        );
        assert_eq!(
            steps(json!({ "count": 1, "seed": i64::MAX })).expect("max").seed,
            Some(i64::MAX)
        );
    }
}
