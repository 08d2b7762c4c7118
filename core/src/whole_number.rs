//! Integer fields that also accept whole-number floats (`60.0`, `15000.0`).
//!
//! Palworld server builds are not consistent about integer encoding, so
//! `deserialize_with = "crate::whole_number::deserialize"` accepts any JSON
//! number with no fractional part that fits the target type. Fractional and
//! out-of-range values are rejected.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserializer, Visitor};

pub(crate) fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i128>,
{
    deserializer.deserialize_any(WholeNumber(PhantomData))
}

struct WholeNumber<T>(PhantomData<T>);

impl<T: TryFrom<i128>> WholeNumber<T> {
    fn fit<E: de::Error>(&self, v: i128, unexpected: de::Unexpected<'_>) -> Result<T, E> {
        T::try_from(v).map_err(|_| E::invalid_value(unexpected, self))
    }
}

impl<T: TryFrom<i128>> Visitor<'_> for WholeNumber<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "an integer in range for {}", std::any::type_name::<T>())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<T, E> {
        self.fit(i128::from(v), de::Unexpected::Signed(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<T, E> {
        self.fit(i128::from(v), de::Unexpected::Unsigned(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<T, E> {
        // NaN and infinities have a NaN fractional part.
        if v.fract() != 0.0 || v.abs() >= 2f64.powi(64) {
            return Err(E::invalid_value(de::Unexpected::Float(v), &self));
        }
        self.fit(v as i128, de::Unexpected::Float(v))
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Fields {
        #[serde(deserialize_with = "super::deserialize")]
        signed: i64,
        #[serde(deserialize_with = "super::deserialize")]
        small: u32,
    }

    fn parse(json: &str) -> Result<Fields, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn integers_and_whole_floats_are_accepted() {
        let fields = parse(r#"{"signed":-3,"small":7}"#).unwrap();
        assert_eq!((fields.signed, fields.small), (-3, 7));

        let fields = parse(r#"{"signed":15000.0,"small":60.0}"#).unwrap();
        assert_eq!((fields.signed, fields.small), (15000, 60));
    }

    #[test]
    fn fractional_values_are_rejected() {
        let err = parse(r#"{"signed":1,"small":59.5}"#).unwrap_err();
        assert!(err.to_string().contains("59.5"), "{err}");
    }

    #[test]
    fn values_outside_the_target_type_are_rejected() {
        assert!(parse(r#"{"signed":1,"small":-1}"#).is_err());
        assert!(parse(r#"{"signed":1,"small":-1.0}"#).is_err());
        assert!(parse(r#"{"signed":1,"small":4294967296}"#).is_err());
        assert!(parse(r#"{"signed":18446744073709551615,"small":1}"#).is_err());
        assert!(parse(r#"{"signed":1e300,"small":1}"#).is_err());
    }
}
