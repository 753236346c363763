use serde::{Deserialize, Serialize};

/// A document from the `planets` collection.
///
/// The collection is seeded by external tooling; this service only reads it.
/// Fields beyond these (`_id`, bookkeeping counters) are ignored on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    #[serde(deserialize_with = "lenient_i64::deserialize")]
    pub id: i64,
    pub name: String,
    pub description: String,
    pub image: String,
    pub velocity: String,
    pub distance: String,
}

/// Seeding tools disagree on the BSON type of `id` (some write Int32, some
/// Double), so accept any whole number.
mod lenient_i64 {
    use serde::de::{Deserializer, Error, Unexpected};
    use serde::Deserialize;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Number {
        Int(i64),
        Float(f64),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Number::deserialize(deserializer)? {
            Number::Int(n) => Ok(n),
            Number::Float(f)
                if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 =>
            {
                Ok(f as i64)
            }
            Number::Float(f) => Err(Error::invalid_value(
                Unexpected::Float(f),
                &"a whole-number planet id",
            )),
        }
    }
}
