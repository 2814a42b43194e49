/*!
Serde integration for [`Timestamp`].

Timestamps serialize as extended-form ISO 8601 strings in UTC, with the
fractional second included when it is non-zero so that values survive a
round trip. Deserialization accepts anything the ISO 8601 parser accepts.

```
use zulu::Timestamp;

#[derive(serde::Deserialize, serde::Serialize)]
struct Record {
    created: Timestamp,
}

let json = r#"{"created":"1994-11-05T13:15:30.5Z"}"#;
let record: Record = serde_json::from_str(json)?;
assert_eq!(record.created.second(), 30.5);
assert_eq!(serde_json::to_string(&record)?, json);
# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::Timestamp;

impl Serialize for Timestamp {
    #[inline]
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        // The Debug rendering is the ISO 8601 form with the fraction kept.
        serializer.collect_str(&format_args!("{self:?}"))
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    #[inline]
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Timestamp, D::Error> {
        struct TimestampVisitor;

        impl<'de> de::Visitor<'de> for TimestampVisitor {
            type Value = Timestamp;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("an ISO 8601 timestamp string")
            }

            #[inline]
            fn visit_str<E: de::Error>(
                self,
                value: &str,
            ) -> Result<Timestamp, E> {
                value.parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(TimestampVisitor)
    }
}

#[cfg(test)]
mod tests {
    use crate::Timestamp;

    #[test]
    fn serialize_keeps_the_fraction() {
        let ts = Timestamp::constant(1994, 11, 5, 13, 15, 30.5);
        assert_eq!(
            serde_json::to_string(&ts).unwrap(),
            r#""1994-11-05T13:15:30.5Z""#,
        );
        let ts = Timestamp::constant(1994, 11, 5, 13, 15, 30.0);
        assert_eq!(
            serde_json::to_string(&ts).unwrap(),
            r#""1994-11-05T13:15:30Z""#,
        );
    }

    #[test]
    fn deserialize_roundtrips() {
        let ts = Timestamp::constant(1994, 11, 5, 13, 15, 30.5);
        let json = serde_json::to_string(&ts).unwrap();
        let got: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(got, ts);
    }

    #[test]
    fn deserialize_rejects_garbage() {
        let result = serde_json::from_str::<Timestamp>(r#""not-a-date""#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("not-a-date"));
        assert!(serde_json::from_str::<Timestamp>("1234").is_err());
    }
}
