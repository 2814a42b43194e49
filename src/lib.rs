/*!
An immutable UTC timestamp for the proleptic Gregorian calendar, with
lenient field normalization and an ISO 8601 codec.

The central idea is a single linear pivot: every operation reduces a
timestamp to its *reference seconds* (an `f64` count of seconds since
`0001-01-01T00:00:00Z`) and back. Construction normalizes out-of-range
fields by carrying through that scale, comparison compares on it, and the
ISO 8601 parser leans on it to absorb UTC offsets:

```
use zulu::{Timestamp, TimestampParts};

// Out-of-range fields carry: the 32nd of January is the 1st of February.
let ts = Timestamp::new(TimestampParts::new().year(2024).month(1).day(32))?;
assert_eq!(ts.to_iso8601(), "2024-02-01T00:00:00Z");

// Offsets in parsed text are normalized away; the result is always UTC.
let a = Timestamp::from_iso8601("1994-11-05T08:15:30-05:00").unwrap();
let b = Timestamp::from_iso8601("1994-11-05T13:15:30Z").unwrap();
assert_eq!(a, b);
# Ok::<(), zulu::Error>(())
```

Years are numbered astronomically (year `0` is 1 BCE, year `-1` is 2 BCE),
seconds may carry a fractional part, and timestamps are plain immutable
values: no time zones other than UTC, no leap seconds, no shared state.

# Crate features

* **logging** - Emits trace-level messages via the [`log`] crate on the
ISO 8601 parser's rejection paths, which is useful when a `None` from
[`Timestamp::from_iso8601`] is surprising.
* **serde** - Implements `Serialize` and `Deserialize` for [`Timestamp`]
using the ISO 8601 text form.

[`log`]: https://docs.rs/log
*/

#![warn(missing_debug_implementations)]

pub use crate::{
    error::Error,
    timestamp::{earliest, latest, Timestamp, TimestampParts},
};

#[macro_use]
mod logging;

pub mod civil;
mod error;
mod fmt;
mod scale;
mod timestamp;
