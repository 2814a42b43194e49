/*!
Conversion between timestamps and their textual representations.

The only interchange format this crate speaks is ISO 8601 as described in
[`iso8601`]; the optional Serde integration in [`serde`] rides on top of
it.
*/

pub(crate) mod iso8601;
#[cfg(feature = "serde")]
mod serde;
