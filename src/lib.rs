//! An implementation of RFC 4122 UUID versions 1, 3, 4, and 5
//!
//! ```rust
//! use uuid4122::{uuid4, uuid5};
//!
//! let random = uuid4()?;
//! println!("{}", random); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! println!("{:?}", random.as_bytes()); // as 16-byte big-endian array
//!
//! let named = uuid5("6ba7b810-9dad-11d1-80b4-00c04fd430c8", "example.org")?;
//! assert_eq!(&named.to_string(), "aad03681-8b63-5304-89e0-8ca8f49461b5");
//! # Ok::<(), uuid4122::Error>(())
//! ```
//!
//! See [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122).
//!
//! # Field and bit layout
//!
//! Every UUID is a 128-bit value laid out in the five canonical RFC 4122 fields, shown here for
//! version 1:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           time_low                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |           time_mid            |  ver  |       time_hi         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|       clock_seq           |             node              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                         node (48 bits)                        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 60-bit timestamp counts 100-nanosecond ticks since 1582-10-15T00:00:00Z, split across
//!   `time_low` (32 bits), `time_mid` (16 bits), and `time_hi` (12 bits).
//! - The 4-bit `ver` field identifies the generation scheme: `0001` time-based, `0011`
//!   MD5 name-based, `0100` random, `0101` SHA-1 name-based.
//! - The 2-bit `var` field is set at `10`.
//! - The 14-bit `clock_seq` field avoids apparent timestamp reuse when the clock stands still or
//!   moves backwards.
//! - The 48-bit `node` field carries the host's hardware address, or random bits with the
//!   multicast bit set when no hardware address is available.
//!
//! Versions 3, 4, and 5 fill all bits other than `ver` and `var` from their source material: an
//! MD5 digest, OS entropy, or a SHA-1 digest truncated to 128 bits. The name-based versions hash
//! the namespace UUID's 16 raw bytes followed by the name's raw bytes, so the same
//! `(namespace, name)` pair always yields the same UUID.
//!
//! # Entry points
//!
//! The engine exposes the generating functions [`uuid1`], [`uuid3`], [`uuid4`], and [`uuid5`]
//! plus the constant accessors [`uuid_nil`] and [`uuid_ns_dns`]/[`uuid_ns_oid`]/[`uuid_ns_url`]/
//! [`uuid_ns_x500`]. A host engine can bind all of them as callable names through
//! [`registry::register_all`]. Callers that manage their own generator state or namespace values
//! use [`V1Generator`], [`named::new_v3`], and [`named::new_v5`] directly.
//!
//! # Crate features
//!
//! - `serde`: serializes a [`Uuid`] as the canonical string in human-readable formats and as 16
//!   bytes in compact formats.
//! - `uuid`: conversions to and from the `uuid` crate's type.

mod id;
pub use id::{ParseError, Uuid, Variant};

mod error;
pub use error::Error;

pub mod v1;
pub use v1::V1Generator;

pub mod named;

pub mod v4;

mod entry;
pub use entry::{
    uuid1, uuid3, uuid4, uuid5, uuid_nil, uuid_ns_dns, uuid_ns_oid, uuid_ns_url, uuid_ns_x500,
};

pub mod registry;
