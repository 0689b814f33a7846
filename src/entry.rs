//! Process-wide default generator and entry point functions.

use std::sync;

use crate::{named, v4, Error, Uuid, V1Generator};
use rand::rngs::OsRng;

/// Returns the lock handle of the process-wide v1 generator, creating one if none exists.
///
/// The generator triple (last timestamp, clock sequence, node ID) is the only shared mutable
/// state in the crate; serializing access through this lock keeps the strictly-increasing-or-
/// clock-sequence-bumped invariant intact under concurrent callers.
fn lock_v1_generator() -> sync::MutexGuard<'static, V1Generator<OsRng>> {
    static G: sync::OnceLock<sync::Mutex<V1Generator<OsRng>>> = sync::OnceLock::new();
    G.get_or_init(|| sync::Mutex::new(V1Generator::new(OsRng)))
        .lock()
        .expect("uuid4122: could not lock global generator")
}

/// Generates a time-based UUIDv1 object.
///
/// This function employs a process-wide generator whose node ID is resolved once per process
/// lifetime (hardware address, or random bytes with the multicast bit set). Successive calls
/// within this process never return the same UUID.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid4122::uuid1()?;
/// println!("{}", uuid); // e.g. "c232ab00-9414-11ec-b3c8-9f6bdeced846"
/// # Ok::<(), uuid4122::Error>(())
/// ```
pub fn uuid1() -> Result<Uuid, Error> {
    lock_v1_generator().generate()
}

/// Generates a name-based UUIDv3 (MD5) object from a canonical namespace UUID string and a name.
///
/// The name takes part in the digest as its UTF-8 bytes. Fails with [`Error::Malformed`] if
/// `namespace` is not a valid canonical UUID string.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid4122::uuid3("6ba7b810-9dad-11d1-80b4-00c04fd430c8", "example.org")?;
/// assert_eq!(&uuid.to_string(), "04738bdf-b25a-3829-a801-b21a1d25095b");
/// # Ok::<(), uuid4122::Error>(())
/// ```
pub fn uuid3(namespace: &str, name: &str) -> Result<Uuid, Error> {
    let ns: Uuid = namespace.parse()?;
    Ok(named::new_v3(&ns, name.as_bytes()))
}

/// Generates a random UUIDv4 object from OS entropy.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid4122::uuid4()?;
/// println!("{}", uuid); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// # Ok::<(), uuid4122::Error>(())
/// ```
pub fn uuid4() -> Result<Uuid, Error> {
    v4::new_v4()
}

/// Generates a name-based UUIDv5 (SHA-1) object from a canonical namespace UUID string and a
/// name.
///
/// The name takes part in the digest as its UTF-8 bytes. Fails with [`Error::Malformed`] if
/// `namespace` is not a valid canonical UUID string.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid4122::uuid5("6ba7b810-9dad-11d1-80b4-00c04fd430c8", "example.org")?;
/// assert_eq!(&uuid.to_string(), "aad03681-8b63-5304-89e0-8ca8f49461b5");
/// # Ok::<(), uuid4122::Error>(())
/// ```
pub fn uuid5(namespace: &str, name: &str) -> Result<Uuid, Error> {
    let ns: Uuid = namespace.parse()?;
    Ok(named::new_v5(&ns, name.as_bytes()))
}

/// Returns the nil UUID (all 128 bits zero).
pub const fn uuid_nil() -> Uuid {
    Uuid::NIL
}

/// Returns the predefined DNS namespace UUID.
pub const fn uuid_ns_dns() -> Uuid {
    Uuid::NAMESPACE_DNS
}

/// Returns the predefined OID namespace UUID.
pub const fn uuid_ns_oid() -> Uuid {
    Uuid::NAMESPACE_OID
}

/// Returns the predefined URL namespace UUID.
pub const fn uuid_ns_url() -> Uuid {
    Uuid::NAMESPACE_URL
}

/// Returns the predefined X.500 namespace UUID.
pub const fn uuid_ns_x500() -> Uuid {
    Uuid::NAMESPACE_X500
}


#[cfg(test)]
mod tests_named {
    use super::{uuid3, uuid5};
    use crate::Error;

    /// Produces the same value as the typed constructors
    #[test]
    fn produces_the_same_value_as_the_typed_constructors() {
        use crate::{named, Uuid};
        let ns = Uuid::NAMESPACE_DNS.to_string();
        assert_eq!(
            uuid3(&ns, "example.org").unwrap(),
            named::new_v3(&Uuid::NAMESPACE_DNS, b"example.org")
        );
        assert_eq!(
            uuid5(&ns, "example.org").unwrap(),
            named::new_v5(&Uuid::NAMESPACE_DNS, b"example.org")
        );
    }

    /// Accepts upper-case namespace strings
    #[test]
    fn accepts_upper_case_namespace_strings() {
        let upper = "6BA7B810-9DAD-11D1-80B4-00C04FD430C8";
        assert_eq!(
            &uuid3(upper, "example.org").unwrap().to_string(),
            "04738bdf-b25a-3829-a801-b21a1d25095b"
        );
    }

    /// Rejects malformed namespace strings
    #[test]
    fn rejects_malformed_namespace_strings() {
        let cases = [
            "",
            "not a uuid",
            "6ba7b8109dad11d180b400c04fd430c8",
            "{6ba7b810-9dad-11d1-80b4-00c04fd430c8}",
        ];

        for ns in cases {
            assert!(matches!(uuid3(ns, "example.org"), Err(Error::Malformed(_))));
            assert!(matches!(uuid5(ns, "example.org"), Err(Error::Malformed(_))));
        }
    }
}
