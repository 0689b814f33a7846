//! Name-based (v3/v5) UUID construction.
//!
//! A name-based UUID is the digest of the namespace UUID's 16 raw bytes followed by the raw bytes
//! of the name, truncated to 128 bits and stamped with the version and variant fields. The digest
//! is content-addressed: the same `(namespace, name)` pair always yields the same UUID, across
//! processes and implementations.

use crate::Uuid;
use md5::{Digest, Md5};
use sha1::Sha1;

/// Creates a UUIDv3 object by hashing the namespace ID and the name with MD5.
///
/// # Examples
///
/// ```rust
/// use uuid4122::{named::new_v3, Uuid};
///
/// let uuid = new_v3(&Uuid::NAMESPACE_DNS, b"example.org");
/// assert_eq!(&uuid.to_string(), "04738bdf-b25a-3829-a801-b21a1d25095b");
/// ```
pub fn new_v3(namespace: &Uuid, name: &[u8]) -> Uuid {
    let mut hasher = Md5::new();
    hasher.update(namespace.as_bytes());
    hasher.update(name);
    Uuid::with_version(hasher.finalize().into(), 3)
}

/// Creates a UUIDv5 object by hashing the namespace ID and the name with SHA-1.
///
/// # Examples
///
/// ```rust
/// use uuid4122::{named::new_v5, Uuid};
///
/// let uuid = new_v5(&Uuid::NAMESPACE_DNS, b"example.org");
/// assert_eq!(&uuid.to_string(), "aad03681-8b63-5304-89e0-8ca8f49461b5");
/// ```
pub fn new_v5(namespace: &Uuid, name: &[u8]) -> Uuid {
    let mut hasher = Sha1::new();
    hasher.update(namespace.as_bytes());
    hasher.update(name);
    let digest = hasher.finalize();

    // SHA-1 yields 20 bytes; only the first 16 take part in the UUID
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest[..16]);
    Uuid::with_version(bytes, 5)
}

#[cfg(test)]
mod tests {
    use super::{new_v3, new_v5};
    use crate::{Uuid, Variant};

    const X500_NAME: &str = "cn=www.example.org,ou=Technology,o=Internet Corporation for \
                             Assigned Names and Numbers,L=Los Angeles,ST=California,C=US";

    /// Returns namespace/name pairs with their RFC-standard v3 and v5 values
    fn prepare_cases() -> Vec<(Uuid, &'static str, &'static str, &'static str)> {
        vec![
            (
                Uuid::NAMESPACE_DNS,
                "example.org",
                "04738bdf-b25a-3829-a801-b21a1d25095b",
                "aad03681-8b63-5304-89e0-8ca8f49461b5",
            ),
            (
                Uuid::NAMESPACE_DNS,
                "www.example.org",
                "0012416f-9eec-3ed4-a8b0-3bceecde1cd9",
                "74738ff5-5367-5958-9aee-98fffdcd1876",
            ),
            (
                Uuid::NAMESPACE_OID,
                "0.1.2.3",
                "d4eb0b27-0f48-3fe8-b42a-cc24bccb5893",
                "274f92e4-97b2-5748-87a2-be31842ea49f",
            ),
            (
                Uuid::NAMESPACE_URL,
                "https://example.org",
                "f635417d-d6de-39c1-bd60-6093b24b0b28",
                "0d092af3-c9f8-531f-9cc3-9db40a0750ef",
            ),
            (
                Uuid::NAMESPACE_X500,
                X500_NAME,
                "dc8efa4e-3371-3f48-9ca5-82043ecb694a",
                "7ac01775-9158-58c6-87e7-feca0da501f6",
            ),
            (
                Uuid::NAMESPACE_DNS,
                "",
                "c87ee674-4ddc-3efe-a74e-dfe25da5d7b3",
                "4ebd0208-8328-5d69-8c44-ec50939c0967",
            ),
        ]
    }

    /// Matches the standard values for prepared cases
    #[test]
    fn matches_the_standard_values_for_prepared_cases() {
        for (ns, name, v3, v5) in prepare_cases() {
            assert_eq!(&new_v3(&ns, name.as_bytes()).to_string(), v3);
            assert_eq!(&new_v5(&ns, name.as_bytes()).to_string(), v5);
        }
    }

    /// Generates byte-identical UUIDs on repeat calls
    #[test]
    fn generates_byte_identical_uuids_on_repeat_calls() {
        for (ns, name, _, _) in prepare_cases() {
            let name = name.as_bytes();
            assert_eq!(new_v3(&ns, name), new_v3(&ns, name));
            assert_eq!(new_v5(&ns, name), new_v5(&ns, name));
        }
    }

    /// Sets correct variant and version bits
    #[test]
    fn sets_correct_variant_and_version_bits() {
        for (ns, name, _, _) in prepare_cases() {
            let e3 = new_v3(&ns, name.as_bytes());
            assert_eq!(e3.variant(), Variant::Var10);
            assert_eq!(e3.version(), Some(3));

            let e5 = new_v5(&ns, name.as_bytes());
            assert_eq!(e5.variant(), Variant::Var10);
            assert_eq!(e5.version(), Some(5));
        }
    }

    /// Distinguishes namespaces, names, and digest algorithms
    #[test]
    fn distinguishes_namespaces_names_and_digest_algorithms() {
        let name = b"example.org";
        assert_ne!(new_v3(&Uuid::NAMESPACE_DNS, name), new_v5(&Uuid::NAMESPACE_DNS, name));
        assert_ne!(
            new_v3(&Uuid::NAMESPACE_DNS, name),
            new_v3(&Uuid::NAMESPACE_URL, name)
        );
        assert_ne!(
            new_v3(&Uuid::NAMESPACE_DNS, name),
            new_v3(&Uuid::NAMESPACE_DNS, b"example.com")
        );
    }
}
