//! UUIDv4-related functionality.

use crate::{Error, Uuid};
use rand::{rngs::OsRng, RngCore};

/// Generates a UUIDv4 object from OS entropy.
///
/// The 128 bits are drawn directly from the operating system's entropy source, never from a
/// seedable PRNG. If the entropy source cannot supply bytes, the call fails with
/// [`Error::EntropyUnavailable`].
///
/// # Examples
///
/// ```rust
/// use uuid4122::v4::new_v4;
///
/// let uuid = new_v4()?;
/// println!("{}", uuid); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// # Ok::<(), uuid4122::Error>(())
/// ```
pub fn new_v4() -> Result<Uuid, Error> {
    let mut bytes = [0u8; 16];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(Error::EntropyUnavailable)?;
    Ok(Uuid::with_version(bytes, 4))
}
