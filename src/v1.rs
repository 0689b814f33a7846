//! UUIDv1 generator and related types.

use crate::{Error, Uuid};
use rand::RngCore;
use std::time::{SystemTime, UNIX_EPOCH};

/// Count of 100-nanosecond ticks between the Gregorian reform epoch (1582-10-15T00:00:00Z) and
/// the Unix epoch.
const GREGORIAN_UNIX_OFFSET: u64 = 0x01b2_1dd2_1381_4000;

const MAX_CLOCK_SEQ: u16 = (1 << 14) - 1;

/// Represents a UUIDv1 generator that encapsulates the last-used timestamp, the clock sequence,
/// and the node ID.
///
/// The clock sequence is randomly initialized and incremented (mod 2^14) whenever the clock reads
/// a tick that is not strictly greater than the previous call's, so two successive calls on one
/// generator never produce the same UUID. To guarantee this across threads, share one generator
/// behind a lock (as [`crate::uuid1()`] does with the process-wide instance) rather than creating
/// one generator per thread.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::OsRng;
/// use uuid4122::V1Generator;
///
/// let mut g = V1Generator::new(OsRng);
/// println!("{}", g.generate()?);
/// # Ok::<(), uuid4122::Error>(())
/// ```
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct V1Generator<R> {
    ticks: u64,
    clock_seq: u16,
    node: [u8; 6],

    /// Random number generator used to initialize the clock sequence and, if no hardware address
    /// is available, the node ID.
    rng: R,
}

impl<R: RngCore> V1Generator<R> {
    /// Creates a generator whose node ID is the primary hardware (MAC) address, or random bytes
    /// with the multicast bit set when no hardware address can be obtained.
    pub fn new(mut rng: R) -> Self {
        let node = hardware_node_id().unwrap_or_else(|| random_node_id(&mut rng));
        Self::with_node(rng, node)
    }

    /// Creates a generator with an explicit node ID.
    pub fn with_node(mut rng: R, node: [u8; 6]) -> Self {
        let clock_seq = rng.next_u32() as u16 & MAX_CLOCK_SEQ;
        Self {
            ticks: 0,
            clock_seq,
            node,
            rng,
        }
    }

    /// Returns the node ID of the generator.
    pub const fn node(&self) -> [u8; 6] {
        self.node
    }

    /// Generates a new UUIDv1 object from the current system time.
    pub fn generate(&mut self) -> Result<Uuid, Error> {
        Ok(self.generate_core(gregorian_ticks_now()?))
    }

    /// Generates a new UUIDv1 object from a tick count since the Gregorian reform epoch.
    ///
    /// If `ticks` is not strictly greater than the tick count of the previous call (the clock
    /// stood still or moved backwards), the clock sequence is incremented to avoid apparent
    /// timestamp reuse; otherwise it is left unchanged. The emitted timestamp is always `ticks`
    /// truncated to 60 bits.
    pub fn generate_core(&mut self, ticks: u64) -> Uuid {
        if ticks <= self.ticks {
            self.clock_seq = (self.clock_seq + 1) & MAX_CLOCK_SEQ;
        }
        self.ticks = ticks;
        Uuid::from_fields_v1(ticks, self.clock_seq, self.node)
    }
}

/// Reads the system clock as 100-nanosecond ticks since the Gregorian reform epoch.
fn gregorian_ticks_now() -> Result<u64, Error> {
    let unix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| Error::ClockUnavailable)?;
    Ok(GREGORIAN_UNIX_OFFSET.wrapping_add((unix.as_nanos() / 100) as u64))
}

/// Returns the primary hardware (MAC) address of this host, if one can be obtained.
fn hardware_node_id() -> Option<[u8; 6]> {
    match mac_address::get_mac_address() {
        Ok(Some(addr)) => Some(addr.bytes()),
        _ => None,
    }
}

/// Returns a random node ID with the multicast bit set to signal a non-hardware origin.
fn random_node_id<R: RngCore>(rng: &mut R) -> [u8; 6] {
    let mut node = [0u8; 6];
    rng.fill_bytes(&mut node);
    node[0] |= 0x01;
    node
}
