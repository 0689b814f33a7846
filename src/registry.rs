//! Host capability interface.
//!
//! A host engine (e.g. a database exposing SQL-callable functions) integrates this crate by
//! implementing [`FunctionHost`] and passing it to [`register_all`]. The engine hands the host a
//! fixed table of named, fixed-arity, pure callbacks; arguments and results cross the boundary as
//! plain text, with results always in the canonical 36-character lower-case form. The binary
//! 16-byte representation never crosses this boundary, and the crate never depends on any host
//! runtime type.

use crate::{entry, Error, ParseError};

/// A callable engine function: takes the declared number of text arguments and returns the
/// canonical string form of the generated UUID.
pub type EngineFn = fn(&[&str]) -> Result<String, Error>;

/// One named engine function with its fixed argument count.
#[derive(Copy, Clone, Debug)]
pub struct Entry {
    /// The name the host should expose the function under.
    pub name: &'static str,

    /// The exact number of arguments the function takes.
    pub arity: usize,

    /// The callback to invoke.
    pub func: EngineFn,
}

/// The full table of engine functions.
pub const ENTRIES: &[Entry] = &[
    Entry {
        name: "uuid1",
        arity: 0,
        func: call_uuid1,
    },
    Entry {
        name: "uuid3",
        arity: 2,
        func: call_uuid3,
    },
    Entry {
        name: "uuid4",
        arity: 0,
        func: call_uuid4,
    },
    Entry {
        name: "uuid5",
        arity: 2,
        func: call_uuid5,
    },
    Entry {
        name: "uuid_nil",
        arity: 0,
        func: call_uuid_nil,
    },
    Entry {
        name: "uuid_ns_dns",
        arity: 0,
        func: call_uuid_ns_dns,
    },
    Entry {
        name: "uuid_ns_oid",
        arity: 0,
        func: call_uuid_ns_oid,
    },
    Entry {
        name: "uuid_ns_url",
        arity: 0,
        func: call_uuid_ns_url,
    },
    Entry {
        name: "uuid_ns_x500",
        arity: 0,
        func: call_uuid_ns_x500,
    },
];

/// The registration capability a host engine provides.
pub trait FunctionHost {
    /// Registers one engine function under its name with a fixed arity.
    fn register(&mut self, entry: &Entry);
}

/// Registers every engine function into the host.
pub fn register_all<H: FunctionHost>(host: &mut H) {
    for entry in ENTRIES {
        host.register(entry);
    }
}

/// Extracts the two arguments of a name-based function.
///
/// The host contract fixes the arity, so a short slice is a host bug; it is reported as a
/// malformed argument rather than aborting the host process.
fn name_based_args<'a>(args: &[&'a str]) -> Result<(&'a str, &'a str), Error> {
    match args {
        &[namespace, name] => Ok((namespace, name)),
        _ => Err(Error::Malformed(ParseError {})),
    }
}

fn call_uuid1(_args: &[&str]) -> Result<String, Error> {
    entry::uuid1().map(String::from)
}

fn call_uuid3(args: &[&str]) -> Result<String, Error> {
    let (namespace, name) = name_based_args(args)?;
    entry::uuid3(namespace, name).map(String::from)
}

fn call_uuid4(_args: &[&str]) -> Result<String, Error> {
    entry::uuid4().map(String::from)
}

fn call_uuid5(args: &[&str]) -> Result<String, Error> {
    let (namespace, name) = name_based_args(args)?;
    entry::uuid5(namespace, name).map(String::from)
}

fn call_uuid_nil(_args: &[&str]) -> Result<String, Error> {
    Ok(entry::uuid_nil().into())
}

fn call_uuid_ns_dns(_args: &[&str]) -> Result<String, Error> {
    Ok(entry::uuid_ns_dns().into())
}

fn call_uuid_ns_oid(_args: &[&str]) -> Result<String, Error> {
    Ok(entry::uuid_ns_oid().into())
}

fn call_uuid_ns_url(_args: &[&str]) -> Result<String, Error> {
    Ok(entry::uuid_ns_url().into())
}

fn call_uuid_ns_x500(_args: &[&str]) -> Result<String, Error> {
    Ok(entry::uuid_ns_x500().into())
}
