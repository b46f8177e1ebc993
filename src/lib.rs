// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

//! accord-kernel: the deterministic state-transition engine of a
//! Byzantine-fault-tolerant replicated key-value store.
//!
//! Given two proposed operations it decides whether they may be committed
//! together ([`Operation::check_conflict`]); given a committed operation and
//! the current value of its key it computes the new value
//! ([`Operation::exec`]). Both are pure and produce byte-identical results on
//! every replica: numbers are base-10 fixed point, sets have a single
//! canonical encoding, and nothing depends on time, randomness, hash-map
//! order or floating point.
//!
//! ```
//! use accord_kernel::{Operation, Value};
//!
//! let mut value = Value::new("2.5");
//! Operation::add("balance", "1.5").exec(&mut value).unwrap();
//! assert_eq!(value.raw(), b"4");
//!
//! let add = Operation::sadd("tags", "hey");
//! let rem = Operation::srem("tags", "hey");
//! assert!(add.check_conflict(&rem).is_err());
//! ```

pub mod config;
pub mod error;
pub mod fxp;
pub mod oplog;
pub mod proof;
pub mod replay;
pub mod set;
pub mod state;
pub mod types;
pub mod verify;

pub use error::{ConflictError, ExecError, KernelError, NumberError, OpLogError, Result, SetDecodeError};
pub use set::CanonicalSet;
pub use state::{Commutativity, Operation, Value};
pub use types::{Decimal, Key, OpKind};

#[cfg(test)]
pub mod tests;
