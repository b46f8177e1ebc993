// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Operations, the values they act on, and the rules relating them.

pub mod conflict;
pub mod exec;
pub mod operation;
pub mod value;

pub use conflict::{check_conflict, commutativity, Commutativity};
pub use operation::Operation;
pub use value::Value;
