// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Operation kinds.

use crate::error::ExecError;
use core::fmt;
use serde::{Deserialize, Serialize};

/// The fixed operation algebra. The discriminants are the wire tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum OpKind {
    Set = 0,
    Add = 1,
    Mul = 2,
    Sadd = 3,
    Srem = 4,
}

impl OpKind {
    pub const ALL: [OpKind; 5] = [OpKind::Set, OpKind::Add, OpKind::Mul, OpKind::Sadd, OpKind::Srem];

    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(OpKind::Set),
            1 => Some(OpKind::Add),
            2 => Some(OpKind::Mul),
            3 => Some(OpKind::Sadd),
            4 => Some(OpKind::Srem),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OpKind::Set => "SET",
            OpKind::Add => "ADD",
            OpKind::Mul => "MUL",
            OpKind::Sadd => "SADD",
            OpKind::Srem => "SREM",
        }
    }

    /// Row/column of this kind in the commutativity table.
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for OpKind {
    type Error = ExecError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        OpKind::from_u8(v).ok_or(ExecError::UnknownOperationKind(v))
    }
}

impl From<OpKind> for u8 {
    fn from(kind: OpKind) -> u8 {
        kind as u8
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
