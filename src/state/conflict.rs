// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Commutativity table.
//!
//! Two operations on the same key may be committed in the same round only if
//! applying them in either order yields the same value. The table below is
//! the whole rule set; it is indexed by kind tag and must stay symmetric.

use crate::error::ConflictError;
use crate::state::operation::Operation;
use crate::types::enums::OpKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commutativity {
    /// Commute whatever the operands.
    Always,
    /// Commute only when the operands are byte-equal.
    EqualOperands,
    /// Commute only when the operands differ.
    DistinctOperands,
    /// Never known to commute.
    Never,
}

use Commutativity::{Always as A, DistinctOperands as D, EqualOperands as E, Never as N};

/// Rows and columns in tag order: SET, ADD, MUL, SADD, SREM.
pub const COMMUTATIVITY: [[Commutativity; 5]; 5] = [
    //          SET ADD MUL SADD SREM
    /* SET  */ [E, N, N, N, N],
    /* ADD  */ [N, A, N, N, N],
    /* MUL  */ [N, N, A, N, N],
    /* SADD */ [N, N, N, A, D],
    /* SREM */ [N, N, N, D, A],
];

pub fn commutativity(a: OpKind, b: OpKind) -> Commutativity {
    COMMUTATIVITY[a.index()][b.index()]
}

pub fn check_conflict(a: &Operation, b: &Operation) -> Result<(), ConflictError> {
    if a.key() != b.key() {
        return Ok(());
    }

    let commutes = match commutativity(a.kind(), b.kind()) {
        Commutativity::Always => true,
        Commutativity::EqualOperands => a.operand() == b.operand(),
        Commutativity::DistinctOperands => a.operand() != b.operand(),
        Commutativity::Never => false,
    };

    if commutes {
        return Ok(());
    }

    tracing::debug!(key = %a.key(), left = %a.kind(), right = %b.kind(), "operations conflict");
    Err(ConflictError {
        key: a.key().clone(),
        left: a.kind(),
        left_operand: a.operand().to_vec(),
        right: b.kind(),
        right_operand: b.operand().to_vec(),
    })
}
