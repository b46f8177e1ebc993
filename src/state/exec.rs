// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Deterministic execution of committed operations.
//!
//! Every branch computes the complete new content first and swaps it into the
//! value as the last step, so a failure never leaves a half-written value.

use crate::config::{MAX_SET_ELEMENTS, MAX_SET_ELEMENT_LEN};
use crate::error::{ExecError, NumberError};
use crate::fxp::ops::{dec_add, dec_mul};
use crate::fxp::text::parse_decimal;
use crate::state::operation::Operation;
use crate::state::value::Value;
use crate::types::enums::OpKind;
use crate::types::scalar::Decimal;

type Arith = fn(Decimal, Decimal) -> Result<Decimal, NumberError>;

pub fn apply(op: &Operation, value: &mut Value) -> Result<(), ExecError> {
    let result = match op.kind() {
        OpKind::Set => Ok(op.operand().to_vec()),
        OpKind::Add => numeric(op, value, dec_add),
        OpKind::Mul => numeric(op, value, dec_mul),
        OpKind::Sadd => set_member(op, value, true),
        OpKind::Srem => set_member(op, value, false),
    };

    match result {
        Ok(raw) => {
            value.replace(raw);
            tracing::trace!(key = %op.key(), kind = %op.kind(), "operation applied");
            Ok(())
        }
        Err(e) => {
            tracing::debug!(key = %op.key(), kind = %op.kind(), error = %e, "operation failed");
            Err(e)
        }
    }
}

/// Empty current value and empty operand both read as zero, for MUL too.
fn numeric(op: &Operation, value: &Value, f: Arith) -> Result<Vec<u8>, ExecError> {
    let current = value.as_number().map_err(ExecError::InvalidCurrentValue)?;
    let amount = parse_decimal(op.operand()).map_err(ExecError::InvalidOperand)?;
    let result = f(current, amount).map_err(arith_error)?;
    Ok(result.to_canonical_bytes())
}

fn arith_error(e: NumberError) -> ExecError {
    match e {
        NumberError::Precision => ExecError::InexactProduct,
        _ => ExecError::Overflow,
    }
}

fn set_member(op: &Operation, value: &Value, insert: bool) -> Result<Vec<u8>, ExecError> {
    let element = op.operand();
    if element.len() > MAX_SET_ELEMENT_LEN {
        return Err(ExecError::ElementTooLarge(element.len()));
    }

    let mut set = value.as_set()?;
    if insert {
        if !set.contains(element) && set.len() >= MAX_SET_ELEMENTS {
            return Err(ExecError::SetCapacity);
        }
        set.add(element);
    } else {
        set.remove(element);
    }

    Ok(set.encode())
}
