// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Core value types shared by the codecs and the operation engine.

pub mod enums;
pub mod id;
pub mod scalar;

pub use enums::OpKind;
pub use id::Key;
pub use scalar::Decimal;
