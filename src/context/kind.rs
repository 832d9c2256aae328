//! Value kind markers.
//!
//! Zero-sized tags carried by [`Value<K>`](super::Value). They decide which
//! continuation operators and methods a value exposes and which combinator
//! arguments it satisfies; they have no effect on rendered text.

use std::fmt;

pub trait Kind: Copy + Default + PartialEq + fmt::Debug + 'static {
    const NAME: &'static str;
}

/// Kinds that support `&&` / `||`.
pub trait Logical: Kind {}

/// Kinds that support comparison and arithmetic operators.
pub trait Numeric: Kind {}

/// Kinds that support `+`.
pub trait Additive: Kind {}

/// Value of unknown kind (`val()`, `getPriority()`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnyKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BooleanKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringKind;

impl Kind for AnyKind {
    const NAME: &'static str = "any";
}

impl Kind for NullKind {
    const NAME: &'static str = "null";
}

impl Kind for BooleanKind {
    const NAME: &'static str = "boolean";
}

impl Kind for NumberKind {
    const NAME: &'static str = "number";
}

impl Kind for StringKind {
    const NAME: &'static str = "string";
}

impl Logical for AnyKind {}
impl Logical for BooleanKind {}

impl Numeric for AnyKind {}
impl Numeric for NumberKind {}

impl Additive for AnyKind {}
impl Additive for NumberKind {}
impl Additive for StringKind {}
