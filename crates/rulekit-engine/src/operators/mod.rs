//! Comparison dispatch over runtime values

mod comparison;

pub(crate) use comparison::compare;
