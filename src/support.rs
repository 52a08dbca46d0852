//! Supporting utilities used by models.
//!
//! - [`agmd`]: Transport correlations for air gap membrane distillation.
//! - [`constraint`]: Numeric domain constraints.
//! - [`properties`]: Property snapshots and provider traits.
//! - [`units`]: Extensions to [`uom`].

pub mod agmd;
pub mod constraint;
pub mod properties;
pub mod units;
