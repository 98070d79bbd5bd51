//! Owner identity and access scoping.
//!
//! Every store and service operation requires an [`OwnerScope`], which pins
//! the operation to the records of one principal. Ownership is enforced at
//! the type level; there is no way to issue an unscoped operation.

mod id;
mod scope;

pub use id::OwnerId;
pub use scope::OwnerScope;
