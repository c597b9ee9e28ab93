//! Lector ARIA — role classifications and the role oracle boundary.
//!
//! The navigation core treats role information as authoritative and higher
//! precedence than tag-based defaults. It reaches the role layer only
//! through the [`RoleOracle`] trait, so tests can substitute fakes and the
//! host can substitute a platform accessibility API.

mod oracle;
mod role;

pub use oracle::{AttrRoleOracle, RoleOracle};
pub use role::{AriaRole, AriaStateMsg, TriState};
