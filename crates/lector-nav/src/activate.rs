//! Activation boundary.
//!
//! Activating a node (the reader's "click") is routed through a host
//! handler first. The handler can consume the activation; otherwise the
//! caller dispatches the default action to the resolved target. A handler
//! failure never takes the reader down with it.

use lector_dom::NodeId;
use tracing::debug;

use crate::{NavError, Reader};

/// Host hook invoked when the user activates a node.
pub trait ActivationHandler {
    /// Handle an activation. Return `Ok(false)` to consume it, `Ok(true)`
    /// to let the default action proceed.
    fn on_activate(&mut self, target: NodeId) -> Result<bool, NavError>;
}

/// Outcome of an activation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// The handler consumed the activation.
    Consumed,
    /// The caller should dispatch the default action to this node.
    Dispatch(NodeId),
}

impl Reader<'_> {
    /// Activate a node. Composite controls route the activation to their
    /// active descendant.
    pub fn activate(&self, node: NodeId, handler: &mut dyn ActivationHandler) -> Activation {
        let target = self
            .roles
            .active_descendant(self.tree, node)
            .unwrap_or(node);
        match handler.on_activate(target) {
            Ok(false) => Activation::Consumed,
            Ok(true) => Activation::Dispatch(target),
            Err(err) => {
                debug!(%err, target = ?target, "activation handler failed");
                Activation::Dispatch(target)
            }
        }
    }
}
