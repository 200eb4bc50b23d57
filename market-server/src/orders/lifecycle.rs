//! Order Lifecycle State Machine
//!
//! Fulfillment axis, canonical forward path:
//!
//! ```text
//! pending → confirmed → preparing → ready → in-delivery → delivered
//!     \________\___________\_________\_________\→ cancelled
//! ```
//!
//! `delivered` and `cancelled` are terminal. The payment axis is fully
//! independent: pending → {paid, failed}, failed → pending (retry),
//! paid → refunded (terminal).
//!
//! Two policies govern the fulfillment axis. The strict default only
//! accepts the next step on the forward path (or `cancelled`); skipping
//! ahead requires the caller's explicit override flag, and moving
//! backward is never accepted. The permissive policy reproduces the
//! legacy behavior: any recognized target is accepted while the current
//! state is non-terminal.

use shared::models::{OrderStatus, PaymentStatus};

/// Fulfillment-axis transition policy, selected by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionPolicy {
    pub strict_sequential: bool,
}

impl TransitionPolicy {
    pub fn strict() -> Self {
        Self {
            strict_sequential: true,
        }
    }

    pub fn permissive() -> Self {
        Self {
            strict_sequential: false,
        }
    }
}

/// Rejected transitions. The order record is left untouched.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("order is {current}, a terminal state; no further transition is accepted")]
    Terminal { current: OrderStatus },

    #[error("order is already {status}")]
    SelfTransition { status: OrderStatus },

    #[error("cannot move order backward from {from} to {to}")]
    Backward { from: OrderStatus, to: OrderStatus },

    #[error("cannot skip from {from} to {to} without an explicit override")]
    SkippedAhead { from: OrderStatus, to: OrderStatus },

    #[error("payment is {current}, a terminal state; no further transition is accepted")]
    PaymentTerminal { current: PaymentStatus },

    #[error("invalid payment transition from {from} to {to}")]
    PaymentInvalid {
        from: PaymentStatus,
        to: PaymentStatus,
    },
}

impl From<LifecycleError> for crate::utils::AppError {
    fn from(err: LifecycleError) -> Self {
        crate::utils::AppError::validation(err.to_string())
    }
}

/// Validate a fulfillment-status transition under the given policy.
pub fn validate_status_transition(
    current: OrderStatus,
    requested: OrderStatus,
    policy: TransitionPolicy,
    override_requested: bool,
) -> Result<(), LifecycleError> {
    if current.is_terminal() {
        return Err(LifecycleError::Terminal { current });
    }
    if requested == current {
        return Err(LifecycleError::SelfTransition { status: current });
    }
    // Cancellation is reachable from every non-terminal state
    if requested == OrderStatus::Cancelled {
        return Ok(());
    }
    if !policy.strict_sequential {
        return Ok(());
    }

    // Non-terminal current and non-cancelled target both sit on the
    // forward path, so both indices exist.
    let from = current.sequence_index().unwrap_or(0);
    let to = requested.sequence_index().unwrap_or(0);

    if to < from {
        Err(LifecycleError::Backward {
            from: current,
            to: requested,
        })
    } else if to == from + 1 || override_requested {
        Ok(())
    } else {
        Err(LifecycleError::SkippedAhead {
            from: current,
            to: requested,
        })
    }
}

/// Validate a payment-status transition. No coupling to the fulfillment
/// axis.
pub fn validate_payment_transition(
    current: PaymentStatus,
    requested: PaymentStatus,
) -> Result<(), LifecycleError> {
    use PaymentStatus::*;

    if current.is_terminal() {
        return Err(LifecycleError::PaymentTerminal { current });
    }

    match (current, requested) {
        (Pending, Paid) | (Pending, Failed) | (Failed, Pending) | (Paid, Refunded) => Ok(()),
        (from, to) => Err(LifecycleError::PaymentInvalid { from, to }),
    }
}

// ==================== Tests ====================
