//! Layout negotiation between a widget and its host.
//!
//! The host proposes a size per axis as a [`MeasureSpec`]; the widget
//! answers with the size it wants and [`resolve_size`] reconciles the two.
//!
//! | Spec | Result |
//! |------|--------|
//! | `Exactly(n)` | `n`, whatever the widget wants |
//! | `AtMost(n)` | the desired size, capped at `n` |
//! | `Unspecified` | the desired size |

/// Sizing constraint for one axis.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum MeasureSpec {
    /// The host dictates the size.
    Exactly(u32),
    /// The widget may be as large as it wants up to this size.
    AtMost(u32),
    /// No constraint.
    #[default]
    Unspecified,
}

/// Reconcile a desired size with the host's constraint.
#[inline]
pub const fn resolve_size(
    desired: u32,
    spec: MeasureSpec,
) -> u32 {
    match spec {
        MeasureSpec::Exactly(size) => size,
        MeasureSpec::AtMost(limit) => {
            if desired > limit {
                limit
            } else {
                desired
            }
        }
        MeasureSpec::Unspecified => desired,
    }
}
