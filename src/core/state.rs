//! Core State trait for state machine states.
//!
//! States are opaque identifiers. The only things a machine needs from them
//! are a total order (the transition table is sorted by it) and a name for
//! diagnostics.

use std::borrow::Cow;
use std::fmt::Debug;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: the machine keeps its own copy of the current state
/// - `Ord`: transition edges are kept sorted by `(from, to)`
/// - `Debug`: states must be debuggable for diagnostics
/// - `Send` + `Sync`: a finished transition table may be read from many threads
///
/// # Example
///
/// ```rust
/// use fsm_blueprint::core::State;
/// use std::borrow::Cow;
///
/// #[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
/// enum TaskState {
///     Pending,
///     Running,
///     Complete,
/// }
///
/// impl State for TaskState {
///     fn name(&self) -> Cow<'_, str> {
///         match self {
///             Self::Pending => "Pending".into(),
///             Self::Running => "Running".into(),
///             Self::Complete => "Complete".into(),
///         }
///     }
/// }
///
/// assert_eq!(TaskState::Running.name(), "Running");
/// ```
pub trait State: Clone + Ord + Debug + Send + Sync {
    /// Get the state's name for display/logging.
    fn name(&self) -> Cow<'_, str>;
}

impl State for String {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl State for &'static str {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(*self)
    }
}

macro_rules! impl_state_for_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl State for $ty {
                fn name(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

impl_state_for_display!(char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
