use alloc::sync::Arc;

/// Notified with the requested value when a controlled state wants to change.
pub type ChangeCallback<S> = Arc<dyn Fn(S) + Send + Sync>;

/// A piece of state that is either owned locally or delegated to the caller.
///
/// The mode is chosen at construction and never switches:
/// - `Owned`: [`Controllable::request`] stores the new value.
/// - `Controlled`: [`Controllable::request`] only forwards the value to `on_change`; the caller
///   decides whether to accept it and writes it back with [`Controllable::sync`].
pub enum Controllable<S> {
    Owned(S),
    Controlled { value: S, on_change: ChangeCallback<S> },
}

impl<S: Clone + PartialEq> Controllable<S> {
    pub fn owned(initial: S) -> Self {
        Self::Owned(initial)
    }

    pub fn controlled(value: S, on_change: impl Fn(S) + Send + Sync + 'static) -> Self {
        Self::Controlled {
            value,
            on_change: Arc::new(on_change),
        }
    }

    pub fn get(&self) -> &S {
        match self {
            Self::Owned(value) | Self::Controlled { value, .. } => value,
        }
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self, Self::Controlled { .. })
    }

    /// Asks for a new value.
    ///
    /// Returns `true` when the stored value changed, which only happens in owned mode. Requests
    /// equal to the current value are dropped in both modes.
    pub fn request(&mut self, next: S) -> bool {
        match self {
            Self::Owned(value) => {
                if *value == next {
                    return false;
                }
                *value = next;
                true
            }
            Self::Controlled { value, on_change } => {
                if *value != next {
                    on_change(next);
                }
                false
            }
        }
    }

    /// Writes an authoritative value, bypassing `on_change`.
    ///
    /// In controlled mode this is how the caller hands back the value it accepted.
    pub fn sync(&mut self, next: S) -> bool {
        let value = match self {
            Self::Owned(value) | Self::Controlled { value, .. } => value,
        };
        if *value == next {
            return false;
        }
        *value = next;
        true
    }
}

impl<S: Clone> Clone for Controllable<S> {
    fn clone(&self) -> Self {
        match self {
            Self::Owned(value) => Self::Owned(value.clone()),
            Self::Controlled { value, on_change } => Self::Controlled {
                value: value.clone(),
                on_change: Arc::clone(on_change),
            },
        }
    }
}

impl<S: core::fmt::Debug> core::fmt::Debug for Controllable<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Owned(value) => f.debug_tuple("Owned").field(value).finish(),
            Self::Controlled { value, .. } => f
                .debug_struct("Controlled")
                .field("value", value)
                .finish_non_exhaustive(),
        }
    }
}
