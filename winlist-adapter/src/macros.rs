#[cfg(feature = "tracing")]
macro_rules! wa_trace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "winlist_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! wa_trace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! wa_debug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "winlist_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! wa_debug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! wa_warn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "winlist_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! wa_warn {
    ($($tt:tt)*) => {};
}
