// Logging shims: forward to `tracing` under the `tracing` feature, compile to nothing otherwise.

#[cfg(feature = "tracing")]
macro_rules! wl_trace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "winlist", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! wl_trace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! wl_debug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "winlist", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! wl_debug {
    ($($tt:tt)*) => {};
}
