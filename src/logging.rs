// Compiled to nothing unless `verbose-logging` is enabled, so the
// transform stays free of formatting code on small targets.

#[cfg(feature = "verbose-logging")]
macro_rules! fft_trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

#[cfg(not(feature = "verbose-logging"))]
macro_rules! fft_trace {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "verbose-logging")]
macro_rules! fft_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "verbose-logging"))]
macro_rules! fft_debug {
    ($($arg:tt)*) => {};
}
