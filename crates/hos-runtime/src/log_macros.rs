/// Domain-aware logging macros.
///
/// Each macro injects a `domain` field so log consumers can filter by area:
/// `sys` (process lifecycle), `conf` (configuration), `src` (event sources),
/// `eval` (compliance evaluation).
///
/// ```ignore
/// hos_info!(eval, driver = %id, violations = 0, "snapshot evaluated");
/// hos_warn!(src, line = n, "skipping blank record");
/// ```
///
/// The domain is a bare identifier, converted to a string literal.

#[doc(hidden)]
macro_rules! hos_log {
    ($level:ident, $domain:ident, $($field:tt)*) => {
        tracing::$level!(domain = stringify!($domain), $($field)*)
    };
}

macro_rules! hos_error {
    ($domain:ident, $($rest:tt)*) => {
        hos_log!(error, $domain, $($rest)*)
    };
}

macro_rules! hos_warn {
    ($domain:ident, $($rest:tt)*) => {
        hos_log!(warn, $domain, $($rest)*)
    };
}

macro_rules! hos_info {
    ($domain:ident, $($rest:tt)*) => {
        hos_log!(info, $domain, $($rest)*)
    };
}

macro_rules! hos_debug {
    ($domain:ident, $($rest:tt)*) => {
        hos_log!(debug, $domain, $($rest)*)
    };
}
