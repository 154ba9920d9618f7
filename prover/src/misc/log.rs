/*!
Miscellaneous items related to [logging](log).

Calls to the [log] macros are made throughout the library, at unification decisions and resolution
attempts. These are diagnostic only, and are entirely distinct from the proof trace returned by
[`crate::context::Context::prove`] — the trace is the program's primary data output and is tested
directly; the log calls exist to help a reader of the source understand *why* the engine took the
path it did, and no log implementation is bundled (wire up [env_logger](https://docs.rs/env_logger)
or similar to see them).
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [unification](crate::unify)
    pub const UNIFY: &str = "unify";

    /// Logs related to the [resolver](crate::resolution)
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to the [saturation driver](crate::context)
    pub const SATURATION: &str = "saturation";
}
