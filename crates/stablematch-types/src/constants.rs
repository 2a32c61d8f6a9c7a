//! System-wide constants for stablematch.

/// Extension of preference input files.
pub const INPUT_EXTENSION: &str = "in";

/// Extension of matching output files.
pub const OUTPUT_EXTENSION: &str = "out";

/// Input file name expected by verify mode.
pub const VERIFY_INPUT_FILE: &str = "verify.in";

/// Matching file name expected by verify mode.
pub const VERIFY_OUTPUT_FILE: &str = "verify.out";

/// Default `tracing` filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Decimal places used when reporting the matcher's wall time.
pub const RUNTIME_PRECISION: usize = 6;

/// Width of the separator rule printed between inputs in `both` mode.
pub const SEPARATOR_WIDTH: usize = 60;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "stablematch";
