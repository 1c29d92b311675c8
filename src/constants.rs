//! Constants used throughout ebrick

/// Version of the generator embedded into every manifest it writes.
pub const EBRICK_VERSION: &str = "v0.3.2";

/// Manifest file describing a scaffolded application.
pub const MANIFEST_FILENAME: &str = ".ebrick.yaml";

/// Top-level folders every generated application gets.
pub const BASE_FOLDERS: &[&str] = &["cmd", "modules", "internal", "pkg"];

/// Separator used when modules are entered on a single line.
pub const MODULE_SEPARATOR: char = ',';

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
