/// Error codes with category prefix
///
/// Categories:
/// - NET: Network connectivity errors
/// - REG: Registry lookups and descriptors
/// - IO: File system operations
/// - PKG: Package manager invocations
/// - CFG: raz-ui.json and tsconfig handling
/// - VAL: Input validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Network errors (NET001-NET099)
    /// Connection failed
    Net001,
    /// Request timeout
    Net002,

    // Registry errors (REG001-REG099)
    /// Component not found
    Reg001,
    /// Unexpected registry response
    Reg002,
    /// Invalid component descriptor
    Reg003,
    /// Registry dependency failed earlier in the same run
    Reg004,

    // I/O errors (IO001-IO099)
    /// File not found
    Io001,
    /// Permission denied
    Io002,
    /// Other write failure
    Io003,
    /// Path escapes the components directory
    Io004,

    // Package manager errors (PKG001-PKG099)
    /// Install command failed
    Pkg001,

    // Config errors (CFG001-CFG099)
    /// Missing or invalid raz-ui.json
    Cfg001,
    /// tsconfig could not be patched
    Cfg002,

    // Validation errors (VAL001-VAL099)
    /// Invalid argument
    Val001,
    /// Not an Angular 19+ workspace
    Val002,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "NET001")
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Net001 => "NET001",
            ErrorCode::Net002 => "NET002",
            ErrorCode::Reg001 => "REG001",
            ErrorCode::Reg002 => "REG002",
            ErrorCode::Reg003 => "REG003",
            ErrorCode::Reg004 => "REG004",
            ErrorCode::Io001 => "IO001",
            ErrorCode::Io002 => "IO002",
            ErrorCode::Io003 => "IO003",
            ErrorCode::Io004 => "IO004",
            ErrorCode::Pkg001 => "PKG001",
            ErrorCode::Cfg001 => "CFG001",
            ErrorCode::Cfg002 => "CFG002",
            ErrorCode::Val001 => "VAL001",
            ErrorCode::Val002 => "VAL002",
        }
    }

    /// Returns the general cause description
    pub fn cause(&self) -> &'static str {
        match self {
            ErrorCode::Net001 => "Unable to reach the component registry",
            ErrorCode::Net002 => "The registry request timed out",
            ErrorCode::Reg001 => "The requested component does not exist in the registry",
            ErrorCode::Reg002 => "The registry returned an unexpected response",
            ErrorCode::Reg003 => "The registry returned a malformed component descriptor",
            ErrorCode::Reg004 => "A component this one depends on could not be installed",
            ErrorCode::Io001 => "The specified file or directory was not found",
            ErrorCode::Io002 => "Permission denied when accessing the file or directory",
            ErrorCode::Io003 => "A file system operation failed",
            ErrorCode::Io004 => "A component file points outside the components directory",
            ErrorCode::Pkg001 => "The package manager failed to install dependencies",
            ErrorCode::Cfg001 => "raz-ui.json is missing or has an invalid format",
            ErrorCode::Cfg002 => "The TypeScript configuration could not be updated",
            ErrorCode::Val001 => "An invalid argument was provided",
            ErrorCode::Val002 => "The directory is not a supported Angular workspace",
        }
    }

    /// Returns remediation steps
    pub fn remediation(&self) -> &'static str {
        match self {
            ErrorCode::Net001 => "1. Check your internet connection\n2. Verify the --registry URL",
            ErrorCode::Net002 => "1. Check your internet connection speed\n2. Try again later",
            ErrorCode::Reg001 => "1. Run 'raz-ui list' to see available components\n2. Check the spelling of the component name",
            ErrorCode::Reg002 => "1. Wait a few minutes and retry\n2. Verify the --registry URL",
            ErrorCode::Reg003 => "1. Report the broken component to the registry maintainers",
            ErrorCode::Reg004 => "1. Fix the failing dependency first, then run 'raz-ui add' again",
            ErrorCode::Io001 => "1. Verify the --cwd path is correct",
            ErrorCode::Io002 => "1. Check file/directory permissions",
            ErrorCode::Io003 => "1. Check free disk space and permissions",
            ErrorCode::Io004 => "1. Report the component to the registry maintainers",
            ErrorCode::Pkg001 => "1. Install the listed packages manually\n2. Re-run with --skip-install",
            ErrorCode::Cfg001 => "1. Run 'raz-ui init' to create raz-ui.json",
            ErrorCode::Cfg002 => "1. Check tsconfig.json syntax\n2. Add the path aliases manually",
            ErrorCode::Val001 => "1. Run with --help for usage",
            ErrorCode::Val002 => "1. Run inside an Angular 19+ workspace or pass --cwd\n2. Update Angular: ng update @angular/core @angular/cli",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
