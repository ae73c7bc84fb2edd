// Diagnostics go to stderr so that stdout carries only the rendered tiles.

/// Informational message; only shown with --verbose.
macro_rules! info {
    ($($msg:expr),*) => {
        if crate::config::ARGS.verbose {
            eprintln!("INFO: {}", format!($($msg),*));
        }
    };
}

/// Warning message; always shown.
macro_rules! warn {
    ($($msg:expr),*) => {{
        eprintln!("WARNING: {}", format!($($msg),*));
    }};
}

/// Per-step diagnostics; only shown with --verbose.
macro_rules! verbose_println {
    ($($msg:expr),*) => {
        if crate::config::ARGS.verbose {
            eprintln!($($msg),*);
        }
    };
}

/// Shorthand for building an ErrorKind::General error from a format string.
macro_rules! general_err {
    ($($arg:tt)*) => {
        crate::error::Error::new(crate::error::ErrorKind::General, None, format!($($arg)*).as_str())
    };
}
