use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

/// Silence warnings for the rest of the process (`--quiet`)
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Print a warning to stderr. stdout is reserved for the outline.
pub fn warn(msg: impl AsRef<str>) {
    if !is_quiet() {
        eprintln!("Warning: {}", msg.as_ref());
    }
}
