use libc::{signal, sighandler_t, SIGINT};

pub extern "C" fn ignore_sigint(_: i32) {
    // Do nothing, let the child process handle the signal
}

/// While a stored command runs, Ctrl-C belongs to the child.
pub fn install_sigint_passthrough() {
    unsafe {
        signal(SIGINT, ignore_sigint as sighandler_t);
    }
}
