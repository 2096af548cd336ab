/// How long a transient message stays in the message bar.
pub const MESSAGE_CLEAR_DELAY_MS: u64 = 3000;

/// Event poll interval of the main loop.
pub const POLL_INTERVAL_MS: u64 = 50;

/// Two Ctrl+C presses within this window quit the console.
pub const DOUBLE_CTRL_C_WINDOW_MS: u64 = 1000;
