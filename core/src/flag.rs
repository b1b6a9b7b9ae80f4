//! Selection of the echo-count argument passed to `ping`.

use std::fmt;

/// The command-line flag that limits how many echo requests `ping` sends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EchoCountFlag {
    /// `-n`, used by the Windows family.
    Windows,
    /// `-c`, used by every POSIX-like system.
    Posix,
}

impl EchoCountFlag {
    /// Picks the flag for an operating system name as reported by
    /// [`std::env::consts::OS`].
    pub fn for_os(os: &str) -> Self {
        if os.eq_ignore_ascii_case("windows") {
            EchoCountFlag::Windows
        } else {
            EchoCountFlag::Posix
        }
    }

    /// The flag for the operating system this binary runs on.
    pub fn host() -> Self {
        Self::for_os(std::env::consts::OS)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EchoCountFlag::Windows => "-n",
            EchoCountFlag::Posix => "-c",
        }
    }
}

impl fmt::Display for EchoCountFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
