//! Decoding of raw command-line tokens into lifecycle commands.
//!
//! Pure functions only: no I/O, no async.

// ── Constants ────────────────────────────────────────────────────────────────

pub const ENSURE_FIREWALL_FLAG: &str = "--ensure-firewall";
pub const INSTALL_SERVICE_FLAG: &str = "--install-service";
pub const REMOVE_SERVICE_FLAG: &str = "--remove-service";

/// Every recognized action flag, in the order they are documented.
pub const ACTION_FLAGS: &[&str] = &[
    ENSURE_FIREWALL_FLAG,
    INSTALL_SERVICE_FLAG,
    REMOVE_SERVICE_FLAG,
];

// ── Command ──────────────────────────────────────────────────────────────────

/// One lifecycle action requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the detector's firewall bootstrap hook.
    EnsureFirewall,
    /// Write the unit definition and reload the service manager.
    Install,
    /// Stop, disable and delete the unit definition.
    Remove,
    /// A token that is not a recognized action flag.
    Invalid(String),
}

impl Command {
    /// Map a single token to a command.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            ENSURE_FIREWALL_FLAG => Self::EnsureFirewall,
            INSTALL_SERVICE_FLAG => Self::Install,
            REMOVE_SERVICE_FLAG => Self::Remove,
            other => Self::Invalid(other.to_string()),
        }
    }

    /// Short name used in progress output and logs.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::EnsureFirewall => "ensure-firewall",
            Self::Install => "install-service",
            Self::Remove => "remove-service",
            Self::Invalid(token) => token,
        }
    }
}

/// Decode raw tokens into commands, left to right.
///
/// Decoding stops at the first unrecognized token, which is kept as the final
/// `Command::Invalid`. Tokens after it are never looked at.
#[must_use]
pub fn decode<S: AsRef<str>>(tokens: &[S]) -> Vec<Command> {
    let mut commands = Vec::with_capacity(tokens.len());
    for token in tokens {
        let command = Command::from_token(token.as_ref());
        let stop = matches!(command, Command::Invalid(_));
        commands.push(command);
        if stop {
            break;
        }
    }
    commands
}
