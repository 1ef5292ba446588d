//! systemd unit definition for the detector service.
//!
//! Rendering is pure and deterministic: the same layout always produces the
//! same bytes, which is what makes install idempotent.

use std::fmt::Write as _;

use sha2::{Digest, Sha256};

use crate::domain::layout::ServiceLayout;

pub const UNIT_DESCRIPTION: &str = "Mini SIEM SSH brute-force detector";
pub const AFTER_TARGET: &str = "network.target";
pub const WANTED_BY_TARGET: &str = "multi-user.target";
/// Firewall and ipset changes need root.
pub const RUN_AS_USER: &str = "root";
pub const RESTART_POLICY: &str = "always";
pub const RESTART_SEC: u32 = 3;

/// Fixed-shape unit record. Only the paths come from the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitDefinition {
    pub description: String,
    pub after: String,
    pub working_directory: String,
    pub exec_start: String,
    pub syslog_identifier: String,
    pub user: String,
    pub restart: String,
    pub restart_sec: u32,
    pub wanted_by: String,
}

impl UnitDefinition {
    #[must_use]
    pub fn for_layout(layout: &ServiceLayout) -> Self {
        let exec_start = std::iter::once(layout.runtime().display().to_string())
            .chain(layout.detector_args())
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            description: UNIT_DESCRIPTION.to_string(),
            after: AFTER_TARGET.to_string(),
            working_directory: layout.project_dir().display().to_string(),
            exec_start,
            syslog_identifier: layout.service_name().to_string(),
            user: RUN_AS_USER.to_string(),
            restart: RESTART_POLICY.to_string(),
            restart_sec: RESTART_SEC,
            wanted_by: WANTED_BY_TARGET.to_string(),
        }
    }

    /// Render as unit-file text, ending with a newline.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = write!(
            out,
            "[Unit]\n\
             Description={}\n\
             After={}\n\
             \n\
             [Service]\n\
             Type=simple\n\
             WorkingDirectory={}\n\
             ExecStart={}\n\
             SyslogIdentifier={}\n\
             User={}\n\
             Restart={}\n\
             RestartSec={}\n\
             \n\
             [Install]\n\
             WantedBy={}\n",
            self.description,
            self.after,
            self.working_directory,
            self.exec_start,
            self.syslog_identifier,
            self.user,
            self.restart,
            self.restart_sec,
            self.wanted_by,
        );
        out
    }
}

/// SHA-256 of unit content as lowercase hex.
#[must_use]
pub fn content_digest(content: &str) -> String {
    hex_encode(&Sha256::digest(content.as_bytes()))
}

/// Lowercase hex encoding.
#[must_use]
pub fn hex_encode(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}
