//! Certificate directory probing.
//!
//! Responsibilities:
//! - Resolve the `.cert[-<name>]` directory.
//! - Read CA, certificate and key material from their candidate filenames.
//!
//! Does NOT handle:
//! - Validating PEM contents or building a TLS acceptor.
//!
//! Invariants:
//! - The last existing candidate in probe order wins; an unreadable candidate
//!   falls back to the next earlier one.
//! - Missing material is never an error. The bundle is always returned.

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use super::path::PathResolver;
use crate::constants::{CERT_STEM, LOG_TARGET};
use crate::types::{CertBundle, CertRole};

/// Load whatever certificate material exists for `resolver`.
pub fn load_cert(resolver: &PathResolver) -> CertBundle {
    let dir = resolver.resolve(CERT_STEM, None);
    let mut bundle = CertBundle::empty(dir.clone());

    if !dir.is_dir() {
        debug!(target: LOG_TARGET, dir = %dir.display(), "No certificate directory found");
    }

    for role in CertRole::ALL {
        match read_role(&dir, role) {
            Some(contents) => bundle.set(role, contents),
            None => debug!(
                target: LOG_TARGET,
                role = %role,
                dir = %dir.display(),
                "failed to find a {} file for certificate",
                role.description()
            ),
        }
    }

    if !bundle.is_empty() {
        info!(
            target: LOG_TARGET,
            dir = %dir.display(),
            complete = bundle.is_complete(),
            "Loaded certificate material"
        );
    }

    bundle
}

/// Read the winning candidate for `role`, scanning from the last candidate back.
fn read_role(dir: &Path, role: CertRole) -> Option<String> {
    for name in role.candidates().iter().rev() {
        let path = dir.join(name);
        if !path.exists() {
            continue;
        }
        match fs::read_to_string(&path) {
            Ok(contents) => return Some(contents),
            Err(e) => warn!(
                target: LOG_TARGET,
                role = %role,
                path = %path.display(),
                error = %e,
                "Failed to read certificate file, trying next candidate"
            ),
        }
    }
    None
}
