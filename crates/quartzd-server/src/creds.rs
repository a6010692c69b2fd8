//! Kerberos credential lifecycle wrappers.
//!
//! Thin wrappers around the Kerberos CLI tools. Both helpers surface a
//! non-zero exit status as a domain error carrying the tool's stderr; the
//! failure is logged at debug before being returned, matching the audit
//! behavior of the surrounding service.

use std::path::Path;
use std::process::Command;

use tracing::{debug, instrument};

use crate::error::{ServerError, ServerResult};

/// Requests a Kerberos TGT with the given keytab and principal.
#[instrument]
pub fn krb_init_keytab(keytab: &Path, principal: &str) -> ServerResult<()> {
    let output = Command::new("kinit")
        .arg("-kt")
        .arg(keytab)
        .arg(principal)
        .output()?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        debug!(%principal, %stderr, "kerberos initialization with keytab failed");
        return Err(ServerError::CredentialInit { stderr });
    }
    Ok(())
}

/// Deletes the Kerberos TGT held in the given credential cache file.
#[instrument]
pub fn krb_destroy(cache_file: &Path) -> ServerResult<()> {
    let output = Command::new("kdestroy").arg("-c").arg(cache_file).output()?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        debug!(cache_file = %cache_file.display(), %stderr, "kerberos destruction failed");
        return Err(ServerError::CredentialDestroy { stderr });
    }
    Ok(())
}
