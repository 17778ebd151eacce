//! Application service — delete a scratch org.

use anyhow::Result;
use sfci_common::DeletedOrg;

use crate::application::ports::{ProgressReporter, ScratchOrgManager};

/// Delete `org_name` without prompting.
///
/// Runs independently of `ensure_scratch_org`; nothing here touches CI
/// variables.
///
/// # Errors
///
/// Returns an error if the `sf` call fails or reports a non-zero status.
pub async fn delete_scratch_org(
    sf: &impl ScratchOrgManager,
    reporter: &impl ProgressReporter,
    org_name: &str,
) -> Result<DeletedOrg> {
    reporter.step(&format!("deleting scratch org {org_name}..."));
    let deleted = sf
        .delete_scratch_org(org_name)
        .await?
        .into_result("sf org delete scratch")?;
    reporter.success(&format!("deleted {org_name} ({})", deleted.username));
    Ok(deleted)
}
