use keysmith_common::params::SubjectSpec;
use keysmith_issuer::IssuedKeys;
use tracing::Instrument;

use crate::{context::ApiContext, error::ApiError};

pub mod form;
pub mod keys;


pub async fn health_check() -> &'static str {
    "Healthy"
}

/// Run one issuance on the blocking pool.
///
/// Waits for a free issuance slot first. The slot is released only when the
/// issuance itself finishes, even if the deadline fires before that.
pub(crate) async fn run_issuance(
    ctx: &ApiContext,
    subject: SubjectSpec,
) -> Result<IssuedKeys, ApiError> {
    let permits = ctx.issuance_permits.clone();
    let issuer = ctx.issuer.clone();
    let deadline = ctx.issue_timeout;

    let work = async move {
        let permit = permits
            .acquire_owned()
            .await
            .map_err(|_| ApiError::service_unavailable("issuance slots are closed"))?;

        let span = tracing::Span::current();
        let issued = tokio::task::spawn_blocking(move || {
            let _permit = permit;
            span.in_scope(|| issuer.issue(&subject))
        })
        .await
        .map_err(|e| anyhow::anyhow!("Issuance task failed: {e}"))??;

        Ok::<_, ApiError>(issued)
    };

    tokio::time::timeout(deadline, work.in_current_span())
        .await
        .map_err(|_| ApiError::Timeout(deadline))?
}
