//! Resolves a web id candidate to one the platform reports as free.

use chrono::Utc;
use log::{info, warn};

use crate::upstream::{ApiError, BuildezApi};

pub const FIRST_SUFFIX: u32 = 2;
pub const LAST_SUFFIX: u32 = 99;

/// Find a free web id derived from `base`.
///
/// Tries `base`, then `base-2` through `base-99`. When every candidate is
/// taken or a check fails, returns `base-<last 6 digits of epoch millis>`
/// without verifying it. Never fails.
pub async fn resolve_available_web_id<A>(api: &A, base: &str) -> String
where
    A: BuildezApi + ?Sized,
{
    match probe_candidates(api, base).await {
        Ok(Some(web_id)) => web_id,
        Ok(None) => {
            info!("web id '{base}' and suffixes {FIRST_SUFFIX}..={LAST_SUFFIX} are taken");
            timestamp_web_id(base)
        }
        Err(err) => {
            warn!("web id availability check failed, using fallback: {err}");
            timestamp_web_id(base)
        }
    }
}

async fn probe_candidates<A>(api: &A, base: &str) -> Result<Option<String>, ApiError>
where
    A: BuildezApi + ?Sized,
{
    if api.check_web_id(base).await? {
        return Ok(Some(base.to_string()));
    }

    for suffix in FIRST_SUFFIX..=LAST_SUFFIX {
        let candidate = format!("{base}-{suffix}");
        if api.check_web_id(&candidate).await? {
            return Ok(Some(candidate));
        }
    }

    Ok(None)
}

pub fn timestamp_web_id(base: &str) -> String {
    let millis = Utc::now().timestamp_millis().to_string();
    let tail = &millis[millis.len().saturating_sub(6)..];
    format!("{base}-{tail}")
}
