use mandi_core::{Capability, MandiError};

/// Join a collection of tasks and apply an optional request-level deadline.
///
/// This wraps `futures::future::join_all(tasks)` with the orchestrator's deadline
/// helper. On timeout it returns `MandiError::RequestTimeout("request")`, which
/// call sites can remap to a more specific capability label as needed.
///
/// # Errors
/// Returns `RequestTimeout` if `deadline` elapses before every task completes.
pub async fn join_with_deadline<I, F, T>(
    tasks: I,
    deadline: Option<std::time::Duration>,
) -> Result<Vec<T>, MandiError>
where
    I: IntoIterator<Item = F>,
    F: core::future::Future<Output = T>,
{
    crate::core::with_request_deadline(deadline, futures::future::join_all(tasks)).await
}

/// Collapse a set of provider errors into a uniform `MandiError` outcome.
///
/// Rules:
/// - If `attempted_any` is false → `Unsupported(capability)`.
/// - If all errors are `ProviderTimeout` → `AllProvidersTimedOut(capability)`.
/// - If `not_found_what` is `Some` and all errors are `NotFound` → `NotFound(what)`.
/// - Else → `AllProvidersFailed(errors)`.
#[must_use]
pub fn collapse_errors(
    capability: Capability,
    attempted_any: bool,
    errors: Vec<MandiError>,
    not_found_what: Option<String>,
) -> MandiError {
    if !attempted_any {
        return MandiError::unsupported(capability.to_string());
    }
    if !errors.is_empty()
        && errors
            .iter()
            .all(|e| matches!(e, MandiError::ProviderTimeout { .. }))
    {
        return MandiError::AllProvidersTimedOut {
            capability: capability.to_string(),
        };
    }
    if let Some(what) = not_found_what
        && !errors.is_empty()
        && errors
            .iter()
            .all(|e| matches!(e, MandiError::NotFound { .. }))
    {
        return MandiError::not_found(what);
    }
    MandiError::AllProvidersFailed(errors)
}
