use shared_types::AppError;

/// Convert a reqwest::Error raised while talking to an upstream into an AppError.
pub fn reqwest_to_app_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::upstream("Title catalog timed out")
    } else if err.is_decode() {
        AppError::upstream(format!("Title catalog sent an unreadable payload: {err}"))
    } else if err.is_builder() {
        AppError::internal(format!("Could not build upstream request: {err}"))
    } else {
        AppError::upstream(format!("Title catalog unreachable: {err}"))
    }
}

/// Extension trait providing `.into_app_error()` on reqwest::Error.
pub trait ReqwestErrorExt {
    fn into_app_error(self) -> AppError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_app_error(self) -> AppError {
        reqwest_to_app_error(self)
    }
}
