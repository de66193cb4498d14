//! Form-level input checks run before anything is sent to the backend.
//!
//! Each validator returns the message to show next to the field.

/// Shortest username the backend accepts.
pub const MIN_USERNAME_LEN: usize = 3;

pub fn validate_username(username: &str) -> Result<(), String> {
    let trimmed = username.trim();
    if trimmed.is_empty() {
        return Err("Username is required".to_string());
    }
    if trimmed.chars().count() < MIN_USERNAME_LEN {
        return Err(format!(
            "Username must be at least {MIN_USERNAME_LEN} characters"
        ));
    }
    Ok(())
}

pub fn validate_movie_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Movie title is required".to_string());
    }
    Ok(())
}

/// `validator` adapters so request DTOs can run the rules above.
#[cfg(feature = "validation")]
pub fn username_rule(username: &str) -> Result<(), validator::ValidationError> {
    validate_username(username).map_err(to_validation_error("username"))
}

#[cfg(feature = "validation")]
pub fn movie_title_rule(title: &str) -> Result<(), validator::ValidationError> {
    validate_movie_title(title).map_err(to_validation_error("movie_title"))
}

#[cfg(feature = "validation")]
fn to_validation_error(code: &'static str) -> impl Fn(String) -> validator::ValidationError {
    move |message| validator::ValidationError::new(code).with_message(message.into())
}
