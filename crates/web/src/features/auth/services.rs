use storage::{models::Participant, roster::Roster};

use crate::error::{WebError, WebResult};

/// Checks an email/password pair against the roster.
///
/// Unknown email, wrong password and a role that may not log in all fail
/// with [`WebError::Unauthorized`] so callers cannot tell them apart.
pub async fn authenticate<'a>(
    roster: &'a Roster,
    email: &str,
    password: &str,
) -> WebResult<&'a Participant> {
    let Some(participant) = roster.find_by_email(email) else {
        tracing::warn!("Login attempt for unknown email");
        return Err(WebError::Unauthorized);
    };

    if !verify_password(password, &participant.password_hash).await? {
        tracing::warn!(participant_id = participant.id, "Login attempt with wrong password");
        return Err(WebError::Unauthorized);
    }

    if !participant.can_log_in() {
        tracing::warn!(participant_id = participant.id, "Login attempt by ineligible role");
        return Err(WebError::Unauthorized);
    }

    Ok(participant)
}

/// bcrypt verification off the async runtime.
pub async fn verify_password(password: &str, hash: &str) -> WebResult<bool> {
    let password = password.to_owned();
    let hash = hash.to_owned();

    let outcome = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| WebError::InternalServerError(format!("password check panicked: {}", e)))?;

    match outcome {
        Ok(valid) => Ok(valid),
        Err(e) => {
            tracing::warn!(error = %e, "Stored password hash is unreadable");
            Ok(false)
        }
    }
}
