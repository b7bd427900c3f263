use axum::{extract::Multipart, http::StatusCode, Json};
use contracts::registration::RegistrationAck;

use crate::registration::service;

/// POST /api/register
///
/// Accepts the registration form as sent by the page. Nothing is validated
/// or stored; the submission is logged and acknowledged.
pub async fn register(
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<RegistrationAck>), StatusCode> {
    let submission = service::read_submission(&mut multipart)
        .await
        .map_err(|e| {
            tracing::error!("Failed to read registration: {}", e);
            StatusCode::BAD_REQUEST
        })?;

    if submission.is_empty() {
        tracing::warn!("Registration without any fields");
    }

    let ack = RegistrationAck::for_submission(&submission);

    // Field names only: values include the password.
    let names: Vec<&str> = submission.names().collect();
    tracing::info!(
        id = %ack.id,
        fields = ?names,
        invite = ?ack.invite,
        "Registration received"
    );

    Ok((StatusCode::ACCEPTED, Json(ack)))
}
