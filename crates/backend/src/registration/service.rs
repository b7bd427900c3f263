use axum::extract::multipart::{Multipart, MultipartError};
use contracts::registration::{FieldValue, FormSubmission};

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("malformed multipart body: {0}")]
    Multipart(#[from] MultipartError),
}

/// Read a multipart registration body into a submission.
///
/// Parts with a file name are kept as file metadata; their content is
/// dropped after it has been measured.
pub async fn read_submission(multipart: &mut Multipart) -> Result<FormSubmission, ReadError> {
    let mut submission = FormSubmission::new();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_owned) else {
            tracing::warn!("Skipping multipart part without a name");
            continue;
        };

        match field.file_name().map(str::to_owned) {
            Some(file_name) => {
                let content_type = field.content_type().map(str::to_owned);
                let size = field.bytes().await?.len();
                submission.append(
                    name,
                    FieldValue::File {
                        file_name,
                        content_type,
                        size,
                    },
                );
            }
            None => {
                let text = field.text().await?;
                submission.append(name, text);
            }
        }
    }

    Ok(submission)
}
