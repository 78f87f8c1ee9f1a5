use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;
use tracing::debug;

use crate::models::submission::ResumeFile;

/// Raw application form as posted by the browser, before validation.
#[derive(Debug, Clone, Default)]
pub struct ApplicationForm {
    pub name: String,
    pub email: String,
    pub resume: Option<ResumeFile>,
}

/// A form whose body could not be read to the end, with the parts that
/// arrived before the failure.
#[derive(Debug)]
pub struct UnreadableForm {
    pub partial: ApplicationForm,
    pub source: MultipartError,
}

impl UnreadableForm {
    /// The body ran past the upload limit.
    pub fn is_too_large(&self) -> bool {
        self.source.status() == StatusCode::PAYLOAD_TOO_LARGE
    }
}

/// Reads the `name`, `email` and `resume` parts of the application form.
///
/// Browsers send an empty, nameless file part when no file was chosen; that
/// is treated as no resume at all. Unknown parts are skipped.
pub async fn read_application_form(
    mut multipart: Multipart,
) -> Result<ApplicationForm, UnreadableForm> {
    let mut form = ApplicationForm::default();
    match read_fields(&mut multipart, &mut form).await {
        Ok(()) => Ok(form),
        Err(source) => Err(UnreadableForm {
            partial: form,
            source,
        }),
    }
}

async fn read_fields(
    multipart: &mut Multipart,
    form: &mut ApplicationForm,
) -> Result<(), MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().map(str::to_owned);
        match field_name.as_deref() {
            Some("name") => form.name = field.text().await?,
            Some("email") => form.email = field.text().await?,
            Some("resume") => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                if bytes.is_empty() {
                    continue;
                }
                form.resume = Some(ResumeFile {
                    file_name: if file_name.is_empty() {
                        "resume.pdf".to_string()
                    } else {
                        file_name
                    },
                    content_type,
                    bytes,
                });
            }
            other => debug!("Ignoring unexpected form field {other:?}"),
        }
    }

    Ok(())
}
