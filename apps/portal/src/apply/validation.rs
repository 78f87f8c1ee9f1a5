use crate::apply::form::ApplicationForm;
use crate::models::job::JobId;
use crate::models::submission::ApplicationSubmission;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Email is invalid";
pub const RESUME_REQUIRED: &str = "Resume is required";
pub const RESUME_NOT_PDF: &str = "Resume must be a PDF file";
pub const RESUME_TOO_LARGE: &str = "Resume file is too large";

/// Inline messages for the application form, one slot per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub resume: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.resume.is_none()
    }
}

/// A form that failed validation, kept so the page can be re-rendered.
#[derive(Debug)]
pub struct Invalid {
    pub form: ApplicationForm,
    pub errors: FieldErrors,
}

/// Checks every field in one pass so all problems are reported together.
pub fn validate_application(form: &ApplicationForm) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if form.name.trim().is_empty() {
        errors.name = Some(NAME_REQUIRED);
    }

    let email = form.email.trim();
    if email.is_empty() {
        errors.email = Some(EMAIL_REQUIRED);
    } else if !looks_like_email(email) {
        errors.email = Some(EMAIL_INVALID);
    }

    match &form.resume {
        None => errors.resume = Some(RESUME_REQUIRED),
        Some(resume) if !resume.is_pdf() => errors.resume = Some(RESUME_NOT_PDF),
        Some(_) => {}
    }

    errors
}

/// Validates the form and, when it passes, builds the payload for the backend.
/// Name and email are sent trimmed.
pub fn into_submission(
    form: ApplicationForm,
    job_id: JobId,
) -> Result<ApplicationSubmission, Invalid> {
    let errors = validate_application(&form);
    match form.resume {
        Some(resume) if errors.is_empty() => Ok(ApplicationSubmission {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            job_id,
            resume,
        }),
        _ => Err(Invalid {
            form: ApplicationForm {
                name: form.name,
                email: form.email,
                resume: None,
            },
            errors,
        }),
    }
}

/// True when `value` contains a `local@domain.tld` shaped run: non-space
/// characters, `@`, then a non-space run holding a dot with text on both sides.
pub fn looks_like_email(value: &str) -> bool {
    value
        .char_indices()
        .filter(|&(_, c)| c == '@')
        .any(|(at, _)| {
            let has_local = value[..at]
                .chars()
                .next_back()
                .is_some_and(|c| !c.is_whitespace());
            let domain = value[at + 1..]
                .split(char::is_whitespace)
                .next()
                .unwrap_or_default();
            has_local
                && domain
                    .char_indices()
                    .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    use crate::models::submission::ResumeFile;

    fn resume(content_type: &str) -> ResumeFile {
        ResumeFile {
            file_name: "cv.pdf".into(),
            content_type: content_type.into(),
            bytes: Bytes::from_static(b"%PDF-1.7"),
        }
    }

    fn form(name: &str, email: &str, resume: Option<ResumeFile>) -> ApplicationForm {
        ApplicationForm {
            name: name.into(),
            email: email.into(),
            resume,
        }
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        let errors = validate_application(&form("Ada", "a@b.com", Some(resume("application/pdf"))));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_blank_name_is_required() {
        let errors = validate_application(&form("   ", "a@b.com", Some(resume("application/pdf"))));
        assert_eq!(errors.name, Some(NAME_REQUIRED));
        assert!(errors.email.is_none());
    }

    #[test]
    fn test_missing_email_is_required() {
        let errors = validate_application(&form("Ada", " ", Some(resume("application/pdf"))));
        assert_eq!(errors.email, Some(EMAIL_REQUIRED));
    }

    #[test]
    fn test_malformed_email_is_invalid() {
        let errors = validate_application(&form("Ada", "not-an-email", Some(resume("application/pdf"))));
        assert_eq!(errors.email, Some(EMAIL_INVALID));
    }

    #[test]
    fn test_non_pdf_resume_is_rejected() {
        let errors = validate_application(&form("Ada", "a@b.com", Some(resume("image/png"))));
        assert_eq!(errors.resume, Some(RESUME_NOT_PDF));
    }

    #[test]
    fn test_missing_resume_is_required() {
        let errors = validate_application(&form("Ada", "a@b.com", None));
        assert_eq!(errors.resume, Some(RESUME_REQUIRED));
    }

    #[test]
    fn test_all_errors_reported_together() {
        let errors = validate_application(&form("", "nope", None));
        assert_eq!(
            errors,
            FieldErrors {
                name: Some(NAME_REQUIRED),
                email: Some(EMAIL_INVALID),
                resume: Some(RESUME_REQUIRED),
            }
        );
    }

    #[test]
    fn test_email_shapes() {
        for ok in ["a@b.com", "first.last@mail.example.org", "x y@z.io", "a@b.c"] {
            assert!(looks_like_email(ok), "rejected {ok:?}");
        }
        for bad in ["not-an-email", "@b.com", "a@.com", "a@com", "a@b.", "a @b.com", "a@ b.com"] {
            assert!(!looks_like_email(bad), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_into_submission_trims_fields() {
        let job_id: JobId = "4".parse().unwrap();
        let submission = into_submission(
            form("  Ada Lovelace ", " ada@example.com ", Some(resume("application/pdf"))),
            job_id,
        )
        .unwrap();
        assert_eq!(submission.name, "Ada Lovelace");
        assert_eq!(submission.email, "ada@example.com");
        assert_eq!(submission.job_id, job_id);
    }

    #[test]
    fn test_into_submission_keeps_entered_text_on_failure() {
        let job_id: JobId = "4".parse().unwrap();
        let invalid = into_submission(form("Ada", "not-an-email", None), job_id).unwrap_err();
        assert_eq!(invalid.form.name, "Ada");
        assert_eq!(invalid.form.email, "not-an-email");
        assert_eq!(invalid.errors.resume, Some(RESUME_REQUIRED));
    }
}
