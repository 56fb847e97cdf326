//! Form relay client. Submissions go out as a multipart POST carrying the
//! relay's access key; any 2xx answer counts as delivered.

use async_trait::async_trait;
use reqwest::multipart;

use crate::config::RelayConfig;
use crate::forms::FormSubmission;

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("relay answered {status}")]
    Rejected { status: u16 },
}

/// Where form submissions are delivered
#[async_trait(?Send)]
pub trait FormRelay {
    async fn send(&self, submission: &FormSubmission) -> Result<(), RelayError>;
}

pub struct HttpRelay {
    client: reqwest::Client,
    endpoint: String,
    access_key: String,
}

impl HttpRelay {
    pub fn new(config: &RelayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            access_key: config.access_key.clone(),
        }
    }

    /// Name/value pairs of the multipart body, in send order
    pub fn payload(&self, submission: &FormSubmission) -> Vec<(String, String)> {
        let mut parts = vec![("access_key".to_string(), self.access_key.clone())];
        if submission.field("subject").is_none() {
            parts.push(("subject".to_string(), submission.kind.relay_subject().to_string()));
        }
        parts.extend(submission.fields.iter().cloned());
        if !submission.services.is_empty() {
            parts.push(("services".to_string(), submission.services.join(", ")));
        }
        parts
    }
}

#[async_trait(?Send)]
impl FormRelay for HttpRelay {
    async fn send(&self, submission: &FormSubmission) -> Result<(), RelayError> {
        let form = self
            .payload(submission)
            .into_iter()
            .fold(multipart::Form::new(), |form, (name, value)| form.text(name, value));

        let response = self.client.post(&self.endpoint).multipart(form).send().await?;
        let status = response.status();
        log::debug!("relay answered {}", status);
        if status.is_success() {
            Ok(())
        } else {
            Err(RelayError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::FormKind;

    fn relay() -> HttpRelay {
        HttpRelay::new(&RelayConfig {
            endpoint: "https://relay.invalid/submit".to_string(),
            access_key: "k-123".to_string(),
        })
    }

    #[test]
    fn test_payload_starts_with_access_key() {
        let submission = FormSubmission {
            kind: FormKind::Quote,
            fields: vec![("name".to_string(), "Ravi".to_string())],
            services: vec!["animation".to_string(), "music".to_string()],
        };
        let parts = relay().payload(&submission);
        assert_eq!(parts[0], ("access_key".to_string(), "k-123".to_string()));
        assert!(parts.contains(&("subject".to_string(), "New quote request".to_string())));
        assert_eq!(
            parts.last(),
            Some(&("services".to_string(), "animation, music".to_string()))
        );
    }

    #[test]
    fn test_contact_subject_is_not_duplicated() {
        let submission = FormSubmission {
            kind: FormKind::Contact,
            fields: vec![("subject".to_string(), "Hello".to_string())],
            services: Vec::new(),
        };
        let parts = relay().payload(&submission);
        assert_eq!(parts.iter().filter(|(n, _)| n == "subject").count(), 1);
        assert!(!parts.iter().any(|(n, _)| n == "services"));
    }
}
