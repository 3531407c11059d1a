//! # Registration — upload, validate, persist
//!
//! [`Registration`] runs one form submission as a strictly sequential task:
//!
//! ```text
//! Idle ──image?──▶ Uploading ──ok──▶ Validating ──ok──▶ Persisting ──▶ Complete
//!                      │                  │
//!                      └──err──▶ Failed ◀─┘
//! ```
//!
//! Each stage returns its own typed result ([`Uploaded`], [`Validated`]) so a
//! later stage can only run with the output of the one before it. A submission
//! without an image never leaves `Idle`; the caller gets
//! [`RegistrationOutcome::NotStarted`] and nothing is shown to the user.
//!
//! Nothing is written to the session store unless every stage before
//! `Persisting` succeeded. `Failed` is terminal for the submission; the next
//! call to [`Registration::submit`] starts again from `Idle`.
//!
//! The orchestrator does not render or navigate. The caller maps the returned
//! [`RegistrationOutcome`] to a toast ([`RegistrationOutcome::notice`]), an
//! inline field message ([`RegistrationOutcome::password_error`]), and a route
//! change ([`RegistrationOutcome::is_complete`]).

use store::{KeyValueStore, SessionStore, UserRecord};

use crate::auth::{validate_password, PASSWORD_POLICY_MESSAGE};
use crate::upload::{ImageFile, ImageHost, UploadError};

/// Toast shown once the account is stored.
pub const REGISTERED_NOTICE: &str = "Account created successfully!";
/// Toast shown when the image upload fails.
pub const RETRY_NOTICE: &str = "Please try again!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistrationState {
    Idle,
    Uploading,
    Validating,
    Persisting,
    Complete,
    Failed,
}

/// Raw text fields of the registration form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("image upload failed: {0}")]
    Upload(#[from] UploadError),
    #[error("{}", PASSWORD_POLICY_MESSAGE)]
    WeakPassword,
}

impl RegistrationError {
    /// Text shown to the user for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Upload(_) => RETRY_NOTICE,
            Self::WeakPassword => PASSWORD_POLICY_MESSAGE,
        }
    }
}

/// Output of the `Uploading` stage.
#[derive(Debug)]
pub struct Uploaded {
    pub photo: String,
    pub form: RegistrationForm,
}

/// Output of the `Validating` stage: a record ready to persist.
#[derive(Debug)]
pub struct Validated {
    pub record: UserRecord,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A transient notification for the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug)]
pub enum RegistrationOutcome {
    /// No image was selected; the flow never started.
    NotStarted,
    Complete(UserRecord),
    Failed(RegistrationError),
}

impl RegistrationOutcome {
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// Toast to show for this outcome, if any.
    ///
    /// Password failures are reported inline instead.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            Self::Complete(_) => Some(Notice::success(REGISTERED_NOTICE)),
            Self::Failed(err @ RegistrationError::Upload(_)) => {
                Some(Notice::error(err.user_message()))
            }
            Self::Failed(RegistrationError::WeakPassword) | Self::NotStarted => None,
        }
    }

    /// New value for the inline password message.
    ///
    /// `Some(Some(msg))` sets it, `Some(None)` clears it, and `None` leaves
    /// whatever was shown before. The message is only touched once the
    /// password has actually been checked.
    pub fn password_error(&self) -> Option<Option<&'static str>> {
        match self {
            Self::Complete(_) => Some(None),
            Self::Failed(RegistrationError::WeakPassword) => Some(Some(PASSWORD_POLICY_MESSAGE)),
            Self::Failed(RegistrationError::Upload(_)) | Self::NotStarted => None,
        }
    }
}

/// Runs registration submissions against an image host and a session store.
pub struct Registration<H: ImageHost, S: KeyValueStore> {
    host: H,
    session: SessionStore<S>,
    state: RegistrationState,
}

impl<H: ImageHost, S: KeyValueStore> Registration<H, S> {
    pub fn new(host: H, session: SessionStore<S>) -> Self {
        Self {
            host,
            session,
            state: RegistrationState::Idle,
        }
    }

    /// State reached by the most recent submission.
    pub fn state(&self) -> RegistrationState {
        self.state
    }

    /// Handle one form submission.
    pub async fn submit(
        &mut self,
        image: Option<ImageFile>,
        form: RegistrationForm,
    ) -> RegistrationOutcome {
        self.state = RegistrationState::Idle;

        let Some(image) = image else {
            tracing::debug!("No image selected, registration not started");
            return RegistrationOutcome::NotStarted;
        };

        match self.run(image, form).await {
            Ok(record) => RegistrationOutcome::Complete(record),
            Err(err) => {
                tracing::warn!("Registration failed: {}", err);
                self.transition(RegistrationState::Failed);
                RegistrationOutcome::Failed(err)
            }
        }
    }

    async fn run(
        &mut self,
        image: ImageFile,
        form: RegistrationForm,
    ) -> Result<UserRecord, RegistrationError> {
        let uploaded = self.upload(image, form).await?;
        let validated = self.validate(uploaded)?;
        Ok(self.persist(validated))
    }

    async fn upload(
        &mut self,
        image: ImageFile,
        form: RegistrationForm,
    ) -> Result<Uploaded, RegistrationError> {
        self.transition(RegistrationState::Uploading);
        let photo = self.host.upload(image).await?;
        Ok(Uploaded { photo, form })
    }

    fn validate(&mut self, uploaded: Uploaded) -> Result<Validated, RegistrationError> {
        self.transition(RegistrationState::Validating);
        let Uploaded { photo, form } = uploaded;
        if !validate_password(&form.password) {
            return Err(RegistrationError::WeakPassword);
        }
        Ok(Validated {
            record: UserRecord {
                name: form.name,
                email: form.email,
                photo,
                phone: form.phone,
                password: form.password,
            },
        })
    }

    fn persist(&mut self, validated: Validated) -> UserRecord {
        self.transition(RegistrationState::Persisting);
        self.session.write_user(&validated.record);
        self.session.set_logged_in(true);
        self.transition(RegistrationState::Complete);
        tracing::info!("Registered {}", validated.record.email);
        validated.record
    }

    fn transition(&mut self, next: RegistrationState) {
        tracing::debug!("Registration {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use store::MemoryStore;

    /// Image host that answers with a fixed URL, or fails when `url` is `None`.
    struct FakeHost {
        url: Option<&'static str>,
        calls: Cell<usize>,
    }

    impl FakeHost {
        fn ok(url: &'static str) -> Self {
            Self {
                url: Some(url),
                calls: Cell::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                url: None,
                calls: Cell::new(0),
            }
        }
    }

    impl ImageHost for &FakeHost {
        async fn upload(&self, _image: ImageFile) -> Result<String, UploadError> {
            self.calls.set(self.calls.get() + 1);
            match self.url {
                Some(url) => Ok(url.to_string()),
                None => Err(UploadError::Rejected { status: 400 }),
            }
        }
    }

    fn ann(password: &str) -> RegistrationForm {
        RegistrationForm {
            name: "Ann".into(),
            email: "ann@x.com".into(),
            phone: "555-1234".into(),
            password: password.into(),
        }
    }

    fn image() -> Option<ImageFile> {
        Some(ImageFile::new("me.png", vec![1, 2, 3]))
    }

    #[tokio::test]
    async fn test_happy_path_persists_and_completes() {
        let host = FakeHost::ok("https://img/1.png");
        let store = MemoryStore::new();
        let session = SessionStore::new(store.clone());
        let mut registration = Registration::new(&host, session.clone());

        let outcome = registration.submit(image(), ann("Abc!23")).await;

        assert!(outcome.is_complete());
        assert_eq!(registration.state(), RegistrationState::Complete);
        assert_eq!(
            outcome.notice(),
            Some(Notice::success("Account created successfully!"))
        );
        assert_eq!(outcome.password_error(), Some(None));

        let stored = session.read_user().unwrap();
        assert_eq!(stored.photo, "https://img/1.png");
        assert_eq!(stored.name, "Ann");
        assert_eq!(stored.email, "ann@x.com");
        assert_eq!(stored.phone, "555-1234");
        assert_eq!(stored.password, "Abc!23");
        assert!(session.read_logged_in());
        assert_eq!(host.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_weak_password_writes_nothing() {
        let host = FakeHost::ok("https://img/1.png");
        let store = MemoryStore::new();
        let mut registration = Registration::new(&host, SessionStore::new(store.clone()));

        let outcome = registration.submit(image(), ann("abc123")).await;

        assert!(!outcome.is_complete());
        assert!(matches!(
            outcome,
            RegistrationOutcome::Failed(RegistrationError::WeakPassword)
        ));
        assert_eq!(registration.state(), RegistrationState::Failed);
        assert_eq!(outcome.notice(), None);
        assert_eq!(
            outcome.password_error(),
            Some(Some(
                "Password should be minimum 6 characters, contain at least 1 capital letter & 1 special character"
            ))
        );
        assert!(store.is_empty());
        // The upload still happened first.
        assert_eq!(host.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_upload_failure_writes_nothing() {
        let host = FakeHost::failing();
        let store = MemoryStore::new();
        let mut registration = Registration::new(&host, SessionStore::new(store.clone()));

        let outcome = registration.submit(image(), ann("Abc!23")).await;

        assert!(matches!(
            outcome,
            RegistrationOutcome::Failed(RegistrationError::Upload(_))
        ));
        assert_eq!(registration.state(), RegistrationState::Failed);
        assert_eq!(outcome.notice(), Some(Notice::error("Please try again!")));
        assert_eq!(outcome.password_error(), None);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_upload_failure_skips_password_check() {
        let host = FakeHost::failing();
        let mut registration = Registration::new(&host, SessionStore::new(MemoryStore::new()));

        let outcome = registration.submit(image(), ann("weak")).await;

        assert!(matches!(
            outcome,
            RegistrationOutcome::Failed(RegistrationError::Upload(_))
        ));
    }

    #[tokio::test]
    async fn test_no_image_never_starts() {
        let host = FakeHost::ok("https://img/1.png");
        let store = MemoryStore::new();
        let mut registration = Registration::new(&host, SessionStore::new(store.clone()));

        let outcome = registration.submit(None, ann("Abc!23")).await;

        assert!(matches!(outcome, RegistrationOutcome::NotStarted));
        assert_eq!(registration.state(), RegistrationState::Idle);
        assert_eq!(outcome.notice(), None);
        assert_eq!(outcome.password_error(), None);
        assert_eq!(host.calls.get(), 0);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_resubmit_after_failure_restarts() {
        let host = FakeHost::ok("https://img/2.png");
        let session = SessionStore::new(MemoryStore::new());
        let mut registration = Registration::new(&host, session.clone());

        registration.submit(image(), ann("abc123")).await;
        assert_eq!(registration.state(), RegistrationState::Failed);

        let outcome = registration.submit(image(), ann("Abc!23")).await;
        assert!(outcome.is_complete());
        assert_eq!(registration.state(), RegistrationState::Complete);
        assert_eq!(host.calls.get(), 2);
        assert_eq!(session.read_user().unwrap().photo, "https://img/2.png");
    }

    #[tokio::test]
    async fn test_new_registration_overwrites_previous() {
        let host = FakeHost::ok("https://img/1.png");
        let session = SessionStore::new(MemoryStore::new());
        let mut registration = Registration::new(&host, session.clone());

        registration.submit(image(), ann("Abc!23")).await;
        let bob = RegistrationForm {
            name: "Bob".into(),
            email: "bob@x.com".into(),
            phone: "555-0000".into(),
            password: "Bob#99".into(),
        };
        registration.submit(image(), bob).await;

        let stored = session.read_user().unwrap();
        assert_eq!(stored.name, "Bob");
        assert_eq!(stored.email, "bob@x.com");
    }
}
