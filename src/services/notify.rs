//! Collaborator interfaces
//!
//! The surrounding host owns message delivery and user data; this crate only
//! consumes them through these traits. `ConsoleSink` is the reference sink
//! used by the CLI.

use std::path::PathBuf;

use crate::error::OtchetnikResult;

/// Opaque delivery sink for outbound content
pub trait NotificationSink {
    /// Deliver a text message and/or a batch of file attachments to a user
    fn send(&self, user_id: i64, text: Option<&str>, attachments: &[PathBuf])
        -> OtchetnikResult<()>;
}

/// Read-only user lookup owned by the host's persistence layer
pub trait UserDirectory {
    /// Whether the user has premium access
    fn is_premium(&self, user_id: i64) -> OtchetnikResult<bool>;
}

/// Subscription lookup owned by the host's persistence layer
pub trait SubscriptionLookup {
    /// Name of the user's active tariff, if any
    fn active_tariff(&self, user_id: i64) -> OtchetnikResult<Option<String>>;
}

/// Sink that prints to stdout, used by the CLI binary
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl NotificationSink for ConsoleSink {
    fn send(
        &self,
        _user_id: i64,
        text: Option<&str>,
        attachments: &[PathBuf],
    ) -> OtchetnikResult<()> {
        if let Some(text) = text {
            println!("{}", text);
        }
        for path in attachments {
            println!("[вложение] {}", path.display());
        }
        Ok(())
    }
}

#[cfg(test)]
pub mod test_support {
    //! Recording doubles for service tests

    use super::*;
    use std::sync::Mutex;

    /// Sink that records every delivery
    #[derive(Debug, Default)]
    pub struct RecordingSink {
        pub sent: Mutex<Vec<(i64, Option<String>, Vec<PathBuf>)>>,
    }

    impl NotificationSink for RecordingSink {
        fn send(
            &self,
            user_id: i64,
            text: Option<&str>,
            attachments: &[PathBuf],
        ) -> OtchetnikResult<()> {
            self.sent.lock().unwrap().push((
                user_id,
                text.map(str::to_string),
                attachments.to_vec(),
            ));
            Ok(())
        }
    }

    /// Directory with a fixed premium answer
    #[derive(Debug)]
    pub struct FixedDirectory {
        pub premium: bool,
    }

    impl UserDirectory for FixedDirectory {
        fn is_premium(&self, _user_id: i64) -> OtchetnikResult<bool> {
            Ok(self.premium)
        }
    }

    impl SubscriptionLookup for FixedDirectory {
        fn active_tariff(&self, _user_id: i64) -> OtchetnikResult<Option<String>> {
            Ok(self.premium.then(|| "premium".to_string()))
        }
    }
}
