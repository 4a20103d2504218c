//! Service layer for otchetnik
//!
//! Business logic on top of the storage layer, plus the collaborator traits
//! the surrounding host implements (delivery, user lookup, sessions).

pub mod calendar;
pub mod faq;
pub mod notify;
pub mod session;
pub mod survey;

pub use calendar::CalendarService;
pub use faq::FaqService;
pub use notify::{ConsoleSink, NotificationSink, SubscriptionLookup, UserDirectory};
pub use session::{InMemorySessionStore, SessionKey, SessionStore};
pub use survey::{AnswerResult, BackResult, QuestionView, StartResult, SurveyService};
