pub mod adverse_events;
pub mod contacts;
pub mod enforcement;
pub mod historical;
pub mod warning_letters;

pub use adverse_events::*;
pub use contacts::*;
pub use enforcement::*;
pub use historical::*;
pub use warning_letters::*;

use crate::db::repository::{ContactRepository, DocumentRepository};
use crate::scrape::WarningLetterScraper;
use crate::upstream::OpenFdaClient;
use std::sync::Arc;

/// Shared application state for handlers
#[derive(Clone)]
pub struct AppState {
    pub contact_repo: Arc<ContactRepository>,
    pub document_repo: Arc<DocumentRepository>,
    pub openfda: Arc<OpenFdaClient>,
    pub warning_letters: Arc<WarningLetterScraper>,
}
