//! Page controllers.
//!
//! One controller per page, each composing the form binder, the typed
//! stores, and the list renderer. A controller activates only when its
//! defining elements are present in the host document, so all three pages
//! share one startup routine.

pub mod dashboard;
pub mod member;
pub mod payment;

pub use dashboard::DashboardPage;
pub use member::MemberPage;
pub use payment::PaymentPage;

use crate::dom::PageDocument;
use crate::error::Result;
use crate::storage::Storage;

/// Shared startup routine: the page-ready event.
///
/// Runs every controller's load path; controllers whose elements are
/// absent skip themselves.
///
/// # Errors
///
/// Returns `PortalError::Template` if a list fails to render.
pub fn boot(storage: &Storage, doc: &mut PageDocument) -> Result<()> {
    if let Some(mut page) = MemberPage::activate(storage, doc) {
        page.load();
    }
    if let Some(mut page) = PaymentPage::activate(storage, doc) {
        page.load()?;
    }
    if let Some(mut page) = DashboardPage::activate(storage, doc) {
        page.load()?;
    }
    Ok(())
}
