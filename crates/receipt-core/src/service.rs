//! Boundary between the rendering core and hosting systems
//!
//! The core produces one PDF byte vector per invocation and leaves
//! persistence, uploading, and process plumbing to its callers.

use crate::{ReceiptRequest, Result};

/// Persisted-store collaborator
///
/// Hosting systems that keep orders and users in a database implement
/// this to feed the renderer and to record where a finished receipt was
/// uploaded. No implementation lives in this repository; the bundled CLI
/// works from JSON documents instead.
pub trait ReceiptStore {
    /// Load the order and user records for an order identifier
    fn load_request(&self, order_id: &str) -> Result<ReceiptRequest>;

    /// Record the uploaded receipt location against the order
    fn save_receipt_url(&mut self, order_id: &str, url: &str) -> Result<()>;
}

/// Conventional file name for a generated receipt
pub fn receipt_file_name(order_id: &str) -> String {
    format!("receipt_{order_id}.pdf")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_file_name() {
        assert_eq!(receipt_file_name("ORD1"), "receipt_ORD1.pdf");
    }
}
