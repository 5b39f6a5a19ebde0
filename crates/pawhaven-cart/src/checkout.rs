// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cart-to-request reconciliation.
//!
//! Checkout issues one adoption-request call per cart line and aggregates
//! per-line outcomes. There is no server-side transaction spanning the
//! lines and no rollback of already-created requests when a later line
//! fails. Successful lines leave the cart; failed lines stay for retry.

use pawhaven_core::PawhavenError;

use crate::api::AdoptionApi;
use crate::store::CartStore;

/// One successfully submitted line.
#[derive(Debug, Clone)]
pub struct SubmittedLine {
    pub pet_id: String,
    pub name: String,
    pub request_id: String,
}

/// One failed line, kept in the cart.
#[derive(Debug, Clone)]
pub struct FailedLine {
    pub pet_id: String,
    pub name: String,
    pub error: String,
}

/// Aggregated outcome of one checkout pass.
#[derive(Debug, Default)]
pub struct CheckoutReport {
    pub submitted: Vec<SubmittedLine>,
    pub failed: Vec<FailedLine>,
}

impl CheckoutReport {
    /// True when every line went through.
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Reconcile the cart into adoption requests.
///
/// Each pet is a unique instance: a line's quantity-intent above 1 is a
/// client-side artifact and collapses to a single request. Calls run
/// sequentially; the server treats each independently.
pub async fn checkout(
    store: &mut CartStore,
    api: &dyn AdoptionApi,
    notes: Option<&str>,
) -> Result<CheckoutReport, PawhavenError> {
    let lines: Vec<_> = store.lines().to_vec();
    let mut report = CheckoutReport::default();

    for line in lines {
        match api.submit_request(&line.pet_id, notes).await {
            Ok(receipt) => {
                store.remove(&line.pet_id)?;
                tracing::info!(pet_id = %line.pet_id, request_id = %receipt.request_id, "cart line submitted");
                report.submitted.push(SubmittedLine {
                    pet_id: line.pet_id,
                    name: line.name,
                    request_id: receipt.request_id,
                });
            }
            Err(e) => {
                // The line stays in the cart so the user can retry.
                tracing::warn!(pet_id = %line.pet_id, error = %e, "cart line failed");
                report.failed.push(FailedLine {
                    pet_id: line.pet_id,
                    name: line.name,
                    error: e.to_string(),
                });
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::AdoptionReceipt;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::Mutex;
    use tempfile::tempdir;

    /// Test double recording every submission and failing selected pets.
    struct MockApi {
        failing: HashSet<String>,
        calls: Mutex<Vec<String>>,
    }

    impl MockApi {
        fn new(failing: &[&str]) -> Self {
            Self {
                failing: failing.iter().map(|s| s.to_string()).collect(),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AdoptionApi for MockApi {
        async fn submit_request(
            &self,
            pet_id: &str,
            _notes: Option<&str>,
        ) -> Result<AdoptionReceipt, PawhavenError> {
            self.calls.lock().unwrap().push(pet_id.to_string());
            if self.failing.contains(pet_id) {
                return Err(PawhavenError::Conflict(
                    "You already have a pending or approved adoption request for this pet"
                        .to_string(),
                ));
            }
            Ok(AdoptionReceipt {
                request_id: format!("req-{pet_id}"),
                status: "pending".to_string(),
            })
        }
    }

    async fn cart_with(lines: &[(&str, &str)]) -> (CartStore, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let mut cart = CartStore::load(dir.path().join("cart.json")).unwrap();
        for (pet_id, name) in lines {
            cart.add(pet_id, name, 100.0).unwrap();
        }
        (cart, dir)
    }

    #[tokio::test]
    async fn full_success_empties_the_cart() {
        let (mut cart, _dir) = cart_with(&[("p1", "Biscuit"), ("p2", "Shadow")]).await;
        let api = MockApi::new(&[]);

        let report = checkout(&mut cart, &api, None).await.unwrap();

        assert!(report.all_succeeded());
        assert_eq!(report.submitted.len(), 2);
        assert!(cart.lines().is_empty());
        assert_eq!(api.calls().len(), 2);
    }

    #[tokio::test]
    async fn failed_lines_stay_in_the_cart() {
        let (mut cart, _dir) = cart_with(&[("p1", "Biscuit"), ("p2", "Shadow"), ("p3", "Mona")])
            .await;
        let api = MockApi::new(&["p2"]);

        let report = checkout(&mut cart, &api, None).await.unwrap();

        assert!(!report.all_succeeded());
        assert_eq!(report.submitted.len(), 2);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].pet_id, "p2");

        // Only the failed line remains, and it survives rehydration.
        assert_eq!(cart.lines().len(), 1);
        let reloaded = CartStore::load(cart.path()).unwrap();
        assert_eq!(reloaded.lines().len(), 1);
        assert!(reloaded.contains("p2"));
    }

    #[tokio::test]
    async fn a_failure_does_not_stop_later_lines() {
        let (mut cart, _dir) = cart_with(&[("p1", "Biscuit"), ("p2", "Shadow")]).await;
        let api = MockApi::new(&["p1"]);

        let report = checkout(&mut cart, &api, None).await.unwrap();

        // Both lines were attempted; no rollback of p2's created request.
        assert_eq!(api.calls(), vec!["p1".to_string(), "p2".to_string()]);
        assert_eq!(report.submitted.len(), 1);
        assert_eq!(report.failed.len(), 1);
    }

    #[tokio::test]
    async fn quantity_intent_collapses_to_one_request() {
        let (mut cart, _dir) = cart_with(&[("p1", "Biscuit")]).await;
        cart.add("p1", "Biscuit", 100.0).unwrap();
        cart.add("p1", "Biscuit", 100.0).unwrap();
        assert_eq!(cart.total_items(), 3);

        let api = MockApi::new(&[]);
        let report = checkout(&mut cart, &api, None).await.unwrap();

        // One call, not three: each pet is a unique instance.
        assert_eq!(api.calls(), vec!["p1".to_string()]);
        assert_eq!(report.submitted.len(), 1);
    }

    #[tokio::test]
    async fn empty_cart_checkout_is_a_no_op() {
        let (mut cart, _dir) = cart_with(&[]).await;
        let api = MockApi::new(&[]);

        let report = checkout(&mut cart, &api, None).await.unwrap();
        assert!(report.all_succeeded());
        assert!(report.submitted.is_empty());
        assert!(api.calls().is_empty());
    }
}
