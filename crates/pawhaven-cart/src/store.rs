// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persisted cart state.
//!
//! A keyed list of pet-id to line. Quantity is an intent counter kept for
//! display parity with the original UI; each pet is a unique instance, so
//! checkout collapses every line to exactly one adoption request.

use std::fs;
use std::path::{Path, PathBuf};

use pawhaven_core::PawhavenError;
use serde::{Deserialize, Serialize};

/// One cart entry for one pet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    pub pet_id: String,
    pub name: String,
    /// Adoption fee at the time the pet was added.
    pub fee: f64,
    /// Quantity-intent. Anything above 1 is a client-side input artifact.
    pub quantity: u32,
}

/// The cart: hydrated from `path` on construction, written through on every
/// mutation.
#[derive(Debug)]
pub struct CartStore {
    path: PathBuf,
    lines: Vec<CartLine>,
}

impl CartStore {
    /// Hydrate a cart from the given file. A missing file is an empty cart;
    /// an unreadable one is an error (the user's cart should not be
    /// silently discarded).
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, PawhavenError> {
        let path = path.into();
        let lines = if path.exists() {
            let raw = fs::read_to_string(&path).map_err(|e| {
                PawhavenError::Internal(format!("failed to read cart file: {e}"))
            })?;
            serde_json::from_str(&raw).map_err(|e| {
                PawhavenError::Internal(format!("cart file is corrupt: {e}"))
            })?
        } else {
            Vec::new()
        };
        Ok(Self { path, lines })
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All lines, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart holds a line for this pet.
    pub fn contains(&self, pet_id: &str) -> bool {
        self.lines.iter().any(|line| line.pet_id == pet_id)
    }

    /// Sum of quantity-intents.
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum of fee times quantity-intent.
    pub fn total_fee(&self) -> f64 {
        self.lines
            .iter()
            .map(|line| line.fee * f64::from(line.quantity))
            .sum()
    }

    /// Add a pet, or bump its quantity-intent when already present.
    pub fn add(&mut self, pet_id: &str, name: &str, fee: f64) -> Result<(), PawhavenError> {
        match self.lines.iter_mut().find(|line| line.pet_id == pet_id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                pet_id: pet_id.to_string(),
                name: name.to_string(),
                fee,
                quantity: 1,
            }),
        }
        self.persist()
    }

    /// Set a line's quantity-intent; zero removes the line.
    pub fn set_quantity(&mut self, pet_id: &str, quantity: u32) -> Result<(), PawhavenError> {
        if quantity == 0 {
            self.remove(pet_id)?;
            return Ok(());
        }
        if let Some(line) = self.lines.iter_mut().find(|line| line.pet_id == pet_id) {
            line.quantity = quantity;
            self.persist()?;
        }
        Ok(())
    }

    /// Remove a line. Returns whether it existed.
    pub fn remove(&mut self, pet_id: &str) -> Result<bool, PawhavenError> {
        let before = self.lines.len();
        self.lines.retain(|line| line.pet_id != pet_id);
        let removed = self.lines.len() != before;
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    /// Empty the cart.
    pub fn clear(&mut self) -> Result<(), PawhavenError> {
        self.lines.clear();
        self.persist()
    }

    fn persist(&self) -> Result<(), PawhavenError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                PawhavenError::Internal(format!("failed to create cart directory: {e}"))
            })?;
        }
        let raw = serde_json::to_string_pretty(&self.lines)
            .map_err(|e| PawhavenError::Internal(format!("failed to serialize cart: {e}")))?;
        fs::write(&self.path, raw)
            .map_err(|e| PawhavenError::Internal(format!("failed to write cart file: {e}")))
    }
}
