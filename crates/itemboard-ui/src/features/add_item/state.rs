//! Add-item form state.

use crate::services::error::ApiError;
use itemboard_api_models::Item;

/// Message shown when the name is blank.
pub const NAME_REQUIRED: &str = "name is required";

/// Standalone add form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddItemForm {
    /// Typed name.
    pub name: String,
    /// Create request in flight.
    pub saving: bool,
    /// Validation or server error.
    pub error: Option<String>,
}

impl AddItemForm {
    /// Start a submission; returns the trimmed name to create.
    ///
    /// Blank names set [`NAME_REQUIRED`]; a second submit while saving is ignored.
    pub fn submit(&mut self) -> Option<String> {
        if self.saving {
            return None;
        }
        let name = self.name.trim();
        if name.is_empty() {
            self.error = Some(NAME_REQUIRED.to_string());
            return None;
        }
        let name = name.to_string();
        self.saving = true;
        self.error = None;
        Some(name)
    }

    /// Settle a submission; returns true when the caller should navigate away.
    pub fn complete(&mut self, result: Result<Item, ApiError>) -> bool {
        self.saving = false;
        match result {
            Ok(_) => {
                self.name.clear();
                true
            }
            Err(err) => {
                self.error = Some(err.banner("Failed to add item"));
                false
            }
        }
    }
}
