//! Consumer Application Registry State
//!
//! An application is created implicitly on its first governance approval. Its
//! panic button may disable it unilaterally; only a fresh governance approval
//! re-enables it.

use serde::{Deserialize, Serialize};

use lib_types::Address;

/// Lifecycle state of a consumer application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationInfo {
    /// Approved by governance
    pub approved: bool,
    /// Disabled by its panic button; slashing and authorization rights are
    /// suspended until governance approves the application again
    pub disabled: bool,
    /// Emergency role allowed to disable the application
    pub panic_button: Address,
}

impl ApplicationInfo {
    /// A freshly approved application with no panic button assigned
    pub fn approved() -> Self {
        Self {
            approved: true,
            disabled: false,
            panic_button: Address::zero(),
        }
    }

    /// Whether the application may currently authorize stake and slash
    pub fn is_active(&self) -> bool {
        self.approved && !self.disabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approved_application_is_active() {
        let app = ApplicationInfo::approved();
        assert!(app.approved);
        assert!(!app.disabled);
        assert!(app.is_active());
        assert!(app.panic_button.is_zero());
    }

    #[test]
    fn test_disabled_application_is_inactive() {
        let mut app = ApplicationInfo::approved();
        app.disabled = true;
        assert!(!app.is_active());
    }
}
