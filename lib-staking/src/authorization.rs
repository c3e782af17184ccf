//! The Authorization Manager
//!
//! Applications are authorized against the union of an operator's three
//! stake balances. Increases are granted by the operator's authorizer and
//! take effect only if the application acknowledges them; decreases follow a
//! two-phase protocol: the authorizer requests, the application approves.
//!
//! The involuntary path lives here too: after slashing or a discrepancy
//! seizure, [`StakingLedger`] clamps every authorization that exceeds the
//! remaining total stake and notifies the affected applications.

use lib_types::{Address, Amount};

use crate::errors::{StakingError, StakingResult};
use crate::events::StakingEvent;
use crate::interfaces::ApplicationHost;
use crate::ledger::StakingLedger;
use crate::operator::StakeSource;

/// One planned involuntary clamp of an application's authorization
#[derive(Debug, Clone, Copy)]
pub(crate) struct AuthorizationCorrection {
    pub operator: Address,
    pub application: Address,
    pub from_amount: Amount,
    pub to_amount: Amount,
}

/// Deliver the involuntary-decrease callbacks for a batch of planned
/// corrections; any failure aborts the enclosing operation
pub(crate) fn notify_corrections(
    apps: &mut dyn ApplicationHost,
    corrections: &[AuthorizationCorrection],
) -> StakingResult<()> {
    for correction in corrections {
        apps.involuntary_authorization_decrease(
            correction.application,
            correction.operator,
            correction.from_amount - correction.to_amount,
        )?;
    }
    Ok(())
}

impl StakingLedger {
    // ========================================================================
    // VOLUNTARY AUTHORIZATION CHANGES
    // ========================================================================

    /// Grant more of the operator's stake to an application
    ///
    /// The same stake may back several applications: each pair is limited by
    /// the operator's total stake independently. The increase is durable only
    /// if the application's synchronous acknowledgement succeeds.
    pub fn increase_authorization(
        &mut self,
        apps: &mut dyn ApplicationHost,
        caller: Address,
        operator: Address,
        application: Address,
        amount: Amount,
    ) -> StakingResult<()> {
        if amount == 0 {
            return Err(StakingError::ZeroAmount);
        }
        self.active_application(application)?;
        let record = self.operator_ref(operator)?;
        if caller != record.authorizer {
            return Err(StakingError::NotAuthorizer);
        }

        let from_amount = record.authorization(&application).authorized;
        let is_new = !record.authorized_apps.contains(&application);
        let ceiling = self.params.authorization_ceiling;
        if is_new && ceiling != 0 && record.authorized_apps.len() >= ceiling as usize {
            return Err(StakingError::AuthorizationCeilingReached(ceiling));
        }

        let available = record.total_stake().saturating_sub(from_amount);
        if amount > available {
            return Err(StakingError::NotEnoughStakeToAuthorize {
                available,
                requested: amount,
            });
        }
        let to_amount = from_amount
            .checked_add(amount)
            .ok_or(StakingError::Overflow)?;

        apps.authorization_increased(application, operator, amount)?;

        let record = self
            .operators
            .get_mut(&operator)
            .ok_or(StakingError::OperatorNotFound(operator))?;
        record.authorizations.entry(application).or_default().authorized = to_amount;
        if is_new {
            record.authorized_apps.push(application);
        }

        tracing::info!(
            "Operator {:?} authorized {} more to application {:?} (now {})",
            operator,
            amount,
            application,
            to_amount
        );
        self.push_event(StakingEvent::AuthorizationIncreased {
            operator,
            application,
            from_amount,
            to_amount,
        });
        Ok(())
    }

    /// Ask an application to release part of its authorization
    ///
    /// At most one request is outstanding per pair; a new request overwrites
    /// the previous one without accumulating.
    pub fn request_authorization_decrease(
        &mut self,
        apps: &mut dyn ApplicationHost,
        caller: Address,
        operator: Address,
        application: Address,
        amount: Amount,
    ) -> StakingResult<()> {
        self.check_decrease_request(caller, operator, application, amount)?;

        apps.authorization_decrease_requested(application, operator, amount)?;

        self.commit_decrease_request(operator, application, amount)
    }

    /// Ask an application to release its entire authorization
    pub fn request_authorization_decrease_all(
        &mut self,
        apps: &mut dyn ApplicationHost,
        caller: Address,
        operator: Address,
        application: Address,
    ) -> StakingResult<()> {
        let amount = self
            .operator_ref(operator)?
            .authorization(&application)
            .authorized;
        if amount == 0 {
            return Err(StakingError::NothingAuthorized);
        }
        self.request_authorization_decrease(apps, caller, operator, application, amount)
    }

    /// Ask every authorized application to release its entire authorization
    ///
    /// Fails when the operator has no authorizations anywhere.
    pub fn request_authorization_decrease_everywhere(
        &mut self,
        apps: &mut dyn ApplicationHost,
        caller: Address,
        operator: Address,
    ) -> StakingResult<()> {
        let record = self.operator_ref(operator)?;
        if caller != record.authorizer {
            return Err(StakingError::NotAuthorizer);
        }
        if record.authorized_apps.is_empty() {
            return Err(StakingError::NothingAuthorized);
        }

        let requests: Vec<(Address, Amount)> = record
            .authorized_apps
            .iter()
            .map(|app| (*app, record.authorization(app).authorized))
            .collect();

        for (application, amount) in &requests {
            self.check_decrease_request(caller, operator, *application, *amount)?;
        }
        for (application, amount) in &requests {
            apps.authorization_decrease_requested(*application, operator, *amount)?;
        }
        for (application, amount) in requests {
            self.commit_decrease_request(operator, application, amount)?;
        }
        Ok(())
    }

    /// The application accepts the pending decrease for an operator
    ///
    /// The caller self-identifies as the application. Returns the released
    /// amount. When the authorization reaches zero the application is
    /// removed from the operator's list (swap-with-last-and-pop).
    pub fn approve_authorization_decrease(
        &mut self,
        caller: Address,
        operator: Address,
    ) -> StakingResult<Amount> {
        self.active_application(caller)?;
        let record = self.operator_ref(operator)?;
        let auth = record.authorization(&caller);
        if auth.deauthorizing == 0 {
            return Err(StakingError::NoPendingDecrease(caller));
        }
        let remaining = auth
            .authorized
            .checked_sub(auth.deauthorizing)
            .ok_or(StakingError::Underflow)?;
        let released = auth.deauthorizing;

        let record = self
            .operators
            .get_mut(&operator)
            .ok_or(StakingError::OperatorNotFound(operator))?;
        if let Some(entry) = record.authorizations.get_mut(&caller) {
            entry.authorized = remaining;
            entry.deauthorizing = 0;
        }
        if remaining == 0 {
            record.remove_authorized_app(&caller);
        }

        tracing::info!(
            "Application {:?} released {} of operator {:?}'s stake ({} remaining)",
            caller,
            released,
            operator,
            remaining
        );
        self.push_event(StakingEvent::AuthorizationDecreaseApproved {
            operator,
            application: caller,
            amount: released,
            remaining,
        });
        Ok(released)
    }

    // ========================================================================
    // VIEWS
    // ========================================================================

    /// Stake still available to authorize to an application
    pub fn available_to_authorize(
        &self,
        operator: Address,
        application: Address,
    ) -> StakingResult<Amount> {
        let record = self.operator_ref(operator)?;
        Ok(record
            .total_stake()
            .saturating_sub(record.authorization(&application).authorized))
    }

    /// Required floor for one stake source given the maximum outstanding
    /// authorization
    pub fn min_staked(&self, operator: Address, source: StakeSource) -> StakingResult<Amount> {
        Ok(self.operator_ref(operator)?.min_staked(source))
    }

    // ========================================================================
    // INVOLUNTARY CORRECTION (shared by slashing and discrepancy paths)
    // ========================================================================

    /// Plan the clamps needed so no authorization exceeds `total_stake`
    pub(crate) fn plan_corrections_for(
        &self,
        operator: Address,
        total_stake: Amount,
    ) -> Vec<AuthorizationCorrection> {
        let Some(record) = self.operators.get(&operator) else {
            return Vec::new();
        };
        record
            .authorized_apps
            .iter()
            .filter_map(|app| {
                let authorized = record.authorization(app).authorized;
                if authorized > total_stake {
                    Some(AuthorizationCorrection {
                        operator,
                        application: *app,
                        from_amount: authorized,
                        to_amount: total_stake,
                    })
                } else {
                    None
                }
            })
            .collect()
    }

    /// Apply planned clamps; infallible, run after all external calls succeed
    pub(crate) fn commit_corrections(&mut self, corrections: &[AuthorizationCorrection]) {
        for correction in corrections {
            if let Some(record) = self.operators.get_mut(&correction.operator) {
                if let Some(entry) = record.authorizations.get_mut(&correction.application) {
                    entry.authorized = correction.to_amount;
                    entry.deauthorizing = entry.deauthorizing.min(correction.to_amount);
                }
                if correction.to_amount == 0 {
                    record.remove_authorized_app(&correction.application);
                }
            }
            tracing::warn!(
                "Authorization of application {:?} for operator {:?} clamped {} -> {}",
                correction.application,
                correction.operator,
                correction.from_amount,
                correction.to_amount
            );
            self.push_event(StakingEvent::InvoluntaryAuthorizationDecrease {
                operator: correction.operator,
                application: correction.application,
                from_amount: correction.from_amount,
                to_amount: correction.to_amount,
            });
        }
    }

    // ========================================================================
    // INTERNAL HELPERS
    // ========================================================================

    fn check_decrease_request(
        &self,
        caller: Address,
        operator: Address,
        application: Address,
        amount: Amount,
    ) -> StakingResult<()> {
        if amount == 0 {
            return Err(StakingError::ZeroAmount);
        }
        self.active_application(application)?;
        let record = self.operator_ref(operator)?;
        if caller != record.authorizer {
            return Err(StakingError::NotAuthorizer);
        }
        let authorized = record.authorization(&application).authorized;
        if amount > authorized {
            return Err(StakingError::DecreaseExceedsAuthorized {
                authorized,
                requested: amount,
            });
        }
        Ok(())
    }

    fn commit_decrease_request(
        &mut self,
        operator: Address,
        application: Address,
        amount: Amount,
    ) -> StakingResult<()> {
        let record = self
            .operators
            .get_mut(&operator)
            .ok_or(StakingError::OperatorNotFound(operator))?;
        if let Some(entry) = record.authorizations.get_mut(&application) {
            entry.deauthorizing = amount;
        }
        self.push_event(StakingEvent::AuthorizationDecreaseRequested {
            operator,
            application,
            amount,
        });
        Ok(())
    }
}
