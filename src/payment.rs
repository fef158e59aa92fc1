//! Payment Options
//!
//! The closed set of payment modes, the installment facility derived from the
//! order total, and the option gating the storefront consults before offering
//! a mode. The cart store itself never enforces eligibility; it accepts any
//! option and keeps totals consistent regardless.

use serde::{Deserialize, Serialize};

/// Flat amount deducted each month under the installment facility, in minor
/// units.
pub const MONTHLY_DEDUCTION: u64 = 5000;

/// Largest order total the installment facility covers, in minor units.
pub const MAX_INSTALLMENT_AMOUNT: u64 = 30000;

/// How the order total will be settled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentOption {
    /// Single upfront charge.
    #[default]
    Full,

    /// Monthly CCP deductions until the total is covered.
    Installment,

    /// Billed to the buyer's partner company.
    Company,
}

impl PaymentOption {
    /// Every payment option, in display order.
    pub const ALL: [Self; 3] = [Self::Full, Self::Installment, Self::Company];

    /// Whether the storefront may offer this option to the given account.
    ///
    /// Consulted by the UI before a selection is made; never by the cart
    /// store, which accepts any option unconditionally.
    #[must_use]
    pub fn is_selectable(self, profile: &CheckoutProfile, plan: InstallmentPlan) -> bool {
        match self {
            Self::Full => true,
            Self::Installment => {
                profile.is_authenticated
                    && profile.is_payment_method_validated
                    && plan.eligible
            }
            Self::Company => {
                profile.is_authenticated
                    && (profile.partner_company.is_some()
                        || profile.belongs_to_independent_account)
            }
        }
    }

    /// The subset of options the storefront may offer to the given account.
    #[must_use]
    pub fn selectable(profile: &CheckoutProfile, plan: InstallmentPlan) -> Vec<Self> {
        Self::ALL
            .into_iter()
            .filter(|option| option.is_selectable(profile, plan))
            .collect()
    }
}

/// Account capabilities read from the auth/profile collaborator.
///
/// Consumed only by option gating; the cart's totals never depend on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutProfile {
    /// Whether a user is signed in at all.
    pub is_authenticated: bool,

    /// Whether the account's CCP payment method passed validation.
    pub is_payment_method_validated: bool,

    /// Whether the account is independent rather than partner-affiliated.
    pub belongs_to_independent_account: bool,

    /// Partner company affiliation, if any.
    pub partner_company: Option<String>,
}

/// The installment facility as it applies to one order total.
///
/// `months` is always computed, even for ineligible totals, so the storefront
/// can display "would need N months" messaging. The flat monthly figure is
/// the only per-month amount exposed; the smaller final-month remainder is
/// left to the consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallmentPlan {
    /// Whether the order total qualifies for monthly deductions.
    pub eligible: bool,

    /// Number of monthly deductions needed to cover the total, rounded up.
    pub months: u64,

    /// Flat per-month deduction in minor units; zero when ineligible.
    pub monthly_payment: u64,
}

impl InstallmentPlan {
    /// Derive the plan for an order total in minor units.
    #[must_use]
    pub fn for_total(total: u64) -> Self {
        let eligible = total > 0 && total <= MAX_INSTALLMENT_AMOUNT;

        Self {
            eligible,
            months: total.div_ceil(MONTHLY_DEDUCTION),
            monthly_payment: if eligible { MONTHLY_DEDUCTION } else { 0 },
        }
    }
}
