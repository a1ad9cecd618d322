//! Fee rules — per-type callout fee, hourly rate, and loyalty points.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::UnsupportedVariantError;
use crate::service_type::ServiceType;

/// Pricing for one [`ServiceType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeRule {
    /// Flat fee charged once per service event, independent of hours.
    pub callout_fee: u64,
    /// Fee charged for every hour worked.
    pub per_hour_fee: u64,
    /// Loyalty points earned for every hour worked.
    pub points_per_hour: u64,
}

impl FeeRule {
    #[must_use]
    pub const fn new(callout_fee: u64, per_hour_fee: u64, points_per_hour: u64) -> Self {
        Self {
            callout_fee,
            per_hour_fee,
            points_per_hour,
        }
    }

    /// Fee proportional to `hours`. Saturates instead of overflowing.
    #[must_use]
    pub fn service_fee(&self, hours: u32) -> u64 {
        self.per_hour_fee.saturating_mul(u64::from(hours))
    }

    /// Points earned for `hours`. Saturates instead of overflowing.
    #[must_use]
    pub fn service_points(&self, hours: u32) -> u64 {
        self.points_per_hour.saturating_mul(u64::from(hours))
    }
}

/// Standard pricing for [`ServiceType::Regular`].
pub const REGULAR: FeeRule = FeeRule::new(100, 80, 1);
/// Standard pricing for [`ServiceType::AfterHours`].
pub const AFTER_HOURS: FeeRule = FeeRule::new(150, 120, 2);
/// Standard pricing for [`ServiceType::Emergency`].
pub const EMERGENCY: FeeRule = FeeRule::new(200, 150, 3);
/// Standard pricing for [`ServiceType::Discount`].
pub const DISCOUNT: FeeRule = FeeRule::new(50, 60, 1);

/// Lookup table from [`ServiceType`] to its [`FeeRule`].
///
/// The default schedule covers every variant. A schedule built by hand may
/// leave variants out, in which case lookups for them fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeSchedule {
    rules: BTreeMap<ServiceType, FeeRule>,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self::empty()
            .with_rule(ServiceType::Regular, REGULAR)
            .with_rule(ServiceType::AfterHours, AFTER_HOURS)
            .with_rule(ServiceType::Emergency, EMERGENCY)
            .with_rule(ServiceType::Discount, DISCOUNT)
    }
}

impl FeeSchedule {
    /// A schedule with no rules at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Set (or replace) the rule for `service_type`.
    #[must_use]
    pub fn with_rule(mut self, service_type: ServiceType, rule: FeeRule) -> Self {
        self.rules.insert(service_type, rule);
        self
    }

    /// Look up the rule for `service_type`.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedVariantError`] when the schedule has no rule for
    /// `service_type`.
    pub fn rule(&self, service_type: ServiceType) -> Result<&FeeRule, UnsupportedVariantError> {
        self.rules
            .get(&service_type)
            .ok_or_else(|| UnsupportedVariantError::new(service_type.as_str()))
    }

    /// Whether the schedule prices `service_type`.
    #[must_use]
    pub fn supports(&self, service_type: ServiceType) -> bool {
        self.rules.contains_key(&service_type)
    }

    /// Iterate over the priced variants in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ServiceType, &FeeRule)> {
        self.rules.iter().map(|(kind, rule)| (*kind, rule))
    }
}
