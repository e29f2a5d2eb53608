//! # Feature Gate
//!
//! Policy layer intercepting premium-only actions.
//!
//! Everything premium funnels through [`check_action`] before it runs. The
//! current plan has no unlockable "load more" or export path at all, so both
//! always answer with the upsell prompt; opening a profile link depends on
//! the platform. The prompt offers exactly two ways out: the contact route
//! or dismissal. Nothing is queued for after dismissal; the user has to
//! trigger the action again.

use serde::Serialize;

use lexp_providers::criteria::Platform;

use crate::routes::CONTACT_ROUTE;

/// A premium action a dashboard session may attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardAction {
    ShowMore,
    Export,
    OpenRestrictedProfile(Platform),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Allowed,
    RequiresUpgrade,
}

/// The gate policy. LinkedIn and Instagram profile links open directly;
/// Facebook and Twitter ones are premium.
pub fn check_action(action: DashboardAction) -> GateDecision {
    match action {
        DashboardAction::ShowMore => GateDecision::RequiresUpgrade,
        DashboardAction::Export => GateDecision::RequiresUpgrade,
        DashboardAction::OpenRestrictedProfile(platform) => match platform {
            Platform::Linkedin | Platform::Instagram => GateDecision::Allowed,
            Platform::Facebook | Platform::Twitter => GateDecision::RequiresUpgrade,
        },
    }
}

pub const PREMIUM_FEATURES: [&str; 8] = [
    "Unlimited exports",
    "Advanced search filters",
    "Bulk export capabilities",
    "Priority support",
    "API access",
    "Team collaboration",
    "Custom exports",
    "Analytics dashboard",
];

/// The upsell prompt sent whenever the gate answers `RequiresUpgrade`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsellPrompt {
    pub headline: &'static str,
    pub copy: &'static str,
    pub features: [&'static str; 8],
    pub contact_route: &'static str,
    pub dismissable: bool,
}

impl UpsellPrompt {
    pub fn current() -> Self {
        Self {
            headline: "Unlock Premium Features",
            copy: "Upgrade to our premium plan to access unlimited exports, \
                   advanced filters, and exclusive features.",
            features: PREMIUM_FEATURES,
            contact_route: CONTACT_ROUTE,
            dismissable: true,
        }
    }
}
