// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::macros::define_enum;

define_enum! {
    /// Representation of an add-on installation state.
    pub enum AddOnInstallationState {
        Deleted = "deleted",
        Deleting = "deleting",
        Failed = "failed",
        Installing = "installing",
        Pending = "pending",
        Ready = "ready",
        Updating = "updating",
    }
}

define_enum! {
    /// Billing model for cluster resources.
    pub enum BillingModel {
        /// Legacy Red Hat Marketplace billing.
        Marketplace = "marketplace",
        MarketplaceAws = "marketplace-aws",
        MarketplaceAzure = "marketplace-azure",
        MarketplaceGcp = "marketplace-gcp",
        MarketplaceRhm = "marketplace-rhm",
        /// Standard, i.e. subscription-based, billing.
        Standard = "standard",
    }
}

define_enum! {
    /// Overall state of a cluster.
    pub enum ClusterState {
        Error = "error",
        Hibernating = "hibernating",
        Installing = "installing",
        Pending = "pending",
        PoweringDown = "powering_down",
        Ready = "ready",
        Resuming = "resuming",
        Uninstalling = "uninstalling",
        Unknown = "unknown",
        Validating = "validating",
        Waiting = "waiting",
    }
}

define_enum! {
    /// Whether an upgrade policy runs on its own schedule or once, on
    /// request.
    pub enum ScheduleType {
        Automatic = "automatic",
        Manual = "manual",
    }
}

define_enum! {
    /// The component an upgrade policy applies to.
    pub enum UpgradeType {
        Addon = "ADDON",
        ConfigOnly = "ConfigOnly",
        ControlPlane = "ControlPlane",
        ControlPlaneCve = "ControlPlaneCVE",
        NodePool = "NodePool",
        Osd = "OSD",
    }
}

define_enum! {
    /// Progress of a scheduled upgrade.
    pub enum UpgradePolicyStateValue {
        Cancelled = "cancelled",
        Completed = "completed",
        Delayed = "delayed",
        Failed = "failed",
        Pending = "pending",
        Scheduled = "scheduled",
        Started = "started",
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Attribute;
    use serde_test::{assert_de_tokens, assert_tokens, Token};

    #[test]
    fn known_values_serialize_verbatim() {
        assert_tokens(&UpgradeType::ControlPlaneCve, &[Token::Str("ControlPlaneCVE")]);
        assert_tokens(&ScheduleType::Manual, &[Token::Str("manual")]);
        assert_tokens(&BillingModel::MarketplaceAws, &[Token::Str("marketplace-aws")]);
    }

    #[test]
    fn every_value_maps_back_to_itself() {
        for value in UpgradeType::VALUES {
            let parsed = UpgradeType::from(*value);
            assert!(!matches!(parsed, UpgradeType::Other(_)), "{value} unknown");
            assert_eq!(parsed.as_str(), *value);
        }
        for value in ClusterState::VALUES {
            assert_eq!(ClusterState::from(*value).to_string(), *value);
        }
    }

    #[test]
    fn unknown_values_are_kept() {
        let tokens = [Token::Str("Hypershift")];
        let unknown = UpgradeType::Other("Hypershift".to_string());
        assert_de_tokens(&unknown, &tokens);
        assert_tokens(&unknown, &tokens);
        assert_de_tokens(&UpgradeType::Other(String::new()), &[Token::Str("")]);
    }

    #[test]
    fn zero_value_is_empty_string() {
        assert_eq!(ScheduleType::zero().as_str(), "");
        assert_eq!(ScheduleType::default(), ScheduleType::Other(String::new()));
        assert_eq!("automatic".parse::<ScheduleType>(), Ok(ScheduleType::Automatic));
    }
}
