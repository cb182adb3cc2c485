// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{DateTime, Utc};

use super::{ScheduleType, UpgradePolicyStateValue, UpgradeType};
use crate::macros::define_class;

define_class! {
    /// Representation of an upgrade policy that can be set for a cluster.
    pub struct UpgradePolicy("UpgradePolicy") {
        /// Cluster ID this upgrade policy is defined for.
        cluster_id: value String = "cluster_id",
        /// If minor version upgrades are allowed for automatic upgrades
        /// (for manual upgrades this is always true).
        enable_minor_version_upgrades: value bool = "enable_minor_version_upgrades",
        /// Next time the upgrade should run.
        next_run: value DateTime<Utc> = "next_run",
        /// Schedule cron expression that defines automatic upgrade
        /// scheduling.
        schedule: value String = "schedule",
        schedule_type: value ScheduleType = "schedule_type",
        upgrade_type: value UpgradeType = "upgrade_type",
        /// Version is the desired upgrade version.
        version: value String = "version",
    }
}

define_class! {
    /// Representation of the state of an upgrade policy.
    pub struct UpgradePolicyState("UpgradePolicyState") {
        /// Description of the state.
        description: value String = "description",
        value: value UpgradePolicyStateValue = "value",
    }
}
