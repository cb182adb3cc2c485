// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{DateTime, Utc};

use crate::macros::define_class;

define_class! {
    /// Representation of an _OpenShift_ version.
    pub struct Version("Version") {
        /// The versions this version can be upgraded to.
        available_upgrades: items String = "available_upgrades",
        /// The channel group of the version, for example `stable` or
        /// `candidate`.
        channel_group: value String = "channel_group",
        /// Indicates if this should be selected as the default version when
        /// a cluster is created without specifying explicitly the version.
        default: value bool = "default",
        /// Indicates if this version can be used to create clusters.
        enabled: value bool = "enabled",
        /// Date and time when the version will stop being supported.
        end_of_life_timestamp: value DateTime<Utc> = "end_of_life_timestamp",
        /// Indicates if this version can be used to create GCP Marketplace
        /// clusters.
        gcp_marketplace_enabled: value bool = "gcp_marketplace_enabled",
        hosted_control_plane_default: value bool = "hosted_control_plane_default",
        hosted_control_plane_enabled: value bool = "hosted_control_plane_enabled",
        /// Version of OpenShift, for example `4.14.1`.
        raw_id: value String = "raw_id",
        /// Location of the release image of the version.
        release_image: value String = "release_image",
        rosa_enabled: value bool = "rosa_enabled",
    }
}

define_class! {
    /// Representation of a version gate: an acknowledgement users must give
    /// before upgrading clusters past a version.
    pub struct VersionGate("VersionGate") {
        /// Condition under which the gate applies, as a query on the cluster.
        cluster_condition: value String = "cluster_condition",
        creation_timestamp: value DateTime<Utc> = "creation_timestamp",
        description: value String = "description",
        /// URL of the documentation that explains the gate.
        documentation_url: value String = "documentation_url",
        label: value String = "label",
        /// Indicates if the gate applies only to STS clusters.
        sts_only: value bool = "sts_only",
        value: value String = "value",
        /// Prefix of the versions the gate applies to, for example `4.14`.
        version_raw_id_prefix: value String = "version_raw_id_prefix",
        warning_message: value String = "warning_message",
    }
}
