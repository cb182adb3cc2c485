// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::macros::define_class;

define_class! {
    /// Cloud provider.
    pub struct CloudProvider("CloudProvider") {
        /// Name of the cloud provider for display purposes. It can contain
        /// any characters, including spaces.
        display_name: value String = "display_name",
        /// Human friendly identifier of the cloud provider, for example
        /// `aws`.
        name: value String = "name",
        /// The regions of the provider. Usually a link.
        regions: list CloudRegion = "regions",
    }
}

define_class! {
    /// Description of a region of a cloud provider.
    pub struct CloudRegion("CloudRegion") {
        /// Indicates whether the region is only available for clusters in
        /// the customer's own cloud account.
        ccs_only: value bool = "ccs_only",
        /// Link to the cloud provider that the region belongs to.
        cloud_provider: object CloudProvider = "cloud_provider",
        display_name: value String = "display_name",
        /// Whether the region is enabled for deploying a managed cluster.
        enabled: value bool = "enabled",
        /// Whether the region is an AWS GovCloud region.
        govcloud: value bool = "govcloud",
        kms_location_id: value String = "kms_location_id",
        kms_location_name: value String = "kms_location_name",
        /// Human friendly identifier of the region, for example `us-east-1`.
        name: value String = "name",
        supports_hypershift: value bool = "supports_hypershift",
        /// Whether the region supports multiple availability zones.
        supports_multi_az: value bool = "supports_multi_az",
    }
}
