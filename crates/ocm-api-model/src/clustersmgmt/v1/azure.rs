// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::macros::define_struct;

define_struct! {
    /// Microsoft Azure settings of a cluster.
    pub struct Azure {
        /// The name of the Azure Resource Group where the Azure resources
        /// related to the cluster are created. Generated by the service if
        /// not provided at creation time.
        managed_resource_group_name: value String = "managed_resource_group_name",
        /// The Azure Resource ID of a pre-existing Azure Network Security
        /// Group, which must belong to the resource group given in
        /// `resource_group_name`.
        network_security_group_resource_id: value String = "network_security_group_resource_id",
        /// The Azure Resource Group name of the Azure cluster.
        resource_group_name: value String = "resource_group_name",
        /// The name of the Azure resource representing the cluster.
        resource_name: value String = "resource_name",
        /// The Azure Resource ID of a pre-existing Azure Subnet to be used by
        /// the cluster's worker nodes.
        subnet_resource_id: value String = "subnet_resource_id",
        subscription_id: value String = "subscription_id",
        /// The Azure Tenant ID the subscription belongs to.
        tenant_id: value String = "tenant_id",
    }
}
