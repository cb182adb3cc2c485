// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{DateTime, Utc};

use super::{
    AddOnInstallation, Azure, BillingModel, CloudProvider, CloudRegion,
    ClusterState, MachinePool, Version,
};
use crate::macros::{define_class, define_struct};

define_class! {
    /// Definition of an OpenShift cluster.
    ///
    /// The `cloud_provider`, `region` and `version` attributes are usually
    /// links. The `addons` and `machine_pools` collections are usually list
    /// links carrying only an `href`; fetch the referenced collection to
    /// get the items.
    pub struct Cluster("Cluster") {
        /// List of add-ons on this cluster.
        addons: list AddOnInstallation = "addons",
        /// Microsoft Azure settings of the cluster.
        azure: object Azure = "azure",
        billing_model: value BillingModel = "billing_model",
        /// Link to the cloud provider where the cluster is installed.
        cloud_provider: object CloudProvider = "cloud_provider",
        /// Date and time when the cluster was initially created, using the
        /// format defined in RFC 3339.
        creation_timestamp: value DateTime<Utc> = "creation_timestamp",
        /// Prefix of the domain of the cluster. It is used to build the
        /// full domain name together with the base domain.
        domain_prefix: value String = "domain_prefix",
        /// Indicates whether etcd encryption is enabled.
        etcd_encryption: value bool = "etcd_encryption",
        /// Date and time when the cluster will be automatically deleted.
        /// If no timestamp is provided, the cluster never expires.
        expiration_timestamp: value DateTime<Utc> = "expiration_timestamp",
        /// External identifier of the cluster, generated by the cluster
        /// itself once installed.
        external_id: value String = "external_id",
        fips: value bool = "fips",
        /// Infrastructure ID of the cluster.
        infra_id: value String = "infra_id",
        /// Load balancer quota to be assigned to the cluster.
        load_balancer_quota: value i64 = "load_balancer_quota",
        /// List of machine pools on this cluster.
        machine_pools: list MachinePool = "machine_pools",
        /// Flag indicating if the cluster is managed by Red Hat.
        managed: value bool = "managed",
        /// Flag indicating if the cluster should be created with nodes in
        /// different availability zones or all the nodes in a single one.
        multi_az: value bool = "multi_az",
        /// Name of the cluster. Unique among the clusters of the same
        /// subscription.
        name: value String = "name",
        /// Information about the nodes of the cluster.
        nodes: object ClusterNodes = "nodes",
        openshift_version: value String = "openshift_version",
        /// User defined properties for tagging and querying.
        properties: entries String = "properties",
        /// Link to the cloud provider region where the cluster is installed.
        region: object CloudRegion = "region",
        /// Overall state of the cluster.
        state: value ClusterState = "state",
        status: object ClusterStatus = "status",
        /// Link to the version of OpenShift that will be used to install
        /// the cluster.
        version: object Version = "version",
    }
}

define_struct! {
    /// Counts of different classes of nodes inside a cluster.
    pub struct ClusterNodes {
        /// The availability zones upon which the nodes are created.
        availability_zones: items String = "availability_zones",
        /// Number of compute nodes of the cluster.
        compute: value i64 = "compute",
        /// The labels set on the compute nodes.
        compute_labels: entries String = "compute_labels",
        /// Number of infrastructure nodes of the cluster.
        infra: value i64 = "infra",
        /// Number of control plane nodes of the cluster.
        master: value i64 = "master",
    }
}

define_struct! {
    /// Detailed status of a cluster.
    pub struct ClusterStatus {
        /// Indicates whether the DNS of the cluster is ready.
        dns_ready: value bool = "dns_ready",
        /// Detailed user friendly status for the cluster.
        description: value String = "description",
        limited_support_reason_count: value i64 = "limited_support_reason_count",
        oidc_ready: value bool = "oidc_ready",
        /// Provisioning error code, when the cluster is in error state.
        provision_error_code: value String = "provision_error_code",
        provision_error_message: value String = "provision_error_message",
        state: value ClusterState = "state",
    }
}
