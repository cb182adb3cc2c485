// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{AwsMachinePool, AwsVolume, Cluster};
use crate::macros::{define_class, define_struct};

define_class! {
    /// Representation of a machine pool in a cluster.
    pub struct MachinePool("MachinePool") {
        /// AWS specific parameters (optional).
        aws: object AwsMachinePool = "aws",
        /// Details for auto-scaling the machine pool. Replicas and
        /// autoscaling cannot be used together.
        autoscaling: object MachinePoolAutoscaling = "autoscaling",
        /// The availability zones upon which the nodes are created.
        availability_zones: items String = "availability_zones",
        /// ID used to identify the cluster that this machine pool is
        /// attached to.
        cluster: object Cluster = "cluster",
        /// The instance type of nodes in this machine pool.
        instance_type: value String = "instance_type",
        /// The labels set on the nodes in this machine pool.
        labels: entries String = "labels",
        /// The number of machines of the pool.
        replicas: value i64 = "replicas",
        /// The machine root volume capabilities.
        root_volume: object RootVolume = "root_volume",
        /// The subnets upon which the nodes are created.
        subnets: items String = "subnets",
        /// The taints set on the nodes in this machine pool.
        taints: items Taint = "taints",
    }
}

define_class! {
    /// Representation of an autoscaling policy for a machine pool.
    pub struct MachinePoolAutoscaling("MachinePoolAutoscaling") {
        max_replicas: value i64 = "max_replicas",
        min_replicas: value i64 = "min_replicas",
    }
}

define_struct! {
    /// Root volume capabilities.
    pub struct RootVolume {
        aws: object AwsVolume = "aws",
    }
}

define_struct! {
    /// Representation of a taint in a machine pool.
    pub struct Taint {
        /// The effect on the node for the pods matching the taint, i.e.
        /// `NoSchedule`, `NoExecute` or `PreferNoSchedule`.
        effect: value String = "effect",
        key: value String = "key",
        value: value String = "value",
    }
}
