// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::macros::define_class;

define_class! {
    /// Representation of an add-on that can be installed in a cluster.
    pub struct AddOn("AddOn") {
        /// Description of the add-on.
        description: value String = "description",
        /// Link to documentation about the add-on.
        docs_link: value String = "docs_link",
        /// Indicates if this add-on can be added to clusters.
        enabled: value bool = "enabled",
        /// Indicates if this add-on is hidden.
        hidden: value bool = "hidden",
        /// Name of the add-on.
        name: value String = "name",
        operator_name: value String = "operator_name",
        /// Used to determine how many units of quota an add-on consumes per
        /// resource name.
        resource_cost: value f64 = "resource_cost",
        resource_name: value String = "resource_name",
        target_namespace: value String = "target_namespace",
        /// The current version of the add-on.
        version: object AddOnVersion = "version",
    }
}

define_class! {
    /// Representation of an add-on version.
    pub struct AddOnVersion("AddOnVersion") {
        /// The versions this version can be upgraded to.
        available_upgrades: items String = "available_upgrades",
        channel: value String = "channel",
        enabled: value bool = "enabled",
        source_image: value String = "source_image",
    }
}
