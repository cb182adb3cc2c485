// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{DateTime, Utc};

use super::{
    AddOn, AddOnInstallationState, AddOnVersion, BillingModel, Cluster,
};
use crate::macros::define_class;

define_class! {
    /// Representation of an add-on installation.
    ///
    /// The `addon` and `cluster` attributes are usually links, carrying only
    /// the kind, identifier and self link of the referenced objects.
    pub struct AddOnInstallation("AddOnInstallation") {
        /// Link to the add-on.
        addon: object AddOn = "addon",
        /// Link to the installed version of the add-on.
        addon_version: object AddOnVersion = "addon_version",
        /// Billing details of the installation.
        billing: object AddOnInstallationBilling = "billing",
        /// ID used to identify the cluster that this add-on is attached to.
        cluster: object Cluster = "cluster",
        creation_timestamp: value DateTime<Utc> = "creation_timestamp",
        csv_name: value String = "csv_name",
        deleted_timestamp: value DateTime<Utc> = "deleted_timestamp",
        /// Version of the operator installed by the add-on.
        operator_version: value String = "operator_version",
        /// Parameters for the add-on, as supplied by the user.
        parameters: list AddOnInstallationParameter = "parameters",
        state: value AddOnInstallationState = "state",
        /// Reason for the current state of the installation.
        state_description: value String = "state_description",
        updated_timestamp: value DateTime<Utc> = "updated_timestamp",
    }
}

define_class! {
    /// Billing details of an add-on installation.
    pub struct AddOnInstallationBilling("AddOnInstallationBilling") {
        /// Account ID for the billing marketplace.
        billing_marketplace_account: value String = "billing_marketplace_account",
        billing_model: value BillingModel = "billing_model",
    }
}

define_class! {
    /// A user-supplied parameter of an add-on installation. The identifier
    /// of the parameter is its name.
    pub struct AddOnInstallationParameter("AddOnInstallationParameter") {
        value: value String = "value",
    }
}
