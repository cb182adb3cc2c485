// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::macros::{define_class, define_struct};

define_class! {
    /// Representation of aws machine pool specific parameters.
    pub struct AwsMachinePool("AWSMachinePool") {
        /// Additional AWS Security Groups to be added to the machine pool.
        /// Note that machine pools can only be assigned security groups
        /// belonging to the VPC of the cluster.
        additional_security_group_ids: items String = "additional_security_group_ids",
        /// Associates nodepool availability zones with zone types (e.g.
        /// wavelength, local).
        availability_zone_types: entries String = "availability_zone_types",
        /// Use spot instances on this machine pool to reduce cost.
        spot_market_options: object AwsSpotMarketOptions = "spot_market_options",
        /// Associates nodepool subnets with AWS Outposts.
        subnet_outposts: entries String = "subnet_outposts",
        /// Optional keys and values that the machine pool provisioner will
        /// add as AWS tags to all instances it creates.
        tags: entries String = "tags",
    }
}

define_class! {
    /// Spot market options for AWS machine pool.
    pub struct AwsSpotMarketOptions("AWSSpotMarketOptions") {
        /// The maximum price the user is willing to pay for their instances.
        max_price: value f64 = "max_price",
    }
}

define_struct! {
    /// Holds settings for an AWS storage volume.
    pub struct AwsVolume {
        /// Volume provisioned IOPS.
        iops: value i64 = "iops",
        /// Volume size in gibibytes.
        size: value i64 = "size",
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::json;

    #[test]
    fn tags_encode_in_key_order() {
        let pool = AwsMachinePool::builder()
            .tags([("b", "2"), ("a", "1")])
            .build()
            .unwrap();
        assert_eq!(
            json::to_string(&pool).unwrap(),
            r#"{"kind":"AWSMachinePool","tags":{"a":"1","b":"2"}}"#
        );
    }

    #[test]
    fn spot_price_of_zero_is_present() {
        let options =
            AwsSpotMarketOptions::builder().max_price(0.0).build().unwrap();
        assert_eq!(options.get_max_price(), Some(0.0));
        assert!(!options.is_empty());

        let unset = AwsSpotMarketOptions::builder().build().unwrap();
        assert_eq!(unset.get_max_price(), None);
        assert_eq!(unset.max_price(), 0.0);
        assert!(unset.is_empty());
    }

    #[test]
    fn non_finite_price_is_not_encoded() {
        for price in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let options =
                AwsSpotMarketOptions::builder().max_price(price).build().unwrap();
            let err = json::to_string(&options).unwrap_err();
            assert!(matches!(err, json::Error::Json(_)), "{err:?}");
        }

        // Also when nested inside another object.
        let pool = AwsMachinePool::builder()
            .spot_market_options(
                AwsSpotMarketOptions::builder().max_price(f64::NAN),
            )
            .build()
            .unwrap();
        assert!(json::to_string(&pool).is_err());
        assert!(json::to_vec(&pool).is_err());
    }

    #[test]
    fn clearing_nested_object() {
        let pool = AwsMachinePool::builder()
            .spot_market_options(AwsSpotMarketOptions::builder().max_price(0.5))
            .spot_market_options(None::<AwsSpotMarketOptionsBuilder>)
            .build()
            .unwrap();
        assert!(pool.spot_market_options().is_none());
        assert!(pool.is_empty());
    }

    #[test]
    fn volume_has_no_kind() {
        let volume = AwsVolume::builder().size(300).build().unwrap();
        assert_eq!(json::to_string(&volume).unwrap(), r#"{"size":300}"#);
        assert_eq!(volume.iops(), 0);
        assert_eq!(volume.get_iops(), None);
    }
}
