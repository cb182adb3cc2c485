// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::BTreeMap;

use ocm_api_model::clustersmgmt::v1::{
    AddOnInstallationState, Cluster, ClusterBuilder, ClusterList,
    ClusterListBuilder, ClusterState, MachinePool, MachinePoolBuilder,
    UpgradePolicy, UpgradePolicyBuilder, UpgradePolicyList,
};
use ocm_api_model::{json, kind_of, list_kind_of, Resource};
use proptest::prelude::*;

fn clusters(names: &[&str]) -> ClusterList {
    ClusterListBuilder::new()
        .items(
            names
                .iter()
                .map(|name| ClusterBuilder::new().id(*name).name(*name)),
        )
        .build()
        .unwrap()
}

#[test]
fn kinds_of_absent_values() {
    assert_eq!(kind_of::<Cluster>(None), "ClusterNil");
    assert_eq!(list_kind_of::<Cluster>(None), "ClusterListNil");

    let cluster = ClusterBuilder::new().link(true).build().unwrap();
    assert_eq!(kind_of(Some(&cluster)), "ClusterLink");
    let cluster = ClusterBuilder::new().build().unwrap();
    assert_eq!(kind_of(Some(&cluster)), Cluster::KIND);

    let list = clusters(&[]);
    assert_eq!(list_kind_of(Some(&list)), Cluster::LIST_KIND);
    assert_eq!(Cluster::LIST_LINK_KIND, "ClusterListLink");
}

#[test]
fn link_flag_does_not_count_as_content() {
    let link = MachinePoolBuilder::new().link(true);
    assert!(link.is_empty());
    let link = link.build().unwrap();
    assert!(link.is_empty());
    assert_eq!(json::to_string(&link).unwrap(), r#"{"kind":"MachinePoolLink"}"#);

    let pool = MachinePoolBuilder::new().id("workers").build().unwrap();
    assert!(!pool.is_empty());
}

#[test]
fn unknown_kinds_are_not_links() {
    for kind in ["Cluster", "ClusterNil", "MachinePoolLink", "Whatever", ""] {
        let input = format!(r#"{{"kind":"{kind}","id":"1"}}"#);
        let cluster: Cluster = json::from_str(&input).unwrap();
        assert!(!cluster.link(), "kind {kind:?} decoded as a link");
        assert_eq!(cluster.id(), "1");
    }

    let cluster: Cluster = json::from_str(r#"{"id":"1"}"#).unwrap();
    assert!(!cluster.link());
}

#[test]
fn null_leaves_attributes_absent() {
    let cluster: Cluster = json::from_str(
        r#"{"kind":"Cluster","name":null,"nodes":null,"multi_az":true}"#,
    )
    .unwrap();
    assert_eq!(cluster.get_name(), None);
    assert!(cluster.nodes().is_none());
    assert_eq!(cluster.get_multi_az(), Some(true));
}

#[test]
fn mismatched_types_are_errors() {
    let result = json::from_str::<Cluster>(r#"{"kind":"Cluster","name":7}"#);
    assert!(matches!(result, Err(json::Error::Json(_))));
    let result = json::from_str::<Cluster>(r#"["Cluster"]"#);
    assert!(matches!(result, Err(json::Error::Json(_))));
}

#[test]
fn unknown_enum_values_survive() {
    let cluster: Cluster =
        json::from_str(r#"{"kind":"Cluster","state":"melting"}"#).unwrap();
    assert_eq!(cluster.state(), &ClusterState::Other("melting".to_string()));
    assert_eq!(
        json::to_string(&cluster).unwrap(),
        r#"{"kind":"Cluster","state":"melting"}"#
    );
    assert_eq!(AddOnInstallationState::from("ready").as_str(), "ready");
}

#[test]
fn top_level_lists_are_bare_arrays() {
    let list = clusters(&["a", "b"]);
    let encoded = json::list_to_string(list.items()).unwrap();
    assert_eq!(
        encoded,
        concat!(
            r#"[{"kind":"Cluster","id":"a","name":"a"},"#,
            r#"{"kind":"Cluster","id":"b","name":"b"}]"#,
        )
    );

    let decoded: Vec<Cluster> = json::list_from_str(&encoded).unwrap();
    assert_eq!(decoded, list.slice());

    let empty: Vec<UpgradePolicy> = json::list_from_str("[]").unwrap();
    assert!(empty.is_empty());
    assert_eq!(json::list_to_string::<UpgradePolicy>(&[]).unwrap(), "[]");
}

#[test]
fn list_reader_and_writer() {
    let list = clusters(&["a"]);
    let mut buf = Vec::new();
    json::write_list(list.items(), &mut buf).unwrap();
    let decoded: Vec<Cluster> = json::read_list(buf.as_slice()).unwrap();
    assert_eq!(decoded, list.items());
}

#[test]
fn list_traversal() {
    let list = clusters(&["a", "b", "c"]);
    assert_eq!(list.len(), 3);
    assert_eq!(list.get(0).map(Cluster::name), Some("a"));
    assert!(list.get(3).is_none());

    let mut seen = Vec::new();
    list.each(|cluster| {
        seen.push(cluster.name().to_string());
        cluster.name() != "b"
    });
    assert_eq!(seen, ["a", "b"]);

    let mut indices = Vec::new();
    list.range(|index, _| {
        indices.push(index);
        true
    });
    assert_eq!(indices, [0, 1, 2]);

    let names: Vec<&str> = list.iter().map(Cluster::name).collect();
    assert_eq!(names, ["a", "b", "c"]);
    assert_eq!((&list).into_iter().count(), 3);

    let none: ClusterList = ClusterListBuilder::new().build().unwrap();
    let mut calls = 0;
    none.each(|_| {
        calls += 1;
        true
    });
    assert_eq!(calls, 0);
    assert!(none.get(0).is_none());
}

#[test]
fn slices_are_independent() {
    let list = clusters(&["a"]);
    let mut slice = list.slice();
    slice.clear();
    assert_eq!(list.len(), 1);
}

#[test]
fn list_setters() {
    let mut list = UpgradePolicyList::default();
    list.set_link(true);
    list.set_href("/api/clusters_mgmt/v1/clusters/123/upgrade_policies");
    list.set_items(vec![UpgradePolicyBuilder::new()
        .id("p1")
        .build()
        .unwrap()]);
    assert!(list.link());
    assert_eq!(list.kind(), "UpgradePolicyListLink");
    assert_eq!(list.href(), "/api/clusters_mgmt/v1/clusters/123/upgrade_policies");
    assert_eq!(list.len(), 1);

    let decoded = list.to_builder().build().unwrap();
    assert_eq!(decoded, list);
}

#[test]
fn copy_of_none_is_a_no_op() {
    let builder = ClusterBuilder::new().name("kept").copy(None);
    assert_eq!(builder.build().unwrap().name(), "kept");
}

#[test]
fn copies_share_nothing() {
    let original = ClusterBuilder::new()
        .properties([("owner", "alice")])
        .nodes(
            ocm_api_model::clustersmgmt::v1::ClusterNodesBuilder::new()
                .availability_zones(["a"]),
        )
        .build()
        .unwrap();
    let copy = original
        .to_builder()
        .properties([("owner", "bob")])
        .build()
        .unwrap();
    assert_eq!(original.properties().unwrap()["owner"], "alice");
    assert_eq!(copy.properties().unwrap()["owner"], "bob");
    assert_eq!(copy.nodes(), original.nodes());
}

#[test]
fn machine_pool_round_trip() {
    let pool = MachinePoolBuilder::new()
        .id("workers")
        .href("/api/clusters_mgmt/v1/clusters/123/machine_pools/workers")
        .cluster(ClusterBuilder::new().link(true).id("123"))
        .instance_type("m5.xlarge")
        .labels([("role", "worker")])
        .replicas(3)
        .build()
        .unwrap();
    let mut buf = Vec::new();
    json::write(&pool, &mut buf).unwrap();
    let decoded: MachinePool = json::read(buf.as_slice()).unwrap();
    assert_eq!(decoded, pool);
    assert!(decoded.cluster().unwrap().link());

    let pretty = json::to_string_pretty(&pool).unwrap();
    assert!(pretty.starts_with("{\n  \"kind\": \"MachinePool\""));
    let decoded: MachinePool = json::from_str(&pretty).unwrap();
    assert_eq!(decoded, pool);
}

proptest! {
    #[test]
    fn map_keys_are_sorted(
        entries in prop::collection::vec(("[a-z]{1,8}", "[a-z0-9]{0,8}"), 0..16)
    ) {
        let cluster = ClusterBuilder::new()
            .properties(entries.clone())
            .build()
            .unwrap();
        let encoded = json::to_string(&cluster).unwrap();
        let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();

        let start = encoded.find(r#""properties":"#).unwrap();
        let properties = &encoded[start..];
        let expected: BTreeMap<String, String> = entries.into_iter().collect();
        let keys: Vec<&String> = expected.keys().collect();

        let mut positions = Vec::new();
        for key in &keys {
            let pattern = format!("\"{key}\":");
            positions.push(properties.find(&pattern).unwrap());
        }
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(value["properties"].as_object().unwrap().len(), keys.len());
    }

    #[test]
    fn cluster_round_trip(
        name in proptest::option::of("[a-zA-Z0-9 -]{0,16}"),
        multi_az in proptest::option::of(any::<bool>()),
        quota in proptest::option::of(any::<i64>()),
        link in any::<bool>(),
    ) {
        let mut builder = ClusterBuilder::new().link(link).id("c1");
        if let Some(name) = &name {
            builder = builder.name(name.as_str());
        }
        if let Some(multi_az) = multi_az {
            builder = builder.multi_az(multi_az);
        }
        if let Some(quota) = quota {
            builder = builder.load_balancer_quota(quota);
        }
        let cluster = builder.build().unwrap();
        let decoded: Cluster =
            json::from_str(&json::to_string(&cluster).unwrap()).unwrap();
        prop_assert_eq!(&decoded, &cluster);
        prop_assert_eq!(decoded.get_name(), name.as_deref());
        prop_assert_eq!(decoded.get_multi_az(), multi_az);
        prop_assert_eq!(decoded.get_load_balancer_quota(), quota);
    }
}
