use proptest::prelude::*;
use routenet_core::graph::RouteGraph;
use routenet_core::{RouteRecord, Season, analyze, distribution_of};

const CODES: [&str; 8] = ["ATL", "LAX", "ORD", "DFW", "DEN", "JFK", "SFO", "SEA"];
const AIRLINES: [&str; 3] = ["Delta", "United", "JetBlue"];

fn arb_season() -> impl Strategy<Value = Season> {
    prop_oneof![
        Just(Season::Summer),
        Just(Season::Winter),
        Just(Season::Spring),
        Just(Season::Fall),
    ]
}

fn arb_record() -> impl Strategy<Value = RouteRecord> {
    (
        0..CODES.len(),
        1..CODES.len(),
        0..AIRLINES.len(),
        0i64..60,
        0.0f64..1200.0,
        arb_season(),
        0.0f64..=1.0,
    )
        .prop_map(|(o, shift, a, frequency, price, season, demand)| {
            // shift in 1..len keeps destination != origin
            let d = (o + shift) % CODES.len();
            RouteRecord::new(CODES[o], CODES[d], AIRLINES[a], frequency, price, season, demand)
        })
}

fn arb_records() -> impl Strategy<Value = Vec<RouteRecord>> {
    prop::collection::vec(arb_record(), 0..40)
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(256))]

    #[test]
    fn density_is_bounded(records in arb_records()) {
        let s = analyze(&records, 5).expect("generated records are valid");
        prop_assert!((0.0..=1.0).contains(&s.connectivity.density));
        prop_assert_eq!(s.connectivity.density == 0.0, s.edge_count == 0);
    }

    #[test]
    fn node_count_matches_distinct_codes(records in arb_records()) {
        let s = analyze(&records, 5).expect("valid");
        let mut codes: Vec<&str> = records
            .iter()
            .flat_map(|r| [r.origin.as_str(), r.destination.as_str()])
            .collect();
        codes.sort_unstable();
        codes.dedup();
        prop_assert_eq!(s.node_count, codes.len());
        prop_assert_eq!(s.centrality.len(), codes.len());
    }

    #[test]
    fn betweenness_is_non_negative(records in arb_records()) {
        let s = analyze(&records, CODES.len()).expect("valid");
        for node in s.centrality.nodes.values() {
            prop_assert!(node.betweenness >= 0.0);
            prop_assert!((0.0..=2.0).contains(&node.degree));
        }
        for pair in s.hubs.windows(2) {
            prop_assert!(pair[0].betweenness >= pair[1].betweenness);
        }
    }

    #[test]
    fn buckets_partition_records(records in arb_records()) {
        let d = distribution_of(&records).expect("valid");
        prop_assert_eq!(d.frequency.total(), records.len());
        prop_assert_eq!(d.price.total(), records.len());
        prop_assert_eq!(d.demand.total(), records.len());
    }

    #[test]
    fn seasonal_counts_sum_to_record_count(records in arb_records()) {
        let s = analyze(&records, 5).expect("valid");
        let total: usize = s.seasonal.values().map(|v| v.route_count).sum();
        prop_assert_eq!(total, records.len());
        for stats in s.seasonal.values() {
            prop_assert!(stats.route_count > 0);
        }
    }

    #[test]
    fn strong_connectivity_reaches_every_pair(records in arb_records()) {
        let s = analyze(&records, 5).expect("valid");
        let n = s.node_count;
        if s.connectivity.strongly_connected {
            prop_assert_eq!(s.connectivity.reachable_pairs, n * n.saturating_sub(1));
        } else {
            prop_assert!(s.connectivity.reachable_pairs < n * (n - 1));
        }
        if s.connectivity.reachable_pairs > 0 {
            prop_assert!(s.connectivity.avg_shortest_path_length >= 1.0);
        }
    }

    #[test]
    fn analysis_is_idempotent(records in arb_records()) {
        let a = analyze(&records, 5).expect("valid");
        let b = analyze(&records, 5).expect("valid");
        prop_assert_eq!(a, b);
    }

    #[test]
    fn graph_metrics_ignore_record_order(records in arb_records()) {
        let mut reversed = records.clone();
        reversed.reverse();

        let a = analyze(&records, 5).expect("valid");
        let b = analyze(&reversed, 5).expect("valid");

        prop_assert_eq!(&a.content_hash, &b.content_hash);
        prop_assert_eq!(&a.centrality, &b.centrality);
        prop_assert_eq!(&a.hubs, &b.hubs);
        prop_assert_eq!(&a.connectivity, &b.connectivity);
        prop_assert_eq!(&a.distribution, &b.distribution);
        prop_assert_eq!(&a.airline_coverage, &b.airline_coverage);

        // Seasonal means sum floats in input order.
        for (season, sa) in &a.seasonal {
            let sb = &b.seasonal[season];
            prop_assert_eq!(sa.route_count, sb.route_count);
            prop_assert_eq!(sa.total_frequency, sb.total_frequency);
            prop_assert!((sa.avg_price - sb.avg_price).abs() < 1e-6);
            prop_assert!((sa.avg_demand - sb.avg_demand).abs() < 1e-9);
        }
    }

    #[test]
    fn edge_frequency_sums_records(records in arb_records()) {
        let rg = RouteGraph::from_records(&records).expect("valid");
        let total: i64 = records.iter().map(|r| r.frequency).sum();
        let edge_total: i64 = rg.graph.edge_weights().map(|e| e.total_frequency).sum();
        prop_assert_eq!(total, edge_total);
    }
}
