use edmonds_karp::{
    edmonds_karp, parse_network, run, CapacityMatrix, EdmondsKarp, FlowPath, MaxFlow,
    MaxFlowSolution,
};
use petgraph::Graph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn network(rows: Vec<Vec<i64>>) -> CapacityMatrix<i64> {
    CapacityMatrix::new(rows).unwrap()
}

fn clrs() -> CapacityMatrix<i64> {
    CapacityMatrix::from_edges(
        6,
        [
            (0, 1, 16),
            (0, 2, 13),
            (1, 3, 12),
            (2, 1, 4),
            (2, 4, 14),
            (3, 2, 9),
            (3, 5, 20),
            (4, 3, 7),
            (4, 5, 4),
        ],
    )
    .unwrap()
}

fn random_network(rng: &mut StdRng) -> CapacityMatrix<i64> {
    let m = rng.gen_range(2..=9);
    let density = rng.gen_range(0.2..0.8);
    let rows = (0..m)
        .map(|_| {
            (0..m)
                .map(|_| {
                    if rng.gen_bool(density) {
                        rng.gen_range(1..=20)
                    } else {
                        0
                    }
                })
                .collect()
        })
        .collect();
    network(rows)
}

fn assert_invariants(c: &CapacityMatrix<i64>, solution: &MaxFlowSolution<i64>) {
    let m = c.node_count();
    let flow = solution.flow();

    for u in 0..m {
        for v in 0..m {
            assert!(flow.flow(u, v) >= 0 && flow.flow(u, v) <= c.capacity(u, v));
        }
    }
    for v in 1..m - 1 {
        assert_eq!(flow.inflow(v), flow.outflow(v), "conservation at {v}");
    }

    let cut = solution.cut();
    assert!(cut.windows(2).all(|w| w[0] < w[1]));
    assert!(cut.contains(&0));
    assert!(!cut.contains(&c.sink()));
    // the search follows only edges present in `c`, so flow sent back into the cut side over an
    // edge without a reverse arc cannot be cancelled and the cut may carry more than the flow
    assert!(solution.total_flow() <= solution.cut_capacity(c));

    // every augmentation strictly increases the flow
    assert_eq!(solution.steps(), solution.augmentations() + 1);
    let mut total = 0;
    for path in solution.paths() {
        assert!(path.flow() > 0);
        let nodes = path.nodes();
        assert_eq!(nodes.first(), Some(&0));
        assert_eq!(nodes.last(), Some(&c.sink()));
        total += path.flow();
    }
    assert_eq!(total, solution.total_flow());

    assert_eq!(solution.check(c), Ok(()));
}

#[test]
fn single_edge() {
    let c = network(vec![vec![0, 5], vec![0, 0]]);
    let solution = edmonds_karp(&c).unwrap();

    assert_eq!(solution.total_flow(), 5);
    assert_eq!(solution.augmentations(), 1);
    assert_eq!(solution.steps(), 2);
    assert_eq!(solution.cut(), &[0]);
    assert_eq!(solution.flow().rows(), &[vec![0, 5], vec![0, 0]]);
    assert_eq!(
        solution.to_string(),
        "Max Flow: 5\nCut: 0\nSteps: 2\n0 5\n0 0\n"
    );
}

#[test]
fn diamond() {
    let c = network(vec![
        vec![0, 3, 2, 0],
        vec![0, 0, 0, 2],
        vec![0, 0, 0, 3],
        vec![0, 0, 0, 0],
    ]);
    let solution = edmonds_karp(&c).unwrap();

    assert_eq!(solution.total_flow(), 4);
    assert_eq!(solution.augmentations(), 2);
    assert_eq!(solution.steps(), 3);
    // 0->1 keeps one unit of residual capacity, 0->2 is exhausted
    assert_eq!(solution.cut(), &[0, 1]);
    assert_eq!(solution.cut_capacity(&c), 4);
    assert_invariants(&c, &solution);
}

#[test]
fn disconnected() {
    let c = network(vec![vec![0; 3]; 3]);
    let solution = edmonds_karp(&c).unwrap();

    assert_eq!(solution.total_flow(), 0);
    assert_eq!(solution.steps(), 1);
    assert_eq!(solution.cut(), &[0]);
    assert!(solution.paths().is_empty());
    assert_eq!(solution.flow().rows(), &[vec![0; 3], vec![0; 3], vec![0; 3]]);
}

#[test]
fn unreachable_sink() {
    let c = network(vec![vec![0, 4, 0], vec![0, 0, 0], vec![0, 9, 0]]);
    let solution = edmonds_karp(&c).unwrap();

    assert_eq!(solution.total_flow(), 0);
    assert_eq!(solution.steps(), 1);
    assert_eq!(solution.cut(), &[0, 1]);
}

#[test]
fn cycle_terminates() {
    let c = network(vec![vec![0, 5, 0], vec![5, 0, 5], vec![0, 0, 0]]);
    let solution = edmonds_karp(&c).unwrap();

    assert_eq!(solution.total_flow(), 5);
    assert_eq!(solution.steps(), 2);
    assert_eq!(solution.cut(), &[0]);
    assert_eq!(solution.flow().flow(1, 0), 0);
    assert_invariants(&c, &solution);
}

#[test]
fn textbook_network() {
    let c = clrs();
    let solution = EdmondsKarp::<i64>::new().max_flow(&c).unwrap();

    assert_eq!(solution.total_flow(), 23);
    assert_eq!(solution.steps(), 4);
    assert_eq!(solution.cut(), &[0, 1, 2, 4]);
    assert_eq!(solution.cut_capacity(&c), 23);
    assert_eq!(
        solution.paths().iter().map(|p| p.nodes()).collect::<Vec<_>>(),
        vec![vec![0, 1, 3, 5], vec![0, 2, 4, 5], vec![0, 2, 4, 3, 5]]
    );
    assert_invariants(&c, &solution);
}

#[test]
fn petgraph_network_matches_matrix() {
    let mut g = Graph::<(), i64>::new();
    let nodes: Vec<_> = (0..6).map(|_| g.add_node(())).collect();
    for (u, v, cap) in [
        (0, 1, 16),
        (0, 2, 13),
        (1, 3, 12),
        (2, 1, 4),
        (2, 4, 14),
        (3, 2, 9),
        (3, 5, 20),
        (4, 3, 7),
        (4, 5, 4),
    ] {
        g.add_edge(nodes[u], nodes[v], cap);
    }

    let c = CapacityMatrix::from_graph(&g).unwrap();
    assert_eq!(c, clrs());
    assert_eq!(run(&c).unwrap().total_flow(), 23);
}

#[test]
fn parses_and_runs_text_input() {
    let c = parse_network::<i64>("3\n0 5 0\n5 0 5\n0 0 0\n").unwrap();
    let solution = run(&c).unwrap();

    assert_eq!(
        solution.to_string(),
        "Max Flow: 5\nCut: 0\nSteps: 2\n0 5 0\n0 0 5\n0 0 0\n"
    );
}

#[test]
fn reruns_are_identical() {
    let c = clrs();
    assert_eq!(edmonds_karp(&c).unwrap(), edmonds_karp(&c).unwrap());
}

#[test]
fn random_networks_satisfy_flow_invariants() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let c = random_network(&mut rng);
        let solution = edmonds_karp(&c).unwrap();

        assert_invariants(&c, &solution);
        assert_eq!(solution, edmonds_karp(&c).unwrap());
    }
}
