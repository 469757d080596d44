use callgraph_evolution::analysis::{compute_scc, SccResult};
use callgraph_evolution::graph::Digraph;
use pretty_assertions::assert_eq;

fn graph(n: usize, arcs: &[(usize, usize)]) -> Digraph {
    let mut g = Digraph::new(n);
    for &(v, w) in arcs {
        g.add_arc(v, w).unwrap();
    }
    g
}

fn sorted_sizes(scc: &SccResult) -> Vec<usize> {
    let mut sizes = scc.component_sizes();
    sizes.sort_unstable();
    sizes
}

#[test]
fn test_three_cycle_is_one_component() {
    let scc = compute_scc(&graph(3, &[(0, 1), (1, 2), (2, 0)]));

    assert_eq!(scc.count(), 1);
    assert_eq!(scc.components(), vec![vec![0, 1, 2]]);
    assert_eq!(scc.largest_component_size(), 3);
}

#[test]
fn test_dag_is_all_singletons() {
    let scc = compute_scc(&graph(3, &[(0, 1), (1, 2)]));

    assert_eq!(scc.count(), 3);
    assert_eq!(sorted_sizes(&scc), vec![1, 1, 1]);
    assert_eq!(scc.largest_component_size(), 1);
}

#[test]
fn test_two_cycle_plus_isolated_vertex() {
    let scc = compute_scc(&graph(3, &[(0, 1), (1, 0)]));

    assert_eq!(scc.count(), 2);
    assert_eq!(sorted_sizes(&scc), vec![1, 2]);
    assert!(scc.same_component(0, 1));
    assert!(!scc.same_component(0, 2));
}

#[test]
fn test_two_cycles_joined_by_bridge() {
    // {0,1} -> {2,3,4}, plus 5 calling into the second cycle
    let g = graph(
        6,
        &[(0, 1), (1, 0), (1, 2), (2, 3), (3, 4), (4, 2), (5, 4)],
    );
    let scc = compute_scc(&g);

    assert_eq!(scc.count(), 3);
    assert_eq!(sorted_sizes(&scc), vec![1, 2, 3]);
    assert!(scc.same_component(2, 4));
    assert!(!scc.same_component(1, 2));
}

#[test]
fn test_parallel_arcs_do_not_change_partition() {
    let plain = compute_scc(&graph(2, &[(0, 1), (1, 0)]));
    let doubled = compute_scc(&graph(2, &[(0, 1), (0, 1), (1, 0), (1, 0)]));
    assert_eq!(plain, doubled);
}

#[test]
fn test_reverse_has_same_partition() {
    let g = graph(5, &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4)]);
    let forward = compute_scc(&g);
    let backward = compute_scc(&g.reverse());

    assert_eq!(forward.count(), backward.count());
    for v in g.vertices() {
        for w in g.vertices() {
            assert_eq!(forward.same_component(v, w), backward.same_component(v, w));
        }
    }
}

#[test]
fn test_repeated_runs_are_identical() {
    let g = graph(6, &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 3), (5, 5)]);
    assert_eq!(compute_scc(&g), compute_scc(&g));
}

#[test]
fn test_long_chain_does_not_overflow_stack() {
    let n = 200_000;
    let mut g = Digraph::new(n);
    for v in 0..n - 1 {
        g.add_arc(v, v + 1).unwrap();
    }

    assert_eq!(compute_scc(&g).count(), n);

    // closing the chain turns it into a single component
    g.add_arc(n - 1, 0).unwrap();
    let scc = compute_scc(&g);
    assert_eq!(scc.count(), 1);
    assert_eq!(scc.largest_component_size(), n);
}
