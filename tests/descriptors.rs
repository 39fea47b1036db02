mod common;

use common::*;
use kumitate::descriptor::{self, ClassDescriptor, Parameter};
use kumitate::prelude::*;
use std::sync::Arc;

fn order(set: &DescriptorSet) -> Vec<VertexId> {
    set.classes().iter().map(|c| c.name()).collect()
}

#[test]
fn test_dependencies_come_first() {
    let set = classes(&[0, 1, 2, 3], &[(0, 2), (1, 2), (2, 3)]);
    assert_eq!(order(&set), vec![3, 2, 0, 1]);

    for class in set.classes() {
        let position = set.position(class.name()).unwrap();
        for dependency in class.dependency_names() {
            assert!(set.position(dependency).unwrap() < position);
        }
    }
}

#[test]
fn test_ready_vertices_go_lowest_id_first() {
    let set = classes(&[5, 3, 9, 1], &[]);
    assert_eq!(order(&set), vec![1, 3, 5, 9]);
}

#[test]
fn test_full_density_construction_order() {
    let workload = ProjectGenerator::builder(fixed_spec(2, 3, 1.0, 42))
        .build()
        .generate()
        .unwrap();
    assert_eq!(order(workload.classes()), vec![4, 5, 2, 3, 0, 1]);

    let sources: Vec<VertexId> = workload.classes().sources().iter().map(|c| c.name()).collect();
    assert_eq!(sources, vec![0, 1]);
}

#[test]
fn test_descriptor_dependencies_follow_edge_order() {
    let set = classes(&[0, 1, 2, 3], &[(0, 3), (0, 1), (0, 2)]);
    let root = set.get(0).unwrap();
    assert_eq!(root.dependency_names().collect::<Vec<_>>(), vec![3, 1, 2]);
}

#[test]
fn test_descriptors_share_dependencies() {
    let set = diamond();
    let left = set.get(1).unwrap();
    let right = set.get(2).unwrap();
    assert!(Arc::ptr_eq(&left.dependencies()[0], &right.dependencies()[0]));
    assert!(Arc::ptr_eq(&left.dependencies()[0], set.get(3).unwrap()));
}

#[test]
fn test_duplicate_edges_get_numbered_labels() {
    let set = classes(&[0, 1, 2], &[(0, 1), (0, 2), (0, 1), (0, 1)]);
    let labels: Vec<String> = set
        .get(0)
        .unwrap()
        .parameters()
        .into_iter()
        .map(|p| p.label)
        .collect();
    assert_eq!(labels, vec!["mock_1", "mock_2", "mock_1_1", "mock_1_2"]);
}

#[test]
fn test_sources_are_unreferenced_vertices() {
    let set = classes(&[0, 1, 2, 3, 4], &[(0, 1), (3, 1), (1, 2)]);
    let sources: Vec<VertexId> = set.sources().iter().map(|c| c.name()).collect();
    assert_eq!(sources, vec![0, 3, 4]);
}

#[test]
fn test_cycles_are_reported() {
    let graph = graph(&[0, 1, 2], &[(0, 1), (1, 2), (2, 0)]);
    assert_eq!(
        descriptor::build(&graph).unwrap_err(),
        GraphError::Cycle {
            remaining: vec![0, 1, 2]
        }
    );
}

#[test]
fn test_cycle_report_excludes_orderable_vertices() {
    let graph = graph(&[0, 1, 2, 3], &[(1, 0), (0, 1), (2, 3)]);
    assert_eq!(
        descriptor::build(&graph).unwrap_err(),
        GraphError::Cycle {
            remaining: vec![0, 1]
        }
    );
}

#[test]
fn test_from_parts_rejects_malformed_graphs() {
    assert_eq!(
        DirectedAcyclicGraph::from_parts(vec![0, 1, 0], vec![]).unwrap_err(),
        GraphError::DuplicateVertex(0)
    );
    assert_eq!(
        DirectedAcyclicGraph::from_parts(vec![0, 1], vec![Edge::new(1, 1)]).unwrap_err(),
        GraphError::SelfLoop(1)
    );
    assert_eq!(
        DirectedAcyclicGraph::from_parts(vec![0, 1], vec![Edge::new(0, 7)]).unwrap_err(),
        GraphError::UnknownVertex {
            from: 0,
            to: 7,
            missing: 7
        }
    );
}

#[test]
fn test_graph_queries() {
    let graph = graph(&[0, 1, 2, 3], &[(0, 1), (0, 2), (1, 3), (2, 3)]);
    assert_eq!(graph.successors(0), &[1, 2]);
    assert!(graph.successors(3).is_empty());
    assert_eq!(graph.in_degree(3), 2);
    assert_eq!(graph.in_degree(0), 0);
    assert!(graph.contains(2));
    assert!(!graph.contains(4));
}

#[test]
fn test_validate_reports_dangling_dependency() {
    let missing = Arc::new(ClassDescriptor::leaf(1));
    let root = Arc::new(ClassDescriptor::new(0, vec![missing]));
    let set = DescriptorSet::new(vec![Arc::clone(&root)], vec![root]);
    assert_eq!(
        set.validate(),
        Err(RenderError::UnresolvedReference {
            class: 0,
            missing: 1
        })
    );
}

#[test]
fn test_validate_reports_unknown_source() {
    let leaf = Arc::new(ClassDescriptor::leaf(0));
    let stray = Arc::new(ClassDescriptor::leaf(4));
    let set = DescriptorSet::new(vec![leaf], vec![stray]);
    assert_eq!(set.validate(), Err(RenderError::UnknownSource(4)));
}

#[test]
fn test_validate_reports_unlisted_source() {
    let leaf = Arc::new(ClassDescriptor::leaf(1));
    let root = Arc::new(ClassDescriptor::new(0, vec![Arc::clone(&leaf)]));
    let set = DescriptorSet::new(vec![leaf, root], Vec::new());
    assert_eq!(set.validate(), Err(RenderError::MissingSource(0)));
}

#[test]
fn test_validate_reports_source_with_dependents() {
    let leaf = Arc::new(ClassDescriptor::leaf(1));
    let root = Arc::new(ClassDescriptor::new(0, vec![Arc::clone(&leaf)]));
    let set = DescriptorSet::new(vec![Arc::clone(&leaf), Arc::clone(&root)], vec![root, leaf]);
    assert_eq!(set.validate(), Err(RenderError::ReferencedSource(1)));
}

#[test]
fn test_built_sets_pass_validation() {
    let set = classes(&[0, 1, 2, 3, 4], &[(0, 2), (1, 2), (2, 3)]);
    assert_eq!(set.validate(), Ok(()));
    let sources: Vec<VertexId> = set.sources().iter().map(|s| s.name()).collect();
    assert_eq!(sources, vec![0, 1, 4]);
}

#[test]
fn test_parameters_name_their_dependency() {
    let set = diamond();
    assert_eq!(
        set.get(0).unwrap().parameters(),
        vec![
            Parameter {
                label: "mock_1".to_string(),
                dependency: 1
            },
            Parameter {
                label: "mock_2".to_string(),
                dependency: 2
            },
        ]
    );
    assert!(set.get(3).unwrap().parameters().is_empty());
}
