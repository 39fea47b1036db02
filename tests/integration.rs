mod common;

use common::*;
use kumitate::prelude::*;
use serde_json::json;
use std::fs;

#[test]
fn test_spec_file_with_project_type() {
    let json = r#"{
        "width": [1, 10],
        "height": [15, 20],
        "density": 0.8,
        "seed": 8022432027272689264,
        "projectType": "swinject"
    }"#;
    let document = SpecDocument::from_json(json).unwrap();
    assert_eq!(document.graph.width, SizeRange::new(1, 10));
    assert_eq!(document.graph.height, SizeRange::new(15, 20));
    assert_eq!(document.graph.density, 0.8);
    assert_eq!(document.graph.seed, 8022432027272689264);
    assert_eq!(document.selected_backends(), vec![BackendKind::Swinject]);
}

#[test]
fn test_spec_file_with_backend_list() {
    let json = r#"{
        "width": [2, 3], "height": [2, 2], "density": 0.5, "seed": 1,
        "backends": ["cleanse", "swiftDependencies", "cleanse", "carpenter"]
    }"#;
    let document = SpecDocument::from_json(json).unwrap();
    assert_eq!(
        document.selected_backends(),
        vec![
            BackendKind::Cleanse,
            BackendKind::SwiftDependencies,
            BackendKind::Carpenter
        ]
    );
}

#[test]
fn test_spec_file_without_backends_selects_all() {
    let json = r#"{ "width": [1, 1], "height": [1, 1], "density": 0.0, "seed": 0 }"#;
    let document = SpecDocument::from_json(json).unwrap();
    assert_eq!(document.backends, None);
    assert_eq!(document.selected_backends(), BackendKind::ALL.to_vec());
}

#[test]
fn test_spec_file_errors() {
    let malformed = SpecDocument::from_json(r#"{ "width": [1, 2] "#);
    assert!(matches!(malformed, Err(SpecError::Parse(_))));

    let unknown_backend = SpecDocument::from_json(
        r#"{ "width": [1, 1], "height": [1, 1], "density": 0.0, "seed": 0, "projectType": "dagger" }"#,
    );
    assert!(matches!(unknown_backend, Err(SpecError::Parse(_))));

    let invalid = SpecDocument::from_json(
        r#"{ "width": [3, 1], "height": [1, 1], "density": 0.0, "seed": 0 }"#,
    );
    assert_eq!(
        invalid.unwrap_err(),
        SpecError::InvalidRange {
            field: "width",
            min: 3,
            max: 1
        }
    );

    let missing = SpecDocument::from_file("/definitely/not/here.spec");
    assert!(matches!(missing, Err(SpecError::Io { .. })));
}

#[test]
fn test_spec_file_round_trips_through_disk() {
    let path = std::env::temp_dir().join(format!("kumitate-{}.spec", std::process::id()));
    let document = SpecDocument {
        graph: fixed_spec(2, 3, 0.25, 77),
        backends: Some(BackendSelection::One(BackendKind::Needle)),
    };
    fs::write(&path, serde_json::to_string_pretty(&document).unwrap()).unwrap();

    let loaded = SpecDocument::from_file(&path).unwrap();
    fs::remove_file(&path).ok();
    assert_eq!(loaded, document);
}

#[test]
fn test_render_all_matches_individual_renders() {
    init_tracing();
    let workload = ProjectGenerator::builder(irregular_spec(21))
        .build()
        .generate()
        .unwrap();
    let all = workload.render_all(&BackendKind::ALL);
    assert_eq!(all.len(), BackendKind::ALL.len());
    for (kind, result) in BackendKind::ALL.into_iter().zip(all) {
        let project = result.unwrap();
        assert_eq!(project.backend, kind);
        assert_eq!(project, workload.render(kind).unwrap());
    }

    // A backend's text does not depend on what else was rendered with it.
    let alone = workload.render_all(&[BackendKind::Carpenter]);
    let last = workload.render_all(&BackendKind::ALL).pop().unwrap();
    assert_eq!(alone.into_iter().next().unwrap().unwrap(), last.unwrap());
}

#[test]
fn test_same_seed_same_files() {
    let generate = || {
        ProjectGenerator::builder(irregular_spec(34))
            .with_benchmark_harness(true)
            .build()
            .generate()
            .unwrap()
            .render_all(&BackendKind::ALL)
    };
    assert_eq!(generate(), generate());
}

#[test]
fn test_output_file_names() {
    assert_eq!(BackendKind::Simple.file_name("big"), "big-simple.swift");
    assert_eq!(
        BackendKind::SwiftDependencies.file_name("big"),
        "big-swift-dependencies.swift"
    );
    let workload = ProjectGenerator::builder(fixed_spec(1, 1, 0.0, 0))
        .build()
        .generate()
        .unwrap();
    let project = workload.render(BackendKind::Needle).unwrap();
    assert_eq!(project.file_name("tiny"), "tiny-needle.swift");
}

#[test]
fn test_backend_ids_parse() {
    for kind in BackendKind::ALL {
        assert_eq!(kind.id().parse::<BackendKind>(), Ok(kind));
        assert_eq!(kind.to_string(), kind.id());
        assert_eq!(serde_json::to_value(kind).unwrap(), json!(kind.id()));
    }
    assert!("dagger".parse::<BackendKind>().is_err());
}

#[test]
fn test_backend_styles() {
    use kumitate::backend::ContainerStyle::*;
    let styles: Vec<ContainerStyle> = BackendKind::ALL.iter().map(|k| k.style()).collect();
    assert_eq!(
        styles,
        vec![
            FlatMap,
            Registry,
            Registry,
            Registry,
            PropertyGraph,
            PropertyGraph,
            PropertyGraph
        ]
    );
}

#[test]
fn test_graph_json_export() {
    let graph = graph(&[0, 1, 2], &[(0, 1), (0, 2)]);
    assert_eq!(
        serde_json::to_value(&graph).unwrap(),
        json!({ "vertices": [0, 1, 2], "edges": [[0, 1], [0, 2]] })
    );
}

#[test]
fn test_graph_dot_export() {
    let workload = ProjectGenerator::builder(fixed_spec(1, 2, 1.0, 0))
        .build()
        .generate()
        .unwrap();
    assert_eq!(
        workload.to_dot(),
        "strict digraph {\n    Mock_0\n    Mock_1\n\n    Mock_0 -> Mock_1\n}\n"
    );
}

#[cfg(unix)]
#[test]
fn test_pipe_to_reports_exit_of_child_that_closes_stdin() {
    // Larger than a pipe buffer, so the write fails once the child exits.
    let dot = "x".repeat(4 << 20);
    let status = kumitate::graph::pipe_to(std::process::Command::new("sh").args(["-c", "exit 3"]), &dot)
        .unwrap();
    assert_eq!(status.code(), Some(3));
}

#[cfg(unix)]
#[test]
fn test_pipe_to_feeds_the_whole_document() {
    let workload = ProjectGenerator::builder(irregular_spec(3))
        .build()
        .generate()
        .unwrap();
    let dot = workload.to_dot();
    let script = format!("test \"$(wc -c)\" -eq {}", dot.len());
    let status = kumitate::graph::pipe_to(std::process::Command::new("sh").args(["-c", &script]), &dot)
        .unwrap();
    assert!(status.success());
}

#[test]
fn test_pipe_to_reports_missing_program() {
    let result = kumitate::graph::pipe_to(
        &mut std::process::Command::new("kumitate-no-such-program"),
        "strict digraph {}\n",
    );
    assert!(result.is_err());
}
