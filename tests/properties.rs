use kumitate::descriptor;
use kumitate::graph::generate_layered;
use kumitate::prelude::*;
use proptest::prelude::*;

fn spec_strategy() -> impl Strategy<Value = GraphSpec> {
    (
        1usize..5,
        0usize..4,
        1usize..6,
        0usize..4,
        0.0f64..=1.0,
        any::<u64>(),
    )
        .prop_map(|(width, extra_width, height, extra_height, density, seed)| {
            GraphSpec::new(
                SizeRange::new(width, width + extra_width),
                SizeRange::new(height, height + extra_height),
                density,
                seed,
            )
        })
}

proptest! {
    #[test]
    fn generation_is_deterministic(spec in spec_strategy()) {
        let a = kumitate::graph::generate(&spec, &mut SeededRng::new(spec.seed)).unwrap();
        let b = kumitate::graph::generate(&spec, &mut SeededRng::new(spec.seed)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn edges_join_consecutive_ranks(spec in spec_strategy()) {
        let layered = generate_layered(&spec, &mut SeededRng::new(spec.seed)).unwrap();
        for edge in layered.graph.edges() {
            let from = layered.rank_of(edge.from).unwrap();
            let to = layered.rank_of(edge.to).unwrap();
            prop_assert_eq!(to, from + 1);
        }
    }

    #[test]
    fn descriptors_cover_the_graph_in_dependency_order(spec in spec_strategy()) {
        let graph = kumitate::graph::generate(&spec, &mut SeededRng::new(spec.seed)).unwrap();
        let set = descriptor::build(&graph).unwrap();
        prop_assert_eq!(set.len(), graph.vertex_count());
        prop_assert!(set.validate().is_ok());

        for class in set.classes() {
            let names: Vec<VertexId> = class.dependency_names().collect();
            prop_assert_eq!(names.as_slice(), graph.successors(class.name()));
            let position = set.position(class.name()).unwrap();
            for dependency in names {
                prop_assert!(set.position(dependency).unwrap() < position);
            }
        }

        let sources: Vec<VertexId> = set.sources().iter().map(|c| c.name()).collect();
        prop_assert_eq!(sources, graph.source_vertices());
    }

    #[test]
    fn every_backend_mirrors_the_graph(spec in spec_strategy()) {
        let workload = ProjectGenerator::builder(spec).build().generate().unwrap();
        let set = workload.classes();
        for kind in BackendKind::ALL {
            let plan = kind.renderer().plan(set, &mut SeededRng::derive(spec.seed, kind.stream())).unwrap();
            prop_assert!(plan.verify(set, kind).is_ok());
            prop_assert_eq!(plan.construction_count(), set.len());
            prop_assert_eq!(plan.read_count(), set.len());
            prop_assert!(workload.render(kind).is_ok());
        }
    }
}
