use clap::Parser;
use kumitate::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;
use tracing::Level;

/// Generates a seeded dependency graph and renders it for each DI backend
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the graph spec JSON file
    #[arg(long, value_name = "FILE")]
    spec: PathBuf,

    /// Overrides the seed stored in the spec
    #[arg(long)]
    seed: Option<u64>,

    /// Renders the spec's selected backends into this directory as `<stem>-<backend>.swift`
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    #[arg(long, value_name = "FILE")]
    simple_out: Option<PathBuf>,
    #[arg(long, value_name = "FILE")]
    swinject_out: Option<PathBuf>,
    #[arg(long, value_name = "FILE")]
    factory_out: Option<PathBuf>,
    #[arg(long, value_name = "FILE")]
    swift_dependencies_out: Option<PathBuf>,
    #[arg(long, value_name = "FILE")]
    cleanse_out: Option<PathBuf>,
    #[arg(long, value_name = "FILE")]
    needle_out: Option<PathBuf>,
    #[arg(long, value_name = "FILE")]
    carpenter_out: Option<PathBuf>,

    /// Writes the vertex and edge lists as JSON
    #[arg(long, value_name = "FILE")]
    graph_out: Option<PathBuf>,

    /// Writes the graph as a GraphViz document
    #[arg(long, value_name = "FILE")]
    dot_out: Option<PathBuf>,

    /// Renders the graph to a JPEG with the `dot` program
    #[arg(long, value_name = "FILE")]
    image_out: Option<PathBuf>,

    /// Prepend a package-benchmark suite to every generated file
    #[arg(long)]
    benchmark_harness: bool,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Every (backend, destination) pair requested on the command line.
    fn targets(&self, document: &SpecDocument) -> Vec<(BackendKind, PathBuf)> {
        let explicit = [
            (BackendKind::Simple, &self.simple_out),
            (BackendKind::Swinject, &self.swinject_out),
            (BackendKind::Factory, &self.factory_out),
            (BackendKind::SwiftDependencies, &self.swift_dependencies_out),
            (BackendKind::Cleanse, &self.cleanse_out),
            (BackendKind::Needle, &self.needle_out),
            (BackendKind::Carpenter, &self.carpenter_out),
        ];
        let mut targets: Vec<(BackendKind, PathBuf)> = explicit
            .into_iter()
            .filter_map(|(kind, path)| path.clone().map(|p| (kind, p)))
            .collect();

        if let Some(dir) = &self.out_dir {
            let stem = self
                .spec
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("project");
            for kind in document.selected_backends() {
                if !targets.iter().any(|(k, _)| *k == kind) {
                    targets.push((kind, dir.join(kind.file_name(stem))));
                }
            }
        }
        targets
    }
}

fn main() {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        exit_with_error(&e.to_string());
    }
}

fn run(cli: Cli) -> Result<()> {
    let total_start = Instant::now();

    // --- 1. Spec ---
    let document = SpecDocument::from_file(&cli.spec)?;
    let targets = cli.targets(&document);
    if targets.is_empty()
        && cli.graph_out.is_none()
        && cli.dot_out.is_none()
        && cli.image_out.is_none()
    {
        exit_with_error("Nothing to generate: pass --out-dir or at least one --<backend>-out.");
    }

    // --- 2. Graph and descriptors ---
    let generate_start = Instant::now();
    let mut builder = ProjectGenerator::builder(document.graph)
        .with_benchmark_harness(cli.benchmark_harness);
    if let Some(seed) = cli.seed {
        builder = builder.with_seed(seed);
    }
    let generator = builder.build();
    let workload = generator.generate()?;
    let generate_duration = generate_start.elapsed();

    println!(
        "Generated graph (seed {}): {} classes, {} dependencies, {} roots",
        generator.spec().seed,
        workload.graph().vertex_count(),
        workload.graph().edge_count(),
        workload.classes().sources().len()
    );

    // --- 3. Graph exports ---
    if let Some(path) = &cli.graph_out {
        write_file(path, &serde_json::to_string_pretty(workload.graph())?)?;
    }
    if let Some(path) = &cli.dot_out {
        write_file(path, &workload.to_dot())?;
    }
    if let Some(path) = &cli.image_out {
        render_image(&workload.to_dot(), path)?;
    }

    // --- 4. Backends ---
    let render_start = Instant::now();
    let kinds: Vec<BackendKind> = targets.iter().map(|(kind, _)| *kind).collect();
    let results = workload.render_all(&kinds);
    let render_duration = render_start.elapsed();

    let mut failures = 0;
    for ((kind, path), result) in targets.iter().zip(results) {
        match result {
            Ok(project) => {
                write_file(path, &project.source)?;
                println!("  -> {:<20} {}", kind.id(), path.display());
            }
            Err(e) => {
                failures += 1;
                tracing::error!(backend = kind.id(), error = %e, "render failed");
                eprintln!("  -> {:<20} FAILED: {}", kind.id(), e);
            }
        }
    }

    println!("\n--- Summary ---");
    println!("Graph Generation:     {:?}", generate_duration);
    println!("Rendering:            {:?}", render_duration);
    println!("Total Execution:      {:?}", total_start.elapsed());

    if failures > 0 {
        exit_with_error(&format!("{} backend(s) failed to render", failures));
    }
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}

/// Pipes the GraphViz document through `dot -Tjpg`.
fn render_image(dot: &str, path: &Path) -> Result<()> {
    let status = kumitate::graph::pipe_to(Command::new("dot").arg("-Tjpg").arg("-o").arg(path), dot)
        .map_err(|e| format!("Could not run 'dot' (is GraphViz installed?): {}", e))?;
    if !status.success() {
        return Err(format!("'dot' exited with {}", status).into());
    }
    Ok(())
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
