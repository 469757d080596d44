use callgraph_evolution::commands::{
    execute_analyze, execute_build, execute_inspect, validate_analyze_args, validate_build_args,
    AnalyzeArgs, BuildArgs, InspectArgs,
};
use callgraph_evolution::output::read_pajek;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

fn write_traces(dir: &Path) {
    fs::write(
        dir.join("main.cflow"),
        "{   0} main()\n{   1}     init()\n{   1}     loop()\n{   0} loop()\n{   1}     step()\n",
    )
    .unwrap();
    fs::write(
        dir.join("step.cflow"),
        "{   0} step()\n{   1}     loop()\n{   1}     log_msg()\n",
    )
    .unwrap();
    fs::write(dir.join("README"), "not a trace").unwrap();
}

#[test]
fn test_build_from_trace_directory() {
    let work = tempfile::tempdir().unwrap();
    let traces = work.path().join("demo-1.0");
    fs::create_dir(&traces).unwrap();
    write_traces(&traces);

    let args = BuildArgs {
        input: traces.clone(),
        output: work.path().join("data/demo-1.0.net"),
        ..Default::default()
    };
    validate_build_args(&args).unwrap();
    let summary = execute_build(args.clone()).unwrap();

    assert_eq!(summary.files_parsed, 2);
    assert_eq!(summary.vertices, 5);
    assert_eq!(summary.arcs, 5);

    let graph = read_pajek(&args.output).unwrap();
    assert_eq!(graph.label(), Some("demo-1.0"));
    assert_eq!(graph.vertex_count(), 5);
    let main = graph.vertex_index("main").unwrap();
    assert_eq!(graph.out_degree(main), Ok(2));
}

#[test]
fn test_build_fails_without_traces() {
    let work = tempfile::tempdir().unwrap();
    let args = BuildArgs {
        input: work.path().to_path_buf(),
        output: work.path().join("out.net"),
        ..Default::default()
    };

    assert!(execute_build(args).is_err());
}

#[test]
fn test_build_then_analyze() {
    let work = tempfile::tempdir().unwrap();
    let traces = work.path().join("traces");
    fs::create_dir(&traces).unwrap();
    write_traces(&traces);

    let data = work.path().join("data");
    execute_build(BuildArgs {
        input: traces,
        output: data.join("demo-2.4.net"),
        ..Default::default()
    })
    .unwrap();

    // an unreadable graph must not stop the batch
    fs::write(data.join("demo-9.9.net"), "*Vertices 2\n1 \"x\"\n").unwrap();

    let report_path = work.path().join("scc.dat");
    let args = AnalyzeArgs {
        inputs: vec![data.clone()],
        output: report_path.clone(),
        largest_component: true,
        ..Default::default()
    };
    validate_analyze_args(&args).unwrap();
    let summary = execute_analyze(args).unwrap();

    assert_eq!(summary.analyzed, 1);
    assert_eq!(summary.failed, vec![data.join("demo-9.9.net")]);

    let report = fs::read_to_string(&report_path).unwrap();
    let rows: Vec<&str> = report.lines().collect();
    assert_eq!(rows.len(), 2);
    // 5 functions, 5 calls, {loop, step} is the only cycle
    assert_eq!(rows[1], "\"2.4\"\t5\t5\t1.000000\t0.894427\t4\t2");
}

#[test]
fn test_analyze_fail_fast() {
    let work = tempfile::tempdir().unwrap();
    let broken = work.path().join("broken-1.0.net");
    fs::write(&broken, "*Vertices 1\n*Arcs\n1 5\n").unwrap();

    let args = AnalyzeArgs {
        inputs: vec![broken],
        output: work.path().join("scc.dat"),
        fail_fast: true,
        ..Default::default()
    };

    assert!(execute_analyze(args).is_err());
}

#[test]
fn test_analyze_sampling() {
    let work = tempfile::tempdir().unwrap();
    for version in ["1.0", "1.1", "1.2", "1.3"] {
        fs::write(
            work.path().join(format!("demo-{}.net", version)),
            "*Vertices 1\n1 \"main\"\n*Arcs\n",
        )
        .unwrap();
    }

    let report_path = work.path().join("out/scc.dat");
    let summary = execute_analyze(AnalyzeArgs {
        inputs: vec![work.path().to_path_buf()],
        output: report_path.clone(),
        every: 2,
        ..Default::default()
    })
    .unwrap();

    assert_eq!(summary.analyzed, 2);
    let report = fs::read_to_string(report_path).unwrap();
    assert!(report.contains("\"1.0\""));
    assert!(report.contains("\"1.2\""));
    assert!(!report.contains("\"1.1\""));
}

#[test]
fn test_build_accepts_dotted_extension() {
    let work = tempfile::tempdir().unwrap();
    let traces = work.path().join("demo-1.1");
    fs::create_dir(&traces).unwrap();
    write_traces(&traces);

    let args = BuildArgs {
        input: traces,
        output: work.path().join("demo-1.1.net"),
        trace_extension: ".cflow".to_string(),
        ..Default::default()
    };
    validate_build_args(&args).unwrap();
    let summary = execute_build(args).unwrap();

    assert_eq!(summary.files_parsed, 2);
    assert_eq!(summary.vertices, 5);
}

/// Stand-in for cflow: prints the source file itself, which holds a trace.
/// Files named `bad.c` make it fail like cflow does on broken input.
#[cfg(unix)]
fn write_fake_cflow(dir: &Path) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let program = dir.join("fake-cflow");
    fs::write(
        &program,
        "#!/bin/sh\n\
         for last; do :; done\n\
         case \"$last\" in *bad.c) echo \"$last: syntax error\" >&2; exit 3;; esac\n\
         cat \"$last\"\n",
    )
    .unwrap();
    fs::set_permissions(&program, fs::Permissions::from_mode(0o755)).unwrap();
    program
}

#[cfg(unix)]
#[test]
fn test_build_from_sources() {
    let work = tempfile::tempdir().unwrap();
    let program = write_fake_cflow(work.path());

    let tree = work.path().join("demo-3.0");
    fs::create_dir_all(tree.join("kernel")).unwrap();
    fs::write(
        tree.join("main.c"),
        "{   0} main()\n{   1}     init()\n{   1}     schedule()\n",
    )
    .unwrap();
    fs::write(
        tree.join("kernel/sched.c"),
        "{   0} schedule()\n{   1}     schedule()\n",
    )
    .unwrap();
    fs::write(tree.join("kernel/bad.c"), "{   0} lost()\n").unwrap();
    fs::write(tree.join("notes.txt"), "{   0} ignored()\n").unwrap();

    let args = BuildArgs {
        input: tree,
        output: work.path().join("data/demo-3.0.net"),
        from_sources: true,
        cflow: Some(program),
        ..Default::default()
    };
    validate_build_args(&args).unwrap();
    let summary = execute_build(args.clone()).unwrap();

    assert_eq!(summary.files_parsed, 2);
    assert_eq!(summary.files_skipped, 1);
    assert_eq!(summary.vertices, 3);
    assert_eq!(summary.arcs, 3);

    let graph = read_pajek(&args.output).unwrap();
    assert_eq!(graph.label(), Some("demo-3.0"));
    assert!(graph.vertex_index("lost").is_err());
    let schedule = graph.vertex_index("schedule").unwrap();
    assert_eq!(graph.neighbors(schedule).unwrap().collect::<Vec<_>>(), vec![schedule]);
}

#[cfg(unix)]
#[test]
fn test_build_from_sources_when_cflow_always_fails() {
    let work = tempfile::tempdir().unwrap();
    let program = write_fake_cflow(work.path());

    let tree = work.path().join("broken");
    fs::create_dir(&tree).unwrap();
    fs::write(tree.join("bad.c"), "int main(void) {").unwrap();

    let args = BuildArgs {
        input: tree,
        output: work.path().join("broken.net"),
        from_sources: true,
        cflow: Some(program),
        ..Default::default()
    };

    let err = execute_build(args.clone()).unwrap_err();
    assert!(err.to_string().contains("No call-flow trace could be parsed"));
    assert!(!args.output.exists());
}

#[test]
fn test_inspect_saved_graph() {
    let work = tempfile::tempdir().unwrap();
    let graph = work.path().join("demo-1.0.net");
    fs::write(
        &graph,
        "*Network demo-1.0\n*Vertices 2\n1 \"main\"\n2 \"exit\"\n*Arcs\n1 2\n",
    )
    .unwrap();

    execute_inspect(InspectArgs {
        file: graph.clone(),
        list: true,
        reverse: true,
    })
    .unwrap();

    let missing = execute_inspect(InspectArgs {
        file: work.path().join("absent.net"),
        ..Default::default()
    });
    assert!(missing.is_err());
}
