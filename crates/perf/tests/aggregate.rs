use std::fs;
use std::path::Path;

use graph_perf::prelude::*;

fn write_log(path: &Path, count: usize) {
    let mut content = String::from("Loading Matrix-market coordinate-formatted graph ...\n");
    for i in 0..count {
        content.push_str(&format!(
            "__________________________\n--------------------------\nRun {i} elapsed: {}.5000 ms\n Advance Time: {}.2500 ms\n",
            i * 10,
            i
        ));
    }
    fs::write(path, content).unwrap();
}

fn dataset(root: &Path, name: &str, udir: usize, dir: usize) {
    let path = root.join(name);
    fs::create_dir_all(&path).unwrap();
    write_log(&path.join(format!("{name}.UDIR.txt")), udir);
    write_log(&path.join(format!("{name}.DIR.txt")), dir);
}

#[test]
fn matrices_per_dataset_and_direction() {
    let root = tempfile::tempdir().unwrap();
    dataset(root.path(), "ds", 3, 6);
    dataset(root.path(), "other", 9, 3);

    let timings = Aggregator::new(3).aggregate(root.path()).unwrap();

    assert_eq!(timings.keys().collect::<Vec<_>>(), vec!["ds", "other"]);

    let ds = &timings["ds"];
    assert_eq!(ds.get(Direction::Undirected).shape(), (3, 1));
    assert_eq!(ds.get(Direction::Directed).shape(), (3, 2));
    assert_eq!(ds.directed.values(), &[0.25, 1.25, 2.25, 3.25, 4.25, 5.25]);
    assert_eq!(ds.directed.row(2), &[4.25, 5.25]);

    assert_eq!(timings["other"].undirected.shape(), (3, 3));
}

#[test]
fn non_divisible_sample_count_fails() {
    let root = tempfile::tempdir().unwrap();
    dataset(root.path(), "ds", 3, 7);

    let err = Aggregator::new(3).aggregate(root.path()).unwrap_err();

    assert!(matches!(err, Error::Reshape { samples: 7, rows: 3 }));
}

#[test]
fn nested_leaves_are_found() {
    let root = tempfile::tempdir().unwrap();
    dataset(&root.path().join("NORCM_SSSP"), "a", 2, 2);
    dataset(&root.path().join("NORCM_SSSP").join("web"), "b", 4, 2);

    let timings = Aggregator::new(2).aggregate(root.path()).unwrap();

    assert_eq!(timings.len(), 2);
    assert_eq!(timings["b"].undirected.shape(), (2, 2));
}

#[test]
fn same_dataset_in_two_branches() {
    let root = tempfile::tempdir().unwrap();
    dataset(&root.path().join("NORCM_SSSP"), "ds", 3, 3);
    dataset(&root.path().join("RCM_SSSP"), "ds", 3, 3);

    let err = Aggregator::new(3).aggregate(root.path()).unwrap_err();

    match err {
        Error::DuplicateDataset { name, first, second } => {
            assert_eq!(name, "ds");
            assert!(first.ends_with("NORCM_SSSP/ds"));
            assert!(second.ends_with("RCM_SSSP/ds"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn root_without_subdirectories_is_a_dataset() {
    let root = tempfile::tempdir().unwrap();
    let ds = root.path().join("ds");
    dataset(root.path(), "ds", 3, 3);

    let timings = Aggregator::new(3).aggregate(&ds).unwrap();

    assert_eq!(timings.keys().collect::<Vec<_>>(), vec!["ds"]);
}

#[test]
fn custom_marker_and_json_output() {
    let root = tempfile::tempdir().unwrap();
    dataset(root.path(), "ds", 2, 2);

    let timings = Aggregator::new(2)
        .with_scanner(Scanner::new("elapsed"))
        .aggregate(root.path())
        .unwrap();

    let json = serde_json::to_value(&timings).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "ds": {
                "UDIR": { "shape": [2, 1], "rows": [[0.5], [10.5]] },
                "DIR": { "shape": [2, 1], "rows": [[0.5], [10.5]] },
            }
        })
    );
}

#[test]
fn missing_root() {
    let root = tempfile::tempdir().unwrap();

    let err = Aggregator::new(3)
        .aggregate(root.path().join("missing"))
        .unwrap_err();

    assert!(matches!(err, Error::Walk { .. }));
}
