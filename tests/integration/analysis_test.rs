//! Integration tests for the full deadphp analysis pipeline.
//!
//! Each test builds a small PHP corpus in a temp directory and runs
//! discovery, tokenization and both analysis phases through the library
//! API, the same way the binary does.

use deadphp::analysis::{DeclarationIndexer, UsageEliminator};
use deadphp::discovery::FileFinder;
use deadphp::index::{DeclarationIndex, ParallelTableBuilder, TableBuilder};
use std::fs;
use std::path::Path;

/// Write a corpus into `root` and run the whole pipeline over it.
fn analyze(root: &Path, files: &[(&str, &str)]) -> DeclarationIndex {
    for (name, contents) in files {
        let path = root.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    let found = FileFinder::new().find_files(root);
    let mut builder = TableBuilder::new();
    for file in &found {
        builder.process_file(file);
    }
    let table = builder.build();

    let index = DeclarationIndexer::new().index(&table);
    UsageEliminator::new().eliminate(&table, index)
}

fn unused_names(index: &DeclarationIndex) -> Vec<String> {
    let mut names: Vec<_> = index.iter().map(|(name, _)| name.to_string()).collect();
    names.sort();
    names
}

#[test]
fn test_declaration_only_function_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let unused = analyze(
        dir.path(),
        &[("lib.php", "<?php\n\nfunction orphan()\n{\n    return 1;\n}\n")],
    );

    assert_eq!(unused_names(&unused), vec!["orphan"]);
    let sites = unused.sites("orphan").unwrap();
    assert_eq!(sites.len(), 1);
    assert_eq!(sites[0].line, 3);
    assert!(sites[0].file.ends_with("lib.php"));
}

#[test]
fn test_any_occurrence_suppresses_reporting() {
    let dir = tempfile::tempdir().unwrap();
    let unused = analyze(
        dir.path(),
        &[
            ("a.php", "<?php\nfunction foo()\n{\n}\n"),
            ("b.php", "<?php\n$result = foo();\n"),
        ],
    );

    assert!(unused.sites("foo").is_none());
}

#[test]
fn test_use_in_same_file_suppresses() {
    let dir = tempfile::tempdir().unwrap();
    let unused = analyze(
        dir.path(),
        &[("a.php", "<?php\nfunction foo()\n{\n}\nfoo();\n")],
    );

    assert!(unused.is_empty());
}

#[test]
fn test_multiple_declarations_one_use() {
    let dir = tempfile::tempdir().unwrap();
    let unused = analyze(
        dir.path(),
        &[
            ("mod_a.php", "<?php\nfunction bar()\n{\n}\n"),
            ("mod_b.php", "<?php\nfunction bar()\n{\n}\n"),
            ("caller.php", "<?php\nbar();\n"),
        ],
    );

    assert!(unused.sites("bar").is_none());
}

#[test]
fn test_unused_name_with_multiple_declarations_reports_every_site() {
    let dir = tempfile::tempdir().unwrap();
    let unused = analyze(
        dir.path(),
        &[
            ("mod_a.php", "<?php\nfunction bar()\n{\n}\n"),
            ("mod_b.php", "<?php\nfunction bar()\n{\n}\n"),
        ],
    );

    assert_eq!(unused.sites("bar").unwrap().len(), 2);
    assert_eq!(unused.site_count(), 2);
}

#[test]
fn test_mixed_corpus() {
    let dir = tempfile::tempdir().unwrap();
    let unused = analyze(
        dir.path(),
        &[
            (
                "app/helpers.php",
                "<?php\nfunction used_helper()\n{\n}\nfunction dead_helper()\n{\n}\n",
            ),
            (
                "app/main.php",
                "<?php\nrequire 'helpers.php';\nused_helper();\n",
            ),
            (
                "legacy/old.php",
                "<?php\nfunction forgotten()\n{\n    used_helper();\n}\n",
            ),
        ],
    );

    assert_eq!(unused_names(&unused), vec!["dead_helper", "forgotten"]);
}

#[test]
fn test_files_in_subdirectories_are_scanned() {
    let dir = tempfile::tempdir().unwrap();
    let unused = analyze(
        dir.path(),
        &[
            ("a/b/c/deep.php", "<?php\nfunction buried()\n{\n}\n"),
            ("top.php", "<?php\nburied();\n"),
        ],
    );

    assert!(unused.is_empty());
}

#[test]
fn test_non_php_files_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let unused = analyze(
        dir.path(),
        &[
            ("a.php", "<?php\nfunction foo()\n{\n}\n"),
            // A use of foo in a non-PHP file must not count.
            ("notes.txt", "foo();"),
            ("index.html", "<p>foo()</p>"),
        ],
    );

    assert_eq!(unused_names(&unused), vec!["foo"]);
}

#[test]
fn test_broken_file_does_not_abort_the_run() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("binary.php"), [0xffu8, 0xfe, 0x00, 0x01]).unwrap();
    fs::write(dir.path().join("empty.php"), "").unwrap();

    let unused = analyze(
        dir.path(),
        &[("ok.php", "<?php\nfunction orphan()\n{\n}\n")],
    );

    assert_eq!(unused_names(&unused), vec!["orphan"]);
}

#[test]
fn test_order_independence_of_the_pipeline() {
    let corpus = [
        ("a.php", "<?php\nfunction foo()\n{\n}\nfunction unused_a()\n{\n}\n"),
        ("b.php", "<?php\nfunction bar()\n{\n    foo();\n}\n"),
        ("c.php", "<?php\nbar();\nfunction unused_c()\n{\n}\n"),
    ];
    let mut reversed = corpus;
    reversed.reverse();

    let dir_fwd = tempfile::tempdir().unwrap();
    let dir_bwd = tempfile::tempdir().unwrap();
    let forward = analyze(dir_fwd.path(), &corpus);
    let backward = analyze(dir_bwd.path(), &reversed);

    assert_eq!(unused_names(&forward), unused_names(&backward));
    assert_eq!(unused_names(&forward), vec!["unused_a", "unused_c"]);
}

#[test]
fn test_parallel_table_matches_sequential_result() {
    let corpus: &[(&str, &str)] = &[
        ("a.php", "<?php\nfunction foo()\n{\n}\nfunction dead()\n{\n}\n"),
        ("b.php", "<?php\nfoo();\n"),
        ("empty.php", ""),
    ];

    let dir = tempfile::tempdir().unwrap();
    for (name, contents) in corpus {
        fs::write(dir.path().join(name), contents).unwrap();
    }
    let found = FileFinder::new().find_files(dir.path());

    let mut builder = TableBuilder::new();
    for file in &found {
        builder.process_file(file);
    }
    let sequential = builder.build();
    let parallel = ParallelTableBuilder::new().build_from_files(&found);

    let index_seq = DeclarationIndexer::new().index(&sequential);
    let index_par = DeclarationIndexer::new().index(&parallel);
    let unused_seq = UsageEliminator::new().eliminate(&sequential, index_seq);
    let unused_par = UsageEliminator::new().eliminate(&parallel, index_par);

    assert_eq!(unused_names(&unused_seq), unused_names(&unused_par));
    assert_eq!(unused_names(&unused_seq), vec!["dead"]);
}

#[test]
fn test_html_heavy_template_file() {
    let dir = tempfile::tempdir().unwrap();
    let unused = analyze(
        dir.path(),
        &[
            ("funcs.php", "<?php\nfunction render_header()\n{\n}\n"),
            (
                "page.php",
                "<html>\n<body>\n<?php render_header(); ?>\n<p>static</p>\n</body>\n</html>\n",
            ),
        ],
    );

    assert!(unused.is_empty());
}
