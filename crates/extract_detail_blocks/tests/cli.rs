// crates/extract_detail_blocks/tests/cli.rs

#[cfg(test)]
mod integration_cli {
    use assert_cmd::Command;
    use predicates::prelude::*;
    use std::fs;
    use tempfile::TempDir;

    const README: &str = "\
My Project
==========

Intro text.

::

    not printed

Detail
------

Install it::

    pip install thing

.. code-block:: console

    $ thing --help

Usage
~~~~~

Run::

    thing run

Other
-----

::

    also not printed
";

    fn project_dir() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("README.rst"), README).unwrap();
        temp_dir
    }

    #[test]
    fn test_default_input_in_working_directory() {
        let temp_dir = project_dir();
        Command::cargo_bin("extract_detail_blocks")
            .unwrap()
            .current_dir(temp_dir.path())
            .assert()
            .success()
            .stdout("pip install thing\n$ thing --help\nthing run\n");
    }

    #[test]
    fn test_explicit_path_and_separator() {
        let temp_dir = project_dir();
        Command::cargo_bin("extract_detail_blocks")
            .unwrap()
            .arg(temp_dir.path().join("README.rst"))
            .args(["--separator", "\\n--\\n"])
            .assert()
            .success()
            .stdout("pip install thing\n--\n$ thing --help\n--\nthing run\n--\n");
    }

    #[test]
    fn test_other_section_id() {
        let temp_dir = project_dir();
        Command::cargo_bin("extract_detail_blocks")
            .unwrap()
            .current_dir(temp_dir.path())
            .args(["--section", "usage"])
            .assert()
            .success()
            .stdout("thing run\n");
    }

    #[test]
    fn test_missing_input_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        Command::cargo_bin("extract_detail_blocks")
            .unwrap()
            .current_dir(temp_dir.path())
            .assert()
            .failure()
            .code(1)
            .stdout("")
            .stderr(predicate::str::contains("README.rst"));
    }

    #[test]
    fn test_missing_section_fails() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("README.rst"),
            "Usage\n-----\n\n::\n\n    thing run\n",
        )
        .unwrap();
        Command::cargo_bin("extract_detail_blocks")
            .unwrap()
            .current_dir(temp_dir.path())
            .assert()
            .failure()
            .stdout("")
            .stderr(predicate::str::contains("no section with id \"detail\""));
    }

    #[test]
    fn test_severe_markup_error_fails() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("README.rst"),
            "Intro\n=====\n\nDetail\n------\n\nOther\n=====\n\nDeeper\n~~~~~~\n",
        )
        .unwrap();
        Command::cargo_bin("extract_detail_blocks")
            .unwrap()
            .current_dir(temp_dir.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error parsing document"));
    }

    #[test]
    fn test_empty_detail_section_prints_nothing() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("README.rst"),
            "Detail\n------\n\nNothing to run here.\n\nOther\n-----\n\n::\n\n    elsewhere\n",
        )
        .unwrap();
        Command::cargo_bin("extract_detail_blocks")
            .unwrap()
            .current_dir(temp_dir.path())
            .assert()
            .success()
            .stdout("");
    }
}
