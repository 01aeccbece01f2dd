use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const UNSORTED: &str = r#"import 'package:my_app/model.dart';
import 'package:flutter/material.dart';
import 'dart:async';

void main() {}
"#;

const SORTED: &str = r#"import 'dart:async';

import 'package:flutter/material.dart';

import 'package:my_app/model.dart';

void main() {}
"#;

#[test]
fn test_check_sorted_project() -> Result<()> {
    let test = CliTest::with_package("my_app")?;
    test.write_file("lib/main.dart", SORTED)?;
    test.write_file("lib/src/plain.dart", "class Plain {}\n")?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "✓ Checked 2 Dart files - all directives sorted\n"
    );
    Ok(())
}

#[test]
fn test_check_reports_unsorted_file() -> Result<()> {
    let test = CliTest::with_package("my_app")?;
    test.write_file("lib/main.dart", UNSORTED)?;
    test.write_file("lib/ok.dart", SORTED)?;

    let output = test.check_command().output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("warning: 3 directives are not sorted  unsorted-imports"));
    assert!(out.contains("lib/main.dart:1:1"));
    assert!(!out.contains("ok.dart"));
    assert!(out.contains("1 problem (0 errors, 1 warning)"));

    // check never writes
    assert_eq!(test.read_file("lib/main.dart")?, UNSORTED);
    Ok(())
}

#[test]
fn test_check_package_name_changes_grouping() -> Result<()> {
    // Without knowing the local package, all package imports form one group.
    let test = CliTest::new()?;
    test.write_file("lib/main.dart", SORTED)?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(1));

    let output = test
        .check_command()
        .args(["--package-name", "my_app"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));
    Ok(())
}

#[test]
fn test_check_skips_generated_files() -> Result<()> {
    let test = CliTest::with_package("my_app")?;
    test.write_file("lib/model.g.dart", UNSORTED)?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(0));

    test.write_file(".dartsortrc.json", r#"{ "ignoreGenerated": false }"#)?;
    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(1));
    Ok(())
}

#[test]
fn test_check_respects_includes() -> Result<()> {
    let test = CliTest::with_package("my_app")?;
    test.write_file(".dartsortrc.json", r#"{ "includes": ["lib"] }"#)?;
    test.write_file("lib/main.dart", SORTED)?;
    test.write_file("tool/script.dart", UNSORTED)?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(0));
    Ok(())
}

#[test]
fn test_check_unreadable_file_is_error() -> Result<()> {
    let test = CliTest::with_package("my_app")?;
    std::fs::create_dir_all(test.root().join("lib"))?;
    std::fs::write(test.root().join("lib/broken.dart"), [0xff, 0xfe, 0xfd])?;

    let output = test.check_command().output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(2));
    assert!(out.contains("read-error"));
    assert!(out.contains("broken.dart"));
    Ok(())
}

#[test]
fn test_check_invalid_config_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".dartsortrc.json", r#"{ "ignores": ["**/[oops"] }"#)?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid glob pattern in 'ignores'"));
    Ok(())
}

#[test]
fn test_check_verbose_reports_package_source() -> Result<()> {
    let test = CliTest::with_package("my_app")?;
    test.write_file("lib/main.dart", SORTED)?;

    let output = test.check_command().arg("-v").output()?;
    assert!(stderr(&output).contains("package 'my_app'"));
    Ok(())
}
