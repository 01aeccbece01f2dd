use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout};

const UNSORTED: &str = r#"library app;

// Models
import 'package:my_app/model.dart';
import 'package:flutter/material.dart';
export 'src/api.dart';
import 'dart:async';
part 'app.g.dart';
import '../util.dart';

// Entry point.
void main() {}
"#;

const SORTED: &str = r#"library app;

import 'dart:async';

import 'package:flutter/material.dart';

// Models
import 'package:my_app/model.dart';

import '../util.dart';

part 'app.g.dart';

export 'src/api.dart';

// Entry point.
void main() {}
"#;

#[test]
fn test_fix_dry_run() -> Result<()> {
    let test = CliTest::with_package("my_app")?;
    test.write_file("lib/app.dart", UNSORTED)?;

    let output = test.fix_command().output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("lib/app.dart:3"));
    assert!(out.contains("  - // Models"));
    assert!(out.contains("  + import 'dart:async';"));
    assert!(out.contains("Would sort directives in 1 file(s)."));
    assert!(out.contains("Run with --apply to write these changes."));

    // Dry-run leaves the file alone
    assert_eq!(test.read_file("lib/app.dart")?, UNSORTED);
    Ok(())
}

#[test]
fn test_fix_apply() -> Result<()> {
    let test = CliTest::with_package("my_app")?;
    test.write_file("lib/app.dart", UNSORTED)?;
    test.write_file("lib/ok.dart", "import 'dart:io';\n")?;

    let output = test.fix_command().arg("--apply").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Sorted directives in 1 file(s).\n");
    assert_eq!(test.read_file("lib/app.dart")?, SORTED);
    assert_eq!(test.read_file("lib/ok.dart")?, "import 'dart:io';\n");
    Ok(())
}

#[test]
fn test_fix_apply_is_idempotent() -> Result<()> {
    let test = CliTest::with_package("my_app")?;
    test.write_file("lib/app.dart", UNSORTED)?;

    test.fix_command().arg("--apply").output()?;
    let output = test.fix_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "✓ Checked 1 Dart file - all directives sorted\n"
    );
    assert_eq!(test.read_file("lib/app.dart")?, SORTED);
    Ok(())
}

#[test]
fn test_fix_apply_preserves_crlf() -> Result<()> {
    let test = CliTest::with_package("my_app")?;
    test.write_file(
        "lib/app.dart",
        "import 'dart:io';\r\nimport 'dart:async';\r\n\r\nvoid main() {}\r\n",
    )?;

    test.fix_command().arg("--apply").output()?;

    assert_eq!(
        test.read_file("lib/app.dart")?,
        "import 'dart:async';\r\nimport 'dart:io';\r\n\r\nvoid main() {}\r\n"
    );
    Ok(())
}

#[test]
fn test_fix_with_path_argument() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("packages/core/pubspec.yaml", "name: core\n")?;
    test.write_file(
        "packages/core/lib/core.dart",
        "import 'package:core/a.dart';\nimport 'package:meta/meta.dart';\n",
    )?;

    let output = test
        .fix_command()
        .args(["--apply", "--path", "packages/core"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        test.read_file("packages/core/lib/core.dart")?,
        "import 'package:meta/meta.dart';\n\nimport 'package:core/a.dart';\n"
    );
    Ok(())
}
