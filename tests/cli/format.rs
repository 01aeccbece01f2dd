use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout};

#[test]
fn test_format_sorts_stdin() -> Result<()> {
    let test = CliTest::with_package("my_app")?;
    let input = "import 'package:my_app/a.dart';\nimport 'dart:io';\n\nvoid main() {}\n";

    let output = test.run_format(&[], input)?;

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "import 'dart:io';\n\nimport 'package:my_app/a.dart';\n\nvoid main() {}\n"
    );
    Ok(())
}

#[test]
fn test_format_passthrough_without_directives() -> Result<()> {
    let test = CliTest::new()?;
    let input = "// nothing to sort\nvoid main() {}";

    let output = test.run_format(&[], input)?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), input);
    Ok(())
}

#[test]
fn test_format_stdin_filepath_locates_pubspec() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("app/pubspec.yaml", "name: app\n")?;
    let input = "import 'package:app/a.dart';\nimport 'package:z/z.dart';\n";

    let output = test.run_format(&["--stdin-filepath", "app/lib/main.dart"], input)?;
    assert_eq!(
        stdout(&output),
        "import 'package:z/z.dart';\n\nimport 'package:app/a.dart';\n"
    );

    let output = test.run_format(&[], input)?;
    assert_eq!(stdout(&output), input);
    Ok(())
}

#[test]
fn test_format_package_name_flag() -> Result<()> {
    let test = CliTest::new()?;
    let input = "import 'package:z/z.dart';\nimport 'package:a/a.dart';\n";

    let output = test.run_format(&["--package-name", "a"], input)?;
    assert_eq!(
        stdout(&output),
        "import 'package:z/z.dart';\n\nimport 'package:a/a.dart';\n"
    );
    Ok(())
}
