use crate::schema_files::SchemaFileArgs;
use clap::Parser;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, clap::Parser)]
struct SchemaFilesCli {
    #[command(flatten)]
    schema_files: SchemaFileArgs,
}

fn parse_args<I, T>(args: I) -> SchemaFileArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    SchemaFilesCli::try_parse_from(args)
        .expect("valid arguments")
        .schema_files
}

/// A fresh directory under the system temp dir, unique to `test_name`.
fn scratch_dir(test_name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "graphql-cli-{}-{test_name}",
        std::process::id(),
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

fn write_file(path: &Path, contents: &str) {
    std::fs::write(path, contents).expect("write scratch file");
}

#[test]
fn loads_matching_files_and_counts_skipped_ones() -> anyhow::Result<()> {
    let dir = scratch_dir("loads_matching_files");
    write_file(&dir.join("query.graphql"), "type Query { hello: String }\n");
    write_file(&dir.join("user.graphqls"), "type User { id: ID! }\n");
    write_file(&dir.join("notes.txt"), "not a schema\n");

    let args = parse_args(["test", dir.to_str().expect("utf-8 path")]);
    let loaded = args.load()?;

    assert_eq!(loaded.file_paths.len(), 2);
    assert_eq!(loaded.num_skipped_files, 1);
    assert!(loaded.document.query_type_definition().is_some());
    assert!(loaded.document.object_type_definition("User").is_some());

    std::fs::remove_dir_all(&dir)?;
    Ok(())
}

#[test]
fn single_explicit_file_loads_whatever_its_extension() -> anyhow::Result<()> {
    let dir = scratch_dir("single_explicit_file");
    let schema_path = dir.join("schema.sdl");
    write_file(&schema_path, "type Query { hello: String }\n");

    let args = parse_args(["test", schema_path.to_str().expect("utf-8 path")]);
    let loaded = args.load()?;

    assert_eq!(loaded.file_paths.len(), 1);
    assert_eq!(loaded.num_skipped_files, 0);
    assert!(loaded.document.query_type_definition().is_some());

    std::fs::remove_dir_all(&dir)?;
    Ok(())
}

#[test]
fn custom_extensions_accept_leading_dots() -> anyhow::Result<()> {
    let dir = scratch_dir("custom_extensions");
    write_file(&dir.join("schema.sdl"), "type Query { hello: String }\n");
    write_file(&dir.join("ignored.graphql"), "type Ignored { id: ID }\n");

    let args = parse_args([
        "test",
        "--graphql-file-exts",
        ".sdl",
        dir.to_str().expect("utf-8 path"),
    ]);
    let loaded = args.load()?;

    assert_eq!(loaded.file_paths.len(), 1);
    assert_eq!(loaded.num_skipped_files, 1);
    assert!(loaded.document.object_type_definition("Ignored").is_none());

    std::fs::remove_dir_all(&dir)?;
    Ok(())
}
