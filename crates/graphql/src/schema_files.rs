use anyhow::Context;
use libgraphql_schema_registry::Document;
use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Schema files to load, shared by every command that needs a [`Document`].
#[derive(Debug, clap::Args)]
pub(crate) struct SchemaFileArgs {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL schema files or directories \
             containing GraphQL schema files.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[derive(Debug)]
pub(crate) struct LoadedSchema {
    pub document: Document,
    pub file_paths: Vec<PathBuf>,
    pub num_skipped_files: usize,
}

impl SchemaFileArgs {
    /// Finds every schema file at or under the given paths and parses them,
    /// together, into one [`Document`].
    pub(crate) fn load(&self) -> anyhow::Result<LoadedSchema> {
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_owned())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut num_skipped_files: usize = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                let entry = entry.with_context(|| format!(
                    "Failed to walk files at/under {path:#?}",
                ))?;
                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue;
                }

                let ext_matches = entry_path.extension()
                    .map(|ext| graphql_file_exts.contains(&*ext.to_string_lossy()))
                    .unwrap_or(false);
                if ext_matches {
                    log::trace!("Found schema file at {entry_path:#?}.");
                    file_paths.push(std::fs::canonicalize(entry_path)?);
                } else {
                    num_skipped_files += 1;
                }
            }
        }

        // A single file named explicitly is loaded whatever its extension.
        if file_paths.is_empty()
            && let [only_path] = self.file_or_dir_paths.as_slice()
            && only_path.is_file() {
            let only_path = std::fs::canonicalize(only_path)?;
            log::warn!(
                "Loading {only_path:#?} even though it doesn't match any of \
                the --graphql-file-exts ({}).",
                graphql_file_exts.iter()
                    .map(|ext| format!("`.{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            num_skipped_files = num_skipped_files.saturating_sub(1);
            file_paths.push(only_path);
        }

        log::debug!("Found {} schema files to load.", file_paths.len());

        let mut source = String::new();
        for file_path in &file_paths {
            let file_source = std::fs::read_to_string(file_path)
                .with_context(|| format!("Failed to read {file_path:#?}"))?;
            source.push_str(&file_source);
            source.push('\n');
        }
        let document = Document::from_source(&source)
            .context("Failed to load the schema document")?;

        Ok(LoadedSchema {
            document,
            file_paths,
            num_skipped_files,
        })
    }
}
