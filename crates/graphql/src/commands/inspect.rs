use crate::output_utils;
use crate::schema_files::SchemaFileArgs;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_schema_registry::document::DefinitionKind;
use std::fmt::Write;

#[derive(Debug, clap::Args)]
pub(crate) struct InspectCmd {
    #[command(flatten)]
    schema_files: SchemaFileArgs,

    #[arg(
        help="Fold every type extension into the type it extends before \
             inspecting.",
        long,
    )]
    merge_extensions: bool,

    #[arg(
        help="Print the loaded document as SDL instead of a summary.",
        long,
    )]
    sdl: bool,
}

const DEFINITION_KINDS: [DefinitionKind; 7] = [
    DefinitionKind::Scalar,
    DefinitionKind::Object,
    DefinitionKind::Interface,
    DefinitionKind::Union,
    DefinitionKind::Enum,
    DefinitionKind::InputObject,
    DefinitionKind::Directive,
];

#[inherent::inherent]
impl RunnableCommand for InspectCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let mut loaded = match self.schema_files.load() {
            Ok(loaded) => loaded,
            Err(err) => return err.into(),
        };

        if self.merge_extensions {
            loaded.document.merge_extensions_into_definitions();
        }

        if self.sdl {
            return CommandResult::stdout(format_args!(
                "{}",
                loaded.document.to_sdl().trim_end(),
            ));
        }

        let document = &loaded.document;
        let mut summary = format!(
            "{} Loaded a schema document:\n\
             \x20 * Analyzed {} files.\n\
             \x20 * Skipped {} non-graphql files.\n",
            output_utils::GREEN_CHECK,
            loaded.file_paths.len(),
            loaded.num_skipped_files,
        );
        for kind in DEFINITION_KINDS {
            let _ = writeln!(
                summary,
                "  * {} {} definitions.",
                document.definitions_by_kind(kind).count(),
                kind.name(),
            );
        }
        let _ = writeln!(
            summary,
            "  * {} type extensions.",
            document.type_extension_definitions().count(),
        );

        let root_types = [
            ("query", document.query_type_definition()),
            ("mutation", document.mutation_type_definition()),
            ("subscription", document.subscription_type_definition()),
        ];
        for (operation, root_type) in root_types {
            match root_type {
                Some(root_type) => {
                    let _ = write!(
                        summary,
                        "\n  {operation} root: `{}` ({} fields)",
                        root_type.name(),
                        root_type.fields().len(),
                    );
                },
                None => {
                    let _ = write!(summary, "\n  {operation} root: (none)");
                },
            }
        }

        CommandResult::stdout(format_args!("{summary}"))
    }
}
