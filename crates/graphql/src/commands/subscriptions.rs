use crate::output_utils;
use crate::schema_files::SchemaFileArgs;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphql_schema_registry::subscription::GraphQLSubscription;
use libgraphql_schema_registry::subscription::InMemorySubscriptionStorage;
use libgraphql_schema_registry::subscription::JsonContextSerializer;
use libgraphql_schema_registry::subscription::Subscriber;
use libgraphql_schema_registry::Document;
use libgraphql_schema_registry::SubscriptionRegistry;
use std::fmt::Write;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, clap::Args)]
pub(crate) struct SubscriptionsCmd {
    #[command(flatten)]
    schema_files: SchemaFileArgs,

    #[arg(
        help="Channel to record the subscriber on. Without one the subscriber \
             is only recorded locally.",
        long,
    )]
    channel: Option<String>,

    #[arg(
        default_value="anonymous",
        help="Operation name to record the subscriber under.",
        long,
    )]
    operation_name: String,

    #[arg(
        conflicts_with="query_file",
        help="Subscription operation text to resolve.",
        long,
        required_unless_present="query_file",
    )]
    query: Option<String>,

    #[arg(
        help="Path to a file containing the subscription operation to resolve.",
        long,
    )]
    query_file: Option<PathBuf>,
}

/// Stands in for the real handler of a field declared on the schema's
/// subscription root type.
#[derive(Debug)]
struct DeclaredFieldSubscription {
    field_name: String,
}
impl GraphQLSubscription for DeclaredFieldSubscription {
    fn authorize(&self, subscriber: &Subscriber) -> bool {
        log::debug!(
            "Authorizing operation `{}` for subscription field `{}`.",
            subscriber.operation_name(),
            self.field_name,
        );
        true
    }

    fn filter(&self, _subscriber: &Subscriber, _root: &serde_json::Value) -> bool {
        true
    }
}

impl SubscriptionsCmd {
    fn query_string(&self) -> anyhow::Result<String> {
        match (&self.query, &self.query_file) {
            (Some(query), _) => Ok(query.to_owned()),
            (None, Some(path)) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {path:#?}")),
            (None, None) => anyhow::bail!("One of --query or --query-file is required"),
        }
    }

    fn build_registry(document: &Document) -> SubscriptionRegistry {
        let mut registry = SubscriptionRegistry::new(
            Arc::new(JsonContextSerializer),
            Arc::new(InMemorySubscriptionStorage::new()),
            Arc::new(|| ()),
        );
        let Some(subscription_type) = document.subscription_type_definition() else {
            log::warn!("The schema defines no subscription root type.");
            return registry;
        };
        for field in subscription_type.fields() {
            registry.register(
                Arc::new(DeclaredFieldSubscription {
                    field_name: field.name().to_string(),
                }),
                field.name(),
            );
        }
        registry
    }

    fn resolve(&self) -> anyhow::Result<CommandResult> {
        let loaded = self.schema_files.load()?;
        let mut registry = Self::build_registry(&loaded.document);

        let subscriber = Subscriber::new(
            self.operation_name.as_str(),
            self.query_string()?,
        );
        // `subscriptions()` parses the same query string again; both walk it
        // identically, so handlers line up index for index with these names.
        let field_names =
            SubscriptionRegistry::subscription_field_names(subscriber.query_string())?;
        let handlers = registry.subscriptions(&subscriber)?;

        let mut output = String::new();
        let mut num_not_found = 0;
        for (field_name, handler) in field_names.iter().zip(&handlers) {
            if handler.is_not_found() {
                num_not_found += 1;
                let _ = writeln!(
                    output,
                    "{} `{field_name}` is not a field of the subscription root type.",
                    output_utils::RED_X,
                );
            } else {
                let _ = writeln!(
                    output,
                    "{} `{field_name}` (topic `{}`)",
                    output_utils::GREEN_CHECK,
                    handler.encode_topic(&subscriber, field_name),
                );
            }
        }

        let channel = self.channel.as_deref().unwrap_or("");
        registry.subscriber(&subscriber, channel)?;
        for (operation_name, channel) in registry.to_map() {
            let _ = writeln!(
                output,
                "Recorded operation `{operation_name}` on channel `{channel}`.",
            );
        }

        let output = output.trim_end();
        if num_not_found > 0 {
            Ok(CommandResult::stderr(format_args!("{output}")))
        } else if handlers.is_empty() {
            Ok(CommandResult::stderr(format_args!(
                "{} The operation selects no subscription fields.",
                output_utils::RED_X,
            )))
        } else {
            Ok(CommandResult::stdout(format_args!("{output}")))
        }
    }
}

#[inherent::inherent]
impl RunnableCommand for SubscriptionsCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        self.resolve().unwrap_or_else(CommandResult::from)
    }
}
