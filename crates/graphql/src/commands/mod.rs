mod inspect;
mod subscriptions;

use crate::Cli;
use crate::CommandResult;
use inspect::InspectCmd;
use subscriptions::SubscriptionsCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql")]
pub(crate) enum CommandEnum {
    /// Summarize (or print) the schema document built from GraphQL files.
    Inspect(Box<InspectCmd>),

    /// Resolve which subscription fields a subscription operation selects.
    Subscriptions(Box<SubscriptionsCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Inspect(cmd) => cmd.run(cli).await,
            Self::Subscriptions(cmd) => cmd.run(cli).await,
        }
    }
}
