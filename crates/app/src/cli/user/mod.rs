use clap::{Args, Subcommand};
use storefront_app::{
    database::{self, Db},
    domain::users::PgUsersService,
};

mod admin;
mod create;

#[derive(Debug, Args)]
pub(crate) struct UserCommand {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: UserSubcommand,
}

#[derive(Debug, Subcommand)]
enum UserSubcommand {
    /// Create an account
    Create(create::CreateUserArgs),
    /// Grant admin privileges
    Promote(admin::AdminArgs),
    /// Revoke admin privileges
    Demote(admin::AdminArgs),
}

pub(crate) async fn run(command: UserCommand) -> Result<(), String> {
    let database_url = command
        .database_url
        .ok_or_else(|| "DATABASE_URL must be set or passed with --database-url".to_string())?;

    let pool = database::connect(&database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let users = PgUsersService::new(Db::new(pool));

    match command.command {
        UserSubcommand::Create(args) => create::run(&users, args).await,
        UserSubcommand::Promote(args) => admin::run(&users, args, true).await,
        UserSubcommand::Demote(args) => admin::run(&users, args, false).await,
    }
}
