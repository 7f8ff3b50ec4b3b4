use clap::Args;
use storefront_app::domain::users::{PgUsersService, models::NewAccount};

#[derive(Debug, Args)]
pub(crate) struct CreateUserArgs {
    /// Display name
    #[arg(long)]
    name: String,

    /// Login email
    #[arg(long)]
    email: String,

    /// Login password
    #[arg(long, env = "STOREFRONT_USER_PASSWORD", hide_env_values = true)]
    password: String,

    /// Create the account with admin privileges
    #[arg(long)]
    admin: bool,
}

pub(crate) async fn run(users: &PgUsersService, args: CreateUserArgs) -> Result<(), String> {
    let user = users
        .create_user(NewAccount {
            name: args.name,
            email: args.email,
            password: args.password,
            is_admin: args.admin,
        })
        .await
        .map_err(|error| format!("failed to create user: {error}"))?;

    println!("user_uuid: {}", user.uuid);
    println!("email: {}", user.email);
    println!("is_admin: {}", user.is_admin);

    Ok(())
}
