use clap::Args;
use storefront_app::domain::users::PgUsersService;

#[derive(Debug, Args)]
pub(crate) struct AdminArgs {
    /// Email of the account to change
    #[arg(long)]
    email: String,
}

pub(crate) async fn run(
    users: &PgUsersService,
    args: AdminArgs,
    is_admin: bool,
) -> Result<(), String> {
    let user = users
        .set_admin(&args.email, is_admin)
        .await
        .map_err(|error| format!("failed to update {}: {error}", args.email))?;

    println!("user_uuid: {}", user.uuid);
    println!("is_admin: {}", user.is_admin);

    Ok(())
}
