use std::path::PathBuf;

use clap::{ArgAction, Parser};
use lifetracker_admin::{
    AppError, DEFAULT_SERVICE_ACCOUNT_FILE, IdentityApiConfig, RoleFlags, SetRolesOptions,
};
use owo_colors::OwoColorize;

#[derive(Parser)]
#[command(name = "lifetracker-admin")]
#[command(version, disable_version_flag = true)]
#[command(
    about = "Grant or revoke Lifetracker roles by writing Firebase custom claims",
    long_about = "Grant or revoke Lifetracker roles by writing Firebase custom claims.\n\n\
        The claims object is replaced, not merged: any other custom claims on the \
        account are removed."
)]
struct Cli {
    /// UID of the account to update
    #[arg(value_name = "userUID")]
    user_uid: String,

    /// Path to the service account key file
    #[arg(short = 's', long = "serviceAccount", value_name = "PATH", default_value = DEFAULT_SERVICE_ACCOUNT_FILE)]
    service_account: PathBuf,

    /// Grant the observer role
    #[arg(short = 'o', long = "observer")]
    observer: bool,

    /// Grant the content manager role (implies observer)
    #[arg(short = 'c', long = "contentManager")]
    content_manager: bool,

    /// Revoke all roles
    #[arg(short = 'r', long = "revoke")]
    revoke: bool,

    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,
}

fn run(cli: Cli) -> Result<(), AppError> {
    let flags = RoleFlags {
        observer: cli.observer,
        content_manager: cli.content_manager,
        revoke: cli.revoke,
    };
    // Fail on flag misuse before the environment is consulted.
    flags.validate()?;

    let api = IdentityApiConfig::from_env()?;
    lifetracker_admin::set_roles(SetRolesOptions {
        user_uid: cli.user_uid,
        service_account: cli.service_account,
        flags,
        api,
    })
    .map(|_| ())
}

fn main() {
    let cli = Cli::parse();
    lifetracker_admin::logger::init_logger();

    if let Err(e) = run(cli) {
        eprintln!("{}", e.to_string().red());
        std::process::exit(1);
    }
}
