use clap::Parser;
use std::process::ExitCode;

use git_profile::{
    commands,
    dispatch::Action,
    logging,
    paths::Paths,
    setup::InquirePrompt,
    ui::{ColorMode, Ui},
};

#[derive(Parser, Debug)]
#[command(name = "git-profile")]
#[command(about = "Git Profile Switcher - manage multiple global .gitconfig profiles")]
#[command(version)]
// `--help` and friends are actions, handled by dispatch
#[command(disable_help_flag = true)]
struct Cli {
    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// When to use colors: always, auto, never
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Emit diagnostic logs to stderr
    #[arg(long)]
    debug: bool,

    /// Action and its arguments, e.g. `switch work` (see `git-profile help`)
    #[arg(value_name = "ACTION", allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.debug);
    let ui = Ui::new(cli.color, cli.no_color);

    let action = Action::from_args(cli.args.as_slice());
    let result =
        Paths::new().and_then(|paths| commands::run(&paths, action, &mut InquirePrompt, &ui));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui.err(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
