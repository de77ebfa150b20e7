mod cli;
mod cli_utils;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use gradebook::StudentOrder;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (RUST_LOG がなければ warn を既定にする)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("gradebook_cli=warn,gradebook=warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = cli_utils::load_config(&args.config);
    let roster_file = cli_utils::resolve_roster_file(args.file.as_deref(), &config);

    match args.command {
        Command::AddStudent { name } => commands::add_student::run(&roster_file, &name),
        Command::AddDiscipline { name } => commands::add_discipline::run(&roster_file, &name),
        Command::Grade {
            student,
            discipline,
            grade,
        } => commands::grade::run(&roster_file, &student, &discipline, grade),
        Command::Average { student } => commands::average::run(&roster_file, student.as_deref()),
        Command::Show => commands::show::run(&roster_file),
        Command::RemoveStudent { index } => commands::remove_student::run(&roster_file, index),
        Command::RemoveDiscipline { index } => {
            commands::remove_discipline::run(&roster_file, index)
        }
        Command::Export {
            output,
            format,
            sort,
        } => {
            let order = sort.map(StudentOrder::from).unwrap_or(config.export.sort);
            commands::export::run(&roster_file, output.as_deref(), format, order)
        }
        Command::Import { input } => commands::import::run(&roster_file, &input),
    }
}
