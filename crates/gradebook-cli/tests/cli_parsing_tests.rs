//! CLI argument parsing tests.
//!
//! These tests verify that command-line arguments are parsed correctly
//! without actually executing the commands (which would touch the roster file).

use clap::Parser;

// Re-create Args structure for testing since it's not publicly exported
#[derive(Parser)]
#[command(name = "gradebook")]
struct Args {
    #[arg(long, value_name = "FILE")]
    file: Option<String>,

    #[arg(long, value_name = "FILE", default_value = "gradebook.toml")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    AddStudent {
        name: String,
    },
    AddDiscipline {
        name: String,
    },
    Grade {
        student: String,
        discipline: String,
        #[arg(allow_negative_numbers = true)]
        grade: i32,
    },
    Average {
        student: Option<String>,
    },
    Show,
    RemoveStudent {
        index: usize,
    },
    RemoveDiscipline {
        index: usize,
    },
    Export {
        #[arg(long, short)]
        output: Option<String>,
        #[arg(long, short, value_enum, default_value = "text")]
        format: ExportFormat,
        #[arg(long, short, value_enum)]
        sort: Option<SortOrder>,
    },
    Import {
        input: String,
    },
}

#[derive(Clone, clap::ValueEnum)]
enum ExportFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum SortOrder {
    Name,
    Insertion,
    Average,
}

#[test]
fn test_no_command_fails() {
    let result = Args::try_parse_from(["gradebook"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_add_student() {
    let args = Args::try_parse_from(["gradebook", "add-student", "Ana Souza"]).unwrap();
    match args.command {
        Command::AddStudent { name } => {
            assert_eq!(name, "Ana Souza");
        }
        _ => panic!("Expected AddStudent command"),
    }
}

#[test]
fn test_parse_add_discipline() {
    let args = Args::try_parse_from(["gradebook", "add-discipline", "Math"]).unwrap();
    match args.command {
        Command::AddDiscipline { name } => {
            assert_eq!(name, "Math");
        }
        _ => panic!("Expected AddDiscipline command"),
    }
}

#[test]
fn test_parse_grade() {
    let args = Args::try_parse_from(["gradebook", "grade", "Ana", "Math", "9"]).unwrap();
    match args.command {
        Command::Grade {
            student,
            discipline,
            grade,
        } => {
            assert_eq!(student, "Ana");
            assert_eq!(discipline, "Math");
            assert_eq!(grade, 9);
        }
        _ => panic!("Expected Grade command"),
    }
}

#[test]
fn test_parse_negative_grade() {
    let args = Args::try_parse_from(["gradebook", "grade", "Ana", "Math", "-3"]).unwrap();
    match args.command {
        Command::Grade { grade, .. } => {
            assert_eq!(grade, -3);
        }
        _ => panic!("Expected Grade command"),
    }
}

#[test]
fn test_parse_average_with_student() {
    let args = Args::try_parse_from(["gradebook", "average", "Ana"]).unwrap();
    match args.command {
        Command::Average { student } => {
            assert_eq!(student, Some("Ana".to_string()));
        }
        _ => panic!("Expected Average command"),
    }
}

#[test]
fn test_parse_average_school_wide() {
    let args = Args::try_parse_from(["gradebook", "average"]).unwrap();
    match args.command {
        Command::Average { student } => {
            assert!(student.is_none());
        }
        _ => panic!("Expected Average command"),
    }
}

#[test]
fn test_parse_remove_student_index() {
    let args = Args::try_parse_from(["gradebook", "remove-student", "2"]).unwrap();
    match args.command {
        Command::RemoveStudent { index } => {
            assert_eq!(index, 2);
        }
        _ => panic!("Expected RemoveStudent command"),
    }
}

#[test]
fn test_parse_export_default_format() {
    let args = Args::try_parse_from(["gradebook", "export"]).unwrap();
    match args.command {
        Command::Export {
            format,
            output,
            sort,
        } => {
            assert!(matches!(format, ExportFormat::Text));
            assert!(output.is_none());
            assert!(sort.is_none());
        }
        _ => panic!("Expected Export command"),
    }
}

#[test]
fn test_parse_export_json_sorted() {
    let args = Args::try_parse_from([
        "gradebook", "export", "-f", "json", "-s", "average", "-o", "roster.json",
    ])
    .unwrap();
    match args.command {
        Command::Export {
            format,
            output,
            sort,
        } => {
            assert!(matches!(format, ExportFormat::Json));
            assert!(matches!(sort, Some(SortOrder::Average)));
            assert_eq!(output, Some("roster.json".to_string()));
        }
        _ => panic!("Expected Export command"),
    }
}

#[test]
fn test_parse_import() {
    let args = Args::try_parse_from(["gradebook", "import", "transfer.txt"]).unwrap();
    match args.command {
        Command::Import { input } => {
            assert_eq!(input, "transfer.txt");
        }
        _ => panic!("Expected Import command"),
    }
}

#[test]
fn test_parse_global_file() {
    let args = Args::try_parse_from(["gradebook", "--file", "my-roster.txt", "show"]).unwrap();
    assert_eq!(args.file, Some("my-roster.txt".to_string()));
    assert!(matches!(args.command, Command::Show));
}

#[test]
fn test_parse_config_default() {
    let args = Args::try_parse_from(["gradebook", "show"]).unwrap();
    assert_eq!(args.config, "gradebook.toml");
}

#[test]
fn test_invalid_command_fails() {
    let result = Args::try_parse_from(["gradebook", "enroll"]);
    assert!(result.is_err());
}

#[test]
fn test_missing_required_arg_fails() {
    // grade requires student, discipline, and the grade value
    let result = Args::try_parse_from(["gradebook", "grade", "Ana", "Math"]);
    assert!(result.is_err());
}
