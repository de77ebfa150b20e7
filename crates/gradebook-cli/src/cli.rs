//! CLI argument definitions for gradebook.

use clap::{Parser, Subcommand};
use gradebook::StudentOrder;

#[derive(Parser)]
#[command(name = "gradebook")]
#[command(about = "School roster and grade manager", version)]
pub struct Args {
    /// Roster file (overrides the config file setting)
    #[arg(long, value_name = "FILE", env = "GRADEBOOK_FILE")]
    pub file: Option<String>,

    /// Config file path
    #[arg(long, value_name = "FILE", default_value = "gradebook.toml")]
    pub config: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Register a new student
    AddStudent {
        /// Student name (collisions allowed; the roster keeps both)
        name: String,
    },
    /// Register a new discipline
    AddDiscipline {
        /// Discipline name
        name: String,
    },
    /// Record a grade for a student in a discipline
    Grade {
        /// Student name (first match when names collide)
        student: String,
        /// Discipline name (registered on first use)
        discipline: String,
        /// Grade value (any integer)
        #[arg(allow_negative_numbers = true)]
        grade: i32,
    },
    /// Show a student's average, or the school average
    Average {
        /// Student name; omit for the school-wide average
        student: Option<String>,
    },
    /// Show the full roster with averages
    Show,
    /// Remove a student by displayed index
    RemoveStudent {
        /// 1-based index as shown by `show`
        index: usize,
    },
    /// Remove a discipline by displayed index (drops all its grades)
    RemoveDiscipline {
        /// 1-based index as shown by `show`
        index: usize,
    },
    /// Export the roster to a file or stdout
    Export {
        /// Output file path (defaults to stdout)
        #[arg(long, short)]
        output: Option<String>,
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: ExportFormat,
        /// Student ordering (defaults to the config setting)
        #[arg(long, short, value_enum)]
        sort: Option<SortOrder>,
    },
    /// Merge records from a roster text file
    Import {
        /// Input file path
        input: String,
    },
}

#[derive(Clone, clap::ValueEnum)]
pub enum ExportFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum SortOrder {
    Name,
    Insertion,
    Average,
}

impl From<SortOrder> for StudentOrder {
    fn from(sort: SortOrder) -> Self {
        match sort {
            SortOrder::Name => StudentOrder::Name,
            SortOrder::Insertion => StudentOrder::Insertion,
            SortOrder::Average => StudentOrder::Average,
        }
    }
}
