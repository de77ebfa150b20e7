pub mod config;
pub mod error;
pub mod export;
pub mod import;
pub mod roster;

pub use config::Config;
pub use error::{Error, Result};
pub use export::{
    export_roster, export_roster_json, format_grade_list, format_roster_console,
    format_roster_summary, format_student_console, render_roster, render_roster_json,
    render_roster_with,
};
pub use import::{load_roster, load_roster_into, merge_roster, parse_roster};
pub use roster::{Discipline, Roster, Student, StudentOrder};
