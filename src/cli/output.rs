//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::vault::EntrySummary;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Build the entries table (Issuer, Account Name, Type, Period, Digits, Algorithm).
pub fn entries_table(entries: &[EntrySummary]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Issuer",
        "Account Name",
        "Type",
        "Period",
        "Digits",
        "Algorithm",
    ]);

    for e in entries {
        table.add_row(vec![
            e.issuer.clone(),
            e.account_name.clone(),
            e.otp_type.clone(),
            e.period.to_string(),
            e.digits.to_string(),
            e.algorithm.clone(),
        ]);
    }

    table
}

/// Print the entries table, or a hint when the database is empty.
pub fn print_entries_table(entries: &[EntrySummary]) {
    if entries.is_empty() {
        info("No TOTP entries in this database yet.");
        tip("Run `totp add-url --url <otpauth://...>` to add one.");
        return;
    }

    println!("{}", entries_table(entries));
}
