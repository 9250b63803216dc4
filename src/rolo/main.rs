use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use rolo::api::{CmdMessage, ContactsApi, MessageLevel};
use rolo::error::Result;
use rolo::model::Contact;
use rolo::store::fs::FileStore;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", e.to_string().red());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let store = FileStore::new(resolve_data_file(cli.file));
    let mut api = ContactsApi::new(store);

    let result = match cli.command {
        Commands::List => api.list_contacts()?,
        Commands::Get { id } => api.get_contact(&id)?,
        Commands::Add { name, email, phone } => api.add_contact(name, email, phone)?,
        Commands::Remove { id } => api.remove_contact(&id)?,
    };

    if let Some(title) = &result.title {
        print_table(&result.listed_contacts, title);
    }
    print_messages(&result.messages);
    Ok(())
}

fn resolve_data_file(flag: Option<PathBuf>) -> PathBuf {
    if let Some(path) = flag {
        return path;
    }
    if let Ok(path) = std::env::var("ROLO_DATA") {
        return PathBuf::from(path);
    }
    let proj_dirs =
        ProjectDirs::from("com", "rolo", "rolo").expect("Could not determine data dir");
    proj_dirs.data_dir().join("contacts.json")
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const HEADERS: [&str; 4] = ["id", "name", "email", "phone"];

enum RowKind {
    Header,
    Data,
}

fn print_table(contacts: &[Contact], title: &str) {
    if contacts.is_empty() {
        return;
    }

    let rows: Vec<[String; 4]> = contacts
        .iter()
        .map(|c| {
            [
                c.id.to_string(),
                c.name.clone(),
                c.email.clone(),
                c.phone.clone(),
            ]
        })
        .collect();

    let mut widths: [usize; 4] = HEADERS.map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    println!("{}", title.bold());
    print_rule("┌", "┬", "┐", &widths);
    print_row(&HEADERS.map(String::from), &widths, RowKind::Header);
    print_rule("├", "┼", "┤", &widths);
    for row in &rows {
        print_row(row, &widths, RowKind::Data);
    }
    print_rule("└", "┴", "┘", &widths);
}

fn print_rule(left: &str, mid: &str, right: &str, widths: &[usize; 4]) {
    let mut line = String::from(left);
    for (i, width) in widths.iter().enumerate() {
        line.push_str(&"─".repeat(width + 2));
        line.push_str(if i + 1 == widths.len() { right } else { mid });
    }
    println!("{}", line.dimmed());
}

fn print_row(cells: &[String; 4], widths: &[usize; 4], kind: RowKind) {
    print!("{}", "│".dimmed());
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        // The id column is right-aligned and dimmed, like the original table.
        let padded = pad_cell(cell, *width, i == 0);
        let styled = match kind {
            RowKind::Header => padded.normal(),
            RowKind::Data if i == 0 => padded.dimmed(),
            RowKind::Data => padded.green(),
        };
        print!(" {} {}", styled, "│".dimmed());
    }
    println!();
}

fn pad_cell(cell: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    if right_align {
        format!("{}{}", fill, cell)
    } else {
        format!("{}{}", cell, fill)
    }
}
