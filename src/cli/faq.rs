//! FAQ CLI commands
//!
//! `faq browse` steps through a category with the cyclic cursor: "n" moves
//! forward, "p" backward, "q" quits.

use std::io::{self, BufRead, Write};

use clap::Subcommand;

use crate::error::OtchetnikResult;
use crate::models::FaqItem;
use crate::services::FaqService;
use crate::storage::Storage;

/// FAQ subcommands
#[derive(Subcommand)]
pub enum FaqCommands {
    /// List FAQ categories
    Categories,
    /// Show the items of a category or section
    Show {
        /// Category name
        category: String,
        /// Section within the category
        #[arg(short, long)]
        section: Option<String>,
    },
    /// Browse a category interactively
    Browse {
        /// Category name
        category: String,
        /// Section within the category
        #[arg(short, long)]
        section: Option<String>,
    },
    /// Find an item by a fragment of its question
    Search {
        /// Search term (case-insensitive)
        term: String,
        /// Limit to a category
        #[arg(short, long)]
        category: Option<String>,
        /// Limit to a section
        #[arg(short, long)]
        section: Option<String>,
    },
}

/// Handle a FAQ command
pub fn handle_faq_command(storage: &Storage, cmd: FaqCommands) -> OtchetnikResult<()> {
    let service = FaqService::new(&storage.faq);

    match cmd {
        FaqCommands::Categories => {
            let categories = service.categories()?;
            if categories.is_empty() {
                println!("FAQ пуст.");
                return Ok(());
            }
            for name in categories {
                let sections = service.sections(&name)?;
                if sections.is_empty() {
                    println!("{}", name);
                } else {
                    println!("{} (разделы: {})", name, sections.join(", "));
                }
            }
        }
        FaqCommands::Show { category, section } => {
            let items = match section.as_deref() {
                Some(section) => service.section_items(&category, section)?,
                None => service.items(&category)?,
            };
            if items.is_empty() {
                println!("В этой категории нет вопросов.");
                return Ok(());
            }
            for item in &items {
                print_item(item);
            }
        }
        FaqCommands::Browse { category, section } => {
            browse_interactive(&service, &category, section.as_deref())?;
        }
        FaqCommands::Search {
            term,
            category,
            section,
        } => {
            match service.find_by_question(&term, category.as_deref(), section.as_deref())? {
                Some(found) => {
                    match &found.section {
                        Some(section) => println!("[{} / {}]", found.category, section),
                        None => println!("[{}]", found.category),
                    }
                    print_item(&found.item);
                }
                None => println!("Ничего не найдено по запросу \"{}\".", term),
            }
        }
    }

    Ok(())
}

fn browse_interactive(
    service: &FaqService<'_>,
    category: &str,
    section: Option<&str>,
) -> OtchetnikResult<()> {
    let mut cursor = service.cursor(category, section)?;
    if cursor.is_empty() {
        println!("В этой категории нет вопросов.");
        return Ok(());
    }

    let total = cursor.len();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    // Start on the first item
    if let Some((item, index)) = cursor.next() {
        print_positioned(item, index, total);
    }

    loop {
        print!("(n — вперед, p — назад, q — выход) > ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };

        match line?.trim() {
            "q" => return Ok(()),
            "p" => {
                if let Some((item, index)) = cursor.prev() {
                    print_positioned(item, index, total);
                }
            }
            _ => {
                if let Some((item, index)) = cursor.next() {
                    print_positioned(item, index, total);
                }
            }
        }
    }
}

fn print_item(item: &FaqItem) {
    println!("\nВ: {}", item.question);
    println!("О: {}", item.answer);
    if !item.explanation.is_empty() {
        println!("   {}", item.explanation);
    }
}

fn print_positioned(item: &FaqItem, index: usize, total: usize) {
    println!("\n[{}/{}]", index + 1, total);
    println!("В: {}", item.question);
    println!("О: {}", item.answer);
    if !item.explanation.is_empty() {
        println!("   {}", item.explanation);
    }
}
