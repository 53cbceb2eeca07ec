use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use gem_story::Category;
use gem_story::event::EVENTS;

pub fn run() -> Result<(), String> {
    for category in Category::ALL {
        println!("  {}", category.name().bold());

        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["#", "Name", "Description", "Bonuses"]);

        for (i, option) in category.options().iter().enumerate() {
            let bonuses = option
                .deltas
                .iter()
                .map(|(a, v)| format!("{a} {v:+}"))
                .collect::<Vec<_>>()
                .join(", ");
            table.add_row(vec![
                (i + 1).to_string(),
                option.name.to_string(),
                option.description.to_string(),
                bonuses,
            ]);
        }

        println!("{table}");
        println!();
    }

    for event in EVENTS {
        println!("  {} {}", "Event".bold(), event.title);
        println!("  {}", event.description.dimmed());

        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["#", "Id", "Choice", "Outcome"]);

        for (i, option) in event.options.iter().enumerate() {
            table.add_row(vec![
                (i + 1).to_string(),
                option.id.to_string(),
                option.label.to_string(),
                option.tag.to_string(),
            ]);
        }

        println!("{table}");
        println!();
    }

    println!(
        "  {} categories, {} events",
        Category::ALL.len(),
        EVENTS.len()
    );
    Ok(())
}
