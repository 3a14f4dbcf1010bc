//! Manifest command implementation
//!
//! Prints the baked-in copy manifest, grouped by category, and optionally
//! the caption rules in the order they are tried.

use console::Style;

use crate::cli::ManifestArgs;
use crate::domain::Category;
use crate::error::{Result, ShotsyncError};
use crate::manifest;

pub fn run(args: ManifestArgs) -> Result<()> {
    let categories = selected_categories(args.category.as_deref())?;

    for (i, category) in categories.iter().enumerate() {
        if i > 0 {
            println!();
        }
        display_category(*category, args.rules);
    }

    Ok(())
}

fn selected_categories(slug: Option<&str>) -> Result<Vec<Category>> {
    match slug {
        None => Ok(Category::ALL.to_vec()),
        Some(slug) => Category::from_slug(slug)
            .map(|c| vec![c])
            .ok_or_else(|| ShotsyncError::UnknownCategory {
                name: slug.to_string(),
            }),
    }
}

fn display_category(category: Category, show_rules: bool) {
    println!(
        "{} {} {}",
        Style::new().bold().apply_to(format!("{:02}", category.number())),
        Style::new().bold().yellow().apply_to(category.slug()),
        Style::new()
            .dim()
            .apply_to(format!("(docs: {})", category.content_dir()))
    );

    println!("  {}", Style::new().bold().apply_to("Screenshots:"));
    for entry in manifest::entries_for(category) {
        println!("    {} → {}", entry.source_filename, entry.target_filename);
    }

    if show_rules {
        println!("  {}", Style::new().bold().apply_to("Caption rules:"));
        for (priority, rule) in manifest::rules_for(category).iter().enumerate() {
            println!(
                "    {:>2}. {} → {}",
                priority + 1,
                Style::new().cyan().apply_to(rule.pattern),
                rule.target_filename
            );
        }
    }
}
