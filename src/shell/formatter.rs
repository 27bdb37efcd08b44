use std::fmt::Display;
use std::path::Path;

use colored::*;

use crate::error::TreeError;

/// Builds every line the shell prints. Successes are green, outcomes that
/// leave the tree unchanged are yellow, and rejected input is red.
pub struct OutputFormatter;

impl OutputFormatter {
    pub fn format_menu() -> String {
        format!(
            "\n{}\n1 - Insert a number\n2 - Delete a number\n3 - Update a number\n\
             4 - List values in order\n5 - Show tree height\n6 - Show the tree\n7 - Exit\n",
            "Menu:".bold()
        )
    }

    pub fn format_inserted<T: Display>(value: &T, as_root: bool) -> String {
        if as_root {
            format!("Inserted {} as the root of the tree.", value).green().to_string()
        } else {
            format!("Inserted {}.", value).green().to_string()
        }
    }

    pub fn format_deleted<T: Display>(value: &T) -> String {
        format!("Deleted {}.", value).green().to_string()
    }

    pub fn format_updated<T: Display>(old: &T, new: &T) -> String {
        format!("Updated {} to {}.", old, new).green().to_string()
    }

    /// Describes why the tree was left unchanged. `value` is the value the
    /// error is about: the inserted or deleted value, or for an update the old
    /// or new value matching the error.
    pub fn format_unchanged<T: Display>(err: TreeError, value: &T) -> String {
        let message = match err {
            TreeError::Duplicate => format!("{} is already in the tree, nothing inserted.", value),
            TreeError::NotFound => format!("{} is not in the tree, nothing deleted.", value),
            TreeError::OldValueNotFound => {
                format!("{} is not in the tree, nothing updated.", value)
            }
            TreeError::NewValueExists => {
                format!("{} is already in the tree, update cancelled.", value)
            }
        };
        message.yellow().to_string()
    }

    pub fn format_values<T: Display>(values: &[T]) -> String {
        let values: Vec<String> = values.iter().map(ToString::to_string).collect();
        format!("Values in order: [{}]", values.join(", ").cyan())
    }

    pub fn format_height(height: isize) -> String {
        format!("Tree height: {}", height.to_string().cyan())
    }

    pub fn format_svg_written(path: &Path) -> String {
        format!("Drawing saved to {}", path.display()).green().to_string()
    }

    pub fn format_svg_failed(path: &Path, err: &std::io::Error) -> String {
        format!("Could not save drawing to {}: {}", path.display(), err)
            .red()
            .to_string()
    }

    pub fn format_invalid_choice(input: &str) -> String {
        format!("Invalid option '{}', try again.", input).red().to_string()
    }

    pub fn format_invalid_number(input: &str) -> String {
        format!("'{}' is not a whole number.", input).red().to_string()
    }

    pub fn format_goodbye() -> String {
        "Exiting... thanks for using the program!".to_string()
    }
}
