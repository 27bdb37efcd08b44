//! The interactive menu. A [`Shell`] owns one [`Tree`] for the whole session
//! and maps each menu choice onto a single tree operation, printing the
//! outcome. Input and output are generic so sessions can be scripted.

mod args;
mod formatter;

pub use args::CliArgs;
pub use formatter::OutputFormatter;

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::error::{ShellError, TreeError};
use crate::layout::Layout;
use crate::render::{Svg, TextCanvas};
use crate::settings::Settings;
use crate::tree::Tree;

/// An entry of the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Insert,
    Delete,
    Update,
    List,
    Height,
    Visualize,
    Exit,
}

impl Choice {
    /// Reads a menu number, ignoring surrounding whitespace.
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Insert),
            "2" => Some(Self::Delete),
            "3" => Some(Self::Update),
            "4" => Some(Self::List),
            "5" => Some(Self::Height),
            "6" => Some(Self::Visualize),
            "7" => Some(Self::Exit),
            _ => None,
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

pub struct Shell<R, W> {
    tree: Tree<i64>,
    input: R,
    output: W,
    settings: Settings,
}

impl<R, W> Shell<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W, settings: Settings) -> Self {
        Self {
            tree: Tree::new(),
            input,
            output,
            settings,
        }
    }

    pub fn tree(&self) -> &Tree<i64> {
        &self.tree
    }

    pub fn into_tree(self) -> Tree<i64> {
        self.tree
    }

    /// Inserts each value in turn, reporting every outcome just like the
    /// menu's insert option does.
    pub fn seed(&mut self, values: &[i64]) -> Result<(), ShellError> {
        for &value in values {
            self.insert(value)?;
        }
        Ok(())
    }

    /// Shows the menu and handles choices until the user exits or the input
    /// ends.
    pub fn run(&mut self) -> Result<(), ShellError> {
        info!(values = self.tree.len(), "session started");
        let prompt = self.settings.shell.prompt.clone();

        loop {
            write!(self.output, "{}", OutputFormatter::format_menu())?;
            let Some(line) = self.read_line(&prompt)? else {
                break;
            };

            let Some(choice) = Choice::from_input(&line) else {
                writeln!(self.output, "{}", OutputFormatter::format_invalid_choice(&line))?;
                continue;
            };
            debug!(?choice, "dispatching");
            if let Flow::Exit = self.dispatch(choice)? {
                break;
            }
        }

        writeln!(self.output, "{}", OutputFormatter::format_goodbye())?;
        self.output.flush()?;
        info!(values = self.tree.len(), "session ended");
        Ok(())
    }

    fn dispatch(&mut self, choice: Choice) -> Result<Flow, ShellError> {
        match choice {
            Choice::Insert => {
                if let Some(value) = self.read_value("Enter a number to insert: ")? {
                    self.insert(value)?;
                }
            }
            Choice::Delete => {
                if let Some(value) = self.read_value("Enter a number to delete: ")? {
                    self.delete(value)?;
                }
            }
            Choice::Update => {
                let Some(old) = self.read_value("Enter the value to update: ")? else {
                    return Ok(Flow::Continue);
                };
                if let Some(new) = self.read_value("Enter the new value: ")? {
                    self.update(old, new)?;
                }
            }
            Choice::List => {
                let values = self.tree.inorder();
                writeln!(self.output, "{}", OutputFormatter::format_values(&values))?;
            }
            Choice::Height => {
                writeln!(
                    self.output,
                    "{}",
                    OutputFormatter::format_height(self.tree.height())
                )?;
            }
            Choice::Visualize => self.visualize()?,
            Choice::Exit => return Ok(Flow::Exit),
        }

        Ok(Flow::Continue)
    }

    fn insert(&mut self, value: i64) -> Result<(), ShellError> {
        let as_root = self.tree.is_empty();
        let message = match self.tree.insert(value) {
            Ok(()) => {
                debug!(value, as_root, "inserted");
                OutputFormatter::format_inserted(&value, as_root)
            }
            Err(err) => {
                debug!(value, %err, "insert refused");
                OutputFormatter::format_unchanged(err, &value)
            }
        };
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    fn delete(&mut self, value: i64) -> Result<(), ShellError> {
        let message = match self.tree.delete(&value) {
            Ok(removed) => {
                debug!(value = removed, "deleted");
                OutputFormatter::format_deleted(&removed)
            }
            Err(err) => {
                debug!(value, %err, "delete refused");
                OutputFormatter::format_unchanged(err, &value)
            }
        };
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    fn update(&mut self, old: i64, new: i64) -> Result<(), ShellError> {
        let message = match self.tree.update(&old, new) {
            Ok(removed) => {
                debug!(old = removed, new, "updated");
                OutputFormatter::format_updated(&removed, &new)
            }
            Err(err) => {
                debug!(old, new, %err, "update refused");
                let subject = match err {
                    TreeError::NewValueExists => new,
                    _ => old,
                };
                OutputFormatter::format_unchanged(err, &subject)
            }
        };
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    fn visualize(&mut self) -> Result<(), ShellError> {
        let layout = Layout::new(&self.tree, &self.settings.layout_params());
        write!(
            self.output,
            "{}",
            TextCanvas::new(&layout, self.settings.visualizer.canvas_width)
        )?;

        if let Some(path) = &self.settings.visualizer.svg_path {
            let message = match std::fs::write(path, Svg::new(&layout).to_string()) {
                Ok(()) => {
                    debug!(path = %path.display(), "saved drawing");
                    OutputFormatter::format_svg_written(path)
                }
                Err(err) => {
                    warn!(path = %path.display(), %err, "failed to save drawing");
                    OutputFormatter::format_svg_failed(path, &err)
                }
            };
            writeln!(self.output, "{}", message)?;
        }

        Ok(())
    }

    /// Prompts for a number. Returns `None` when the input isn't a whole
    /// number (after saying so) or when the input has ended.
    fn read_value(&mut self, prompt: &str) -> Result<Option<i64>, ShellError> {
        let Some(line) = self.read_line(prompt)? else {
            return Ok(None);
        };
        match line.parse() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                writeln!(self.output, "{}", OutputFormatter::format_invalid_number(&line))?;
                Ok(None)
            }
        }
    }

    /// Prompts and reads one trimmed line. Returns `None` once the input has
    /// ended.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
