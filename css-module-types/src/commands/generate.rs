//! Declaration generation command

use anyhow::{Context, Result};
use console::{style, Emoji};
use css_module_types::{GeneratorConfig, StyleTypeGenerator};
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt::Display;

static SEARCH: Emoji<'_, '_> = Emoji("🔍 ", "");
static WRITE: Emoji<'_, '_> = Emoji("📝 ", "");
static SUCCESS: Emoji<'_, '_> = Emoji("✅ ", "");
static HINT: Emoji<'_, '_> = Emoji("💡 ", "");

/// Generate declaration files for every CSS Module under the source directory
pub struct GenerateCommand {
    config: GeneratorConfig,
    quiet: bool,
}

impl GenerateCommand {
    /// Create a new command instance
    pub const fn new(config: GeneratorConfig, quiet: bool) -> Self {
        Self { config, quiet }
    }

    /// Execute the command, returning the number of files written
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The source directory is missing or unreadable
    /// - A stylesheet cannot be read
    /// - A declaration file cannot be written
    pub fn execute(&self) -> Result<usize> {
        let generator = StyleTypeGenerator::new(&self.config.src_dir)
            .context("Failed to create type generator")?;

        self.say(format_args!(
            "{SEARCH}{}",
            style("Finding CSS Module files...").bold()
        ));

        let stylesheets = generator
            .discover()
            .context("Failed to find CSS Module files")?;

        if stylesheets.is_empty() {
            self.say("No CSS Module files found.");
            return Ok(0);
        }

        self.say(format_args!(
            "{WRITE}Generating type definitions for {} files...",
            style(stylesheets.len()).cyan().bold()
        ));

        let progress = if self.quiet {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(u64::try_from(stylesheets.len()).unwrap_or(u64::MAX))
        };
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{bar:30.cyan/blue} {pos}/{len}")
                .context("Failed to set progress style")?,
        );

        let written = generator
            .generate_with(&stylesheets, |file| {
                let relative = file.relative_stylesheet(generator.root());
                progress.suspend(|| {
                    self.say(format_args!(
                        "Generated types for: {}",
                        style(relative.display()).green()
                    ));
                });
                progress.inc(1);
            })
            .context("Failed to generate type definitions")?;

        progress.finish_and_clear();

        self.say(format_args!(
            "{SUCCESS}{}",
            style("Type generation complete!").green().bold()
        ));

        if self.config.usage_hint {
            self.print_hint();
        }

        Ok(written)
    }

    fn print_hint(&self) {
        self.say(format_args!(
            "\n{HINT}{}",
            style("To use typed CSS Modules:").bold()
        ));
        self.say(format_args!(
            "   {}",
            style("import styles from \"./Component.module.css\";").cyan()
        ));
        self.say("   // TypeScript will now provide IntelliSense for class names");
    }

    fn say(&self, line: impl Display) {
        if !self.quiet {
            println!("{line}");
        }
    }
}
