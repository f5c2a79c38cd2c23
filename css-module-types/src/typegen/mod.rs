//! CSS Module type generator
//!
//! Turns every `*.module.css` file under a root directory into a sibling
//! `*.module.css.d.ts` declaration file:
//!
//! 1. Discover stylesheets ([`discover::stylesheets`])
//! 2. Extract class names ([`extract::class_names`])
//! 3. Derive the interface name ([`naming::interface_name_for`])
//! 4. Render the declaration ([`DeclarationTemplate`])
//! 5. Write it next to the stylesheet ([`naming::declaration_path`])
//!
//! Every step is a pure function of the stylesheet's path and content, so
//! rerunning over an unchanged tree rewrites identical bytes.
//!
//! # Example
//!
//! ```rust,no_run
//! use css_module_types::StyleTypeGenerator;
//!
//! # fn example() -> css_module_types::Result<()> {
//! let generator = StyleTypeGenerator::new("src")?;
//! let written = generator.generate_all()?;
//! println!("{written} declaration files written");
//! # Ok(())
//! # }
//! ```

pub mod discover;
pub mod extract;
pub mod naming;

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Result, TypegenError};
use crate::templates::DeclarationTemplate;

/// CSS Module declaration generator rooted at one directory
pub struct StyleTypeGenerator {
    /// Directory scanned for stylesheets
    root: PathBuf,
    /// Declaration template renderer
    template: DeclarationTemplate,
}

impl StyleTypeGenerator {
    /// Create a generator for the given root directory
    ///
    /// The root is not touched until [`discover`](Self::discover) or
    /// [`generate_all`](Self::generate_all) runs.
    ///
    /// # Errors
    ///
    /// Returns [`TypegenError::Template`] if the declaration template fails to parse.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            root: root.into(),
            template: DeclarationTemplate::new()?,
        })
    }

    /// Root directory scanned by this generator
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Find all stylesheets under the root
    ///
    /// # Errors
    ///
    /// See [`discover::stylesheets`].
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        discover::stylesheets(&self.root)
    }

    /// Build the declaration for one stylesheet without writing it
    ///
    /// # Errors
    ///
    /// - [`TypegenError::Io`] if the stylesheet cannot be read or is not UTF-8
    /// - [`TypegenError::Template`] if rendering fails
    pub fn generate_file(&self, stylesheet: &Path) -> Result<GeneratedFile> {
        let content =
            fs::read_to_string(stylesheet).map_err(|e| TypegenError::io(stylesheet, e))?;

        let class_names = extract::class_names(&content);
        let interface_name = naming::interface_name_for(stylesheet);
        let rendered = self.template.render(&interface_name, &class_names)?;

        Ok(GeneratedFile {
            stylesheet: stylesheet.to_path_buf(),
            path: naming::declaration_path(stylesheet),
            interface_name,
            class_names,
            content: rendered,
        })
    }

    /// Generate and write declarations for every stylesheet under the root
    ///
    /// Returns the number of declaration files written. An empty tree is not
    /// an error and writes nothing.
    ///
    /// # Errors
    ///
    /// - [`TypegenError::NotFound`] if the root is missing or unreadable
    /// - [`TypegenError::Io`] on the first read or write failure
    pub fn generate_all(&self) -> Result<usize> {
        let stylesheets = self.discover()?;
        self.generate_with(&stylesheets, |_| {})
    }

    /// Generate and write declarations for the given stylesheets
    ///
    /// `on_written` is called after each file lands on disk. The run stops at
    /// the first failure; files written before it are left in place.
    ///
    /// # Errors
    ///
    /// - [`TypegenError::Io`] on the first read or write failure
    /// - [`TypegenError::Template`] if rendering fails
    pub fn generate_with<F>(&self, stylesheets: &[PathBuf], mut on_written: F) -> Result<usize>
    where
        F: FnMut(&GeneratedFile),
    {
        let mut written = 0;

        for stylesheet in stylesheets {
            let file = self.generate_file(stylesheet)?;
            file.write()?;
            on_written(&file);
            written += 1;
        }

        Ok(written)
    }
}

/// Represents a generated declaration file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Source stylesheet
    pub stylesheet: PathBuf,
    /// Declaration file path
    pub path: PathBuf,
    /// Interface name used in the declaration
    pub interface_name: String,
    /// Class names in order of first appearance
    pub class_names: Vec<String>,
    /// Rendered declaration text
    pub content: String,
}

impl GeneratedFile {
    /// Write the declaration to disk, replacing any existing file
    ///
    /// # Errors
    ///
    /// Returns [`TypegenError::Io`] naming the declaration path if the write fails.
    pub fn write(&self) -> Result<()> {
        fs::write(&self.path, &self.content).map_err(|e| TypegenError::io(&self.path, e))?;

        debug!(
            path = %self.path.display(),
            classes = self.class_names.len(),
            "Wrote declaration file"
        );

        Ok(())
    }

    /// Stylesheet path relative to `root`, or the full path if it lies outside
    #[must_use]
    pub fn relative_stylesheet(&self, root: &Path) -> &Path {
        self.stylesheet.strip_prefix(root).unwrap_or(&self.stylesheet)
    }
}
