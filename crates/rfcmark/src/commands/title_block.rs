//! `rfcmark title-block` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use rfcmark_xml::Dialect;

use super::ConfigArgs;
use crate::error::CliError;
use crate::front_matter::FrontMatter;
use crate::output::Output;

/// Arguments for the title-block command.
#[derive(Args)]
pub(crate) struct TitleBlockArgs {
    /// TOML file holding the title block.
    file: PathBuf,

    #[command(flatten)]
    config: ConfigArgs,
}

impl TitleBlockArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load()?;

        let dialect = config.output.version;
        output.info(&format!(
            "Rendering {} for xml2rfc {dialect}",
            self.file.display()
        ));

        let (front_matter, xml) = render_file(&self.file, dialect)?;
        if front_matter.author.is_empty() {
            output.warning(&format!("{}: no [[author]] declared", self.file.display()));
        }
        output.emit(&xml)?;
        Ok(())
    }
}

/// Read and render a title block file.
fn render_file(path: &Path, dialect: Dialect) -> Result<(FrontMatter, String), CliError> {
    let content = std::fs::read_to_string(path)?;
    let front_matter = FrontMatter::parse(&content)?;
    let mut xml = String::new();
    front_matter.write(&mut xml, dialect);
    Ok((front_matter, xml))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_render_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("draft.toml");
        std::fs::write(
            &path,
            "title = \"A & B\"\nkeyword = [\"dns\"]\n\n[[author]]\nsurname = \"Gieben\"\n",
        )
        .unwrap();

        let (front_matter, xml) = render_file(&path, Dialect::V3).unwrap();
        assert_eq!(front_matter.author.len(), 1);
        assert!(xml.starts_with("<title>A &amp; B</title>\n"), "{xml}");
        assert!(xml.ends_with("<keyword>dns</keyword>\n"), "{xml}");
    }

    #[test]
    fn test_render_file_without_authors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("draft.toml");
        std::fs::write(&path, "title = \"x\"\n").unwrap();

        let (front_matter, _) = render_file(&path, Dialect::V2).unwrap();
        assert!(front_matter.author.is_empty());
    }

    #[test]
    fn test_render_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let result = render_file(&dir.path().join("missing.toml"), Dialect::V3);
        assert!(matches!(result, Err(CliError::Io(_))));
    }

    #[test]
    fn test_render_file_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("draft.toml");
        std::fs::write(&path, "title = \n").unwrap();

        let result = render_file(&path, Dialect::V3);
        assert!(matches!(result, Err(CliError::FrontMatter(_))));
    }
}
