//! `rfcmark references` command implementation.

use clap::Args;
use rfcmark_citation::{Citation, CitationCatalog, CitationResolver, write_references};

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the references command.
#[derive(Args)]
pub(crate) struct ReferencesArgs {
    /// Citations, e.g. `!RFC2119` (normative) or
    /// `I-D.ietf-dane-openpgpkey#02` (informative unless marked `!`).
    #[arg(required = true)]
    citations: Vec<String>,

    #[command(flatten)]
    config: ConfigArgs,
}

impl ReferencesArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load()?;
        let resolver = config.citations.resolver();

        let (catalog, rejected) = build_catalog(&self.citations);
        for token in rejected {
            output.warning(&format!("{token}: not a citation"));
        }
        for link in unresolvable(&catalog, &resolver) {
            output.warning(&format!("{link}: no bibliography entry, left out"));
        }

        let summary = catalog.summary();
        tracing::info!(
            normative = summary.normative,
            informative = summary.informative,
            "Classified citations"
        );

        let mut xml = String::new();
        write_references(&mut xml, &catalog, &resolver, config.output.version);
        output.emit(&xml)?;
        Ok(())
    }
}

/// Collect tokens into a catalog. Returns the tokens that are not citations.
fn build_catalog(tokens: &[String]) -> (CitationCatalog, Vec<&str>) {
    let mut catalog = CitationCatalog::new();
    let mut rejected = Vec::new();
    for token in tokens {
        match Citation::parse(token) {
            Some(citation) => catalog.insert(citation),
            None => rejected.push(token.as_str()),
        }
    }
    (catalog, rejected)
}

/// Links in key order that the resolver has no URL for.
fn unresolvable<'a>(catalog: &'a CitationCatalog, resolver: &CitationResolver) -> Vec<&'a str> {
    catalog
        .iter_sorted()
        .filter(|citation| resolver.try_resolve(citation).is_none())
        .map(Citation::link)
        .collect()
}
