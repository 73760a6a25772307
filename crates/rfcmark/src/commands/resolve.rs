//! `rfcmark resolve` command implementation.

use clap::Args;
use rfcmark_citation::{Citation, CitationResolver};

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the resolve command.
#[derive(Args)]
pub(crate) struct ResolveArgs {
    /// Citations, e.g. `RFC2119` or `I-D.ietf-dane-openpgpkey#02`.
    #[arg(required = true)]
    citations: Vec<String>,

    #[command(flatten)]
    config: ConfigArgs,
}

impl ResolveArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load()?;
        let resolver = config.citations.resolver();

        for (token, url) in resolve_tokens(&self.citations, &resolver) {
            match url {
                Some(url) => output.emit(&format!("{url}\n"))?,
                None => output.warning(&format!("{token}: not a resolvable citation")),
            }
        }
        Ok(())
    }
}

/// Pair each token with its bibliography URL, in input order.
fn resolve_tokens<'a>(
    tokens: &'a [String],
    resolver: &CitationResolver,
) -> Vec<(&'a str, Option<String>)> {
    tokens
        .iter()
        .map(|token| {
            let url = Citation::parse(token).and_then(|c| resolver.try_resolve(&c));
            (token.as_str(), url)
        })
        .collect()
}
