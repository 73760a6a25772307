//! xml2rfc v2 processing instructions (`<?rfc toc="yes"?>`).

use std::fmt;
use std::str::FromStr;

use rfcmark_xml::{Dialect, escape_xml_attr};

/// Name of a rendering toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessInstruction {
    Toc,
    Symrefs,
    Sortrefs,
    Compact,
    Topblock,
    Comments,
    Subcompact,
    Private,
    Header,
    Footer,
}

impl ProcessInstruction {
    /// Every instruction, in the order they are written.
    pub const ALL: [ProcessInstruction; 10] = [
        ProcessInstruction::Toc,
        ProcessInstruction::Symrefs,
        ProcessInstruction::Sortrefs,
        ProcessInstruction::Compact,
        ProcessInstruction::Topblock,
        ProcessInstruction::Comments,
        ProcessInstruction::Subcompact,
        ProcessInstruction::Private,
        ProcessInstruction::Header,
        ProcessInstruction::Footer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProcessInstruction::Toc => "toc",
            ProcessInstruction::Symrefs => "symrefs",
            ProcessInstruction::Sortrefs => "sortrefs",
            ProcessInstruction::Compact => "compact",
            ProcessInstruction::Topblock => "topblock",
            ProcessInstruction::Comments => "comments",
            ProcessInstruction::Subcompact => "subcompact",
            ProcessInstruction::Private => "private",
            ProcessInstruction::Header => "header",
            ProcessInstruction::Footer => "footer",
        }
    }

    /// Value written for an unset yes/no toggle. `None` for the free-text
    /// instructions, which are left out when unset.
    fn default_value(self) -> Option<&'static str> {
        match self {
            ProcessInstruction::Toc
            | ProcessInstruction::Symrefs
            | ProcessInstruction::Sortrefs
            | ProcessInstruction::Compact
            | ProcessInstruction::Topblock => Some("yes"),
            ProcessInstruction::Comments | ProcessInstruction::Subcompact => Some("no"),
            ProcessInstruction::Private => Some(""),
            ProcessInstruction::Header | ProcessInstruction::Footer => None,
        }
    }
}

impl fmt::Display for ProcessInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Processing instruction name not in [`ProcessInstruction::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown processing instruction: {0}")]
pub struct UnknownProcessInstruction(pub String);

impl FromStr for ProcessInstruction {
    type Err = UnknownProcessInstruction;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        ProcessInstruction::ALL
            .into_iter()
            .find(|pi| pi.as_str() == name)
            .ok_or_else(|| UnknownProcessInstruction(name.to_owned()))
    }
}

/// Rendering toggles from the title block.
///
/// Yes/no toggles are `None` when unset, in which case the per-instruction
/// default applies. `header` and `footer` are left out entirely when unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProcessInstructions {
    #[cfg_attr(feature = "serde", serde(deserialize_with = "de::toggle"))]
    pub toc: Option<bool>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "de::toggle"))]
    pub symrefs: Option<bool>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "de::toggle"))]
    pub sortrefs: Option<bool>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "de::toggle"))]
    pub compact: Option<bool>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "de::toggle"))]
    pub topblock: Option<bool>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "de::toggle"))]
    pub comments: Option<bool>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "de::toggle"))]
    pub subcompact: Option<bool>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "de::toggle"))]
    pub private: Option<bool>,
    pub header: Option<String>,
    pub footer: Option<String>,
}

impl ProcessInstructions {
    /// Value of an instruction after applying defaults.
    ///
    /// `None` means the instruction is not written at all.
    pub fn value(&self, pi: ProcessInstruction) -> Option<&str> {
        let toggle = match pi {
            ProcessInstruction::Toc => self.toc,
            ProcessInstruction::Symrefs => self.symrefs,
            ProcessInstruction::Sortrefs => self.sortrefs,
            ProcessInstruction::Compact => self.compact,
            ProcessInstruction::Topblock => self.topblock,
            ProcessInstruction::Comments => self.comments,
            ProcessInstruction::Subcompact => self.subcompact,
            ProcessInstruction::Private => self.private,
            ProcessInstruction::Header => return self.header.as_deref(),
            ProcessInstruction::Footer => return self.footer.as_deref(),
        };
        match toggle {
            Some(true) => Some("yes"),
            Some(false) => Some("no"),
            None => pi.default_value(),
        }
    }
}

/// Render one processing instruction by name.
///
/// For v2 returns `<?rfc NAME="VALUE"?>` plus a newline, or an empty string
/// for an unset header/footer. The value is attribute-escaped, so a quote
/// or `?>` in a header cannot end the instruction early. An unknown name is logged and yields an empty
/// string. For v3 the toggles live on the root element, so the result is
/// always empty.
pub fn process_instruction(pis: &ProcessInstructions, name: &str, dialect: Dialect) -> String {
    if dialect == Dialect::V3 {
        return String::new();
    }
    match name.parse::<ProcessInstruction>() {
        Ok(pi) => instruction_line(pis, pi).unwrap_or_default(),
        Err(e) => {
            tracing::warn!(name = %name, "{e}");
            String::new()
        }
    }
}

/// Write every processing instruction in [`ProcessInstruction::ALL`] order.
///
/// Writes nothing for v3.
pub fn write_process_instructions(out: &mut String, pis: &ProcessInstructions, dialect: Dialect) {
    if dialect == Dialect::V3 {
        return;
    }
    for pi in ProcessInstruction::ALL {
        if let Some(line) = instruction_line(pis, pi) {
            out.push_str(&line);
        }
    }
}

fn instruction_line(pis: &ProcessInstructions, pi: ProcessInstruction) -> Option<String> {
    pis.value(pi)
        .map(|value| format!("<?rfc {}=\"{}\"?>\n", pi.as_str(), escape_xml_attr(value)))
}

#[cfg(feature = "serde")]
mod de {
    use serde::{Deserialize, Deserializer};

    /// Accept `"yes"`/`"no"` strings as well as booleans. An empty string is
    /// unset; any string other than `"yes"` means no.
    pub(super) fn toggle<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Bool(bool),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Bool(flag) => Some(flag),
            Raw::Text(text) if text.is_empty() => None,
            Raw::Text(text) => Some(text == "yes"),
        })
    }
}
