use std::fmt;
use std::str::FromStr;

use crate::error::KbError;

/// Reference to a single knowledge-base item, composed client-side as
/// `{kind}/{naturalKey}` on the wire (e.g. `gene/BRCA1`,
/// `variant/BRCA1_p.Arg1699Gln`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemRef {
    Gene(String),
    Variant { gene: String, hgvs_p: String },
    Pathway(String),
    Cohort(String),
    Policy(String),
}

impl ItemRef {
    pub fn kind(&self) -> &'static str {
        match self {
            ItemRef::Gene(_) => "gene",
            ItemRef::Variant { .. } => "variant",
            ItemRef::Pathway(_) => "pathway",
            ItemRef::Cohort(_) => "cohort",
            ItemRef::Policy(_) => "policy",
        }
    }

    pub fn natural_key(&self) -> String {
        match self {
            ItemRef::Gene(symbol) => symbol.clone(),
            ItemRef::Variant { gene, hgvs_p } => format!("{gene}_{hgvs_p}"),
            ItemRef::Pathway(id) => id.clone(),
            ItemRef::Cohort(study) => study.clone(),
            ItemRef::Policy(profile) => profile.clone(),
        }
    }

    pub fn path(&self) -> String {
        format!("{}/{}", self.kind(), self.natural_key())
    }
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

impl FromStr for ItemRef {
    type Err = KbError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let (kind, rest) = trimmed
            .split_once('/')
            .ok_or_else(|| KbError::InvalidItemRef(value.to_string()))?;
        if rest.is_empty() {
            return Err(KbError::InvalidItemRef(value.to_string()));
        }
        match kind {
            "gene" => Ok(ItemRef::Gene(rest.to_string())),
            "variant" => {
                let (gene, hgvs_p) = rest
                    .split_once('_')
                    .ok_or_else(|| KbError::InvalidItemRef(value.to_string()))?;
                if gene.is_empty() || hgvs_p.is_empty() {
                    return Err(KbError::InvalidItemRef(value.to_string()));
                }
                Ok(ItemRef::Variant {
                    gene: gene.to_string(),
                    hgvs_p: hgvs_p.to_string(),
                })
            }
            "pathway" => Ok(ItemRef::Pathway(rest.to_string())),
            "cohort" => Ok(ItemRef::Cohort(rest.to_string())),
            "policy" => Ok(ItemRef::Policy(rest.to_string())),
            _ => Err(KbError::InvalidItemRef(value.to_string())),
        }
    }
}
