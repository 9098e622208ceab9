use crate::domain::model::{InterpretationEntry, ZodiacSign};
use crate::utils::error::{OracleError, Result};
use once_cell::sync::OnceCell;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

const EMBEDDED_CATALOG: &str = include_str!("../../data/interpretations.toml");

pub const FALLBACK_WOUND: &str = "No interpretation available.";
pub const FALLBACK_STRENGTH: &str = "No strength available.";

static SHARED: OnceCell<Arc<Catalog>> = OnceCell::new();

/// Borrowed (wound, inverted strength) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interpretation<'a> {
    pub wound: &'a str,
    pub strength: &'a str,
}

impl Interpretation<'static> {
    pub const FALLBACK: Interpretation<'static> = Interpretation {
        wound: FALLBACK_WOUND,
        strength: FALLBACK_STRENGTH,
    };
}

/// Read-only (sign, house) -> interpretation table.
///
/// Built once from the TOML asset bundled into the binary; there is no way to
/// mutate it after construction, so it is shared freely across requests.
#[derive(Debug)]
pub struct Catalog {
    entries: HashMap<ZodiacSign, BTreeMap<u8, InterpretationEntry>>,
}

impl Catalog {
    /// Process-wide catalog parsed from the embedded asset on first use.
    pub fn shared() -> Result<Arc<Catalog>> {
        SHARED
            .get_or_try_init(|| {
                let catalog = Catalog::from_toml_str(EMBEDDED_CATALOG)?;
                tracing::debug!("Interpretation catalog loaded with {} entries", catalog.len());
                Ok(Arc::new(catalog))
            })
            .cloned()
    }

    /// Parses a catalog of the form `[Sign.house] wound = "..", strength = ".."`.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let raw: HashMap<String, HashMap<String, InterpretationEntry>> = toml::from_str(content)
            .map_err(|e| OracleError::CatalogError {
                message: format!("TOML parsing error: {}", e),
            })?;

        let mut entries: HashMap<ZodiacSign, BTreeMap<u8, InterpretationEntry>> = HashMap::new();
        for (sign_name, houses) in raw {
            let sign = sign_name
                .parse::<ZodiacSign>()
                .map_err(|message| OracleError::CatalogError { message })?;

            let table = entries.entry(sign).or_default();
            for (house_key, entry) in houses {
                let house = house_key
                    .parse::<u8>()
                    .ok()
                    .filter(|h| (1..=12).contains(h))
                    .ok_or_else(|| OracleError::CatalogError {
                        message: format!("{}: house '{}' is not within 1..=12", sign, house_key),
                    })?;
                table.insert(house, entry);
            }
        }

        Ok(Self { entries })
    }

    /// Never fails: a missing pair yields [`Interpretation::FALLBACK`].
    pub fn lookup(&self, sign: ZodiacSign, house: u8) -> Interpretation<'_> {
        match self.entries.get(&sign).and_then(|houses| houses.get(&house)) {
            Some(entry) => Interpretation {
                wound: &entry.wound,
                strength: &entry.strength,
            },
            None => {
                tracing::warn!("⚠️ No interpretation for {} house {}, using fallback", sign, house);
                Interpretation::FALLBACK
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when every sign has all twelve houses.
    pub fn is_complete(&self) -> bool {
        ZodiacSign::ALL.iter().all(|sign| {
            self.entries
                .get(sign)
                .is_some_and(|houses| (1..=12).all(|h| houses.contains_key(&h)))
        })
    }
}
