//! Curated ticker -> provider symbol table.
//!
//! Covers instruments the mechanical rule gets wrong or cannot express:
//! index tickers (caret-prefixed provider codes) and roots the provider
//! lists under a different name. Entries for regular share classes are kept
//! as well so the table documents the tracked universe.

use std::collections::HashMap;
use std::sync::Arc;

use lazy_static::lazy_static;

use crate::models::{ExternalSymbol, Ticker};

/// Built-in curated entries, `(internal ticker, provider symbol)`.
pub const CURATED_SYMBOLS: &[(&str, &str)] = &[
    ("EVO", "EVO.ST"),
    ("SINCH", "SINCH.ST"),
    ("EMBRAC B", "EMBRAC-B.ST"),
    ("HTRO", "HTRO.ST"),
    ("SSAB B", "SSAB-B.ST"),
    ("ERIC B", "ERIC-B.ST"),
    ("VOLV B", "VOLV-B.ST"),
    ("INVE B", "INVE-B.ST"),
    ("SEB A", "SEB-A.ST"),
    ("SHB A", "SHB-A.ST"),
    ("SWED A", "SWED-A.ST"),
    ("AZN", "AZN.ST"),
    ("ATCO A", "ATCO-A.ST"),
    ("ABB", "ABB.ST"),
    ("ALFA", "ALFA.ST"),
    ("SAND", "SAND.ST"),
    ("SKF B", "SKF-B.ST"),
    ("HEXA B", "HEXA-B.ST"),
    ("NIBE B", "NIBE-B.ST"),
    ("BOL", "BOL.ST"),
    ("TELE2 B", "TELE2-B.ST"),
    ("TELIA", "TELIA.ST"),
    ("HM B", "HM-B.ST"),
    ("ASSA B", "ASSA-B.ST"),
    ("ESSITY B", "ESSITY-B.ST"),
    ("LUND B", "LUND-B.ST"),
    ("FABG", "FABG.ST"),
    ("BETS B", "BETS-B.ST"),
    ("CINT", "CINT.ST"),
    ("LATO B", "LATO-B.ST"),
    ("NOLA B", "NOLA-B.ST"),
    ("PEAB B", "PEAB-B.ST"),
    ("SWMA", "SWMA.ST"),
    ("TOBS B", "TOBS-B.ST"),
    ("XVIVO", "XVIVO.ST"),
    ("VOLV A", "VOLV-A.ST"),
    ("ATCO B", "ATCO-B.ST"),
    ("GETI B", "GETI-B.ST"),
    ("HUSQ B", "HUSQ-B.ST"),
    ("LIFCO B", "LIFCO-B.ST"),
    ("LOOMIS", "LOOMIS.ST"),
    ("NDA SE", "NDA-SE.ST"),
    ("SCA B", "SCA-B.ST"),
    ("SECU B", "SECU-B.ST"),
    ("SWEC B", "SWEC-B.ST"),
    ("TREL B", "TREL-B.ST"),
    ("EQT", "EQT.ST"),
    ("AXFO", "AXFO.ST"),
    ("AAK", "AAK.ST"),
    ("CAST", "CAST.ST"),
    ("ELUX B", "ELUX-B.ST"),
    ("INDU C", "INDU-C.ST"),
    ("KINV B", "KINV-B.ST"),
    ("ALIV SDB", "ALIV-SDB.ST"),
    ("EKTA B", "EKTA-B.ST"),
    ("THULE", "THULE.ST"),
    ("HUFV A", "HUFV-A.ST"),
    ("SAGAX B", "SAGAX-B.ST"),
    ("WALL B", "WALL-B.ST"),
    ("INDT", "INDT.ST"),
    ("JM", "JM.ST"),
    ("BURE", "BURE.ST"),
    ("DIOS", "DIOS.ST"),
    ("HMS", "HMS.ST"),
    ("KABE B", "KABE-B.ST"),
    ("NCAB", "NCAB.ST"),
    ("NOTE", "NOTE.ST"),
    ("NYFOSA", "NYFOSA.ST"),
    ("OEM B", "OEM-B.ST"),
    ("PNDX B", "PNDX-B.ST"),
    ("RATO B", "RATO-B.ST"),
    ("VBG B", "VBG-B.ST"),
    ("ADDT B", "ADDT-B.ST"),
    ("HOLMEN B", "HOLM-B.ST"),
    ("OMXS30", "^OMX"),
];

lazy_static! {
    /// Process-wide curated table, built on first use and never mutated.
    static ref CURATED_TABLE: Arc<SymbolTable> = Arc::new(SymbolTable::from_pairs(CURATED_SYMBOLS));
}

/// Immutable exact-match mapping from internal tickers to provider symbols.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    entries: HashMap<Arc<str>, ExternalSymbol>,
}

impl SymbolTable {
    /// The shared built-in table.
    pub fn curated() -> Arc<SymbolTable> {
        CURATED_TABLE.clone()
    }

    /// Build a table from `(ticker, symbol)` pairs. Later pairs win on duplicates.
    pub fn from_pairs<T, S>(pairs: &[(T, S)]) -> Self
    where
        T: AsRef<str>,
        S: AsRef<str>,
    {
        let entries = pairs
            .iter()
            .map(|(ticker, symbol)| {
                (
                    Arc::from(ticker.as_ref()),
                    ExternalSymbol::new(symbol.as_ref()),
                )
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, ticker: &Ticker) -> Option<&ExternalSymbol> {
        self.entries.get(ticker.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ExternalSymbol)> {
        self.entries.iter().map(|(k, v)| (k.as_ref(), v))
    }
}

/// Exact-match lookup of `ticker` in `table`.
pub fn lookup_curated(table: &SymbolTable, ticker: &Ticker) -> Option<ExternalSymbol> {
    table.get(ticker).cloned()
}

/// Mechanical derivation: spaces become hyphens, then `suffix` is appended.
pub fn derive_symbol(ticker: &Ticker, suffix: &str) -> ExternalSymbol {
    ExternalSymbol::new(format!("{}{}", ticker.as_str().replace(' ', "-"), suffix))
}
