use getset::Getters;
use indexmap::IndexSet;
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::error::{Result, VcfError};

#[cfg(not(feature = "sync"))]
pub type SharedHeader = std::rc::Rc<Header>;
#[cfg(feature = "sync")]
pub type SharedHeader = std::sync::Arc<Header>;

pub type Sample = String;

pub(crate) const COLUMN_HEADER_PREFIX: &str = "#CHROM";
/// A sample field that holds no call at all.
pub(crate) const MISSING_GENOTYPE: &str = "./.";
pub(crate) const MISSING_ALLELE: char = '.';
pub(crate) const GENOTYPE_KEY: &str = "GT";

/// The fixed leading columns of a VCF column header line, in file order.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Column {
    Chrom,
    Pos,
    Id,
    Ref,
    Alt,
    Qual,
    Filter,
    Info,
    Format,
}

#[derive(Debug, Clone, Getters)]
#[getset(get = "pub")]
pub struct Header {
    /// Every line preceding the `#CHROM` line, verbatim (terminators included).
    pub(crate) meta: String,
    pub(crate) columns: IndexSet<String>,
    pub(crate) samples: Vec<Sample>,
}

impl Header {
    pub(crate) fn new(meta: String, names: Vec<String>) -> Result<Self> {
        let mut columns = IndexSet::with_capacity(names.len());
        for name in names {
            if columns.contains(&name) {
                return Err(VcfError::DuplicateColumn(name));
            }
            columns.insert(name);
        }
        let samples = match columns.get_index_of(Column::Format.as_ref()) {
            Some(idx) => columns.iter().skip(idx + 1).cloned().collect(),
            None => Vec::new(),
        };
        Ok(Self {
            meta,
            columns,
            samples,
        })
    }

    /// Position of the named column in a data line.
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .get_index_of(name)
            .ok_or_else(|| VcfError::FieldNotFound(name.to_owned()))
    }

    /// Whether the file carries per-sample data.
    pub fn has_format(&self) -> bool {
        self.columns.contains(Column::Format.as_ref())
    }
}
