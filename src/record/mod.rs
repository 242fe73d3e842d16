mod genotype;

use std::borrow::Cow;

use getset::MutGetters;
use itertools::Itertools;

use crate::error::{Result, VcfError};
use crate::info::{Info, InfoValue};
use crate::types::{Column, Header, SharedHeader};
pub use genotype::GenotypeAllele;

pub trait Record {
    fn chrom(&self) -> &str;

    fn pos(&self) -> &str;

    fn id(&self) -> &str;

    fn ref_allele(&self) -> &str;

    fn alt_alleles(&self) -> &[String];

    fn qual(&self) -> &str;

    fn filter(&self) -> &str;

    fn info(&self, tag: &str) -> Option<&InfoValue>;

    fn format(&self) -> Option<&[String]>;

    fn has_flag(&self, tag: &str) -> bool;
}

/// One data line of a VCF file, split into its columns.
///
/// Per-sample columns are kept as raw text and only decoded on request,
/// see [`VcfRecord::sample_fields`] and [`VcfRecord::genotype`].
#[derive(Debug, Clone, MutGetters)]
pub struct VcfRecord {
    #[getset(get_mut = "pub")]
    pub(crate) chrom: String,
    #[getset(get_mut = "pub")]
    pub(crate) pos: String,
    #[getset(get_mut = "pub")]
    pub(crate) id: String,
    #[getset(get_mut = "pub")]
    pub(crate) ref_allele: String,
    #[getset(get_mut = "pub")]
    pub(crate) alt_alleles: Vec<String>,
    #[getset(get_mut = "pub")]
    pub(crate) qual: String,
    #[getset(get_mut = "pub")]
    pub(crate) filter: String,
    /// `None` iff the header has no FORMAT column.
    #[getset(get_mut = "pub")]
    pub(crate) format: Option<Vec<String>>,
    #[getset(get_mut = "pub")]
    pub(crate) info: Info,
    // raw per-sample columns, in header sample order
    #[getset(get_mut = "pub")]
    pub(crate) samples: Vec<String>,
    pub(crate) header: SharedHeader,
}

fn column<'a>(header: &Header, fields: &[&'a str], name: &str) -> Result<&'a str> {
    let idx = header.column_index(name)?;
    fields
        .get(idx)
        .copied()
        .ok_or_else(|| VcfError::MissingValue(name.to_owned()))
}

impl VcfRecord {
    /// Splits one data line (without its line terminator) according to the header.
    pub fn from_line(line: &str, header: SharedHeader) -> Result<Self> {
        let fields = line.split('\t').collect_vec();
        let fixed = |c: Column| column(&header, &fields, c.as_ref());

        let format = if header.has_format() {
            Some(
                fixed(Column::Format)?
                    .split(':')
                    .map(str::to_owned)
                    .collect_vec(),
            )
        } else {
            None
        };
        let samples = header
            .samples()
            .iter()
            .map(|sample| column(&header, &fields, sample).map(str::to_owned))
            .collect::<Result<Vec<_>>>()?;

        let record = Self {
            chrom: fixed(Column::Chrom)?.to_owned(),
            pos: fixed(Column::Pos)?.to_owned(),
            id: fixed(Column::Id)?.to_owned(),
            ref_allele: fixed(Column::Ref)?.to_owned(),
            alt_alleles: fixed(Column::Alt)?
                .split(',')
                .map(str::to_owned)
                .collect_vec(),
            qual: fixed(Column::Qual)?.to_owned(),
            filter: fixed(Column::Filter)?.to_owned(),
            format,
            info: Info::from(fixed(Column::Info)?),
            samples,
            header: header.clone(),
        };
        Ok(record)
    }

    pub fn header(&self) -> &Header {
        self.header.as_ref()
    }

    /// REF followed by ALT, so that a genotype index addresses it directly.
    pub fn alleles(&self) -> Vec<&str> {
        std::iter::once(self.ref_allele.as_str())
            .chain(self.alt_alleles.iter().map(String::as_str))
            .collect_vec()
    }

    pub fn info_field(&self) -> &Info {
        &self.info
    }

    /// Raw text of the given sample's column.
    pub fn sample(&self, sample: &str) -> Result<&str> {
        self.header
            .samples()
            .iter()
            .position(|s| s == sample)
            .and_then(|idx| self.samples.get(idx))
            .map(String::as_str)
            .ok_or_else(|| VcfError::FieldNotFound(sample.to_owned()))
    }

    /// Current text of any header column, as it would be written out.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_vcf::VcfRecords;
    ///
    /// let mut records = VcfRecords::from_path("resources/example.vcf").unwrap();
    /// let record = records.advance().unwrap().unwrap().record;
    /// assert_eq!(record.field("ALT").unwrap(), "A");
    /// assert_eq!(record.field("INFO").unwrap(), "AF=0.5;DB;DP=14");
    /// assert_eq!(record.field("NA00002").unwrap(), "1|0:8");
    /// assert!(record.field("NA00004").is_err());
    /// ```
    pub fn field(&self, name: &str) -> Result<Cow<'_, str>> {
        self.header.column_index(name)?;
        let value = match name.parse::<Column>() {
            Ok(Column::Chrom) => Cow::Borrowed(self.chrom.as_str()),
            Ok(Column::Pos) => Cow::Borrowed(self.pos.as_str()),
            Ok(Column::Id) => Cow::Borrowed(self.id.as_str()),
            Ok(Column::Ref) => Cow::Borrowed(self.ref_allele.as_str()),
            Ok(Column::Alt) => Cow::Owned(self.alt_alleles.iter().join(",")),
            Ok(Column::Qual) => Cow::Borrowed(self.qual.as_str()),
            Ok(Column::Filter) => Cow::Borrowed(self.filter.as_str()),
            Ok(Column::Info) => Cow::Owned(self.info.to_string()),
            Ok(Column::Format) => match &self.format {
                Some(format) => Cow::Owned(format.iter().join(":")),
                None => return Err(VcfError::FieldNotFound(name.to_owned())),
            },
            Err(_) => Cow::Borrowed(self.sample(name)?),
        };
        Ok(value)
    }
}

impl Record for VcfRecord {
    /// Returns the chromosome of this record, i.e. CHROM.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_vcf::{Record, VcfRecords};
    ///
    /// let records = VcfRecords::from_path("resources/example.vcf").unwrap();
    /// for entry in records {
    ///     assert_eq!(entry.unwrap().record.chrom(), "20")
    /// }
    /// ```
    fn chrom(&self) -> &str {
        &self.chrom
    }

    /// Returns the position of this record, i.e. POS, exactly as written in the file.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_vcf::{Record, VcfRecords};
    ///
    /// let mut records = VcfRecords::from_path("resources/example.vcf").unwrap();
    /// let record = records.advance().unwrap().unwrap().record;
    /// assert_eq!(record.pos(), "14370")
    /// ```
    fn pos(&self) -> &str {
        &self.pos
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn ref_allele(&self) -> &str {
        &self.ref_allele
    }

    /// Returns the alternative alleles of this record, i.e. ALT.
    /// A missing ALT (`.`) is a single-element list.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_vcf::{Record, VcfRecords};
    ///
    /// let records = VcfRecords::from_path("resources/example.vcf").unwrap();
    /// for entry in records {
    ///     assert!(!entry.unwrap().record.alt_alleles().is_empty())
    /// }
    /// ```
    fn alt_alleles(&self) -> &[String] {
        &self.alt_alleles
    }

    fn qual(&self) -> &str {
        &self.qual
    }

    fn filter(&self) -> &str {
        &self.filter
    }

    /// For a given INFO tag, return its contents.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_vcf::{Record, VcfRecords};
    ///
    /// let mut records = VcfRecords::from_path("resources/example.vcf").unwrap();
    /// let record = records.advance().unwrap().unwrap().record;
    /// assert_eq!(record.info("DP").and_then(|v| v.value()), Some("14"))
    /// ```
    fn info(&self, tag: &str) -> Option<&InfoValue> {
        self.info.get(tag)
    }

    fn format(&self) -> Option<&[String]> {
        self.format.as_deref()
    }

    fn has_flag(&self, tag: &str) -> bool {
        self.info.has_flag(tag)
    }
}
