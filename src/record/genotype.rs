use itertools::Itertools;

use crate::error::{Result, VcfError};
use crate::parser;
use crate::record::VcfRecord;
use crate::types::{GENOTYPE_KEY, MISSING_ALLELE, MISSING_GENOTYPE};

/// Phased or unphased alleles, represented as indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenotypeAllele {
    Unphased(usize),
    Phased(usize),
}

impl GenotypeAllele {
    /// Get the index into the list of alleles.
    pub fn index(self) -> usize {
        match self {
            GenotypeAllele::Unphased(i) | GenotypeAllele::Phased(i) => i,
        }
    }

    pub fn is_phased(self) -> bool {
        matches!(self, GenotypeAllele::Phased(_))
    }
}

impl VcfRecord {
    /// The sample's column split on `:`, aligned with FORMAT.
    ///
    /// `None` if the column is empty or holds the no-call `./.`.
    pub fn sample_fields(&self, sample: &str) -> Result<Option<Vec<&str>>> {
        let raw = self.sample(sample)?;
        if raw.is_empty() || raw == MISSING_GENOTYPE {
            return Ok(None);
        }
        Ok(Some(raw.split(':').collect_vec()))
    }

    /// Decoded GT of a sample, keeping whether it was phased.
    ///
    /// `None` if the sample has no data here or any allele is missing (`.`).
    /// Fails with [`VcfError::FieldNotFound`] if FORMAT does not list GT.
    pub fn genotype_alleles(&self, sample: &str) -> Result<Option<Vec<GenotypeAllele>>> {
        let fields = match self.sample_fields(sample)? {
            Some(fields) => fields,
            None => return Ok(None),
        };
        let gt_idx = self
            .format
            .as_ref()
            .and_then(|format| format.iter().position(|key| key == GENOTYPE_KEY))
            .ok_or_else(|| VcfError::FieldNotFound(GENOTYPE_KEY.to_owned()))?;
        match fields.get(gt_idx) {
            Some(gt) if !gt.contains(MISSING_ALLELE) => parser::genotype(gt).map(Some),
            _ => Ok(None),
        }
    }

    /// Allele indices of a sample's GT, where 0 is REF and k is the k-th ALT.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_vcf::VcfRecords;
    ///
    /// let mut records = VcfRecords::from_path("resources/example.vcf").unwrap();
    /// let record = records.advance().unwrap().unwrap().record;
    /// assert_eq!(record.relative_genotype("NA00003").unwrap(), Some(vec![1, 1]));
    /// ```
    pub fn relative_genotype(&self, sample: &str) -> Result<Option<Vec<usize>>> {
        Ok(self
            .genotype_alleles(sample)?
            .map(|alleles| alleles.into_iter().map(GenotypeAllele::index).collect_vec()))
    }

    /// The sample's GT resolved to allele sequences.
    pub fn genotype(&self, sample: &str) -> Result<Option<Vec<&str>>> {
        let indices = match self.relative_genotype(sample)? {
            Some(indices) => indices,
            None => return Ok(None),
        };
        let alleles = self.alleles();
        indices
            .into_iter()
            .map(|index| {
                alleles.get(index).copied().ok_or(VcfError::AlleleOutOfRange {
                    index,
                    n_alleles: alleles.len(),
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(Some)
    }
}
