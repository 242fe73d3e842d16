use thiserror::Error;

pub type Result<T> = std::result::Result<T, VcfError>;

#[derive(Debug, Error)]
pub enum VcfError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to open input: {0}")]
    Open(#[from] niffler::Error),

    /// The stream ended before the `#CHROM` column header line.
    #[error("malformed header: no #CHROM line found before end of input")]
    MalformedHeader,

    #[error("malformed header: column {0} appears more than once")]
    DuplicateColumn(String),

    /// A column, FORMAT key or sample that the header does not define.
    #[error("field {0} not found")]
    FieldNotFound(String),

    #[error("record has no value for column {0}")]
    MissingValue(String),

    #[error("invalid genotype {0:?}")]
    InvalidGenotype(String),

    #[error("allele index {index} out of range for {n_alleles} alleles")]
    AlleleOutOfRange { index: usize, n_alleles: usize },
}
