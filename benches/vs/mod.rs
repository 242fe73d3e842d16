pub mod rust_htslib;
pub mod rust_vcf;
