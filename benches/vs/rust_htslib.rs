use rust_htslib::bcf::{Read, Reader};
use std::path::Path;

pub fn genotype<P: AsRef<Path>>(path: P) {
    let mut reader = Reader::from_path(path).unwrap();
    reader.records().for_each(|record| {
        if let Ok(genotypes) = record.unwrap().genotypes() {
            genotypes.get(0)[0].index().unwrap_or(0)
        } else {
            0
        };
    });
}

pub fn info_dp<P: AsRef<Path>>(path: P) {
    let mut reader = Reader::from_path(path).unwrap();
    reader.records().for_each(|record| {
        if let Ok(Some(v)) = record.unwrap().info(b"DP").integer() {
            v[0]
        } else {
            0
        };
    });
}

pub fn qual<P: AsRef<Path>>(path: P) {
    let mut reader = Reader::from_path(path).unwrap();
    reader.records().for_each(|record| {
        record.unwrap().qual();
    });
}

pub fn chrom<P: AsRef<Path>>(path: P) {
    let mut reader = Reader::from_path(path).unwrap();
    reader.records().for_each(|record| {
        record.unwrap().rid();
    });
}
