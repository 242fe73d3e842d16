use rust_vcf::record::Record;
use rust_vcf::VcfRecords;
use std::path::Path;

pub fn genotype<P: AsRef<Path>>(path: P) {
    let records = VcfRecords::from_path(path).unwrap();
    records.for_each(|entry| {
        entry
            .unwrap()
            .record
            .relative_genotype("NA00001")
            .unwrap()
            .map(|gt| gt[0])
            .unwrap_or(0);
    });
}

pub fn info_dp<P: AsRef<Path>>(path: P) {
    let records = VcfRecords::from_path(path).unwrap();
    records.for_each(|entry| {
        entry.unwrap().record.info("DP").and_then(|v| v.value().map(str::len));
    });
}

pub fn qual<P: AsRef<Path>>(path: P) {
    let records = VcfRecords::from_path(path).unwrap();
    records.for_each(|entry| {
        entry.unwrap().record.qual().parse::<f32>().ok();
    });
}

pub fn chrom<P: AsRef<Path>>(path: P) {
    let records = VcfRecords::from_path(path).unwrap();
    records.for_each(|entry| {
        entry.unwrap().record.chrom().len();
    });
}
