use std::fmt;
use std::io::Write;

use itertools::Itertools;
use strum::IntoEnumIterator;

use crate::error::Result;
use crate::record::VcfRecord;
use crate::types::{Column, Header};

impl fmt::Display for VcfRecord {
    /// Writes the record as a VCF data line, without line terminator.
    /// INFO keys come out sorted; FORMAT and sample columns only if the header has them.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.chrom,
            self.pos,
            self.id,
            self.ref_allele,
            self.alt_alleles.iter().join(","),
            self.qual,
            self.filter,
            self.info
        )?;
        if let Some(format) = &self.format {
            write!(f, "\t{}", format.iter().join(":"))?;
            for sample in &self.samples {
                write!(f, "\t{}", sample)?;
            }
        }
        Ok(())
    }
}

impl VcfRecord {
    pub fn to_line(&self, newline: bool) -> String {
        let mut line = self.to_string();
        if newline {
            line.push('\n');
        }
        line
    }
}

impl Header {
    /// The `#CHROM` line for this header's samples.
    pub fn column_line(&self, newline: bool) -> String {
        let has_format = self.has_format();
        let mut line = format!(
            "#{}",
            Column::iter()
                .filter(|&column| column != Column::Format || has_format)
                .map(|column| column.to_string())
                .chain(self.samples.iter().cloned())
                .join("\t")
        );
        if newline {
            line.push('\n');
        }
        line
    }
}

/// Writes VCF text: the header once, then one line per record.
pub struct VcfWriter<W: Write> {
    inner: W,
}

impl<W: Write> VcfWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Writes the stored meta lines followed by the column header line.
    pub fn write_header(&mut self, header: &Header) -> Result<()> {
        self.inner.write_all(header.meta().as_bytes())?;
        self.inner.write_all(header.column_line(true).as_bytes())?;
        Ok(())
    }

    pub fn write_record(&mut self, record: &VcfRecord) -> Result<()> {
        writeln!(self.inner, "{}", record)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::info::InfoValue;
    use crate::reader::VcfRecords;
    use std::io::Cursor;

    const VCF: &str = "##fileformat=VCFv4.2\n\
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tS1\tS2\n\
1\t100\trs7\tA\tG,T\t50\tPASS\tAF=0.5;DB;DP=10\tGT:DP\t0/1:20\t./.\n\
1\t200\t.\tC\t.\t.\tq10\tDP=10;AF=0.5;DB\tGT\t1|1\t\n";

    fn records() -> VcfRecords<Cursor<&'static [u8]>> {
        VcfRecords::new(Cursor::new(VCF.as_bytes())).unwrap()
    }

    #[test]
    fn test_line_round_trip() {
        let mut records = records();
        let record = records.advance().unwrap().unwrap().record;
        assert_eq!(
            record.to_line(true),
            "1\t100\trs7\tA\tG,T\t50\tPASS\tAF=0.5;DB;DP=10\tGT:DP\t0/1:20\t./.\n"
        );
    }

    #[test]
    fn test_info_is_sorted_on_output() {
        let mut records = records();
        records.advance().unwrap();
        let record = records.advance().unwrap().unwrap().record;
        assert_eq!(
            record.to_line(false),
            "1\t200\t.\tC\t.\t.\tq10\tAF=0.5;DB;DP=10\tGT\t1|1\t"
        );
    }

    #[test]
    fn test_output_reflects_edits() {
        let mut records = records();
        let mut record = records.advance().unwrap().unwrap().record;
        *record.filter_mut() = "LowQual".to_owned();
        record.info_mut().remove("DB");
        record.info_mut().insert("END", InfoValue::Value("101".into()));
        assert_eq!(
            record.to_string(),
            "1\t100\trs7\tA\tG,T\t50\tLowQual\tAF=0.5;DP=10;END=101\tGT:DP\t0/1:20\t./."
        );
    }

    #[test]
    fn test_column_line() {
        let records = records();
        assert_eq!(
            records.header().column_line(true),
            "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tS1\tS2\n"
        );
    }

    #[test]
    fn test_column_line_without_format() {
        let records =
            VcfRecords::new(Cursor::new(&b"#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\n"[..]))
                .unwrap();
        assert_eq!(
            records.header().column_line(false),
            "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO"
        );
    }

    #[test]
    fn test_writer_reproduces_sorted_input() {
        let records = records();
        let mut writer = VcfWriter::new(Vec::new());
        writer.write_header(records.header()).unwrap();
        let header_len = writer.inner.len();
        for entry in records {
            writer.write_record(&entry.unwrap().record).unwrap();
        }
        let written = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(&written[..header_len], &VCF[..header_len]);
        assert_eq!(written.lines().count(), VCF.lines().count());
        assert_eq!(written.lines().nth(2), VCF.lines().nth(2));
    }
}
