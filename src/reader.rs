use std::io::{BufRead, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use tracing::{debug, trace};

use crate::error::{Result, VcfError};
use crate::parser;
use crate::record::VcfRecord;
use crate::types::{Header, SharedHeader, COLUMN_HEADER_PREFIX};

/// A record together with whether its (CHROM, POS, ALT) differs from the
/// record read just before it.
///
/// `unique` is only meaningful if the input is sorted by CHROM and POS.
#[derive(Debug, Clone)]
pub struct Entry {
    pub record: VcfRecord,
    pub unique: bool,
}

type SiteKey = (String, String, Vec<String>);

/// Forward-only cursor over the data lines of a VCF stream.
pub struct VcfRecords<R: BufRead> {
    header: SharedHeader,
    line_buf: String,
    last_site: Option<SiteKey>,
    inner: R,
}

impl<R: BufRead> VcfRecords<R> {
    pub fn header(&self) -> &Header {
        self.header.as_ref()
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl VcfRecords<BufReader<Box<dyn Read>>> {
    /// Opens a plain or compressed VCF file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let (reader, _format) = niffler::from_path(path)?;
        Self::new(BufReader::new(reader))
    }
}

/// Consumes lines up to and including the `#CHROM` line.
fn read_header<R: BufRead>(reader: &mut R) -> Result<Header> {
    let mut meta = String::new();
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(VcfError::MalformedHeader);
        }
        if line.starts_with(COLUMN_HEADER_PREFIX) {
            break;
        }
        meta.push_str(&line);
    }
    let names = parser::column_names(parser::strip_line_terminator(&line))?;
    Header::new(meta, names)
}

impl<R: BufRead> VcfRecords<R> {
    pub fn new(mut reader: R) -> Result<Self> {
        let header = read_header(&mut reader)?;
        debug!(
            columns = header.columns().len(),
            samples = header.samples().len(),
            "parsed VCF header"
        );
        Ok(Self {
            header: SharedHeader::new(header),
            line_buf: String::new(),
            last_site: None,
            inner: reader,
        })
    }

    /// Reads the next data line. `Ok(None)` marks the end of the stream.
    pub fn advance(&mut self) -> Result<Option<Entry>> {
        loop {
            self.line_buf.clear();
            if self.inner.read_line(&mut self.line_buf)? == 0 {
                return Ok(None);
            }
            let line = parser::strip_line_terminator(&self.line_buf);
            if line.is_empty() {
                trace!("skipping blank line");
                continue;
            }
            let record = VcfRecord::from_line(line, self.header.clone())?;
            let unique = self.check_unique(&record);
            return Ok(Some(Entry { record, unique }));
        }
    }

    fn check_unique(&mut self, record: &VcfRecord) -> bool {
        let site = (
            record.chrom.clone(),
            record.pos.clone(),
            record.alt_alleles.clone(),
        );
        if self.last_site.as_ref() == Some(&site) {
            trace!(chrom = %site.0, pos = %site.1, "duplicate site");
            false
        } else {
            self.last_site = Some(site);
            true
        }
    }
}

impl<R: BufRead + Seek> VcfRecords<R> {
    /// Seeks the stream back to its start and reads the header again,
    /// as if the stream had just been opened.
    pub fn reset(mut self) -> Result<Self> {
        self.inner.seek(SeekFrom::Start(0))?;
        debug!("rewound VCF stream");
        Self::new(self.inner)
    }
}

impl<R: BufRead> Iterator for VcfRecords<R> {
    type Item = Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().transpose()
    }
}
