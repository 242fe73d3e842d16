pub mod error;
pub mod info;
pub(crate) mod parser;
pub mod reader;
pub mod record;
pub mod types;
pub mod writer;

pub use error::{Result, VcfError};
pub use info::{Info, InfoValue};
pub use reader::{Entry, VcfRecords};
pub use record::{GenotypeAllele, Record, VcfRecord};
pub use types::Header;
pub use writer::VcfWriter;
