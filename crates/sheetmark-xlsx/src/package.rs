//! Access to the named parts of an OOXML package

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use zip::result::ZipError;

use crate::error::{XlsxError, XlsxResult};

/// A container of named byte parts
///
/// The parsers never touch the archive directly; they ask for whole parts by
/// name and receive `None` when the part does not exist.
pub trait PartSource {
    /// Read a part fully into memory
    fn read_part(&mut self, name: &str) -> XlsxResult<Option<Vec<u8>>>;

    /// Read a part that must exist
    fn require_part(&mut self, name: &str) -> XlsxResult<Vec<u8>> {
        self.read_part(name)?
            .ok_or_else(|| XlsxError::MissingPart(name.to_string()))
    }
}

/// An XLSX file opened as a ZIP archive
pub struct ZipPackage<R: Read + Seek> {
    archive: zip::ZipArchive<R>,
}

impl ZipPackage<BufReader<File>> {
    /// Open a package from a file path
    pub fn open<P: AsRef<Path>>(path: P) -> XlsxResult<Self> {
        let file = File::open(path)?;
        Self::new(BufReader::new(file))
    }
}

impl<R: Read + Seek> ZipPackage<R> {
    /// Open a package from a reader
    pub fn new(reader: R) -> XlsxResult<Self> {
        let archive = zip::ZipArchive::new(reader)?;

        // Verify this is an OOXML package
        if archive.index_for_name("[Content_Types].xml").is_none() {
            return Err(XlsxError::InvalidFormat(
                "Missing [Content_Types].xml".into(),
            ));
        }

        Ok(Self { archive })
    }

    /// Names of all parts in the archive
    pub fn part_names(&self) -> impl Iterator<Item = &str> {
        self.archive.file_names()
    }
}

impl<R: Read + Seek> PartSource for ZipPackage<R> {
    fn read_part(&mut self, name: &str) -> XlsxResult<Option<Vec<u8>>> {
        match self.archive.by_name(name) {
            Ok(mut file) => {
                let mut bytes = Vec::with_capacity(file.size() as usize);
                file.read_to_end(&mut bytes)?;
                log::trace!("Read part {} ({} bytes)", name, bytes.len());
                Ok(Some(bytes))
            }
            Err(ZipError::FileNotFound) => Ok(None),
            Err(e) => Err(XlsxError::Zip(e)),
        }
    }
}

impl PartSource for HashMap<String, Vec<u8>> {
    fn read_part(&mut self, name: &str) -> XlsxResult<Option<Vec<u8>>> {
        Ok(self.get(name).cloned())
    }
}

impl PartSource for BTreeMap<String, Vec<u8>> {
    fn read_part(&mut self, name: &str) -> XlsxResult<Option<Vec<u8>>> {
        Ok(self.get(name).cloned())
    }
}
