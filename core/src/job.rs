use alloc::{format, string::String, vec::Vec};
use log::{info, trace};

use crate::{
    art::ArtGrid,
    error::{Error, InputFile, Result},
    fs::{Filesystem, Mode as OpenMode, read_text, write_file},
    mode::Mode,
    planar,
    render::{self, Header},
    sheet::Sheet,
    xlate::TranslationTable,
};

/// Extension of the optional raw pattern dump.
pub const RAW_EXTENSION: &str = "bin";

/// One conversion, as requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub mode: Mode,
    pub name: String,
    pub art_path: String,
    pub xlate_path: String,
    pub sheet: Sheet,
}

/// Result of a successful run.
#[derive(Debug)]
pub struct Conversion {
    pub data: Vec<u8>,
    pub output_path: String,
}

impl Job {
    /// Reads both inputs and encodes the requested patterns. Nothing is
    /// written.
    pub fn encode<FS: Filesystem>(&self, fs: &FS) -> Result<Vec<u8>> {
        check_exists(fs, InputFile::Art, &self.art_path)?;
        check_exists(fs, InputFile::Translation, &self.xlate_path)?;

        let xlate = read_input(fs, InputFile::Translation, &self.xlate_path)?;
        let table = TranslationTable::parse(&xlate);
        for value in 0..table.len() as u8 {
            if let Some(ch) = table.char_of(value) {
                trace!("Value {} is '{}'", value, ch);
            }
        }
        let art = ArtGrid::parse(&read_input(fs, InputFile::Art, &self.art_path)?);
        info!(
            "Read {} translation entries and {} art lines",
            table.len(),
            art.height()
        );

        planar::encode(self.mode, &self.sheet, &art, &table)
    }

    /// Encodes and writes `<name>.gen_data`. The output file is only created
    /// once encoding succeeded.
    pub fn run<FS: Filesystem>(
        &self,
        fs: &FS,
        timestamp: &str,
        author: &str,
    ) -> Result<Conversion> {
        let data = self.encode(fs)?;
        let header = Header {
            name: &self.name,
            mode: self.mode,
            timestamp,
            author,
        };
        let text = render::render(&header, &data);

        let output_path = render::file_name(&self.name);
        write_file(fs, &output_path, text.as_bytes()).map_err(Error::IoError)?;
        info!(
            "Wrote {} {} pattern(s), {} bytes, to {}",
            self.sheet.tile_count(),
            self.mode.repr(),
            data.len(),
            output_path
        );

        Ok(Conversion { data, output_path })
    }

    /// Writes the bytes of a finished conversion to `<name>.bin`.
    pub fn write_raw<FS: Filesystem>(&self, fs: &FS, conversion: &Conversion) -> Result<String> {
        let raw_path = format!("{}.{}", self.name, RAW_EXTENSION);
        write_file(fs, &raw_path, &conversion.data).map_err(Error::IoError)?;
        info!("Wrote raw data to {}", raw_path);
        Ok(raw_path)
    }
}

fn check_exists<FS: Filesystem>(fs: &FS, which: InputFile, path: &str) -> Result<()> {
    if fs.exists(path).map_err(Error::from_io_error)? {
        Ok(())
    } else {
        Err(Error::FileMissing(which, String::from(path)))
    }
}

fn read_input<FS: Filesystem>(fs: &FS, which: InputFile, path: &str) -> Result<String> {
    let mut file = fs.open_file(path, OpenMode::Read).map_err(Error::from_io_error)?;
    read_text(&mut file)
        .map_err(Error::IoError)?
        .ok_or(Error::InvalidText(which))
}
