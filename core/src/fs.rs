use alloc::{string::String, vec::Vec};
use embedded_io::{ErrorType, Read, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Read,
    Write,
}

pub trait Filesystem: ErrorType {
    type File: File;

    fn open_file(&self, path: &str, mode: Mode) -> Result<Self::File, Self::Error>;
    fn exists(&self, path: &str) -> Result<bool, Self::Error>;
}

pub trait File: Read + Write {
    fn size(&self) -> usize;

    fn read_all(&mut self) -> Result<Vec<u8>, Self::Error> {
        let mut data = Vec::with_capacity(self.size());
        let mut chunk = [0u8; 512];
        loop {
            let read = self.read(&mut chunk)?;
            if read == 0 {
                break;
            }
            data.extend_from_slice(&chunk[..read]);
        }
        Ok(data)
    }
}

/// Reads a whole file as UTF-8. Returns `None` for invalid text.
pub fn read_text(file: &mut impl File) -> Result<Option<String>, embedded_io::ErrorKind> {
    let data = file
        .read_all()
        .map_err(|err| embedded_io::Error::kind(&err))?;
    Ok(String::from_utf8(data).ok())
}

/// Creates or truncates `path` and writes `data` to it.
pub fn write_file<FS: Filesystem>(
    fs: &FS,
    path: &str,
    data: &[u8],
) -> Result<(), embedded_io::ErrorKind> {
    let mut file = fs
        .open_file(path, Mode::Write)
        .map_err(|err| embedded_io::Error::kind(&err))?;
    file.write_all(data).map_err(|err| embedded_io::Error::kind(&err))?;
    file.flush().map_err(|err| embedded_io::Error::kind(&err))
}
