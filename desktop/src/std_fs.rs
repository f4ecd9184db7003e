use std::fs;

use cvtgfx_core::fs::Mode;
use embedded_io::ErrorType;
use log::debug;

pub struct StdFilesystem {
    base_path: std::path::PathBuf,
}

impl StdFilesystem {
    pub fn new_with_base_path(base_path: std::path::PathBuf) -> Self {
        debug!("Using StdFilesystem with base path: {:?}", base_path);
        StdFilesystem { base_path }
    }
}

impl ErrorType for StdFilesystem {
    type Error = embedded_io::ErrorKind;
}

type Result<T> = core::result::Result<T, embedded_io::ErrorKind>;

impl cvtgfx_core::fs::Filesystem for StdFilesystem {
    type File = StdFile;

    fn open_file(&self, path: &str, mode: Mode) -> Result<StdFile> {
        let path = self.base_path.join(path);
        let options = match mode {
            Mode::Read => fs::OpenOptions::new().read(true).clone(),
            Mode::Write => fs::OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .clone(),
        };
        match options.open(&path) {
            Ok(file) => StdFile::new(file).map_err(|_| embedded_io::ErrorKind::InvalidInput),
            Err(err) => {
                debug!("Failed to open {:?}: {}", path, err);
                Err(embedded_io::Error::kind(&err))
            }
        }
    }

    fn exists(&self, path: &str) -> Result<bool> {
        let path = self.base_path.join(path);
        Ok(path.is_file())
    }
}

pub struct StdFile {
    file: std::fs::File,
    size: usize,
}

impl StdFile {
    pub fn new(file: std::fs::File) -> std::io::Result<Self> {
        let size = file.metadata()?.len() as usize;
        Ok(StdFile { file, size })
    }
}

impl cvtgfx_core::fs::File for StdFile {
    fn size(&self) -> usize {
        self.size
    }
}

impl ErrorType for StdFile {
    type Error = std::io::Error;
}

impl embedded_io::Read for StdFile {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        use std::io::Read;
        self.file.read(buf)
    }
}

impl embedded_io::Write for StdFile {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        use std::io::Write;
        self.file.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        use std::io::Write;
        self.file.flush()
    }
}
