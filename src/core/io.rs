//! File reading for FASTA/GFF inputs
//!
//! Reads whole files as UTF-8 text. Gzip and bzip2 inputs are detected by
//! extension or magic bytes; large plain files are memory mapped. Line
//! endings are normalized to `\n`, so CRLF and CR-only files parse like
//! LF files.

use crate::core::error::{GenomeError, Result};
use memmap2::Mmap;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Default buffer size for BufReader (128KB)
pub const DEFAULT_BUFFER_SIZE: usize = 128 * 1024;

/// Threshold for using memory mapping (100MB)
pub const MMAP_THRESHOLD: u64 = 100 * 1024 * 1024;

/// Compression format of an input file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionFormat {
    /// Plain text (uncompressed)
    Plain,
    /// Gzip compressed (.gz)
    Gzip,
    /// Bzip2 compressed (.bz2)
    Bzip2,
}

/// Detect compression format from file path and/or content
pub fn detect_compression(path: &Path) -> io::Result<CompressionFormat> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    // First check by extension
    if extension == "gz" {
        return Ok(CompressionFormat::Gzip);
    }
    if extension == "bz2" {
        return Ok(CompressionFormat::Bzip2);
    }

    // Then check by magic bytes
    let mut file = File::open(path)?;
    let mut magic = [0u8; 3];
    let bytes_read = file.read(&mut magic)?;

    if bytes_read >= 2 && magic[0] == 0x1f && magic[1] == 0x8b {
        return Ok(CompressionFormat::Gzip);
    }
    if bytes_read >= 3 && magic[0] == 0x42 && magic[1] == 0x5a && magic[2] == 0x68 {
        return Ok(CompressionFormat::Bzip2);
    }

    Ok(CompressionFormat::Plain)
}

/// Read a whole file as UTF-8 text
///
/// A missing file is reported as [`GenomeError::FileNotFound`]; invalid
/// UTF-8 surfaces as an [`io::ErrorKind::InvalidData`] I/O error. `\r\n`
/// and lone `\r` line breaks come back as `\n`.
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(GenomeError::FileNotFound(path.to_path_buf()));
    }

    let format = detect_compression(path)?;
    let file = File::open(path)?;
    let mut text = String::new();

    match format {
        CompressionFormat::Gzip => {
            let decoder = flate2::read::MultiGzDecoder::new(file);
            BufReader::with_capacity(DEFAULT_BUFFER_SIZE, decoder).read_to_string(&mut text)?;
        }
        CompressionFormat::Bzip2 => {
            let decoder = bzip2::read::BzDecoder::new(file);
            BufReader::with_capacity(DEFAULT_BUFFER_SIZE, decoder).read_to_string(&mut text)?;
        }
        CompressionFormat::Plain => {
            if file.metadata()?.len() >= MMAP_THRESHOLD {
                // SAFETY: We assume the file won't be modified while mapped
                let mmap = unsafe { Mmap::map(&file)? };
                let s = std::str::from_utf8(&mmap)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                text.push_str(s);
            } else {
                BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file).read_to_string(&mut text)?;
            }
        }
    }

    Ok(normalize_line_endings(text))
}

/// Rewrite `\r\n` and lone `\r` line breaks as `\n`
fn normalize_line_endings(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_plain_text() -> Result<()> {
        let mut temp = NamedTempFile::new()?;
        write!(temp, ">chr1\nACGT\n")?;
        temp.flush()?;

        assert_eq!(detect_compression(temp.path())?, CompressionFormat::Plain);
        assert_eq!(read_text(temp.path())?, ">chr1\nACGT\n");
        Ok(())
    }

    #[test]
    fn test_read_gzip_by_magic_bytes() -> Result<()> {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b">chr1\nACGT\n")?;
        let compressed = encoder.finish()?;

        let mut temp = NamedTempFile::new()?;
        temp.write_all(&compressed)?;
        temp.flush()?;

        assert_eq!(detect_compression(temp.path())?, CompressionFormat::Gzip);
        assert_eq!(read_text(temp.path())?, ">chr1\nACGT\n");
        Ok(())
    }

    #[test]
    fn test_read_bzip2_by_extension() -> Result<()> {
        use bzip2::write::BzEncoder;
        use bzip2::Compression;

        let mut encoder = BzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"##gff-version 3\n")?;
        let compressed = encoder.finish()?;

        let mut temp = tempfile::Builder::new().suffix(".gff.bz2").tempfile()?;
        temp.write_all(&compressed)?;
        temp.flush()?;

        assert_eq!(detect_compression(temp.path())?, CompressionFormat::Bzip2);
        assert_eq!(read_text(temp.path())?, "##gff-version 3\n");
        Ok(())
    }

    #[test]
    fn test_normalize_line_endings() {
        assert_eq!(normalize_line_endings("a\nb\n".to_string()), "a\nb\n");
        assert_eq!(normalize_line_endings("a\r\nb\r\n".to_string()), "a\nb\n");
        assert_eq!(normalize_line_endings("a\rb\r".to_string()), "a\nb\n");
        assert_eq!(normalize_line_endings("a\r\r\nb".to_string()), "a\n\nb");
    }

    #[test]
    fn test_read_cr_only_text() -> Result<()> {
        let mut temp = NamedTempFile::new()?;
        temp.write_all(b">chr1\rACGTN\r")?;
        temp.flush()?;
        assert_eq!(read_text(temp.path())?, ">chr1\nACGTN\n");

        let mut crlf = NamedTempFile::new()?;
        crlf.write_all(b">chr1\r\nACGTN\r\n")?;
        crlf.flush()?;
        assert_eq!(read_text(crlf.path())?, ">chr1\nACGTN\n");
        Ok(())
    }

    #[test]
    fn test_read_gzip_cr_only_text() -> Result<()> {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"##gff-version 3\rchr1\r")?;
        let compressed = encoder.finish()?;

        let mut temp = tempfile::Builder::new().suffix(".gff.gz").tempfile()?;
        temp.write_all(&compressed)?;
        temp.flush()?;

        assert_eq!(read_text(temp.path())?, "##gff-version 3\nchr1\n");
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let result = read_text("/nonexistent/genome.fna");
        assert!(matches!(result, Err(GenomeError::FileNotFound(_))));
    }

    #[test]
    fn test_invalid_utf8() -> Result<()> {
        let mut temp = NamedTempFile::new()?;
        temp.write_all(&[b'>', 0xff, 0xfe, b'\n'])?;
        temp.flush()?;

        match read_text(temp.path()) {
            Err(GenomeError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::InvalidData),
            other => panic!("expected invalid data error, got {:?}", other),
        }
        Ok(())
    }
}
