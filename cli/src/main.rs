//! Command-line El Torito boot image extractor
//!
//! Reads a cd image, walks the El Torito descriptors, and writes the
//! embedded boot image to a new file. Decoded fields are printed as they
//! are found.

use std::env;
use std::fs::{self, File};
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;
use std::process::ExitCode;

use eltorito::{extract_boot_image, ReportSink, ReportValue};
use gpt_disk_io::BlockIo;
use gpt_disk_types::{BlockSize, Lba};

/// 512-byte-block view over the input file
struct FileBlockDevice {
    file: File,
    block_size: u32,
}

impl FileBlockDevice {
    fn new(file: File) -> Self {
        Self {
            file,
            block_size: 512,
        }
    }
}

impl BlockIo for FileBlockDevice {
    type Error = io::Error;

    fn block_size(&self) -> BlockSize {
        BlockSize::new(self.block_size).expect("valid block size")
    }

    fn num_blocks(&mut self) -> Result<u64, Self::Error> {
        Ok(self.file.metadata()?.len() / self.block_size as u64)
    }

    fn read_blocks(&mut self, start_lba: Lba, dst: &mut [u8]) -> Result<(), Self::Error> {
        self.file
            .seek(SeekFrom::Start(start_lba.0 * self.block_size as u64))?;
        self.file.read_exact(dst)
    }

    fn write_blocks(&mut self, _start_lba: Lba, _src: &[u8]) -> Result<(), Self::Error> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "input image is read-only",
        ))
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Prints each decoded field as a `key: value` line
struct ConsoleReport;

impl ReportSink for ConsoleReport {
    fn record(&mut self, key: &'static str, value: ReportValue<'_>) {
        println!("{}: {}", key, value);
    }
}

fn print_usage(prg_name: &str) {
    eprintln!("Usage: {} <input.iso> <output>", prg_name);
}

fn main() -> ExitCode {
    let mut args = env::args();
    let prg_name = args
        .next()
        .unwrap_or_else(|| String::from("eltorito-cli"));
    let (input, output) = match (args.next(), args.next()) {
        (Some(input), Some(output)) => (input, output),
        _ => {
            print_usage(&prg_name);
            return ExitCode::FAILURE;
        }
    };

    if !Path::new(&input).exists() {
        eprintln!("unable to find {}", input);
        return ExitCode::FAILURE;
    }
    if Path::new(&output).exists() {
        eprintln!("output file already exists: {}", output);
        return ExitCode::FAILURE;
    }

    let file = match File::open(&input) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("unable to open {}: {}", input, e);
            return ExitCode::FAILURE;
        }
    };

    let mut device = FileBlockDevice::new(file);
    let image = match extract_boot_image(&mut device, &mut ConsoleReport) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("no boot image extracted: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = fs::write(&output, &image) {
        eprintln!("unable to write {}: {}", output, e);
        return ExitCode::FAILURE;
    }
    println!("image written to {} ({} bytes)", output, image.len());
    ExitCode::SUCCESS
}
