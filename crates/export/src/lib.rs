//! Export helpers for CSV and JSON artifacts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod trajectory {
    use std::io::{self, Write};

    const HEADER: &str = "time,body,x,y,r";

    /// Write the trajectory CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// CSV row emitted by the trajectory exporter.
    #[derive(Debug, Clone)]
    pub struct Record<'a> {
        pub time: f64,
        pub body: &'a str,
        pub x: f64,
        pub y: f64,
        pub r: f64,
    }

    impl<'a> Record<'a> {
        /// Serialize the record to CSV, matching the header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{:.6},{},{:.9},{:.9},{:.9}",
                self.time, self.body, self.x, self.y, self.r
            )
        }
    }
}

pub mod path {
    use serde::{Deserialize, Serialize};
    use serde_json::to_writer_pretty;
    use std::io::{self, Write};
    use std::path::Path;

    /// JSON document describing one sampled orbit outline.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct PathSidecar {
        pub body: String,
        pub semi_major_axis: f64,
        pub eccentricity: f64,
        pub argument_of_periapsis_rad: f64,
        pub steps: usize,
        pub points: Vec<[f64; 2]>,
    }

    /// Write the sidecar as pretty JSON to `output` (`-` for stdout).
    pub fn write_sidecar(output: &Path, sidecar: &PathSidecar) -> io::Result<()> {
        let mut writer = super::writer_for_path(output)?;
        to_writer_pretty(&mut writer, sidecar)?;
        writeln!(writer)?;
        writer.flush()
    }
}
