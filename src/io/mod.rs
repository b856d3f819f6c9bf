//! Types for managing output to various targets, plus JSON file io for the
//! containers when the `serde` feature is enabled.

use std::fs::File;
use std::io::{Result, Stdout, Write};

/// Container for managing multiple print targets.
///
/// Everything in this crate that produces output takes an explicit sink, so
/// callers choose between the console, a file, an in-memory buffer or any
/// other `Write` stream.
pub enum PrintTarget {
    Stdout(Stdout),
    File(File),
    Buffer(Vec<u8>),
    Stream(Box<dyn Write + Send + Sync>),
}

impl std::fmt::Debug for PrintTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrintTarget::Stdout(_) => write!(f, "PrintTarget::Stdout"),
            PrintTarget::File(_) => write!(f, "PrintTarget::File"),
            PrintTarget::Buffer(_) => write!(f, "PrintTarget::Buffer"),
            PrintTarget::Stream(_) => write!(f, "PrintTarget::Stream"),
        }
    }
}

impl Default for PrintTarget {
    fn default() -> Self {
        PrintTarget::Stdout(std::io::stdout())
    }
}

impl Write for PrintTarget {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        match self {
            PrintTarget::Stdout(stdout) => stdout.write(buf),
            PrintTarget::File(file) => file.write(buf),
            PrintTarget::Buffer(buffer) => {
                buffer.extend_from_slice(buf);
                Ok(buf.len())
            }
            PrintTarget::Stream(stream) => stream.write(buf),
        }
    }

    fn flush(&mut self) -> Result<()> {
        match self {
            PrintTarget::Stdout(stdout) => stdout.flush(),
            PrintTarget::File(file) => file.flush(),
            PrintTarget::Buffer(_) => Ok(()),
            PrintTarget::Stream(stream) => stream.flush(),
        }
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "serde")] {
        use crate::algebra::{NumericArray, ScalarT};
        use serde::{de::DeserializeOwned, Serialize};

        impl<T> NumericArray<T>
        where
            T: ScalarT + Serialize + DeserializeOwned,
        {
            /// Writes the container to `file` as JSON.
            pub fn save_to_file(&self, file: &mut File) -> Result<()> {
                serde_json::to_writer(file, self)?;
                Ok(())
            }

            /// Reads a container previously written with
            /// [`save_to_file`](NumericArray::save_to_file).
            ///
            /// Storage whose length disagrees with the recorded dimensions is
            /// rejected as invalid data.
            pub fn load_from_file(file: &mut File) -> Result<Self> {
                let array: Self = serde_json::from_reader(file)?;
                array
                    .check_storage()
                    .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
                Ok(array)
            }
        }
    }
}
