// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON encoding and decoding of model objects.
//!
//! Objects are written field by field to a streaming writer: `kind` first
//! for resources, then `id` and `href`, then each attribute that has a value,
//! in declaration order. Decoding is permissive: unknown keys are skipped,
//! any `kind` other than the link kind leaves the link flag unset, and unknown
//! enum values are kept verbatim.
//!
//! Lists of objects are written as bare JSON arrays.

use std::io;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Errors which may be returned when encoding or decoding model objects.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed input, or a value that can't be encoded or decoded.
    #[error("JSON error: {0}")]
    Json(#[source] serde_json::Error),

    /// Failure of the underlying reader or writer.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

// serde_json reports reader and writer failures as its own errors.
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.io_error_kind().is_some() {
            Error::Io(err.into())
        } else {
            Error::Json(err)
        }
    }
}

/// Writes `value` to `writer` and flushes it.
pub fn write<T, W>(value: &T, mut writer: W) -> Result<(), Error>
where
    T: Serialize + ?Sized,
    W: io::Write,
{
    serde_json::to_writer(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}

/// Like [`write`], with newlines and indentation.
pub fn write_pretty<T, W>(value: &T, mut writer: W) -> Result<(), Error>
where
    T: Serialize + ?Sized,
    W: io::Write,
{
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}

pub fn to_string<T: Serialize + ?Sized>(value: &T) -> Result<String, Error> {
    Ok(serde_json::to_string(value)?)
}

pub fn to_string_pretty<T: Serialize + ?Sized>(
    value: &T,
) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn to_vec<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, Error> {
    Ok(serde_json::to_vec(value)?)
}

/// Reads one value from `reader`. Trailing data other than whitespace is an
/// error.
pub fn read<T, R>(reader: R) -> Result<T, Error>
where
    T: DeserializeOwned,
    R: io::Read,
{
    Ok(serde_json::from_reader(reader)?)
}

pub fn from_str<T: DeserializeOwned>(s: &str) -> Result<T, Error> {
    Ok(serde_json::from_str(s)?)
}

pub fn from_slice<T: DeserializeOwned>(v: &[u8]) -> Result<T, Error> {
    Ok(serde_json::from_slice(v)?)
}

/// Writes `items` to `writer` as a JSON array.
pub fn write_list<T, W>(items: &[T], writer: W) -> Result<(), Error>
where
    T: Serialize,
    W: io::Write,
{
    write(items, writer)
}

pub fn list_to_string<T: Serialize>(items: &[T]) -> Result<String, Error> {
    to_string(items)
}

/// Reads a JSON array of objects from `reader`.
pub fn read_list<T, R>(reader: R) -> Result<Vec<T>, Error>
where
    T: DeserializeOwned,
    R: io::Read,
{
    read(reader)
}

pub fn list_from_str<T: DeserializeOwned>(s: &str) -> Result<Vec<T>, Error> {
    from_str(s)
}

#[cfg(test)]
mod test {
    use super::*;

    struct FailingFlush;

    impl io::Write for FailingFlush {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "flush failed"))
        }
    }

    struct FailingWrite;

    impl io::Write for FailingWrite {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "write failed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct FailingRead;

    impl io::Read for FailingRead {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "read failed"))
        }
    }

    #[test]
    fn flush_failure_is_reported() {
        let err = write(&vec!["a"], FailingFlush).unwrap_err();
        assert!(matches!(err, Error::Io(_)), "unexpected error {err:?}");
    }

    #[test]
    fn write_failure_is_an_io_error() {
        let err = write(&vec!["a"], FailingWrite).unwrap_err();
        match err {
            Error::Io(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            e => panic!("unexpected error {e:?}"),
        }
        let err = write_pretty(&vec!["a"], FailingWrite).unwrap_err();
        assert!(matches!(err, Error::Io(_)), "unexpected error {err:?}");
    }

    #[test]
    fn read_failure_is_an_io_error() {
        let err = read::<Vec<String>, _>(FailingRead).unwrap_err();
        match err {
            Error::Io(e) => {
                assert_eq!(e.kind(), io::ErrorKind::ConnectionReset)
            }
            e => panic!("unexpected error {e:?}"),
        }
        let err = read_list::<String, _>(FailingRead).unwrap_err();
        assert!(matches!(err, Error::Io(_)), "unexpected error {err:?}");
    }

    #[test]
    fn malformed_input_is_reported() {
        let err = from_str::<Vec<String>>("[\"a\",").unwrap_err();
        assert!(matches!(err, Error::Json(_)), "unexpected error {err:?}");
    }
}
