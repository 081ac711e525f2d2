/*
daily.rs

Copyright 2026 Hervé Quatremain

This file is part of Zipgrid.

Zipgrid is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Zipgrid is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Zipgrid. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Save and restore the daily challenge completion date.
//!
//! The stored state is a single value: the UTC date of the last completed
//! daily challenge, serialized in JSON format in the `daily.json` file.
//! The [`crate::daily`] module compares it against today's date to decide
//! whether the daily challenge is still playable.

use log::debug;
use std::error::Error;
use std::fs::{File, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

/// Object to save and restore the daily completion date.
pub struct SaverDaily {
    /// Absolute path to the completion file.
    completion_file: PathBuf,
}

impl SaverDaily {
    /// Create a [`SaverDaily`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the
    /// completion date must be saved.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push("daily.json");
        debug!("Daily completion file: {data_dir:?}");
        SaverDaily {
            completion_file: data_dir,
        }
    }

    /// Retrieve the date of the last completed daily challenge.
    ///
    /// Return the date string or None if no completion was recorded.
    ///
    /// # Errors
    ///
    /// The method returns an error if the completion file cannot be read
    /// or parsed. A missing file is not an error.
    pub fn get_completion(&self) -> Result<Option<String>, Box<dyn Error>> {
        let file: File;
        match File::open(&self.completion_file) {
            Ok(f) => file = f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        }
        let reader: BufReader<File> = BufReader::new(file);
        let date: String = serde_json::from_reader(reader)?;
        Ok(Some(date))
    }

    /// Save the provided completion date.
    ///
    /// # Errors
    ///
    /// The method returns an error if the completion file cannot be
    /// written.
    pub fn save_completion(&self, date: &str) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.completion_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer(&mut writer, date)?;
        writer.flush()?;
        Ok(())
    }

    /// Delete the recorded completion date.
    pub fn delete_completion(&self) {
        let _ = remove_file(&self.completion_file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_saver(name: &str) -> SaverDaily {
        let mut dir: PathBuf = std::env::temp_dir();
        dir.push(name);
        let _ = std::fs::create_dir_all(&dir);
        SaverDaily::new(dir)
    }

    #[test]
    fn test_missing_file_is_none() {
        let saver: SaverDaily = test_saver("zipgrid-test-saver-missing");
        saver.delete_completion();
        assert_eq!(saver.get_completion().unwrap(), None);
    }

    #[test]
    fn test_save_and_restore() {
        let saver: SaverDaily = test_saver("zipgrid-test-saver-roundtrip");
        saver.save_completion("2026-08-07").unwrap();
        assert_eq!(
            saver.get_completion().unwrap(),
            Some(String::from("2026-08-07"))
        );
        saver.save_completion("2026-08-08").unwrap();
        assert_eq!(
            saver.get_completion().unwrap(),
            Some(String::from("2026-08-08"))
        );
        saver.delete_completion();
        assert_eq!(saver.get_completion().unwrap(), None);
    }
}
