//! Read-only store of puzzle inputs on local disk

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// File-based store for puzzle inputs
///
/// Directory structure: `{input_dir}/{year}_day{day:02}.txt`
pub struct InputStore {
    input_dir: PathBuf,
}

impl InputStore {
    pub fn new(input_dir: PathBuf) -> Self {
        Self { input_dir }
    }

    /// Get the path for a specific year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.input_dir.join(format!("{}_day{:02}.txt", year, day))
    }

    /// Check if an input file exists
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).is_file()
    }

    /// Read the input for a year/day
    pub fn get(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.input_path(year, day);
        fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => InputError::Missing {
                year,
                day,
                path: path.clone(),
            },
            _ => InputError::Read {
                path: path.clone(),
                source,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_input_path_format() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        let path = store.input_path(2024, 1);
        assert!(path.to_string_lossy().ends_with("2024_day01.txt"));

        let path = store.input_path(2023, 17);
        assert_eq!(path, temp.path().join("2023_day17.txt"));
    }

    #[test]
    fn test_read_existing_input() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        let input = "2413\n3215\n";
        fs::write(temp.path().join("2023_day17.txt"), input).unwrap();

        assert!(store.contains(2023, 17));
        assert_eq!(store.get(2023, 17).unwrap(), input);
    }

    #[test]
    fn test_missing_input() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        assert!(!store.contains(2023, 17));
        let err = store.get(2023, 17).unwrap_err();
        assert!(matches!(err, InputError::Missing { year: 2023, day: 17, .. }));
        assert!(err.to_string().starts_with("No input for 2023/17"));
    }

    #[test]
    fn test_directory_is_not_an_input() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        fs::create_dir(temp.path().join("2023_day17.txt")).unwrap();

        assert!(!store.contains(2023, 17));
        assert!(matches!(store.get(2023, 17), Err(InputError::Read { .. })));
    }
}
