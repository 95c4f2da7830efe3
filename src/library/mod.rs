//! Reference library of known color schemes
//!
//! The builtin library is compiled in from `data/known_schemes.json` and parsed
//! once per process. Libraries can also be loaded from disk, either in the
//! same format or as a Gogh theme export (see [`GoghTheme`]).
//!
//! Records are validated one at a time: a record with a malformed color or a
//! blank name is dropped whole and logged, never partially kept.

mod gogh;

pub use gogh::GoghTheme;

use crate::rng::RandomSource;
use crate::scheme::ColorScheme;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{debug, warn};

const BUILTIN_JSON: &str = include_str!("../../data/known_schemes.json");

/// Version written by [`ReferenceLibrary::to_json`]
pub const FORMAT_VERSION: u32 = 1;

static BUILTIN: OnceLock<ReferenceLibrary> = OnceLock::new();

/// Errors loading or saving a reference library
#[derive(Debug, Error)]
pub enum LibraryError {
    /// Reading or writing the library file failed
    #[error("Failed to access reference library at {}", .path.display())]
    Io {
        /// File that was being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The file is not JSON at all
    #[error("Reference library is not valid JSON")]
    Json(#[from] serde_json::Error),
    /// The JSON is neither an array nor an object with a `schemes` array
    #[error("Reference library must be an array of schemes or an object with a \"schemes\" array")]
    Shape,
    /// Every record was rejected
    #[error("Reference library has no valid schemes ({rejected} rejected)")]
    Empty {
        /// Number of rejected records
        rejected: usize,
    },
}

#[derive(Serialize)]
struct LibraryFile<'a> {
    version: u32,
    schemes: &'a [ColorScheme],
}

/// An ordered, read-only collection of known schemes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceLibrary {
    schemes: Vec<ColorScheme>,
    rejected: usize,
}

impl ReferenceLibrary {
    /// The library shipped with the crate
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded data file fails to parse
    pub fn builtin() -> Result<&'static Self, LibraryError> {
        if let Some(library) = BUILTIN.get() {
            return Ok(library);
        }
        let library = Self::from_json(BUILTIN_JSON)?;
        debug!(schemes = library.len(), "Loaded builtin reference library");
        Ok(BUILTIN.get_or_init(|| library))
    }

    /// Build a library from already-constructed schemes
    ///
    /// Schemes that fail validation are dropped. The result may be empty.
    #[must_use]
    pub fn from_schemes(schemes: impl IntoIterator<Item = ColorScheme>) -> Self {
        let mut library = Self::default();
        for (index, scheme) in schemes.into_iter().enumerate() {
            library.push_validated(index, scheme);
        }
        library
    }

    /// Parse a library from JSON
    ///
    /// Accepts either a bare array of schemes or `{"version": N, "schemes": [...]}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, has the wrong shape, or
    /// contains no valid scheme
    pub fn from_json(json: &str) -> Result<Self, LibraryError> {
        let records = records(serde_json::from_str(json)?)?;

        let mut library = Self::default();
        for (index, record) in records.into_iter().enumerate() {
            match serde_json::from_value::<ColorScheme>(record) {
                Ok(scheme) => library.push_validated(index, scheme),
                Err(err) => library.reject(index, &err),
            }
        }
        library.non_empty()
    }

    /// Parse a Gogh theme export (a JSON array of Gogh themes)
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, not an array, or contains
    /// no valid theme
    pub fn from_gogh_json(json: &str) -> Result<Self, LibraryError> {
        let Value::Array(records) = serde_json::from_str(json)? else {
            return Err(LibraryError::Shape);
        };

        let mut library = Self::default();
        for (index, record) in records.into_iter().enumerate() {
            let scheme = serde_json::from_value::<GoghTheme>(record)
                .map_err(|err| err.to_string())
                .and_then(|theme| theme.into_scheme().map_err(|err| err.to_string()));
            match scheme {
                Ok(scheme) => library.push_validated(index, scheme),
                Err(err) => library.reject(index, &err),
            }
        }
        library.non_empty()
    }

    /// Load a library file in the native format
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self, LibraryError> {
        let contents = fs::read_to_string(path).map_err(|source| LibraryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let library = Self::from_json(&contents)?;
        debug!(path = %path.display(), schemes = library.len(), "Loaded reference library");
        Ok(library)
    }

    /// Serialize in the native versioned format
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> Result<String, LibraryError> {
        let file = LibraryFile {
            version: FORMAT_VERSION,
            schemes: &self.schemes,
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Write the library to a file in the native format
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file cannot be written
    pub fn save_to(&self, path: &Path) -> Result<(), LibraryError> {
        let io_error = |source| LibraryError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        fs::write(path, self.to_json()?).map_err(io_error)
    }

    /// Number of schemes
    #[must_use]
    pub const fn len(&self) -> usize {
        self.schemes.len()
    }

    /// Whether the library holds no schemes
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    /// Number of records dropped during loading
    #[must_use]
    pub const fn rejected(&self) -> usize {
        self.rejected
    }

    /// Scheme at `index`
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ColorScheme> {
        self.schemes.get(index)
    }

    /// First scheme whose name matches, ignoring ASCII case
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&ColorScheme> {
        self.schemes
            .iter()
            .find(|scheme| scheme.name.eq_ignore_ascii_case(name))
    }

    /// Iterate in library order
    pub fn iter(&self) -> impl Iterator<Item = &ColorScheme> {
        self.schemes.iter()
    }

    /// All schemes as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[ColorScheme] {
        &self.schemes
    }

    /// Pick a scheme uniformly at random; `None` if the library is empty
    pub fn choose<R: RandomSource>(&self, rng: &mut R) -> Option<&ColorScheme> {
        if self.schemes.is_empty() {
            return None;
        }
        self.schemes.get(rng.index(self.schemes.len()))
    }

    fn push_validated(&mut self, index: usize, scheme: ColorScheme) {
        match scheme.validate() {
            Ok(()) => self.schemes.push(scheme),
            Err(err) => self.reject(index, &err),
        }
    }

    fn reject(&mut self, index: usize, error: &dyn std::fmt::Display) {
        warn!(index, error = %error, "Rejected reference scheme record");
        self.rejected += 1;
    }

    fn non_empty(self) -> Result<Self, LibraryError> {
        if self.schemes.is_empty() {
            return Err(LibraryError::Empty {
                rejected: self.rejected,
            });
        }
        Ok(self)
    }
}

impl<'a> IntoIterator for &'a ReferenceLibrary {
    type Item = &'a ColorScheme;
    type IntoIter = std::slice::Iter<'a, ColorScheme>;

    fn into_iter(self) -> Self::IntoIter {
        self.schemes.iter()
    }
}

fn records(value: Value) -> Result<Vec<Value>, LibraryError> {
    match value {
        Value::Array(records) => Ok(records),
        Value::Object(mut object) => match object.remove("schemes") {
            Some(Value::Array(records)) => {
                if let Some(version) = object.get("version").and_then(Value::as_u64) {
                    debug!(version, "Reference library format version");
                }
                Ok(records)
            }
            _ => Err(LibraryError::Shape),
        },
        _ => Err(LibraryError::Shape),
    }
}
