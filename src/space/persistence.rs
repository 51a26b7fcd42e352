#[cfg(feature = "serde")]
use std::path::Path;

#[cfg(feature = "serde")]
use super::{SampleSpace, SpaceConfig};
#[cfg(feature = "serde")]
use crate::error::{Error, Result};

#[cfg(feature = "serde")]
impl SpaceConfig {
    /// Parses a config from JSON.
    ///
    /// Keys of `pinned` and `distributions` are slot names; `policy` is
    /// `"explicit"` or `"truthy"`. Every field may be omitted. A slot listed in
    /// both maps is pinned.
    ///
    /// ```
    /// use rocket_space::slot::Slot;
    /// use rocket_space::space::{FixPolicy, SpaceConfig};
    ///
    /// let config = SpaceConfig::from_json(
    ///     r#"{"policy": "truthy", "pinned": {"radius": 4.0, "fin_count": 3}}"#,
    /// )
    /// .unwrap();
    /// assert_eq!(config.fix_policy(), FixPolicy::Truthy);
    /// assert_eq!(config.pinned(Slot::Radius), Some(4.0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if the text is not a valid config.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Reads a config from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let file = std::fs::File::open(path)?;
        serde_json::from_reader(file)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

#[cfg(feature = "serde")]
impl SampleSpace {
    /// Renders the space as pretty JSON, one array element per slot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Save the space to a JSON file for an external sampler.
    ///
    /// JSON has no NaN or infinity, so a space that fails
    /// [`validate`](Self::validate) is refused rather than written lossily.
    ///
    /// # Errors
    ///
    /// Returns an I/O error of kind `InvalidData` for an invalid space, or
    /// any error creating or writing the file.
    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        self.validate()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        let path = path.as_ref();
        // Write to a sibling temp file, then rename over the target.
        let parent = path.parent().unwrap_or(Path::new("."));
        let tmp_path = parent.join(format!(
            ".{}.tmp",
            path.file_name().unwrap_or_default().to_string_lossy()
        ));
        let file = std::fs::File::create(&tmp_path)?;
        serde_json::to_writer_pretty(file, self).map_err(std::io::Error::other)?;
        std::fs::rename(&tmp_path, path)
    }

    /// Load a space from a JSON file and validate its descriptors.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, parsed, or holds an
    /// invalid descriptor.
    pub fn load(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let file = std::fs::File::open(path)?;
        let space: Self = serde_json::from_reader(file)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        space
            .validate()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        trace_info!(n_learnable = space.n_learnable(), "sample space loaded");
        Ok(space)
    }
}
