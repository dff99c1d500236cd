use anyhow::{Result, Context, anyhow};
use log::{warn, info, debug};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::caption_source::{CaptionSource, FileCaptionSource, VideoRef};
use crate::converter::{self, OutputKind};
use crate::errors::ConversionError;
use crate::file_utils::FileManager;

// @module: Application controller for caption conversion

/// Main application controller for caption conversion
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self { config })
    }

    /// Check if the controller is properly initialized with configuration
    pub fn is_initialized(&self) -> bool {
        !self.config.language.is_empty() && !self.config.cache.directory.is_empty()
    }

    /// Convert one input (caption file path or video watch URL) and write
    /// the result. Returns the path of the written file.
    ///
    /// When no output directory is given, converted files land in the
    /// configured cache directory and cache maintenance runs afterwards.
    pub fn run(
        &self,
        input: &str,
        output_dir: Option<PathBuf>,
        kind: Option<OutputKind>,
        force_overwrite: bool,
    ) -> Result<PathBuf> {
        let source = FileCaptionSource::new();
        self.run_with_source(&source, input, output_dir, kind, force_overwrite)
    }

    /// Convert one input using an explicit caption source collaborator.
    pub fn run_with_source(
        &self,
        source: &dyn CaptionSource,
        input: &str,
        output_dir: Option<PathBuf>,
        kind: Option<OutputKind>,
        force_overwrite: bool,
    ) -> Result<PathBuf> {
        let kind = kind.unwrap_or(self.config.format);
        let video = VideoRef::parse(input)?;

        let use_cache_dir = output_dir.is_none();
        let target_dir =
            output_dir.unwrap_or_else(|| PathBuf::from(&self.config.cache.directory));

        let stem = video.output_stem(&self.config.language);
        let output_path = FileManager::generate_output_path(&target_dir, &stem, kind.extension());

        if output_path.exists() && !force_overwrite {
            warn!(
                "Skipping file, converted output already exists (use -f to force overwrite): {:?}",
                output_path
            );
            return Ok(output_path);
        }

        debug!("Fetching captions for {:?} ({})", video, self.config.language);
        let raw = source.fetch_raw_captions(&video, &self.config.language)?;

        let rendered = match converter::convert(&raw, kind) {
            Ok(rendered) => rendered,
            Err(ConversionError::EmptyInput) | Err(ConversionError::NoCuesProduced) => {
                return Err(anyhow!("No captions found in input: {}", input));
            }
            Err(e) => return Err(anyhow::Error::new(e).context("Caption conversion failed")),
        };

        FileManager::write_to_file(&output_path, &rendered)
            .context("Failed to write converted captions")?;

        info!("Converted {} ({}) -> {:?}", input, kind, output_path);

        if use_cache_dir && self.config.cache.auto_cleanup {
            self.clean_cache()?;
        }

        Ok(output_path)
    }

    /// Convert every caption file found under a directory.
    pub fn run_folder(
        &self,
        input_dir: &Path,
        kind: Option<OutputKind>,
        force_overwrite: bool,
    ) -> Result<usize> {
        if !FileManager::dir_exists(input_dir) {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let caption_files = FileManager::find_files(input_dir, "vtt")?;
        if caption_files.is_empty() {
            warn!("No caption files found in directory: {:?}", input_dir);
            return Ok(0);
        }

        let mut processed_count = 0;
        for file in &caption_files {
            let input = file.to_string_lossy();
            let parent = file.parent().unwrap_or(Path::new(".")).to_path_buf();

            match self.run(&input, Some(parent), kind, force_overwrite) {
                Ok(_) => processed_count += 1,
                Err(e) => warn!("Error processing {:?}: {}", file, e),
            }
        }

        info!("Finished processing {} of {} files", processed_count, caption_files.len());
        Ok(processed_count)
    }

    /// Apply the configured retention and size limits to the cache
    /// directory. Returns the number of files removed.
    pub fn clean_cache(&self) -> Result<usize> {
        let cache_dir = Path::new(&self.config.cache.directory);

        let mut removed =
            FileManager::remove_files_older_than(cache_dir, self.config.cache.retention_hours)?;
        removed += FileManager::trim_to_newest(cache_dir, self.config.cache.max_cached_files)?;

        if removed > 0 {
            info!("Cache cleanup removed {} file(s)", removed);
        }

        Ok(removed)
    }

    /// Remove every cached file regardless of age. Returns the number of
    /// files removed.
    pub fn clear_cache(&self) -> Result<usize> {
        let removed = FileManager::clear_dir(Path::new(&self.config.cache.directory))?;
        info!("Cache cleared, removed {} file(s)", removed);
        Ok(removed)
    }
}
