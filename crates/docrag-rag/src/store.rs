//! Persisted index + chunk mapping artifacts

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use docrag_core::{Chunk, ChunkMapping, Embedder, Error, Result, VectorIndex};

use crate::chunker::chunk_text;
use crate::flat_index::FlatL2Index;

/// Owns the on-disk index and mapping for one source document.
///
/// The two artifacts live side by side in `index_dir` and are always written
/// together; the store refuses to work from only one of them.
#[derive(Debug, Clone)]
pub struct IndexStore {
    index_dir: PathBuf,
    source: PathBuf,
}

impl IndexStore {
    pub const INDEX_FILE: &'static str = "index.flat";
    pub const MAPPING_FILE: &'static str = "chunk_mapping.json";

    pub fn new(index_dir: impl Into<PathBuf>, source: impl Into<PathBuf>) -> Self {
        Self {
            index_dir: index_dir.into(),
            source: source.into(),
        }
    }

    pub fn index_path(&self) -> PathBuf {
        self.index_dir.join(Self::INDEX_FILE)
    }

    pub fn mapping_path(&self) -> PathBuf {
        self.index_dir.join(Self::MAPPING_FILE)
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Load the persisted pair, or build and persist it from the source document
    pub async fn load_or_build<E: Embedder + ?Sized>(
        &self,
        embedder: &E,
        dimension: usize,
        max_words: usize,
    ) -> Result<(FlatL2Index, ChunkMapping)> {
        let result = match (self.index_path().exists(), self.mapping_path().exists()) {
            (true, true) => {
                info!(dir = %self.index_dir.display(), "Loading existing index");
                self.load(dimension)
            }
            (false, false) => {
                info!(source = %self.source.display(), "Creating new index");
                self.build(embedder, dimension, max_words).await
            }
            (index_exists, _) => Err(Error::Consistency(format!(
                "found {} without {}; delete {} to rebuild",
                self.artifact_name(index_exists),
                self.artifact_name(!index_exists),
                self.index_dir.display()
            ))),
        };

        if let Err(e) = &result {
            error!("Error loading index: {}", e);
        }
        result
    }

    /// Discard any persisted artifacts and build afresh
    pub async fn rebuild<E: Embedder + ?Sized>(
        &self,
        embedder: &E,
        dimension: usize,
        max_words: usize,
    ) -> Result<(FlatL2Index, ChunkMapping)> {
        for path in [self.index_path(), self.mapping_path()] {
            if path.exists() {
                info!(path = %path.display(), "Removing persisted artifact");
                fs::remove_file(&path)?;
            }
        }
        self.build(embedder, dimension, max_words).await
    }

    /// Read both artifacts and check they agree
    pub fn load(&self, dimension: usize) -> Result<(FlatL2Index, ChunkMapping)> {
        let index = FlatL2Index::load(&self.index_path())?;
        let mapping = read_mapping(&self.mapping_path())?;

        if mapping.len() != index.count() {
            return Err(Error::Consistency(format!(
                "Number of chunks in the mapping ({}) does not match the number of vectors in the index ({})",
                mapping.len(),
                index.count()
            )));
        }
        if index.dimension() != dimension {
            return Err(Error::Consistency(format!(
                "Persisted index has {} dimensions but {} are configured",
                index.dimension(),
                dimension
            )));
        }

        Ok((index, mapping))
    }

    /// Chunk, embed and index the source document, then persist both artifacts
    pub async fn build<E: Embedder + ?Sized>(
        &self,
        embedder: &E,
        dimension: usize,
        max_words: usize,
    ) -> Result<(FlatL2Index, ChunkMapping)> {
        if !self.source.exists() {
            return Err(Error::MissingSource(self.source.clone()));
        }

        let text = fs::read_to_string(&self.source)?;
        let chunks = chunk_text(&text, max_words)?;
        info!(chunks = chunks.len(), model = embedder.model_id(), "Embedding document chunks");

        let index = embed_chunks(embedder, &chunks, dimension).await?;
        let mapping = ChunkMapping::new(chunks);

        fs::create_dir_all(&self.index_dir)?;
        index.persist(&self.index_path())?;
        write_mapping(&self.mapping_path(), &mapping)?;
        info!(
            vectors = index.count(),
            dimension = index.dimension(),
            dir = %self.index_dir.display(),
            "Persisted index"
        );

        Ok((index, mapping))
    }

    fn artifact_name(&self, index: bool) -> String {
        let path = if index {
            self.index_path()
        } else {
            self.mapping_path()
        };
        path.display().to_string()
    }
}

/// Embed every chunk in order, stopping at the first vector of the wrong size
pub async fn embed_chunks<E: Embedder + ?Sized>(
    embedder: &E,
    chunks: &[Chunk],
    dimension: usize,
) -> Result<FlatL2Index> {
    let mut index = FlatL2Index::new(dimension)?;

    for (position, chunk) in chunks.iter().enumerate() {
        let embedding = embedder.embed(chunk).await?;
        if embedding.len() != dimension {
            return Err(Error::dimension_mismatch(
                format!("chunk '{}'", chunk),
                dimension,
                embedding.len(),
            ));
        }
        index.add(embedding)?;
        debug!(position, total = chunks.len(), "Embedded chunk");
    }

    Ok(index)
}

pub fn read_mapping(path: &Path) -> Result<ChunkMapping> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| {
        Error::Serialization(format!("Failed to parse chunk mapping {}: {}", path.display(), e))
    })
}

pub fn write_mapping(path: &Path, mapping: &ChunkMapping) -> Result<()> {
    let content = serde_json::to_string_pretty(mapping)
        .map_err(|e| Error::Serialization(format!("Failed to serialize chunk mapping: {}", e)))?;
    fs::write(path, content)?;
    Ok(())
}
