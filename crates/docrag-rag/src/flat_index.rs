//! Exact flat L2 index

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use docrag_core::{Embedding, Error, Result, SearchHit, VectorIndex};

const MAGIC: &[u8; 4] = b"DRFL";
const FORMAT_VERSION: u32 = 1;
const HEADER_LEN: usize = 4 + 4 + 8 + 8;

/// Brute-force nearest-neighbor index using squared Euclidean distance.
///
/// Vectors are stored contiguously in insertion order, so position `i`
/// occupies `data[i * dimension..(i + 1) * dimension]`.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatL2Index {
    dimension: usize,
    data: Vec<f32>,
}

impl FlatL2Index {
    /// Create an empty index for vectors of `dimension` components
    pub fn new(dimension: usize) -> Result<Self> {
        if dimension == 0 {
            return Err(Error::InvalidArgument(
                "index dimension must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            dimension,
            data: Vec::new(),
        })
    }

    /// Build an index over `embeddings`, keeping their order as positions
    pub fn build(dimension: usize, embeddings: impl IntoIterator<Item = Embedding>) -> Result<Self> {
        let mut index = Self::new(dimension)?;
        for embedding in embeddings {
            index.add(embedding)?;
        }
        Ok(index)
    }

    /// Stored vector at `position`
    pub fn vector(&self, position: usize) -> Option<&[f32]> {
        let start = position.checked_mul(self.dimension)?;
        self.data.get(start..start + self.dimension)
    }

    fn vectors(&self) -> impl Iterator<Item = &[f32]> {
        self.data.chunks_exact(self.dimension)
    }

    fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(Error::CorruptIndex(format!(
                "file is {} bytes, shorter than the {}-byte header",
                bytes.len(),
                HEADER_LEN
            )));
        }
        let (header, payload) = bytes.split_at(HEADER_LEN);

        if &header[0..4] != MAGIC {
            return Err(Error::CorruptIndex("not a flat L2 index file".to_string()));
        }
        let version = u32::from_le_bytes(fixed(&header[4..8]));
        if version != FORMAT_VERSION {
            return Err(Error::CorruptIndex(format!(
                "unsupported format version {}",
                version
            )));
        }
        let dimension = u64::from_le_bytes(fixed(&header[8..16]));
        let count = u64::from_le_bytes(fixed(&header[16..24]));

        let expected = usize::try_from(dimension)
            .ok()
            .zip(usize::try_from(count).ok())
            .and_then(|(d, c)| d.checked_mul(c))
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(|| {
                Error::CorruptIndex(format!("{} vectors of {} dimensions is too large", count, dimension))
            })?;
        if payload.len() != expected {
            return Err(Error::CorruptIndex(format!(
                "expected {} bytes of vector data for {} vectors of {} dimensions, found {}",
                expected,
                count,
                dimension,
                payload.len()
            )));
        }

        let mut index = Self::new(dimension as usize)
            .map_err(|_| Error::CorruptIndex("index dimension is zero".to_string()))?;
        index.data = payload
            .chunks_exact(4)
            .map(|bytes| f32::from_le_bytes(fixed(bytes)))
            .collect();
        Ok(index)
    }
}

impl VectorIndex for FlatL2Index {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn count(&self) -> usize {
        self.data.len() / self.dimension
    }

    fn add(&mut self, embedding: Embedding) -> Result<usize> {
        if embedding.len() != self.dimension {
            return Err(Error::dimension_mismatch(
                format!("vector at position {}", self.count()),
                self.dimension,
                embedding.len(),
            ));
        }
        let position = self.count();
        self.data.extend_from_slice(&embedding);
        Ok(position)
    }

    fn search(&self, query: &[f32], k: usize) -> Result<Vec<SearchHit>> {
        if query.len() != self.dimension {
            return Err(Error::dimension_mismatch(
                "query vector",
                self.dimension,
                query.len(),
            ));
        }
        if k == 0 {
            return Ok(Vec::new());
        }

        let mut hits: Vec<SearchHit> = self
            .vectors()
            .enumerate()
            .map(|(position, vector)| SearchHit::new(position, squared_l2(query, vector)))
            .collect();

        hits.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then(a.position.cmp(&b.position))
        });
        hits.truncate(k);
        Ok(hits)
    }

    fn persist(&self, path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(MAGIC)?;
        writer.write_all(&FORMAT_VERSION.to_le_bytes())?;
        writer.write_all(&(self.dimension as u64).to_le_bytes())?;
        writer.write_all(&(self.count() as u64).to_le_bytes())?;
        for value in &self.data {
            writer.write_all(&value.to_le_bytes())?;
        }
        writer.flush()?;
        Ok(())
    }

    fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)?;
        Self::decode(&bytes)
    }
}

fn squared_l2(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

/// Caller guarantees `bytes.len() == N`
fn fixed<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    out
}
