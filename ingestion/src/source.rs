use crate::pipeline::IngestionError;
use bytes::Bytes;
use relgraph_core::config::AppConfig;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Where the dataset bytes come from.
#[async_trait::async_trait]
pub trait DatasetSource: Send + Sync {
    async fn fetch(&self) -> Result<Bytes, IngestionError>;

    fn describe(&self) -> String;
}

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.data.file_path)
    }
}

#[async_trait::async_trait]
impl DatasetSource for FileSource {
    async fn fetch(&self) -> Result<Bytes, IngestionError> {
        match tokio::fs::read(&self.path).await {
            Ok(content) => Ok(Bytes::from(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(IngestionError::NotFound(self.path.display().to_string()))
            }
            Err(e) => Err(IngestionError::Io(e)),
        }
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

/// In-memory dataset, mostly for embedding a bundled graph and for tests.
pub struct StaticSource {
    content: Bytes,
}

impl StaticSource {
    pub fn new(content: impl Into<Bytes>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

#[async_trait::async_trait]
impl DatasetSource for StaticSource {
    async fn fetch(&self) -> Result<Bytes, IngestionError> {
        Ok(self.content.clone())
    }

    fn describe(&self) -> String {
        format!("static:{} bytes", self.content.len())
    }
}
