use bytes::Bytes;

/// A resume/CV file picked by the user, ready for a multipart upload.
#[derive(Debug, Clone)]
pub struct ResumeFile {
    pub file_name: String,
    pub content_type: String,
    pub data: Bytes,
}

impl ResumeFile {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            data: data.into(),
        }
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn extension(&self) -> Option<String> {
        std::path::Path::new(&self.file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
    }
}
