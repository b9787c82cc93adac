use mvn_dep_cost::prelude::*;
use std::path::Path;

/// Mock DescriptorReader returning fixed descriptor text
pub struct MockDescriptorReader {
    content: String,
    should_fail: bool,
}

impl MockDescriptorReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl DescriptorReader for MockDescriptorReader {
    fn read_descriptor(&self, path: &Path) -> Result<String> {
        if self.should_fail {
            return Err(ProfilerError::DescriptorNotFound {
                path: path.to_path_buf(),
                suggestion: "mock reader configured to fail".to_string(),
            }
            .into());
        }
        Ok(self.content.clone())
    }
}
