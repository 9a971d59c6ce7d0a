use crate::error::{Error, Result};
use crate::models::resume::ResumeFile;

/// Resume uploads are rejected client-side before any network call.
const ALLOWED_RESUME_EXTS: [&str; 3] = ["pdf", "doc", "docx"];
const MAX_RESUME_SIZE_BYTES: usize = 5 * 1024 * 1024;

pub fn validate_resume_file(file: &ResumeFile) -> Result<()> {
    let ext = file
        .extension()
        .ok_or_else(|| Error::Validation("Resume file has no extension".to_string()))?;
    if !ALLOWED_RESUME_EXTS.contains(&ext.as_str()) {
        return Err(Error::Validation(format!(
            "File type .{} is not allowed, expected PDF or DOC/DOCX",
            ext
        )));
    }
    if file.size() > MAX_RESUME_SIZE_BYTES {
        return Err(Error::Validation("Resume file exceeds the 5MB limit".to_string()));
    }
    if file.size() == 0 {
        return Err(Error::Validation("Resume file is empty".to_string()));
    }
    Ok(())
}

pub fn validate_password_confirmation(password: &str, confirmation: &str) -> Result<()> {
    if password != confirmation {
        return Err(Error::Validation("Passwords do not match".to_string()));
    }
    Ok(())
}
