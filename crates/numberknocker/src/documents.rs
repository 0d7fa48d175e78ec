//! Generated documents: the monitoring checklist and the removal email.
//!
//! Rendering is kept separate from writing so the text can be printed or
//! checked without touching the file system.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::catalog::checklist_items;
use crate::error::{Error, Result};

/// Heading of the checklist file.
const CHECKLIST_TITLE: &str = "PHONE PRIVACY MONITORING CHECKLIST";

/// Render the monitoring checklist file contents.
#[must_use]
pub fn render_checklist() -> String {
    let mut out = String::new();
    out.push_str(CHECKLIST_TITLE);
    out.push('\n');
    out.push_str(&"=".repeat(40));
    out.push_str("\n\n");
    for (i, item) in checklist_items().iter().enumerate() {
        let _ = writeln!(out, "{}. {item}", i + 1);
    }
    out
}

/// Render the removal request email with `phone_number` filled in.
#[must_use]
pub fn render_removal_email(phone_number: &str) -> String {
    format!(
        "Subject: Request for Phone Number Removal

Dear Privacy Team,

I am requesting the immediate removal of my phone number from your database and any associated services.

Phone Number: {phone_number}

I do not consent to my phone number being:
- Listed in your directory
- Sold or shared with third parties
- Used for marketing purposes
- Displayed in search results

Please confirm in writing that my number has been removed from all your systems within 10 business days as required by applicable privacy laws.

Thank you for your prompt attention to this matter.

Best regards,
[Your Name]
[Date]
"
    )
}

/// Write the checklist to `dir/file_name`, returning the written path.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot
/// be written.
pub fn write_checklist(dir: impl AsRef<Path>, file_name: &str) -> Result<PathBuf> {
    write_document(dir.as_ref(), file_name, &render_checklist())
}

/// Write the removal email to `dir/file_name`, returning the written path.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot
/// be written.
pub fn write_removal_email(
    dir: impl AsRef<Path>,
    file_name: &str,
    phone_number: &str,
) -> Result<PathBuf> {
    write_document(dir.as_ref(), file_name, &render_removal_email(phone_number))
}

fn write_document(dir: &Path, file_name: &str, contents: &str) -> Result<PathBuf> {
    if !dir.as_os_str().is_empty() && !dir.exists() {
        debug!("Creating output directory {}", dir.display());
        std::fs::create_dir_all(dir).map_err(|source| Error::DirectoryCreate {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let path = dir.join(file_name);
    std::fs::write(&path, contents).map_err(|source| Error::FileWrite {
        path: path.clone(),
        source,
    })?;
    info!(bytes = contents.len(), "Wrote {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_checklist_exact() {
        let expected = "PHONE PRIVACY MONITORING CHECKLIST\n\
            ========================================\n\
            \n\
            1. Monthly Googles searchs for your Number\n\
            2. Check major people search sites quarterly\n\
            3. Be cautious with sharing your number online\n\
            4. Use alternative numbers for online accounts, when possible\n\
            5. Consider a Google Voice number for non-essential uses\n\
            6. Report persistent spam to FTC (reportfraud.ftc.gov)\n";
        assert_eq!(render_checklist(), expected);
    }

    #[test]
    fn test_render_removal_email_substitutes_number() {
        let email = render_removal_email("(555) 867-5309");

        assert!(email.starts_with("Subject: Request for Phone Number Removal\n\n"));
        assert!(email.contains("\nPhone Number: (555) 867-5309\n"));
        assert!(email.ends_with("Best regards,\n[Your Name]\n[Date]\n"));
        assert_eq!(email.matches("(555) 867-5309").count(), 1);
    }

    #[test]
    fn test_render_removal_email_is_literal() {
        // Input is not parsed or normalized
        let email = render_removal_email("  +44 {not} a number ");
        assert!(email.contains("Phone Number:   +44 {not} a number \n"));
    }

    #[test]
    fn test_write_checklist() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_checklist(dir.path(), "phone_privacy_checklist.txt").unwrap();

        assert_eq!(path, dir.path().join("phone_privacy_checklist.txt"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, render_checklist());

        let numbered: Vec<_> = written.lines().skip(3).collect();
        assert_eq!(numbered.len(), 6);
        for (i, line) in numbered.iter().enumerate() {
            assert!(line.starts_with(&format!("{}. ", i + 1)));
        }
    }

    #[test]
    fn test_write_removal_email() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_removal_email(dir.path(), "email.txt", "555-0100").unwrap();

        let written = std::fs::read_to_string(path).unwrap();
        assert_eq!(written, render_removal_email("555-0100"));
    }

    #[test]
    fn test_write_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out").join("knock");

        let path = write_checklist(&nested, "checklist.txt").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("email.txt");
        std::fs::write(&target, "stale contents that are much longer than needed").unwrap();

        write_removal_email(dir.path(), "email.txt", "1").unwrap();
        assert_eq!(
            std::fs::read_to_string(target).unwrap(),
            render_removal_email("1")
        );
    }

    #[test]
    fn test_write_into_file_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "x").unwrap();

        let result = write_checklist(&blocker, "checklist.txt");
        assert!(matches!(result, Err(Error::FileWrite { .. })));
    }
}
