use crate::types::FileEntry;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Assemble the combined markdown document: a top-level heading, then one
/// section per entry. A file that fails to read gets an inline error message
/// instead of a code block; the remaining files are still rendered.
pub fn render_markdown(files: &[FileEntry]) -> String {
    let mut md = String::from("# Combined Source Code\n\n");
    for file in files {
        md.push_str(&format!("## `{}`\n", file.rel_path));
        match fs::read_to_string(&file.path) {
            Ok(code) => {
                md.push_str(&format!("```{}\n{}\n```\n\n", file.extension, code));
            }
            Err(err) => {
                md.push_str(&format!("Error reading file: {}\n\n", err));
            }
        }
    }
    md
}

/// Write the combined document to `output_path`, overwriting any existing
/// file at that location.
pub fn render(files: &[FileEntry], output_path: &Path) -> Result<()> {
    let out = File::create(output_path)
        .with_context(|| format!("could not create {}", output_path.display()))?;
    let mut writer = BufWriter::new(out);
    writer.write_all(render_markdown(files).as_bytes())?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn section_format_matches_template() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.ts"), "x").unwrap();

        let entry = FileEntry::new(Some(dir.path()), dir.path().join("a.ts"));
        let md = render_markdown(&[entry]);
        assert_eq!(md, "# Combined Source Code\n\n## `a.ts`\n```ts\nx\n```\n\n");
    }

    #[test]
    fn read_failure_becomes_inline_error_section() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("ok.py"), "print(1)").unwrap();

        // A directory path fails read_to_string but must not abort the run.
        let entries = vec![
            FileEntry::new(None, PathBuf::from(dir.path())),
            FileEntry::new(Some(dir.path()), dir.path().join("ok.py")),
        ];
        let md = render_markdown(&entries);
        assert!(md.contains("Error reading file:"));
        assert!(md.contains("## `ok.py`\n```py\nprint(1)\n```\n\n"));
    }

    #[test]
    fn one_section_per_entry_in_input_order() {
        let dir = tempdir().unwrap();
        let names = ["b.js", "a.js", "c.js"];
        for name in names {
            fs::write(dir.path().join(name), name).unwrap();
        }

        let entries: Vec<FileEntry> = names
            .iter()
            .map(|n| FileEntry::new(Some(dir.path()), dir.path().join(n)))
            .collect();
        let md = render_markdown(&entries);

        let headings: Vec<&str> = md
            .lines()
            .filter(|l| l.starts_with("## "))
            .collect();
        assert_eq!(headings, vec!["## `b.js`", "## `a.js`", "## `c.js`"]);
    }

    #[test]
    fn render_overwrites_existing_output() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.json"), "{}").unwrap();
        let out = dir.path().join("out.md");
        fs::write(&out, "stale").unwrap();

        let entry = FileEntry::new(Some(dir.path()), dir.path().join("a.json"));
        render(&[entry], &out).unwrap();

        let written = fs::read_to_string(&out).unwrap();
        assert!(written.starts_with("# Combined Source Code\n\n"));
        assert!(!written.contains("stale"));
    }
}
