use std::path::Path;

pub const UNKNOWN_LABEL: &str = "unknown";

#[derive(Debug, Clone, PartialEq)]
pub struct LabelEntry {
    pub synset: Option<String>,
    pub description: String,
}

/// Class id to label lookup, one class per line of the label file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelTable {
    entries: Vec<LabelEntry>,
}

impl LabelTable {
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read labels from {}: {}", path.display(), e))?;

        let table = Self::parse(&text);

        if table.is_empty() {
            return Err(format!("label file {} contains no labels", path.display()).into());
        }

        Ok(table)
    }

    pub fn parse(text: &str) -> Self {
        let entries = text.lines().map(parse_line).collect();
        Self { entries }
    }

    #[allow(dead_code)]
    pub fn from_descriptions<I, S>(descriptions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = descriptions
            .into_iter()
            .map(|description| LabelEntry {
                synset: None,
                description: description.into(),
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn description(&self, class_id: usize) -> &str {
        self.entries
            .get(class_id)
            .map(|entry| entry.description.as_str())
            .unwrap_or(UNKNOWN_LABEL)
    }

    pub fn synset(&self, class_id: usize) -> Option<&str> {
        self.entries
            .get(class_id)
            .and_then(|entry| entry.synset.as_deref())
    }
}

fn parse_line(line: &str) -> LabelEntry {
    let line = line.trim_end_matches('\r');

    match line.split_once(' ') {
        Some((synset, description)) if is_synset(synset) => LabelEntry {
            synset: Some(synset.to_string()),
            description: description.trim().to_string(),
        },
        _ => LabelEntry {
            synset: None,
            description: line.trim().to_string(),
        },
    }
}

// ImageNet synset ids look like `n01440764`
fn is_synset(token: &str) -> bool {
    token.len() == 9
        && token.starts_with('n')
        && token[1..].chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_synset_lines() {
        let table = LabelTable::parse("n01440764 tench, Tinca tinca\nn01443537 goldfish\n");

        assert_eq!(table.len(), 2);
        assert_eq!(table.description(0), "tench, Tinca tinca");
        assert_eq!(table.synset(0), Some("n01440764"));
        assert_eq!(table.description(1), "goldfish");
    }

    #[test]
    fn test_parse_plain_lines_and_crlf() {
        let table = LabelTable::parse("background\r\nbottle\r\ntabby cat\r\n");

        assert_eq!(table.len(), 3);
        assert_eq!(table.description(2), "tabby cat");
        assert_eq!(table.synset(2), None);
    }

    #[test]
    fn test_words_that_are_not_synsets_stay_in_description() {
        let table = LabelTable::parse("notasynset label\nn123 short\n");

        assert_eq!(table.description(0), "notasynset label");
        assert_eq!(table.description(1), "n123 short");
    }

    #[test]
    fn test_unknown_class_id() {
        let table = LabelTable::from_descriptions(["cat", "dog"]);

        assert_eq!(table.description(2), UNKNOWN_LABEL);
        assert_eq!(table.synset(7), None);
    }

    #[test]
    fn test_lookup_is_stable() {
        let table = LabelTable::from_descriptions(["cat", "dog"]);

        let first: Vec<&str> = (0..3).map(|id| table.description(id)).collect();
        let second: Vec<&str> = (0..3).map(|id| table.description(id)).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "n02123045 tabby, tabby cat").unwrap();
        writeln!(file, "n02123159 tiger cat").unwrap();

        let table = LabelTable::load(file.path()).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.description(1), "tiger cat");
    }

    #[test]
    fn test_load_missing_or_empty_file_fails() {
        assert!(LabelTable::load(Path::new("/nonexistent/labels.txt")).is_err());

        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(LabelTable::load(file.path()).is_err());
    }
}
