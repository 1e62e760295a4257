use std::fs;
use std::path::Path;

use log::info;

use crate::error::FinderError;

/// One company from the input file, parsed from a `Name (URL)` line.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyRecord {
    pub name: String,
    pub url: String,
}

/// Reads the input file line by line. Blank lines are skipped; any other
/// line that does not match `Name (URL)` aborts the run.
pub fn load_companies<P: AsRef<Path>>(path: P) -> Result<Vec<CompanyRecord>, FinderError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let mut records = Vec::new();
    for line in content.lines() {
        if line.trim().is_empty() {
            continue;
        }
        records.push(parse_line(line)?);
    }

    info!("Loaded {} companies from {:?}", records.len(), path);
    Ok(records)
}

/// Parses a single `Name (URL)` line. The line must contain exactly one
/// `(`; the URL runs from there to the first following `)` (or the end
/// of the line if none). Name and URL are trimmed.
pub fn parse_line(line: &str) -> Result<CompanyRecord, FinderError> {
    let open = match line.find('(') {
        Some(i) => i,
        None => return Err(FinderError::InvalidLine(line.to_string())),
    };
    let rest = &line[open + 1..];
    if rest.contains('(') {
        return Err(FinderError::InvalidLine(line.to_string()));
    }

    let name = line[..open].trim();
    let url = match rest.find(')') {
        Some(close) => rest[..close].trim(),
        None => rest.trim(),
    };

    Ok(CompanyRecord {
        name: name.to_string(),
        url: url.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_line() {
        let record = parse_line("Acme Inc (https://www.acme.com)").unwrap();
        assert_eq!(record.name, "Acme Inc");
        assert_eq!(record.url, "https://www.acme.com");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let record = parse_line("  Acme Inc  (  https://acme.com  )  ").unwrap();
        assert_eq!(record.name, "Acme Inc");
        assert_eq!(record.url, "https://acme.com");
    }

    #[test]
    fn line_without_paren_is_an_error() {
        assert!(matches!(
            parse_line("Acme Inc https://acme.com"),
            Err(FinderError::InvalidLine(_))
        ));
    }

    #[test]
    fn line_with_two_opening_parens_is_an_error() {
        assert!(matches!(
            parse_line("Acme (Inc) (https://acme.com)"),
            Err(FinderError::InvalidLine(_))
        ));
    }

    #[test]
    fn missing_close_paren_takes_rest_of_line() {
        let record = parse_line("Acme Inc (https://acme.com").unwrap();
        assert_eq!(record.url, "https://acme.com");
    }

    #[test]
    fn loads_file_skipping_blank_lines() {
        let dir = std::env::temp_dir().join("founder_finder_input_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("companies.txt");
        std::fs::write(
            &path,
            "Acme Inc (https://acme.com)\n\nBeta LLC (https://beta.io)\n",
        )
        .unwrap();

        let records = load_companies(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Acme Inc");
        assert_eq!(records[1].url, "https://beta.io");
    }
}
