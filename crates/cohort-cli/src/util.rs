use std::{
    fs::File,
    io::{self, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use cohort_analysis::{policy::CohortPolicy, score::StudentScore};

/// Destination of JSON results: stdout, or a file given with `--output`.
#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    /// Writes `value` to the file at `output_path`, or to stdout when absent.
    pub fn save_json<T>(value: &T, output_path: Option<PathBuf>) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let mut output = match output_path {
            Some(path) => {
                let file = File::create(&path).with_context(|| {
                    format!("Failed to create output file: {}", path.display())
                })?;
                Output::File {
                    writer: BufWriter::new(file),
                    path,
                }
            }
            None => Output::stdout(),
        };
        output.write_json(value)?;
        if let Output::File { path, .. } = &output {
            eprintln!("Wrote {}", path.display());
        }
        Ok(())
    }

    /// Writes `value` as pretty-printed JSON followed by a newline.
    pub fn write_json<T>(&mut self, value: T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let target = match self {
            Output::Stdout { .. } => "stdout".to_owned(),
            Output::File { path, .. } => path.display().to_string(),
        };
        serde_json::to_writer_pretty(&mut *self, &value)
            .map_err(io::Error::from)
            .and_then(|()| writeln!(self))
            .and_then(|()| self.flush())
            .with_context(|| format!("Failed to write JSON to {target}"))
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = io::BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

/// Read student score records from a JSON file
///
/// The file holds an array of `{ "student_id": .., "score": .. }` objects.
pub fn read_scores_file<P>(path: P) -> anyhow::Result<Vec<StudentScore>>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    eprintln!("Loading scores from {}...", path.display());
    let records: Vec<StudentScore> = read_json_file("scores", path)?;
    eprintln!("Loaded {} scores", records.len());
    Ok(records)
}

/// Read the analysis policy, falling back to the default when no file is given
///
/// Fields missing from the file keep their default values.
pub fn read_policy_file(path: Option<&Path>) -> anyhow::Result<CohortPolicy> {
    let Some(path) = path else {
        return Ok(CohortPolicy::default());
    };
    eprintln!("Loading policy from {}...", path.display());
    read_json_file("policy", path)
}

#[cfg(test)]
mod tests {
    use std::{env, fs, process};

    use super::*;

    #[test]
    fn test_saved_scores_read_back() {
        let path = env::temp_dir().join(format!("cohort-scores-{}.json", process::id()));
        let records = vec![StudentScore::new(1, 42.5), StudentScore::new(2, 88.0)];

        Output::save_json(&records, Some(path.clone())).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.ends_with("]\n"), "{text}");
        let loaded = read_scores_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(loaded, records);
    }

    #[test]
    fn test_missing_policy_file_uses_default() {
        assert_eq!(read_policy_file(None).unwrap(), CohortPolicy::default());
    }

    #[test]
    fn test_unreadable_scores_file_reports_path() {
        let err = read_scores_file("does/not/exist.json").unwrap_err();
        assert!(format!("{err}").contains("does/not/exist.json"), "{err}");
    }
}
