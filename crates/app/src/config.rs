//! Configuration for the huffman-explorer application.
//!
//! Turns parsed command-line arguments into a fully resolved `Config`.
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments, using intelligent defaults.
//! Without `--in` a sample text is generated; its seed is printed so the run
//! can be reproduced.

use huffman_explorer_core::{Error, Result};
use std::path::{Component, Path, PathBuf};

use crate::cli::Cli;

/// Where the text to compress comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Read and UTF-8 decode a file
    File(PathBuf),

    /// Generate a reproducible sample text
    Sample { seed: u64, chars: usize },
}

/// Complete configuration for a compression run.
#[derive(Debug, Clone)]
pub struct Config {
    // === Files ===
    /// Input text
    pub input: InputSource,

    /// Bit-string artifact path
    pub output_file: PathBuf,

    /// Graphviz DOT path, if requested
    pub dot_file: Option<PathBuf>,

    /// JSON report path, if requested
    pub json_file: Option<PathBuf>,

    /// Plain key=value metrics path, if requested
    pub metrics_file: Option<PathBuf>,

    // === Behavior ===
    /// Whether to print detailed config
    pub print_config: bool,

    /// Whether to print the metrics summary
    pub print_metrics: bool,

    /// Whether to print the frequency/code table
    pub print_table: bool,
}

impl Config {
    /// Resolve configuration from command-line arguments.
    ///
    /// If no seed is given for sample generation, a time-based seed is used.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let input = match &cli.input {
            Some(path) => InputSource::File(path.clone()),
            None => {
                if cli.sample_chars == 0 {
                    return Err(Error::Config(
                        "--sample-chars must be at least 1".to_string(),
                    ));
                }
                InputSource::Sample {
                    seed: cli.seed.unwrap_or_else(time_seed),
                    chars: cli.sample_chars,
                }
            }
        };

        let output_file = match &cli.output {
            Some(path) => path.clone(),
            None => default_output(&input),
        };

        let config = Config {
            input,
            output_file,
            dot_file: cli.dot.clone(),
            json_file: cli.json.clone(),
            metrics_file: cli.metrics_out.clone(),
            print_config: cli.print_config,
            print_metrics: !cli.no_metrics,
            print_table: !cli.no_table,
        };
        config.check_targets()?;
        Ok(config)
    }

    /// Every file the run writes, with the flag that named it.
    fn targets(&self) -> Vec<(&'static str, &Path)> {
        let mut targets = vec![("--out", self.output_file.as_path())];
        if let Some(path) = &self.dot_file {
            targets.push(("--dot", path.as_path()));
        }
        if let Some(path) = &self.json_file {
            targets.push(("--json", path.as_path()));
        }
        if let Some(path) = &self.metrics_file {
            targets.push(("--metrics-out", path.as_path()));
        }
        targets
    }

    /// Reject runs where a written file is the input or another output.
    ///
    /// Paths are compared after normalization, so `./a.txt`, `a.txt` and
    /// `dir/../a.txt` all name the same file.
    fn check_targets(&self) -> Result<()> {
        let input = match &self.input {
            InputSource::File(path) => Some(normalize_path(path)),
            InputSource::Sample { .. } => None,
        };

        let mut seen: Vec<(&'static str, PathBuf)> = Vec::new();
        for (flag, path) in self.targets() {
            let normalized = normalize_path(path);
            if input.as_ref() == Some(&normalized) {
                return Err(Error::Config(format!(
                    "{flag} {} would overwrite the input file",
                    path.display()
                )));
            }
            if let Some((other, _)) = seen.iter().find(|(_, p)| *p == normalized) {
                return Err(Error::Config(format!(
                    "{flag} and {other} both write {}",
                    path.display()
                )));
            }
            seen.push((flag, normalized));
        }
        Ok(())
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        match &self.input {
            InputSource::File(path) => println!("Input file:  {}", path.display()),
            InputSource::Sample { seed, chars } => {
                println!("Input:       generated sample ({chars} chars, seed {seed})")
            }
        }
        println!("Output file: {}", self.output_file.display());
        println!(
            "DOT file:    {}",
            self.dot_file
                .as_ref()
                .map_or("(none)".to_string(), |p| p.display().to_string())
        );
        println!(
            "JSON file:   {}",
            self.json_file
                .as_ref()
                .map_or("(none)".to_string(), |p| p.display().to_string())
        );
        println!(
            "Metrics file: {}",
            self.metrics_file
                .as_ref()
                .map_or("(none)".to_string(), |p| p.display().to_string())
        );
        println!();
    }
}

/// `<dir>/<stem>_compressed.huf` next to the input, or
/// `./sample_compressed.huf` for generated input.
fn default_output(input: &InputSource) -> PathBuf {
    match input {
        InputSource::File(path) => {
            let stem = path
                .file_stem()
                .map_or("output".into(), |s| s.to_string_lossy());
            let name = format!("{stem}_compressed.huf");
            path.parent().unwrap_or(Path::new("")).join(name)
        }
        InputSource::Sample { .. } => PathBuf::from("./sample_compressed.huf"),
    }
}

/// Absolute form of `path` with `.` and `..` removed and symlinks resolved
/// for the part of the path that already exists.
fn normalize_path(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().map_or_else(|_| path.to_path_buf(), |dir| dir.join(path))
    };

    let mut lexical = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                lexical.pop();
            }
            other => lexical.push(other),
        }
    }

    // Output files usually don't exist yet: canonicalize the deepest
    // existing ancestor and re-attach the rest
    let mut existing = lexical.as_path();
    let mut missing = Vec::new();
    loop {
        if let Ok(canonical) = std::fs::canonicalize(existing) {
            return missing
                .iter()
                .rev()
                .fold(canonical, |acc: PathBuf, name| acc.join(name));
        }
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name.to_os_string());
                existing = parent;
            }
            _ => return lexical,
        }
    }
}

fn time_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("huffman-explorer").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_defaults_generate_sample() {
        let config = Config::from_cli(&parse(&["--seed", "7"])).unwrap();
        assert_eq!(
            config.input,
            InputSource::Sample {
                seed: 7,
                chars: 4096
            }
        );
        assert_eq!(config.output_file, PathBuf::from("./sample_compressed.huf"));
        assert!(config.print_metrics);
        assert!(config.print_table);
        assert!(config.dot_file.is_none());
    }

    #[test]
    fn test_output_next_to_input() {
        let config = Config::from_cli(&parse(&["--in", "texts/story.txt"])).unwrap();
        assert_eq!(
            config.output_file,
            PathBuf::from("texts").join("story_compressed.huf")
        );

        let config = Config::from_cli(&parse(&["--in", "story.txt"])).unwrap();
        assert_eq!(config.output_file, PathBuf::from("story_compressed.huf"));
    }

    #[test]
    fn test_explicit_paths() {
        let config = Config::from_cli(&parse(&[
            "--in",
            "a.txt",
            "--out",
            "b.huf",
            "--dot",
            "tree.dot",
            "--json",
            "report.json",
            "--no-metrics",
            "--no-table",
        ]))
        .unwrap();
        assert_eq!(config.output_file, PathBuf::from("b.huf"));
        assert_eq!(config.dot_file, Some(PathBuf::from("tree.dot")));
        assert_eq!(config.json_file, Some(PathBuf::from("report.json")));
        assert!(!config.print_metrics);
        assert!(!config.print_table);
    }

    #[test]
    fn test_rejects_overwriting_input() {
        let result = Config::from_cli(&parse(&["--in", "a.txt", "--out", "a.txt"]));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_rejects_output_aliasing_input() {
        for args in [
            ["--in", "./a.txt", "--out", "a.txt"],
            ["--in", "a.txt", "--out", "sub/../a.txt"],
            ["--in", "a.txt", "--dot", "a.txt"],
            ["--in", "a.txt", "--json", "./a.txt"],
            ["--in", "a.txt", "--metrics-out", "a.txt"],
        ] {
            let result = Config::from_cli(&parse(&args));
            assert!(
                matches!(result, Err(Error::Config(_))),
                "accepted {args:?}"
            );
        }
    }

    #[test]
    fn test_rejects_output_aliasing_existing_input() {
        let dir = std::env::temp_dir().join(format!("huffman-explorer-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let input = dir.join("story.txt");
        std::fs::write(&input, "story").unwrap();

        let aliased = dir.join(".").join("story.txt");
        let result = Config::from_cli(&parse(&[
            "--in",
            input.to_str().unwrap(),
            "--dot",
            aliased.to_str().unwrap(),
        ]));
        assert!(matches!(result, Err(Error::Config(_))));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_rejects_outputs_sharing_a_file() {
        let result = Config::from_cli(&parse(&[
            "--in", "a.txt", "--out", "x.out", "--json", "./x.out",
        ]));
        assert!(matches!(result, Err(Error::Config(_))));

        let result = Config::from_cli(&parse(&["--seed", "1", "--dot", "./sample_compressed.huf"]));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_distinct_outputs_accepted() {
        let config = Config::from_cli(&parse(&[
            "--in",
            "a.txt",
            "--dot",
            "a.dot",
            "--json",
            "a.json",
            "--metrics-out",
            "a.metrics",
        ]))
        .unwrap();
        assert_eq!(config.metrics_file, Some(PathBuf::from("a.metrics")));
    }

    #[test]
    fn test_rejects_empty_sample() {
        let result = Config::from_cli(&parse(&["--sample-chars", "0"]));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        let result = Cli::try_parse_from(["huffman-explorer", "-v", "-q"]);
        assert!(result.is_err());
    }
}
