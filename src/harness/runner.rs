use crate::config::HarnessConfig;
use crate::error::{Result, TokgenError};
use crate::ui::OutputFormatter;
use std::path::{Path, PathBuf};
use std::process::Command;
use walkdir::WalkDir;

/// Totals for one harness pass.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunSummary {
    pub scripts_run: usize,
    pub failures: usize,
}

/// Feeds sample scripts to the compiled interpreter and reprints each
/// script's source and captured stdout for manual comparison. Purely
/// sequential; one subprocess at a time.
pub struct ScriptRunner {
    scripts_dir: PathBuf,
    interpreter: PathBuf,
    extension: String,
    show_contents: bool,
}

impl ScriptRunner {
    pub fn new(config: &HarnessConfig) -> Self {
        Self {
            scripts_dir: config.scripts_dir.clone(),
            interpreter: config.interpreter.clone(),
            extension: config.extension.clone(),
            show_contents: config.show_contents,
        }
    }

    /// Recursively collect matching script files, sorted by path so runs
    /// are deterministic regardless of directory iteration order.
    pub fn discover_scripts(&self) -> Result<Vec<PathBuf>> {
        if !self.scripts_dir.is_dir() {
            return Err(TokgenError::ScriptDirNotFound {
                path: self.scripts_dir.clone(),
            });
        }

        let mut scripts = Vec::new();

        for entry in WalkDir::new(&self.scripts_dir).follow_links(false) {
            let entry = entry.map_err(|e| TokgenError::Io(e.into()))?;

            if !entry.file_type().is_file() {
                continue;
            }

            let matches_extension = entry
                .path()
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e == self.extension);

            if matches_extension {
                scripts.push(entry.path().to_path_buf());
            }
        }

        scripts.sort();
        Ok(scripts)
    }

    /// Resolve the interpreter to an absolute path, verifying it exists
    /// before any script is run.
    pub fn resolve_interpreter(&self) -> Result<PathBuf> {
        if !self.interpreter.is_file() {
            return Err(TokgenError::InterpreterNotFound {
                path: self.interpreter.clone(),
            });
        }

        Ok(self.interpreter.canonicalize()?)
    }

    /// Run one script through the interpreter and capture its stdout.
    pub fn run_script(&self, interpreter: &Path, script: &Path) -> std::io::Result<String> {
        let output = Command::new(interpreter).arg(script).output()?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// `<parent dir>/<file stem>`, the banner label for a script.
    pub fn display_name(script: &Path) -> String {
        let parent = script
            .parent()
            .and_then(|p| p.file_stem())
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = script
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        format!("{}/{}", parent, stem)
    }

    /// Run every discovered script in order. A script whose interpreter
    /// invocation fails to spawn is reported and counted but does not stop
    /// the rest of the run; the preconditions (directory, interpreter) are
    /// still fatal up front.
    pub fn run_all(&self, formatter: &OutputFormatter) -> Result<RunSummary> {
        let scripts = self.discover_scripts()?;
        let interpreter = self.resolve_interpreter()?;

        formatter.debug(&format!(
            "Found {} scripts under {}",
            scripts.len(),
            self.scripts_dir.display()
        ));

        let mut summary = RunSummary::default();

        for script in &scripts {
            println!("~~~ test {} ~~~", Self::display_name(script));

            if self.show_contents {
                println!("Contents:");
                match std::fs::read_to_string(script) {
                    Ok(source) => println!("{}", source),
                    Err(e) => formatter.warning(&format!(
                        "Could not read {}: {}",
                        script.display(),
                        e
                    )),
                }
                println!("---");
            }

            match self.run_script(&interpreter, script) {
                Ok(stdout) => {
                    println!("{}", stdout);
                    summary.scripts_run += 1;
                }
                Err(e) => {
                    formatter.error(&format!("Failed to run {}: {}", script.display(), e));
                    summary.failures += 1;
                }
            }

            println!("\n~~~\n");
        }

        println!("Tests done");

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn runner_for(dir: &Path) -> ScriptRunner {
        ScriptRunner::new(&HarnessConfig {
            scripts_dir: dir.to_path_buf(),
            ..HarnessConfig::default()
        })
    }

    #[test]
    fn test_missing_scripts_dir() {
        let runner = runner_for(Path::new("no/such/dir"));
        let err = runner.discover_scripts().unwrap_err();
        assert!(matches!(err, TokgenError::ScriptDirNotFound { .. }));
    }

    #[test]
    fn test_missing_interpreter() {
        let temp = TempDir::new().unwrap();
        let runner = ScriptRunner::new(&HarnessConfig {
            scripts_dir: temp.path().to_path_buf(),
            interpreter: temp.path().join("miniscript"),
            ..HarnessConfig::default()
        });

        let err = runner.resolve_interpreter().unwrap_err();
        assert!(matches!(err, TokgenError::InterpreterNotFound { .. }));
    }

    #[test]
    fn test_discovery_filters_and_sorts() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("loops");
        fs::create_dir(&nested).unwrap();

        fs::write(temp.path().join("b.ms"), "print 1").unwrap();
        fs::write(temp.path().join("a.ms"), "print 2").unwrap();
        fs::write(temp.path().join("notes.txt"), "not a script").unwrap();
        fs::write(nested.join("while.ms"), "print 3").unwrap();

        let runner = runner_for(temp.path());
        let scripts = runner.discover_scripts().unwrap();

        assert_eq!(scripts.len(), 3);
        assert!(scripts[0].ends_with("a.ms"));
        assert!(scripts[1].ends_with("b.ms"));
        assert!(scripts[2].ends_with("loops/while.ms"));
    }

    #[test]
    fn test_display_name_uses_parent_and_stem() {
        let name = ScriptRunner::display_name(Path::new("test/loops/while.ms"));
        assert_eq!(name, "loops/while");
    }

    #[cfg(unix)]
    #[test]
    fn test_run_script_captures_stdout() {
        let temp = TempDir::new().unwrap();
        let script = temp.path().join("hello.ms");
        fs::write(&script, "hello from script").unwrap();

        let runner = runner_for(temp.path());
        // `cat` stands in for the interpreter: it echoes the script source.
        let out = runner.run_script(Path::new("/bin/cat"), &script).unwrap();
        assert_eq!(out, "hello from script");
    }
}
