use crate::conn::DatabaseConnection;
use std::fs;
use std::path::{Path, PathBuf};

/// Applies schema changes to a connection, failing fast on the first error.
pub trait MigrationRunner: Send + Sync {
    fn run_migrations(&self, conn: &mut dyn DatabaseConnection) -> Result<(), String>;
}

/// Migration runner that does nothing. Useful for schema-less templates
/// and for tests.
pub struct NoOpMigrationRunner;

impl MigrationRunner for NoOpMigrationRunner {
    fn run_migrations(&self, _conn: &mut dyn DatabaseConnection) -> Result<(), String> {
        Ok(())
    }
}

/// Reorders collected migration files before execution.
pub type OrderingFn = fn(&mut Vec<PathBuf>);

/// Default ordering: plain lexicographic sort of the full paths.
pub fn alphabetical_ordering(files: &mut Vec<PathBuf>) {
    files.sort();
}

/// Runs every `.sql` file found under the configured paths, in the order
/// produced by the ordering function.
pub struct FileMigrationRunner {
    paths: Vec<PathBuf>,
    ordering: OrderingFn,
}

impl FileMigrationRunner {
    pub fn new<P: AsRef<Path>>(paths: &[P]) -> Self {
        Self {
            paths: paths.iter().map(|p| p.as_ref().to_path_buf()).collect(),
            ordering: alphabetical_ordering,
        }
    }

    pub fn with_ordering(mut self, ordering: OrderingFn) -> Self {
        self.ordering = ordering;
        self
    }
}

impl MigrationRunner for FileMigrationRunner {
    fn run_migrations(&self, conn: &mut dyn DatabaseConnection) -> Result<(), String> {
        let mut files = Vec::new();
        for path in &self.paths {
            collect_sql_files(path, &mut files)
                .map_err(|e| format!("failed to collect files from {}: {}", path.display(), e))?;
        }

        (self.ordering)(&mut files);

        for file in &files {
            let sql = fs::read_to_string(file)
                .map_err(|e| format!("reading migration {}: {}", file.display(), e))?;
            conn.execute(&sql, &[])
                .map_err(|e| format!("failed to execute migration {}: {}", file.display(), e))?;
        }
        Ok(())
    }
}

fn collect_sql_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), String> {
    let entries = fs::read_dir(dir).map_err(|e| format!("{}: {}", dir.display(), e))?;
    for entry in entries {
        let entry = entry.map_err(|e| format!("{}: {}", dir.display(), e))?;
        let path = entry.path();
        if path.is_dir() {
            collect_sql_files(&path, out)?;
        } else if path.extension().is_some_and(|ext| ext == "sql") {
            out.push(path);
        }
    }
    Ok(())
}
