use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use wasmtime::Engine;

use crate::heuristics::loader::{self, Heuristic, HeuristicDescriptor, HEURISTIC_EXTENSIONS};
use crate::utils::error::{ConvError, Result};

/// Resolves heuristic identifiers (registered name or explicit file path) to
/// loadable modules and provides discovery over a heuristics directory.
///
/// The directory is an explicit constructor argument so tests can point the
/// registry at an alternate set of plugins.
pub struct HeuristicRegistry {
    engine: Engine,
    heuristics_dir: PathBuf,
}

impl HeuristicRegistry {
    pub fn new<P: Into<PathBuf>>(heuristics_dir: P) -> Self {
        Self {
            engine: Engine::default(),
            heuristics_dir: heuristics_dir.into(),
        }
    }

    /// Registry over the heuristics shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("heuristics"))
    }

    pub fn heuristics_dir(&self) -> &Path {
        &self.heuristics_dir
    }

    /// Enumerates every heuristic module in the directory, mapped to its
    /// single-line short description (empty when the module carries none).
    ///
    /// Underscore-prefixed files are treated as private and skipped. Only the
    /// file text is read; no module is compiled.
    pub fn known_heuristics(&self) -> Result<BTreeMap<String, String>> {
        let mut known = BTreeMap::new();
        for entry in fs::read_dir(&self.heuristics_dir)? {
            let path = entry?.path();
            let Some(name) = heuristic_name(&path) else {
                continue;
            };
            if name.starts_with('_') {
                continue;
            }
            let doc = read_doc_block(&path)?;
            known.insert(name, first_nonempty_line(doc.as_deref()));
        }
        Ok(known)
    }

    /// Returns the short (first-line) or full description of a named
    /// heuristic. Fails with [`ConvError::NotFound`] for an unknown name.
    pub fn describe(&self, name: &str, full: bool) -> Result<String> {
        let path = self.resolve_name(name).ok_or_else(|| ConvError::NotFound {
            path: self.heuristics_dir.join(name),
        })?;
        let doc = read_doc_block(&path)?;
        if full {
            Ok(doc.unwrap_or_default())
        } else {
            Ok(first_nonempty_line(doc.as_deref()))
        }
    }

    /// Resolves `identifier` and loads the heuristic module it names.
    ///
    /// An identifier naming an existing file is loaded directly from that
    /// path; anything else is treated as a registered name and mapped into
    /// the heuristics directory. Both branches record the canonicalized
    /// module path as `source_location`, so two identifiers for the same file
    /// produce descriptors with equal locations.
    pub fn load(&self, identifier: &str) -> Result<Heuristic> {
        let given = Path::new(identifier);
        let path = if given.is_file() {
            given.to_path_buf()
        } else {
            self.resolve_name(identifier)
                .ok_or_else(|| ConvError::PluginNotFound {
                    identifier: identifier.to_string(),
                })?
        };

        let source_location = fs::canonicalize(&path)?;
        debug!(
            "Loading heuristic {identifier} from {}",
            source_location.display()
        );
        let module = loader::load_module(&self.engine, &source_location, identifier)?;

        let name = heuristic_name(&source_location)
            .unwrap_or_else(|| identifier.to_string());
        let full_description = read_doc_block(&source_location)?;
        let short_description = full_description
            .as_deref()
            .map(|doc| first_nonempty_line(Some(doc)));

        Ok(Heuristic::new(
            HeuristicDescriptor {
                name,
                source_location,
                short_description,
                full_description,
            },
            module,
        ))
    }

    fn resolve_name(&self, name: &str) -> Option<PathBuf> {
        HEURISTIC_EXTENSIONS
            .iter()
            .map(|ext| self.heuristics_dir.join(format!("{name}.{ext}")))
            .find(|candidate| candidate.is_file())
    }
}

/// File stem of `path` when it is a file with a recognized heuristic
/// extension.
fn heuristic_name(path: &Path) -> Option<String> {
    if !path.is_file() {
        return None;
    }
    let ext = path.extension()?.to_str()?;
    if !HEURISTIC_EXTENSIONS.contains(&ext) {
        return None;
    }
    Some(path.file_stem()?.to_string_lossy().into_owned())
}

/// Extracts the leading `;;` comment block of a text module as its docstring.
/// Binary modules have none.
fn read_doc_block(path: &Path) -> Result<Option<String>> {
    if path.extension().and_then(|e| e.to_str()) != Some("wat") {
        return Ok(None);
    }
    let text = fs::read_to_string(path)?;
    let mut lines = Vec::new();
    for line in text.lines() {
        match line.trim_start().strip_prefix(";;") {
            Some(rest) => lines.push(rest.strip_prefix(' ').unwrap_or(rest).to_string()),
            None => break,
        }
    }
    if lines.is_empty() {
        Ok(None)
    } else {
        Ok(Some(lines.join("\n")))
    }
}

fn first_nonempty_line(doc: Option<&str>) -> String {
    doc.and_then(|text| text.lines().find(|line| !line.trim().is_empty()))
        .unwrap_or_default()
        .to_string()
}
