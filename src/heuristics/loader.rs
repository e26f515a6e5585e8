use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;
use wasmtime::{Engine, Linker, Module, Store};

use crate::utils::error::{ConvError, Result};

/// File extensions recognized as loadable heuristic modules. Text modules
/// (`.wat`) can carry a leading `;;` doc block; binary modules cannot.
pub const HEURISTIC_EXTENSIONS: &[&str] = &["wat", "wasm"];

/// Identifies a loaded heuristic plugin. `source_location` is the
/// canonicalized path of the file backing the module, so loading the same
/// file by registered name and by explicit path yields equal locations.
#[derive(Debug, Clone, Serialize)]
pub struct HeuristicDescriptor {
    pub name: String,
    pub source_location: PathBuf,
    pub short_description: Option<String>,
    pub full_description: Option<String>,
}

/// A heuristic plugin: its descriptor plus the compiled module, ready for the
/// conversion pipeline to instantiate per scan.
#[derive(Clone)]
pub struct Heuristic {
    pub descriptor: HeuristicDescriptor,
    module: Module,
}

impl std::fmt::Debug for Heuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Heuristic")
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

impl Heuristic {
    pub(crate) fn new(descriptor: HeuristicDescriptor, module: Module) -> Self {
        Self { descriptor, module }
    }

    pub fn module(&self) -> &Module {
        &self.module
    }
}

/// Compiles the module at `path` and instantiates it once, running its start
/// function. The module is trusted collaborator code; nothing beyond
/// wasmtime's own guarantees sandboxes it.
///
/// Any compile or instantiation failure surfaces as the plugin-not-found
/// kind: an unloadable file is indistinguishable from an absent plugin to
/// callers.
pub(crate) fn load_module(engine: &Engine, path: &Path, identifier: &str) -> Result<Module> {
    let module = Module::from_file(engine, path).map_err(|err| {
        debug!(
            "Failed to compile heuristic module {}: {err:#}",
            path.display()
        );
        ConvError::PluginNotFound {
            identifier: identifier.to_string(),
        }
    })?;

    let mut store: Store<()> = Store::new(engine, ());
    Linker::new(engine)
        .instantiate(&mut store, &module)
        .map_err(|err| {
            debug!(
                "Failed to instantiate heuristic module {}: {err:#}",
                path.display()
            );
            ConvError::PluginNotFound {
                identifier: identifier.to_string(),
            }
        })?;

    Ok(module)
}
