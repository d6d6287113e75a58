use std::fmt;
use std::path::{Path, PathBuf};

use libloading::{Library, Symbol};

use crate::errors::{Error, Result};
use crate::plugin::{GREETER_SYMBOL, GREETER_SYMBOL_NAME, GreeterDecl};

/// Turns a module path into a greeting. Implemented over `dlopen` for real runs.
pub trait ModuleLoader {
    fn load(&self, path: &Path) -> Result<LoadedModule>;
}

/// A greeting copied out of a module, together with the handle keeping it mapped.
pub struct LoadedModule {
    path: PathBuf,
    greeting: String,
    _library: Option<Library>,
}

impl LoadedModule {
    /// A module with no backing library, for loaders that do not use `dlopen`.
    pub fn detached(path: impl Into<PathBuf>, greeting: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            greeting: greeting.into(),
            _library: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    pub fn into_greeting(self) -> String {
        self.greeting
    }
}

impl fmt::Debug for LoadedModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedModule")
            .field("path", &self.path)
            .field("greeting", &self.greeting)
            .field("dynamic", &self._library.is_some())
            .finish()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DylibLoader;

impl DylibLoader {
    pub fn new() -> Self {
        Self
    }
}

impl ModuleLoader for DylibLoader {
    fn load(&self, path: &Path) -> Result<LoadedModule> {
        // SAFETY: running a module's initialisers is the point of loading it.
        let library = unsafe { Library::new(path) }.map_err(|source| Error::Load {
            path: path.to_path_buf(),
            source,
        })?;

        let greeting = {
            // SAFETY: a data symbol's address is read as a pointer to the declared type.
            let symbol: Symbol<*const GreeterDecl> = unsafe { library.get(GREETER_SYMBOL) }
                .map_err(|source| Error::Lookup {
                    symbol: GREETER_SYMBOL_NAME,
                    source,
                })?;
            let decl = *symbol;
            if decl.is_null() {
                return Err(Error::NullSymbol(GREETER_SYMBOL_NAME));
            }
            // SAFETY: non-null and kept valid by `library`, which outlives this borrow.
            unsafe { &*decl }.read_greeting()?
        };

        Ok(LoadedModule {
            path: path.to_path_buf(),
            greeting,
            _library: Some(library),
        })
    }
}
