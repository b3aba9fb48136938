//! Entry invocation through an external PHP interpreter.
//!
//! The interpreter is started as `<interpreter> -r <bootstrap> -- <args>...`
//! inside the workspace. The bootstrap script registers an autoloader per
//! namespace mapping plus a fallback under the workspace root, loads the dependency files and the entry source, then
//! calls the entry method with the forwarded arguments.

use std::fmt::Write as _;
use std::path::Path;
use std::process::Command;

use stencil_core::{
    application::{ApplicationError, ports::EntryInvoker},
    domain::{LaunchTarget, NamespaceMap, SOURCE_EXTENSION},
    error::StencilResult,
};
use tracing::{debug, instrument, warn};

/// Interpreter used when nothing else is configured.
pub const DEFAULT_INTERPRETER: &str = "php";

#[derive(Debug, Clone)]
pub struct ProcessInvoker {
    interpreter: String,
}

impl ProcessInvoker {
    pub fn new(interpreter: impl Into<String>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }

    /// Build the command without running it.
    pub fn command(&self, target: &LaunchTarget, namespaces: &NamespaceMap) -> Command {
        let mut command = Command::new(&self.interpreter);
        command
            .arg("-r")
            .arg(bootstrap_script(target, namespaces))
            .arg("--")
            .args(&target.args)
            .current_dir(&target.workspace);
        command
    }
}

impl Default for ProcessInvoker {
    fn default() -> Self {
        Self::new(DEFAULT_INTERPRETER)
    }
}

impl EntryInvoker for ProcessInvoker {
    #[instrument(skip_all, fields(interpreter = %self.interpreter, class = %target.class_name))]
    fn invoke(&self, target: &LaunchTarget, namespaces: &NamespaceMap) -> StencilResult<i32> {
        let status = self
            .command(target, namespaces)
            .status()
            .map_err(|e| ApplicationError::InvocationFailed {
                program: self.interpreter.clone(),
                reason: e.to_string(),
            })?;

        match status.code() {
            Some(code) => {
                debug!(code, "Program exited");
                Ok(code)
            }
            None => {
                warn!("Program terminated by signal");
                Ok(1)
            }
        }
    }
}

/// PHP source passed to `-r`.
pub fn bootstrap_script(target: &LaunchTarget, namespaces: &NamespaceMap) -> String {
    let mut script = String::new();

    for (prefix, dir) in namespaces.iter() {
        let _ = writeln!(
            script,
            "spl_autoload_register(function ($c) {{ $p = '{prefix}\\\\'; \
             if (strncasecmp($c, $p, strlen($p)) !== 0) return; \
             $f = '{dir}' . DIRECTORY_SEPARATOR . str_replace('\\\\', DIRECTORY_SEPARATOR, substr($c, strlen($p))) . '.{ext}'; \
             if (is_file($f)) require_once $f; }});",
            prefix = quote(prefix),
            dir = quote_path(dir),
            ext = SOURCE_EXTENSION,
        );
    }

    // Unmapped names resolve under the root, matching `NamespaceMap::locate`.
    let _ = writeln!(
        script,
        "spl_autoload_register(function ($c) {{ \
         $f = '{root}' . DIRECTORY_SEPARATOR . str_replace('\\\\', DIRECTORY_SEPARATOR, ltrim($c, '\\\\')) . '.{ext}'; \
         if (is_file($f)) require_once $f; }});",
        root = quote_path(namespaces.root()),
        ext = SOURCE_EXTENSION,
    );

    for path in &target.preload {
        let _ = writeln!(script, "require_once '{}';", quote_path(path));
    }
    let _ = writeln!(script, "require_once '{}';", quote_path(&target.source));
    let _ = write!(
        script,
        "exit((int) \\{}::{}(array_slice($argv, 1)));",
        target.class_name, target.method
    );

    script
}

/// Escape for a single-quoted PHP string.
fn quote(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

fn quote_path(path: &Path) -> String {
    quote(&path.to_string_lossy())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn target() -> LaunchTarget {
        LaunchTarget {
            class_name: "Blog\\App".into(),
            method: "main",
            args: vec!["--flag".into()],
            workspace: PathBuf::from("/srv/blog"),
            source: PathBuf::from("/srv/blog/App.php"),
            preload: vec![PathBuf::from("/srv/blog/vendor/init.php")],
        }
    }

    #[test]
    fn bootstrap_loads_in_order_and_calls_main() {
        let mut namespaces = NamespaceMap::new("/srv/blog");
        namespaces.map("Blog", "/srv/blog");

        let script = bootstrap_script(&target(), &namespaces);
        let autoload = script.find("spl_autoload_register").unwrap();
        let preload = script.find("require_once '/srv/blog/vendor/init.php';").unwrap();
        let entry = script.find("require_once '/srv/blog/App.php';").unwrap();

        assert!(autoload < preload && preload < entry);
        assert!(script.contains("$p = 'Blog\\\\';"));
        assert!(script.ends_with("exit((int) \\Blog\\App::main(array_slice($argv, 1)));"));
    }

    #[test]
    fn unmapped_classes_autoload_from_the_root() {
        let namespaces = NamespaceMap::new("/srv/app");

        let script = bootstrap_script(&target(), &namespaces);
        let fallback = script.find("$f = '/srv/app' . DIRECTORY_SEPARATOR").unwrap();
        let entry = script.find("require_once '/srv/blog/App.php';").unwrap();

        assert_eq!(script.matches("spl_autoload_register").count(), 1);
        assert!(fallback < entry);
    }

    #[test]
    fn fallback_is_registered_after_explicit_mappings() {
        let mut namespaces = NamespaceMap::new("/srv/app");
        namespaces.map("Blog", "/srv/blog");

        let script = bootstrap_script(&target(), &namespaces);
        let mapped = script.find("$p = 'Blog\\\\';").unwrap();
        let fallback = script.find("$f = '/srv/app' . DIRECTORY_SEPARATOR").unwrap();

        assert_eq!(script.matches("spl_autoload_register").count(), 2);
        assert!(mapped < fallback);
    }

    #[test]
    fn quotes_are_escaped() {
        assert_eq!(quote("it's"), "it\\'s");
        assert_eq!(quote("A\\B"), "A\\\\B");
    }

    #[test]
    fn command_forwards_arguments_after_separator() {
        let invoker = ProcessInvoker::default();
        let command = invoker.command(&target(), &NamespaceMap::new("/srv/blog"));

        assert_eq!(command.get_program(), "php");
        let args: Vec<_> = command.get_args().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(args[0], "-r");
        assert_eq!(&args[2..], ["--", "--flag"]);
        assert_eq!(command.get_current_dir(), Some(Path::new("/srv/blog")));
    }

    #[test]
    fn missing_interpreter_is_an_invocation_error() {
        let invoker = ProcessInvoker::new("stencil-no-such-interpreter");
        let err = invoker
            .invoke(&target(), &NamespaceMap::new("/srv/blog"))
            .unwrap_err();
        assert!(err.to_string().contains("stencil-no-such-interpreter"));
    }
}
