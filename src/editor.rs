//! Fire-and-forget editor launches.

use std::path::Path;
use std::process::Command;

/// Start `editor` on `path` without waiting for it.
///
/// Returns the child's pid, or `None` if the launch failed. A failed launch is
/// only logged; callers carry on as if the editor had opened.
pub fn launch_detached(editor: &str, path: &Path) -> Option<u32> {
    match Command::new(editor).arg(path).spawn() {
        Ok(child) => {
            let pid = child.id();
            tracing::debug!(editor, path = %path.display(), pid, "editor launched");
            // Dropping the handle neither waits on nor kills the child
            drop(child);
            Some(pid)
        }
        Err(e) => {
            tracing::debug!(editor, path = %path.display(), error = %e, "failed to launch editor");
            None
        }
    }
}
