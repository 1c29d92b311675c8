use crate::constants::BASE_FOLDERS;
use crate::error::Result;
use crate::ioutils::{check_dir_target, create_dir_all};
use crate::template::TemplateOperation;
use std::path::Path;

/// Ensures the top-level folders of a generated application exist under
/// `output_root`.
///
/// Folders that already exist are left alone. Any other failure, including a
/// file sitting where a folder should be, aborts with `Error::Folder`. A dry
/// run reports that collision too.
///
/// # Arguments
/// * `output_root` - Root of the application being generated
/// * `dry_run` - Report what would be created without touching the filesystem
///
/// # Returns
/// * `Result<Vec<TemplateOperation>>` - One `CreateDirectory` per folder, in order
pub fn ensure_folders<P: AsRef<Path>>(
    output_root: P,
    dry_run: bool,
) -> Result<Vec<TemplateOperation>> {
    let output_root = output_root.as_ref();
    let mut operations = Vec::with_capacity(BASE_FOLDERS.len());

    for folder in BASE_FOLDERS {
        let target = output_root.join(folder);
        let target_exists = target.is_dir();
        if dry_run {
            check_dir_target(&target)?;
        } else if !target_exists {
            create_dir_all(&target)?;
        }
        let operation = TemplateOperation::CreateDirectory { target, target_exists };
        log::debug!("{}", operation.get_message(dry_run));
        operations.push(operation);
    }

    Ok(operations)
}
